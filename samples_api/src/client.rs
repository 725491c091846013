//! HTTP client for the Samples REST API.

use std::time::Duration;

use futures::stream::Stream;
use url::Url;

use crate::{
    pagination::{lazy_stream, Page, PageRequest},
    query::{
        ApiRequest, GetStatus, ObservationQuery, ObservedPropertyQuery, ProjectQuery,
        SamplingLocationQuery,
    },
    types::{
        Observation, ObservedProperty, PaginatedResponse, Project, SamplingLocation,
        StatusResponse,
    },
    Error,
};

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Samples REST API.
///
/// Holds one `reqwest::Client` for its lifetime. List routes can be read one
/// page at a time (`get_*`) or as a single lazily-paged stream ([`Client::lazy_get`]).
pub struct Client {
    /// Base URL for the API, e.g. `https://example.aqsamples.com/api`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url<R: ApiRequest>(&self, request: &R) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, R::PATH).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(request.add_to_url(&url))
    }

    /// Sends one GET request and parses the JSON body.
    pub async fn get<R: ApiRequest>(&self, request: &R) -> Result<R::Response, Error> {
        let url = self.get_url(request)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<R::Response>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Deserialize(e.to_string())
        })
    }

    /// Lazily streams every item of a list route, following page cursors.
    ///
    /// The first page is requested when the stream is first polled; each
    /// further page only once the previous one has been consumed. Dropping the
    /// stream early sends no further requests. A failed page request is
    /// yielded as the stream's last item.
    pub fn lazy_get<'a, R>(
        &'a self,
        request: R,
    ) -> impl Stream<Item = Result<<R::Response as Page>::Item, Error>> + 'a
    where
        R: ApiRequest + PageRequest + Clone + 'a,
        R::Response: Page,
    {
        lazy_stream(
            move |request: R| async move {
                tracing::debug!("Fetching {} page (cursor {:?})", R::PATH, request.cursor());
                self.get(&request).await
            },
            request,
        )
    }

    /// Fetches the server status.
    pub async fn get_status(&self) -> Result<StatusResponse, Error> {
        self.get(&GetStatus).await
    }

    /// Fetches one page of sampling locations.
    pub async fn get_sampling_locations(
        &self,
        query: &SamplingLocationQuery,
    ) -> Result<PaginatedResponse<SamplingLocation>, Error> {
        self.get(query).await
    }

    /// Fetches one page of projects.
    pub async fn get_projects(
        &self,
        query: &ProjectQuery,
    ) -> Result<PaginatedResponse<Project>, Error> {
        self.get(query).await
    }

    /// Fetches one page of observed properties.
    pub async fn get_observed_properties(
        &self,
        query: &ObservedPropertyQuery,
    ) -> Result<PaginatedResponse<ObservedProperty>, Error> {
        self.get(query).await
    }

    /// Fetches one page of observations.
    pub async fn get_observations(
        &self,
        query: &ObservationQuery,
    ) -> Result<PaginatedResponse<Observation>, Error> {
        self.get(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
