//! Shared request infrastructure: the [`ApiRequest`] and [`Query`] traits and [`QueryCommon`] fields.

use serde::de::DeserializeOwned;
use url::Url;

use crate::pagination::PageRequest;

/// A typed request for one API route.
pub trait ApiRequest {
    /// Route path relative to the API base URL (e.g. `/v1/projects`).
    const PATH: &'static str;

    /// Body type returned by the route.
    type Response: DeserializeOwned;

    /// Appends this request's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        url.clone()
    }
}

/// Trait implemented by all list query builders. Provides builder methods for
/// the cursor and page size shared by every paginated route.
pub trait Query {
    /// Returns a reference to the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Resumes from a cursor returned by a previous page.
    fn with_cursor(mut self, cursor: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().cursor = Some(cursor.to_string());
        self
    }

    /// Sets the maximum number of results per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }
}

impl<Q: Query> PageRequest for Q {
    fn cursor(&self) -> Option<&str> {
        self.common().cursor.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.get_common().cursor = cursor;
    }
}

/// Fields shared by all list queries.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    /// Cursor of the page to fetch. `None` fetches the first page.
    pub cursor: Option<String>,
    /// Results per page. `None` uses the API default.
    pub limit: Option<i64>,
}

impl QueryCommon {
    /// Appends the cursor and page size parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            url.query_pairs_mut().append_pair("cursor", cursor);
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }
}
