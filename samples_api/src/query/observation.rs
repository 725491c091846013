use chrono::{DateTime, FixedOffset, SecondsFormat};
use url::Url;

use crate::types::{Observation, PaginatedResponse};

use super::common::{ApiRequest, Query, QueryCommon};

/// Query builder for the `/v1/observations` list.
#[derive(Clone, Debug, Default)]
pub struct ObservationQuery {
    pub common: QueryCommon,
    pub sampling_location_ids: Vec<String>,
    pub observed_property_ids: Vec<String>,
    pub project_ids: Vec<String>,
    /// Only observations made at or after this time.
    pub start_observed_time: Option<DateTime<FixedOffset>>,
    /// Only observations made at or before this time.
    pub end_observed_time: Option<DateTime<FixedOffset>>,
}

impl Query for ObservationQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ApiRequest for ObservationQuery {
    const PATH: &'static str = "/v1/observations";
    type Response = PaginatedResponse<Observation>;

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for id in self.sampling_location_ids.iter() {
            url.query_pairs_mut()
                .append_pair("samplingLocationIds", id.as_str());
        }
        for id in self.observed_property_ids.iter() {
            url.query_pairs_mut()
                .append_pair("observedPropertyIds", id.as_str());
        }
        for id in self.project_ids.iter() {
            url.query_pairs_mut().append_pair("projectIds", id.as_str());
        }
        if let Some(start) = &self.start_observed_time {
            url.query_pairs_mut().append_pair(
                "startObservedTime",
                &start.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            );
        }
        if let Some(end) = &self.end_observed_time {
            url.query_pairs_mut().append_pair(
                "endObservedTime",
                &end.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            );
        }
        url
    }
}

impl ObservationQuery {
    pub fn with_sampling_location_id(mut self, id: &str) -> Self {
        self.sampling_location_ids.push(id.to_string());
        self
    }

    pub fn with_observed_property_id(mut self, id: &str) -> Self {
        self.observed_property_ids.push(id.to_string());
        self
    }

    pub fn with_project_id(mut self, id: &str) -> Self {
        self.project_ids.push(id.to_string());
        self
    }

    pub fn with_start_observed_time(mut self, start: DateTime<FixedOffset>) -> Self {
        self.start_observed_time = Some(start);
        self
    }

    pub fn with_end_observed_time(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end_observed_time = Some(end);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use url::Url;

    use crate::query::{ApiRequest, ObservationQuery, Query};

    #[test]
    fn test_observation_query() {
        let url = Url::parse("https://example.com/api/v1/observations").unwrap();
        let start = DateTime::parse_from_rfc3339("2024-01-01T00:00:00-07:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-06-30T12:30:00Z").unwrap();

        insta::assert_snapshot!(ObservationQuery::default()
            .with_limit(100)
            .with_sampling_location_id("loc-1")
            .with_observed_property_id("prop-1")
            .with_observed_property_id("prop-2")
            .with_project_id("proj-1")
            .with_start_observed_time(start)
            .with_end_observed_time(end)
            .add_to_url(&url)
            .to_string(), @"https://example.com/api/v1/observations?limit=100&samplingLocationIds=loc-1&observedPropertyIds=prop-1&observedPropertyIds=prop-2&projectIds=proj-1&startObservedTime=2024-01-01T00%3A00%3A00-07%3A00&endObservedTime=2024-06-30T12%3A30%3A00%2B00%3A00");
    }
}
