use url::Url;

use crate::types::{PaginatedResponse, SamplingLocation};

use super::common::{ApiRequest, Query, QueryCommon};

/// Query builder for the `/v1/samplinglocations` list.
#[derive(Clone, Debug, Default)]
pub struct SamplingLocationQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub ids: Vec<String>,
}

impl Query for SamplingLocationQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ApiRequest for SamplingLocationQuery {
    const PATH: &'static str = "/v1/samplinglocations";
    type Response = PaginatedResponse<SamplingLocation>;

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        for id in self.ids.iter() {
            url.query_pairs_mut().append_pair("ids", id.as_str());
        }
        url
    }
}

impl SamplingLocationQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }

    pub fn with_ids(mut self, ids: &[String]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }
}
