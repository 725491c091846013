use url::Url;

use crate::types::{ObservedProperty, PaginatedResponse};

use super::common::{ApiRequest, Query, QueryCommon};

/// Query builder for the `/v1/observedproperties` list.
#[derive(Clone, Debug, Default)]
pub struct ObservedPropertyQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
}

impl Query for ObservedPropertyQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ApiRequest for ObservedPropertyQuery {
    const PATH: &'static str = "/v1/observedproperties";
    type Response = PaginatedResponse<ObservedProperty>;

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        url
    }
}

impl ObservedPropertyQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}
