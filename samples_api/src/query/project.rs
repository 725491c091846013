use url::Url;

use crate::types::{PaginatedResponse, Project};

use super::common::{ApiRequest, Query, QueryCommon};

/// Query builder for the `/v1/projects` list.
#[derive(Clone, Debug, Default)]
pub struct ProjectQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
}

impl Query for ProjectQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ApiRequest for ProjectQuery {
    const PATH: &'static str = "/v1/projects";
    type Response = PaginatedResponse<Project>;

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        url
    }
}

impl ProjectQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}
