use serde::{Deserialize, Serialize};

use crate::pagination::Page;

/// One page of a list route.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Number of items across all pages of the listing.
    pub total_count: i64,
    /// Cursor for the next page. Missing or empty on the last page.
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default = "Vec::new")]
    pub domain_objects: Vec<T>,
}

impl<T> Page for PaginatedResponse<T> {
    type Item = T;

    fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    fn total_count(&self) -> i64 {
        self.total_count
    }

    fn into_items(self) -> Vec<T> {
        self.domain_objects
    }
}

/// Response of the `/v1/status` route.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub release_name: String,
}

/// Summary of a related entity, embedded in other objects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    #[serde(default)]
    pub custom_id: Option<String>,
}
