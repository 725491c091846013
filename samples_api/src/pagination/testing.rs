//! Minimal request/page types shared by the pagination tests.

use super::{Page, PageRequest};

#[derive(Clone, Default)]
pub struct ThingsRequest {
    pub cursor: Option<String>,
    pub name_filter: Option<String>,
}

impl PageRequest for ThingsRequest {
    fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.cursor = cursor;
    }
}

pub struct ThingsPage {
    pub cursor: Option<String>,
    pub total_count: i64,
    pub things: Vec<u32>,
}

impl Page for ThingsPage {
    type Item = u32;

    fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    fn total_count(&self) -> i64 {
        self.total_count
    }

    fn into_items(self) -> Vec<u32> {
        self.things
    }
}

#[derive(Debug, PartialEq)]
pub struct FetchError(pub &'static str);

pub fn page(things: &[u32], cursor: Option<&str>, total_count: i64) -> Result<ThingsPage, FetchError> {
    Ok(ThingsPage {
        cursor: cursor.map(str::to_string),
        total_count,
        things: things.to_vec(),
    })
}
