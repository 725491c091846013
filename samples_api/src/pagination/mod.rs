//! Cursor-following pagination over list endpoints.
//!
//! A list endpoint answers each request with one page: a batch of domain
//! objects, the total number of objects across all pages, and a cursor
//! pointing at the next page. An empty or missing cursor marks the last page.
//!
//! [`lazy_get`] turns a [`PageFetcher`] and a first request into a single
//! iterator over every object on every page. Pages are fetched only as the
//! consumer reaches them. [`lazy_stream`] is the async counterpart used by
//! [`crate::Client::lazy_get`].

mod lazy;
mod stream;

pub use self::lazy::{lazy_get, LazyGet};
pub use self::stream::lazy_stream;

#[cfg(test)]
mod testing;

/// A request for one page of a paginated endpoint.
pub trait PageRequest {
    /// The cursor this request resumes from. `None` requests the first page.
    fn cursor(&self) -> Option<&str>;

    /// Replaces the cursor carried by this request.
    fn set_cursor(&mut self, cursor: Option<String>);
}

/// One page of results returned by a paginated endpoint.
pub trait Page {
    /// The domain object carried by the page.
    type Item;

    /// Cursor for the following page. `None` or `""` means this is the last page.
    fn cursor(&self) -> Option<&str>;

    /// Total number of items across all pages, as reported by the server.
    fn total_count(&self) -> i64;

    /// Consumes the page, returning its items in server order.
    fn into_items(self) -> Vec<Self::Item>;
}

/// Retrieves a single page for a request.
///
/// Any `FnMut(&R) -> Result<P, E>` closure is a fetcher, which keeps test
/// doubles and ad-hoc adapters down to a few lines.
pub trait PageFetcher<R> {
    /// The page type produced by a successful fetch.
    type Page: Page;
    /// The error produced by a failed fetch. It reaches the consumer unchanged.
    type Error;

    /// Performs one round trip for `request`.
    fn fetch(&mut self, request: &R) -> Result<Self::Page, Self::Error>;
}

impl<R, P, E, F> PageFetcher<R> for F
where
    F: FnMut(&R) -> Result<P, E>,
    P: Page,
{
    type Page = P;
    type Error = E;

    fn fetch(&mut self, request: &R) -> Result<P, E> {
        self(request)
    }
}

/// Returns the request for the page after `page`, or `None` when `page` was the last one.
fn next_request<R, P>(mut request: R, page: &P) -> Option<R>
where
    R: PageRequest,
    P: Page,
{
    let cursor = page.cursor().filter(|cursor| !cursor.is_empty())?;
    request.set_cursor(Some(cursor.to_string()));
    Some(request)
}
