//! Blocking lazy iterator over every item of a paginated endpoint.

use std::iter::FusedIterator;
use std::mem;

use super::{next_request, Page, PageFetcher, PageRequest};

/// Returns an iterator over every item of every page reachable from `request`.
///
/// Nothing is fetched until the first call to `next`. Each page is fetched
/// only once the items of the previous page have been consumed, and the
/// iterator stops after the first page whose cursor is empty. A failed fetch
/// is yielded once as `Err` with the fetcher's own error, after which the
/// iterator is finished.
///
/// `request` is sent as-is for the first page, including any cursor it
/// already carries.
pub fn lazy_get<F, R>(fetcher: F, request: R) -> LazyGet<F, R>
where
    F: PageFetcher<R>,
    R: PageRequest,
{
    LazyGet {
        fetcher,
        state: State::NotStarted(request),
        total_count: None,
        pages_fetched: 0,
    }
}

/// Iterator returned by [`lazy_get`].
pub struct LazyGet<F, R>
where
    F: PageFetcher<R>,
{
    fetcher: F,
    state: State<R, <F::Page as Page>::Item>,
    total_count: Option<i64>,
    pages_fetched: usize,
}

/// Fetching a page happens inside `next` and never outlives the call, so it
/// has no variant of its own.
enum State<R, T> {
    NotStarted(R),
    Yielding {
        batch: std::vec::IntoIter<T>,
        next: Option<R>,
    },
    Exhausted,
    Failed,
}

impl<F, R> LazyGet<F, R>
where
    F: PageFetcher<R>,
{
    /// Total item count reported by the first page, once it has been fetched.
    ///
    /// Advisory only: the iterator never checks it against what it yields.
    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    /// Number of pages fetched successfully so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<F, R> Iterator for LazyGet<F, R>
where
    F: PageFetcher<R>,
    R: PageRequest,
{
    type Item = Result<<F::Page as Page>::Item, F::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let request = match mem::replace(&mut self.state, State::Exhausted) {
                State::NotStarted(request) => request,
                State::Yielding { mut batch, next } => {
                    if let Some(item) = batch.next() {
                        self.state = State::Yielding { batch, next };
                        return Some(Ok(item));
                    }
                    next?
                }
                State::Exhausted => return None,
                State::Failed => {
                    self.state = State::Failed;
                    return None;
                }
            };

            let page = match self.fetcher.fetch(&request) {
                Ok(page) => page,
                Err(err) => {
                    tracing::debug!(
                        "Page fetch failed after {} successful pages",
                        self.pages_fetched
                    );
                    self.state = State::Failed;
                    return Some(Err(err));
                }
            };

            self.pages_fetched += 1;
            self.total_count.get_or_insert(page.total_count());
            let next = next_request(request, &page);
            let items = page.into_items();
            tracing::debug!(
                "Fetched page {} ({} items, more pages: {})",
                self.pages_fetched,
                items.len(),
                next.is_some()
            );
            self.state = State::Yielding {
                batch: items.into_iter(),
                next,
            };
        }
    }
}

impl<F, R> FusedIterator for LazyGet<F, R>
where
    F: PageFetcher<R>,
    R: PageRequest,
{
}
