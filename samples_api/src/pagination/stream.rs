//! Async counterpart of [`super::lazy_get`].

use std::future::Future;

use futures::stream::{self, Stream};

use super::{next_request, Page, PageRequest};

/// Returns a stream over every item of every page reachable from `request`.
///
/// `fetch` is called once per page, with the request for that page, and only
/// after the consumer has drained the previous page. The stream ends after
/// the first page with an empty cursor. A failed fetch is yielded as `Err`
/// and ends the stream.
pub fn lazy_stream<F, Fut, R, P, E>(fetch: F, request: R) -> impl Stream<Item = Result<P::Item, E>>
where
    F: FnMut(R) -> Fut,
    Fut: Future<Output = Result<P, E>>,
    R: PageRequest + Clone,
    P: Page,
{
    let batch: std::vec::IntoIter<P::Item> = Vec::new().into_iter();
    stream::try_unfold(
        (fetch, Some(request), batch),
        |(mut fetch, mut next, mut batch)| async move {
            loop {
                if let Some(item) = batch.next() {
                    return Ok::<_, E>(Some((item, (fetch, next, batch))));
                }
                let Some(request) = next.take() else {
                    return Ok(None);
                };
                let page = fetch(request.clone()).await?;
                next = next_request(request, &page);
                let items = page.into_items();
                tracing::debug!(
                    "Fetched page ({} items, more pages: {})",
                    items.len(),
                    next.is_some()
                );
                batch = items.into_iter();
            }
        },
    )
}
