//! CLI subcommand implementations.

pub mod locations;
pub mod observations;
pub mod projects;
pub mod properties;
pub mod status;

use std::time::Duration;

use anyhow::Result;
use futures::{Stream, StreamExt, TryStreamExt};
use indicatif::ProgressBar;

/// Drains a lazily paged listing, stopping after `max` items when given.
///
/// Stopping early drops the stream, so no page beyond the one holding the
/// last wanted item is requested.
pub async fn collect_listing<S, T>(items: S, max: Option<usize>, label: &str) -> Result<Vec<T>>
where
    S: Stream<Item = Result<T, samples_api::Error>>,
{
    let progress = ProgressBar::new_spinner();
    progress.set_message(format!("Fetching {}", label));
    progress.enable_steady_tick(Duration::from_millis(120));

    let collected: Vec<T> = items
        .take(max.unwrap_or(usize::MAX))
        .inspect_ok(|_| progress.inc(1))
        .try_collect()
        .await
        .inspect_err(|_| progress.abandon())?;

    progress.finish_and_clear();
    eprintln!("{} {}", collected.len(), label);
    Ok(collected)
}
