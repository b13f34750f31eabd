//! Bounded-concurrency execution of fallible async operations.
//!
//! Operations are interleaved on the calling task (cooperative concurrency,
//! not parallel threads) with a strict cap on how many are in flight at
//! once. The reference tool bounded its outbound requests by racing
//! promises and never actually pruned its in-flight set; here the cap is
//! enforced by the buffered stream itself.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// Run `op` over every item with at most `limit` operations in flight.
///
/// Operations start in input order but complete in any order. All
/// operations are driven to completion before returning, including
/// stragglers after a failure; if any operation failed, the first observed
/// error is returned.
pub async fn try_for_each_bounded<T, F, Fut, E>(
    items: impl IntoIterator<Item = T>,
    limit: usize,
    mut op: F,
) -> Result<(), E>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut in_flight = stream::iter(items.into_iter().map(|item| op(item)))
        .buffer_unordered(limit.max(1));

    let mut first_error = None;

    while let Some(result) = in_flight.next().await {
        if let Err(e) = result {
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
