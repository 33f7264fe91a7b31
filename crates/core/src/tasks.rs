//! Task combinators.
//!
//! Futures in Rust are cancelled by dropping them, so both combinators
//! cancel the tasks they no longer need simply by letting them go out of
//! scope before returning.

use std::future::Future;

use futures::future::{select_all, try_join_all};

/// Wait for every task and collect their outputs in input order.
///
/// Fails fast: the first error is returned and the remaining tasks are
/// dropped without being polled to completion.
pub async fn all_of<I, F, T, E>(tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    try_join_all(tasks).await
}

/// Resolve to the output of the first task that finishes.
///
/// Every non-winning task is dropped (cancelled) before this returns.
/// Returns `None` for an empty set of tasks.
pub async fn race_first<I, F>(tasks: I) -> Option<F::Output>
where
    I: IntoIterator<Item = F>,
    F: Future,
{
    let pinned: Vec<_> = tasks.into_iter().map(Box::pin).collect();
    if pinned.is_empty() {
        return None;
    }
    let (output, _winner, losers) = select_all(pinned).await;
    drop(losers);
    Some(output)
}
