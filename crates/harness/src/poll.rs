//! Stable-read primitives for asynchronously rendered UI state
//!
//! These helpers exist so page objects never hand-roll polling. Every wait
//! is cooperative (`tokio::time::sleep`), every expiry is a typed error,
//! and every loop is bounded.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::driver::{Driver, WaitState};
use crate::error::{HarnessError, Result};

/// Wait until the selector is visible, or fail with the typed
/// [`HarnessError::ElementNotFound`] carrying the selector and elapsed time.
pub async fn wait_until_visible(
    driver: &dyn Driver,
    selector: &str,
    timeout: Duration,
) -> Result<()> {
    let start = Instant::now();
    match driver
        .wait_for_selector(selector, WaitState::Visible, timeout)
        .await
    {
        Ok(()) => Ok(()),
        Err(_) => Err(HarnessError::ElementNotFound {
            selector: selector.to_string(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        }),
    }
}

/// Repeatedly read a snapshot until two consecutive reads compare equal,
/// then return that snapshot.
///
/// Equality is structural (`PartialEq`), never identity. Used to wait out
/// client-side re-renders: a table that fetches and redraws after a filter
/// change reads differently until the redraw settles. Exhausting
/// `max_attempts` raises [`HarnessError::StabilityTimeout`]; the caller
/// decides whether that is fatal or "last read is good enough".
pub async fn poll_until_stable<T, F, Fut>(
    mut read: F,
    max_attempts: usize,
    interval: Duration,
) -> Result<T>
where
    T: PartialEq,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut previous: Option<T> = None;

    for attempt in 1..=max_attempts {
        let snapshot = read().await?;
        if let Some(prev) = previous {
            if prev == snapshot {
                debug!(attempt, "stable read");
                return Ok(snapshot);
            }
        }
        previous = Some(snapshot);
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Err(HarnessError::StabilityTimeout {
        attempts: max_attempts,
    })
}

/// Collect every page of a paginated view.
///
/// Calls `collect` on the current page, then `advance`; `advance` reports
/// whether another page existed and was navigated to. Stops when it
/// returns false or after `safety_bound` pages, which guards against a
/// broken next control that never disables. Never loops unboundedly.
pub async fn collect_pages<T, C, FC, A, FA>(
    mut collect: C,
    mut advance: A,
    safety_bound: usize,
) -> Result<Vec<T>>
where
    C: FnMut() -> FC,
    FC: Future<Output = Result<Vec<T>>>,
    A: FnMut() -> FA,
    FA: Future<Output = Result<bool>>,
{
    let mut items = Vec::new();

    for page in 1..=safety_bound {
        items.extend(collect().await?);
        if !advance().await? {
            return Ok(items);
        }
        debug!(page, "advanced to next page");
    }

    debug!(safety_bound, "pagination safety bound reached");
    Ok(items)
}
