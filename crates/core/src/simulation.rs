//! Scripted stand-ins for slow operations (photo analysis, listing submit,
//! assistant typing).
//!
//! Each simulation is a one-shot timer: it resolves exactly once with its
//! canned payload after a fixed delay, or with `None` if cancelled first.
//! There is no retry and no partial result.

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::assistant;
use crate::error::CoreError;
use crate::item::{Item, UserSummary};
use crate::listing::{ItemAnalysis, ListingDraft};
use crate::types::Timestamp;

/// Delay before the photo analysis payload is delivered.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2000);

/// Delay before a submitted listing is confirmed.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Minimum assistant "typing" delay.
pub const CHAT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound (exclusive) of the random extra typing delay.
pub const CHAT_JITTER_MS: u64 = 2000;

/// Resolve to `payload` after `delay`, or `None` if `cancel` fires first.
pub async fn simulate<T>(delay: Duration, payload: T, cancel: &CancellationToken) -> Option<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => None,
        () = tokio::time::sleep(delay) => Some(payload),
    }
}

/// A typing delay between 1 and 3 seconds.
pub fn chat_delay() -> Duration {
    CHAT_BASE_DELAY + Duration::from_millis(rand::rng().random_range(0..CHAT_JITTER_MS))
}

pub async fn analyze_photos(cancel: &CancellationToken) -> Option<ItemAnalysis> {
    simulate(ANALYSIS_DELAY, ItemAnalysis::canned(), cancel).await
}

/// Validate `draft` up front, then confirm the new item after [`SUBMIT_DELAY`].
///
/// Validation errors return immediately without waiting; `Ok(None)` means the
/// submit was cancelled.
pub async fn submit_listing(
    draft: ListingDraft,
    uploader: UserSummary,
    now: Timestamp,
    cancel: &CancellationToken,
) -> Result<Option<Item>, CoreError> {
    let item = draft.into_item(uploader, now)?;
    Ok(simulate(SUBMIT_DELAY, item, cancel).await)
}

/// Type out the assistant's reply to `message`.
pub async fn assistant_reply(message: &str, cancel: &CancellationToken) -> Option<&'static str> {
    simulate(chat_delay(), assistant::reply(message), cancel).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
