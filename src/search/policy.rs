//! What a search absorbs instead of failing.
//!
//! Only the first failure with nothing collected yet reaches the caller (as
//! `SearchError::UpstreamUnavailable`). Everything listed here is logged and
//! recorded on the outcome, and the affected rows are left out.

use serde::Serialize;

use crate::extractor::RawVideo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// A page failed after earlier pages produced rows; paging stopped here.
    PageFailed { page: u32, reason: String },
    /// The page had no result rows at all.
    EmptyPage { page: u32 },
    /// Rows skipped for a missing title, video id or channel.
    RowsDropped { page: u32, count: usize },
    /// Ads-only mode dropped a row above the duration ceiling.
    TooLong {
        page: u32,
        video_id: String,
        duration_seconds: u32,
    },
}

/// Rows in page order, then document order within a page. Not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub videos: Vec<RawVideo>,
    pub degradations: Vec<Degradation>,
}

impl SearchOutcome {
    pub fn count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_partial(&self) -> bool {
        self.degradations
            .iter()
            .any(|d| matches!(d, Degradation::PageFailed { .. }))
    }
}
