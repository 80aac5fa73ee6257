use thiserror::Error;

use crate::category::CategoryError;
use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    InvalidCategory(#[from] CategoryError),

    #[error("page count must be at least 1, got {0}")]
    InvalidPageCount(u32),

    /// A page failed before any row had been collected.
    #[error("error fetching results (page {page}): {source}")]
    UpstreamUnavailable {
        page: u32,
        #[source]
        source: FetchError,
    },
}

impl SearchError {
    /// Caller mistakes, as opposed to upstream trouble.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCategory(_) | Self::InvalidPageCount(_))
    }
}
