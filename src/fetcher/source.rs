use async_trait::async_trait;

use crate::fetcher::{errors::FetchError, types::ListingQuery};

/// Anything that can hand back the HTML of page `page` (1-based) for a query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listing(&self, query: &ListingQuery, page: u32) -> Result<String, FetchError>;
}
