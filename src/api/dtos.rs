use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::extractor::RawVideo;
use crate::search::{SearchOutcome, SearchQuery};

/// Query string of `GET /api/search-unlisted`. Blank values count as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text.
    pub keyword: Option<String>,
    /// Category label, e.g. "Music" or "Science & Technology".
    pub category: Option<String>,
    /// Channel id; when set, keyword and category are ignored.
    pub channel_id: Option<String>,
    /// Number of result pages to fetch.
    pub pages: Option<u32>,
    /// Keep only short videos (default true).
    pub ads_only: Option<bool>,
}

impl SearchParams {
    pub fn validate(&self, max_pages: u32) -> Result<(), String> {
        match self.pages {
            Some(0) => Err("pages must be at least 1".to_string()),
            Some(pages) if pages > max_pages => {
                Err(format!("pages must not exceed {max_pages}"))
            }
            _ => Ok(()),
        }
    }

    pub fn into_query(self, default_pages: u32) -> SearchQuery {
        SearchQuery {
            keyword: self.keyword,
            category: self.category,
            channel_id: self.channel_id,
            pages: self.pages.unwrap_or(default_pages),
            ads_only: self.ads_only.unwrap_or(true),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub count: usize,
    pub videos: Vec<RawVideo>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            count: outcome.count(),
            videos: outcome.videos,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
