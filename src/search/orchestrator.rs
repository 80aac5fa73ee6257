use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::category::{Category, CategoryTable};
use crate::extractor::{ExtractedPage, RawVideo, extract_channel_page, extract_search_page};
use crate::fetcher::{ListingQuery, ListingSource};
use crate::search::{
    errors::SearchError,
    policy::{Degradation, SearchOutcome},
    query::{SearchQuery, non_blank},
};

pub const DEFAULT_ADS_MAX_DURATION_SECS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Rows longer than this are dropped in ads-only mode.
    pub ads_max_duration_secs: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            ads_max_duration_secs: DEFAULT_ADS_MAX_DURATION_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Channel,
    Search,
}

/// Runs searches against a listing source, one page at a time.
#[derive(Clone)]
pub struct UnlistedSearch {
    source: Arc<dyn ListingSource>,
    categories: CategoryTable,
    settings: SearchSettings,
}

impl UnlistedSearch {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            source,
            categories: CategoryTable::builtin(),
            settings: SearchSettings::default(),
        }
    }

    pub fn with_categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Searches the listing site.
    ///
    /// With a channel id, fetches that channel's own listing and ignores
    /// keyword, category and the ads-only filter. Otherwise validates the
    /// category, then fetches `pages` pages sorted by views.
    ///
    /// Fails only for an invalid query or when a page fetch fails before any
    /// row was collected; later failures end paging and keep what was found.
    #[instrument(skip(self, query), fields(pages = query.pages, ads_only = query.ads_only))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        if query.pages == 0 {
            return Err(SearchError::InvalidPageCount(query.pages));
        }

        if let Some(channel_id) = non_blank(&query.channel_id) {
            info!(channel_id, "Fetching channel listing");
            let listing = ListingQuery::channel(channel_id);
            return self.collect(&listing, query.pages, Mode::Channel, None).await;
        }

        // Blank means "any category"; anything else must match a label exactly.
        let category = match query.category.as_deref() {
            Some(label) if !label.trim().is_empty() => {
                Some(label.parse::<Category>().inspect_err(|e| warn!("{e}"))?)
            }
            _ => None,
        };

        let listing = ListingQuery {
            search: non_blank(&query.keyword).map(str::to_string),
            category_id: category
                .and_then(|c| self.categories.external_id(c))
                .map(str::to_string),
            channel_id: None,
            short_only: query.ads_only,
        };
        let ceiling = query
            .ads_only
            .then_some(self.settings.ads_max_duration_secs);

        info!(
            keyword = listing.search.as_deref().unwrap_or_default(),
            category = category.map(Category::label).unwrap_or_default(),
            "Searching unlisted videos"
        );
        self.collect(&listing, query.pages, Mode::Search, ceiling)
            .await
    }

    async fn collect(
        &self,
        listing: &ListingQuery,
        pages: u32,
        mode: Mode,
        ceiling: Option<u32>,
    ) -> Result<SearchOutcome, SearchError> {
        let mut outcome = SearchOutcome::default();

        for page in 1..=pages {
            let html = match self.source.fetch_listing(listing, page).await {
                Ok(html) => html,
                Err(source) if outcome.videos.is_empty() => {
                    error!("Error fetching page {}: {}", page, source);
                    return Err(SearchError::UpstreamUnavailable { page, source });
                }
                Err(source) => {
                    warn!(
                        "Error fetching page {}, keeping {} videos: {}",
                        page,
                        outcome.count(),
                        source
                    );
                    outcome.degradations.push(Degradation::PageFailed {
                        page,
                        reason: source.to_string(),
                    });
                    break;
                }
            };

            let extracted = match mode {
                Mode::Channel => extract_channel_page(&html),
                Mode::Search => extract_search_page(&html),
            };
            absorb_page(&mut outcome, page, extracted, ceiling);
        }

        if outcome.videos.is_empty() {
            warn!("No videos found matching criteria");
        } else {
            info!("Found {} videos", outcome.count());
        }
        Ok(outcome)
    }
}

fn absorb_page(
    outcome: &mut SearchOutcome,
    page: u32,
    extracted: ExtractedPage,
    ceiling: Option<u32>,
) {
    if extracted.is_empty() {
        warn!("No results found for page {}", page);
        outcome.degradations.push(Degradation::EmptyPage { page });
        return;
    }
    if extracted.dropped > 0 {
        warn!("Skipped {} incomplete rows on page {}", extracted.dropped, page);
        outcome.degradations.push(Degradation::RowsDropped {
            page,
            count: extracted.dropped,
        });
    }

    for row in extracted.rows {
        if let Some(max) = ceiling
            && row.duration_seconds > max
        {
            outcome.degradations.push(Degradation::TooLong {
                page,
                video_id: row.video_id,
                duration_seconds: row.duration_seconds,
            });
            continue;
        }
        if row.has_required_fields() {
            outcome.videos.push(RawVideo::from(row));
        }
    }
}
