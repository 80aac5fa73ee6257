use std::sync::Arc;

use crate::{
    category::CategoryTable,
    config::Config,
    fetcher::{FetchError, HttpListingClient, ListingSource},
    search::{SearchSettings, UnlistedSearch},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: UnlistedSearch,
}

impl AppState {
    /// State backed by the real listing site named in `config`.
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client =
            HttpListingClient::new(config.listing_base_url())?.with_timeout(config.http_timeout());
        Ok(Self::with_source(config, Arc::new(client)))
    }

    pub fn with_source(config: Config, source: Arc<dyn ListingSource>) -> Self {
        let search = UnlistedSearch::new(source)
            .with_categories(CategoryTable::builtin())
            .with_settings(SearchSettings {
                ads_max_duration_secs: config.ads_max_duration_secs(),
            });
        Self {
            config: Arc::new(config),
            search,
        }
    }
}
