pub mod errors;
pub mod orchestrator;
pub mod policy;
pub mod query;

pub use errors::SearchError;
pub use orchestrator::{DEFAULT_ADS_MAX_DURATION_SECS, SearchSettings, UnlistedSearch};
pub use policy::{Degradation, SearchOutcome};
pub use query::{DEFAULT_PAGES, SearchQuery};
