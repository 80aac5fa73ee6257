pub mod client;
pub mod errors;
pub mod pipeline;
pub mod source;
pub mod types;

pub use client::{HttpListingClient, get_client};
pub use errors::FetchError;
pub use source::ListingSource;
#[cfg(test)]
pub use source::MockListingSource;
pub use types::{Charset, ListingQuery, PageResponse};
