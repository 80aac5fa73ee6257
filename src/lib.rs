pub mod api;
pub mod app_state;
pub mod category;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod search;
