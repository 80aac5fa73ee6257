//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the binary runs against the public listing site without any setup.
//! Numeric values are validated here; `Config::from_env` is the only place
//! that can fail with a `ConfigError`.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Environment variable names. Public so tests and scripts can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_LISTING_BASE_URL: &str = "LISTING_BASE_URL";
pub const ENV_ADS_MAX_DURATION_SECS: &str = "ADS_MAX_DURATION_SECS";
pub const ENV_DEFAULT_PAGES: &str = "DEFAULT_PAGES";
pub const ENV_MAX_PAGES: &str = "MAX_PAGES";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LISTING_BASE_URL: &str = "https://filmot.com/unlistedSearch";
const DEFAULT_ADS_MAX_DURATION_SECS: u32 = 120;
const DEFAULT_PAGES: u32 = 2;
const DEFAULT_MAX_PAGES: u32 = 10;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    listing_base_url: String,
    ads_max_duration_secs: u32,
    default_pages: u32,
    max_pages: u32,
    http_timeout_secs: u64,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let listing_base_url = env::var(ENV_LISTING_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_LISTING_BASE_URL.to_string());
        url::Url::parse(&listing_base_url).map_err(|e| ConfigError::InvalidValue {
            field: ENV_LISTING_BASE_URL,
            reason: e.to_string(),
        })?;

        let ads_max_duration_secs =
            parse_var(ENV_ADS_MAX_DURATION_SECS, DEFAULT_ADS_MAX_DURATION_SECS)?;
        let default_pages = parse_var(ENV_DEFAULT_PAGES, DEFAULT_PAGES)?;
        let max_pages = parse_var(ENV_MAX_PAGES, DEFAULT_MAX_PAGES)?;
        let http_timeout_secs = parse_var(ENV_HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS)?;

        if max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_MAX_PAGES,
                reason: "must be at least 1".to_string(),
            });
        }
        if default_pages == 0 || default_pages > max_pages {
            return Err(ConfigError::InvalidValue {
                field: ENV_DEFAULT_PAGES,
                reason: format!("must be between 1 and {max_pages}"),
            });
        }

        Ok(Self {
            bind_addr,
            listing_base_url,
            ads_max_duration_secs,
            default_pages,
            max_pages,
            http_timeout_secs,
        })
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        // not `Default` impl yet to keep explicit semantics
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            listing_base_url: DEFAULT_LISTING_BASE_URL.to_string(),
            ads_max_duration_secs: DEFAULT_ADS_MAX_DURATION_SECS,
            default_pages: DEFAULT_PAGES,
            max_pages: DEFAULT_MAX_PAGES,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    /// Same as `default` but pointed at another listing endpoint (tests, mirrors).
    pub fn with_listing_base_url(mut self, url: impl Into<String>) -> Self {
        self.listing_base_url = url.into();
        self
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Search endpoint of the external listing site.
    pub fn listing_base_url(&self) -> &str {
        &self.listing_base_url
    }
    /// Longest video kept in ads-only mode.
    pub fn ads_max_duration_secs(&self) -> u32 {
        self.ads_max_duration_secs
    }
    pub fn default_pages(&self) -> u32 {
        self.default_pages
    }
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
    /// Whole-request timeout for the shared HTTP client.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
