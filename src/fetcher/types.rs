use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    Utf8,
    Windows1252,
    ShiftJis,
    Gb2312,
    Big5,
    Other(String),
}

impl Charset {
    pub fn from_encoding(encoding: &'static encoding_rs::Encoding) -> Self {
        use std::ptr;

        if ptr::eq(encoding, encoding_rs::UTF_8) {
            Self::Utf8
        } else if ptr::eq(encoding, encoding_rs::WINDOWS_1252) {
            Self::Windows1252
        } else if ptr::eq(encoding, encoding_rs::SHIFT_JIS) {
            Self::ShiftJis
        } else if ptr::eq(encoding, encoding_rs::GBK) || ptr::eq(encoding, encoding_rs::GB18030) {
            Self::Gb2312
        } else if ptr::eq(encoding, encoding_rs::BIG5) {
            Self::Big5
        } else {
            Self::Other(encoding.name().to_string())
        }
    }

    pub fn encoding(&self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Windows1252 => encoding_rs::WINDOWS_1252,
            Self::ShiftJis => encoding_rs::SHIFT_JIS,
            Self::Gb2312 => encoding_rs::GBK,
            Self::Big5 => encoding_rs::BIG5,
            Self::Other(name) => {
                encoding_rs::Encoding::for_label(name.as_bytes()).unwrap_or(encoding_rs::UTF_8)
            }
        }
    }
}

/// A decoded listing page.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
    pub charset: Charset,
    pub fetched_at: DateTime<Utc>,
}

pub const SORT_FIELD: &str = "viewcount";
pub const SORT_ORDER: &str = "desc";
pub const SHORT_DURATION: &str = "short";

/// Query sent to the listing site, minus the page number.
///
/// Results are always sorted by view count, descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub channel_id: Option<String>,
    pub short_only: bool,
}

impl ListingQuery {
    /// Listing of a single channel; keyword and category never apply here.
    pub fn channel(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
            ..Self::default()
        }
    }

    /// Query string pairs for `page`. Absent filters are omitted, never sent empty.
    pub fn params(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sortField", SORT_FIELD.to_string()),
            ("sortOrder", SORT_ORDER.to_string()),
            ("page", page.to_string()),
        ];
        let optional = [
            ("search", self.search.as_deref()),
            ("category", self.category_id.as_deref()),
            ("channelID", self.channel_id.as_deref()),
        ];
        for (key, value) in optional {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        }
        if self.short_only {
            params.push(("videoDuration", SHORT_DURATION.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &[(&'static str, String)]) -> Vec<&'static str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_minimal_query_only_sorts_and_pages() {
        let params = ListingQuery::default().params(1);
        assert_eq!(
            params,
            vec![
                ("sortField", "viewcount".to_string()),
                ("sortOrder", "desc".to_string()),
                ("page", "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_query_keeps_stable_order() {
        let query = ListingQuery {
            search: Some("promo".to_string()),
            category_id: Some("14".to_string()),
            channel_id: None,
            short_only: true,
        };
        let params = query.params(3);
        assert_eq!(
            keys(&params),
            vec!["sortField", "sortOrder", "page", "search", "category", "videoDuration"]
        );
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("videoDuration", "short".to_string())));
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let query = ListingQuery {
            search: Some(String::new()),
            ..ListingQuery::default()
        };
        assert!(!keys(&query.params(1)).contains(&"search"));
    }

    #[test]
    fn test_channel_query() {
        let params = ListingQuery::channel("UC123").params(2);
        assert!(params.contains(&("channelID", "UC123".to_string())));
        assert!(!keys(&params).contains(&"videoDuration"));
    }
}
