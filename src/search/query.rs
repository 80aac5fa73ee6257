pub const DEFAULT_PAGES: u32 = 2;

/// Parameters of one search call.
///
/// A non-empty `channel_id` switches to the channel listing and makes
/// `keyword`, `category` and `ads_only` irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    /// Category label, checked against the known categories before any fetch.
    pub category: Option<String>,
    pub channel_id: Option<String>,
    pub pages: u32,
    pub ads_only: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            channel_id: None,
            pages: DEFAULT_PAGES,
            ads_only: true,
        }
    }
}

impl SearchQuery {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    pub fn channel(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_ads_only(mut self, ads_only: bool) -> Self {
        self.ads_only = ads_only;
        self
    }
}

/// Trimmed value, or `None` when absent or blank.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = SearchQuery::default();
        assert_eq!(query.pages, 2);
        assert!(query.ads_only);
        assert!(query.keyword.is_none());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&Some("  promo ".to_string())), Some("promo"));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&None), None);
    }
}
