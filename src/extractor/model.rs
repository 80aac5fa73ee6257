use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::category::Category;

pub const UNKNOWN: &str = "Unknown";
pub const ZERO_COUNT: &str = "0";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LanguageInfo {
    pub auto_generated: Vec<String>,
    pub subtitles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChannelInfo {
    pub name: String,
    pub channel_id: String,
    pub subscribers: String,
}

/// One result row as scraped, before the category is coerced.
///
/// Counts and dates stay as the site renders them ("1.2K", "3 days ago").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub title: String,
    pub video_id: String,
    pub url: String,
    pub thumbnail: String,
    pub channel_name: String,
    pub channel_id: String,
    pub subscribers: String,
    pub category: String,
    pub duration: String,
    pub duration_seconds: u32,
    pub views: String,
    pub likes: String,
    pub dislikes: String,
    pub upload_date: String,
    pub languages: LanguageInfo,
    pub channel_info: Option<ChannelInfo>,
}

impl RawRow {
    /// Title, video id and channel name are all non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.video_id.is_empty() && !self.channel_name.is_empty()
    }
}

/// A row as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RawVideo {
    pub title: String,
    pub video_id: String,
    pub url: String,
    pub thumbnail: String,
    pub channel_name: String,
    pub channel_id: String,
    pub subscribers: String,
    pub category: Category,
    pub duration: String,
    pub duration_seconds: u32,
    pub views: String,
    pub likes: String,
    pub dislikes: String,
    pub upload_date: String,
    pub languages: LanguageInfo,
    pub channel_info: Option<ChannelInfo>,
}

impl From<RawRow> for RawVideo {
    /// Labels outside the category set (including "Unknown") become `N/A`.
    fn from(row: RawRow) -> Self {
        let category = row.category.parse().unwrap_or(Category::NotAvailable);
        Self {
            title: row.title,
            video_id: row.video_id,
            url: row.url,
            thumbnail: row.thumbnail,
            channel_name: row.channel_name,
            channel_id: row.channel_id,
            subscribers: row.subscribers,
            category,
            duration: row.duration,
            duration_seconds: row.duration_seconds,
            views: row.views,
            likes: row.likes,
            dislikes: row.dislikes,
            upload_date: row.upload_date,
            languages: row.languages,
            channel_info: row.channel_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str) -> RawRow {
        RawRow {
            title: "Spring sale".to_string(),
            video_id: "abc123".to_string(),
            url: "https://www.youtube.com/watch?v=abc123".to_string(),
            thumbnail: String::new(),
            channel_name: "Shop".to_string(),
            channel_id: "UCshop".to_string(),
            subscribers: UNKNOWN.to_string(),
            category: category.to_string(),
            duration: "30s".to_string(),
            duration_seconds: 30,
            views: "1.2K".to_string(),
            likes: ZERO_COUNT.to_string(),
            dislikes: ZERO_COUNT.to_string(),
            upload_date: UNKNOWN.to_string(),
            languages: LanguageInfo::default(),
            channel_info: None,
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(row("Music").has_required_fields());
        let mut missing = row("Music");
        missing.channel_name.clear();
        assert!(!missing.has_required_fields());
    }

    #[test]
    fn test_known_category_is_kept() {
        let video = RawVideo::from(row("Pets & Animals"));
        assert_eq!(video.category, Category::PetsAnimals);
        assert_eq!(video.video_id, "abc123");
    }

    #[test]
    fn test_unknown_category_becomes_not_available() {
        assert_eq!(RawVideo::from(row(UNKNOWN)).category, Category::NotAvailable);
        assert_eq!(RawVideo::from(row("Cooking")).category, Category::NotAvailable);
    }

    #[test]
    fn test_video_json_shape() {
        let json = serde_json::to_value(RawVideo::from(row("Music"))).unwrap();
        assert_eq!(json["category"], "Music");
        assert_eq!(json["duration_seconds"], 30);
        assert_eq!(json["languages"]["subtitles"], serde_json::json!([]));
        assert!(json["channel_info"].is_null());
    }
}
