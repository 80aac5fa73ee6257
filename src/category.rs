//! Video categories known to the listing site and their numeric ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "Autos & Vehicles")]
    AutosVehicles,
    #[serde(rename = "Comedy")]
    Comedy,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Film & Animation")]
    FilmAnimation,
    #[serde(rename = "Gaming")]
    Gaming,
    #[serde(rename = "Howto & Style")]
    HowtoStyle,
    #[serde(rename = "Movies")]
    Movies,
    #[serde(rename = "Music")]
    Music,
    #[serde(rename = "N/A")]
    NotAvailable,
    #[serde(rename = "News & Politics")]
    NewsPolitics,
    #[serde(rename = "Nonprofits & Activism")]
    NonprofitsActivism,
    #[serde(rename = "People & Blogs")]
    PeopleBlogs,
    #[serde(rename = "Pets & Animals")]
    PetsAnimals,
    #[serde(rename = "Science & Technology")]
    ScienceTechnology,
    #[serde(rename = "Shorts")]
    Shorts,
    #[serde(rename = "Shows")]
    Shows,
    #[serde(rename = "Sports")]
    Sports,
    #[serde(rename = "Trailers")]
    Trailers,
    #[serde(rename = "Travel & Events")]
    TravelEvents,
}

impl Category {
    /// Every category, in the order the API lists them.
    pub const ALL: [Category; 20] = [
        Category::AutosVehicles,
        Category::Comedy,
        Category::Education,
        Category::Entertainment,
        Category::FilmAnimation,
        Category::Gaming,
        Category::HowtoStyle,
        Category::Movies,
        Category::Music,
        Category::NotAvailable,
        Category::NewsPolitics,
        Category::NonprofitsActivism,
        Category::PeopleBlogs,
        Category::PetsAnimals,
        Category::ScienceTechnology,
        Category::Shorts,
        Category::Shows,
        Category::Sports,
        Category::Trailers,
        Category::TravelEvents,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AutosVehicles => "Autos & Vehicles",
            Self::Comedy => "Comedy",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::FilmAnimation => "Film & Animation",
            Self::Gaming => "Gaming",
            Self::HowtoStyle => "Howto & Style",
            Self::Movies => "Movies",
            Self::Music => "Music",
            Self::NotAvailable => "N/A",
            Self::NewsPolitics => "News & Politics",
            Self::NonprofitsActivism => "Nonprofits & Activism",
            Self::PeopleBlogs => "People & Blogs",
            Self::PetsAnimals => "Pets & Animals",
            Self::ScienceTechnology => "Science & Technology",
            Self::Shorts => "Shorts",
            Self::Shows => "Shows",
            Self::Sports => "Sports",
            Self::Trailers => "Trailers",
            Self::TravelEvents => "Travel & Events",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }

    /// True iff `label` is exactly one of the category labels (case-sensitive).
    pub fn is_valid(label: &str) -> bool {
        Self::ALL.iter().any(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {}. Please use one of: {}", .label, Category::labels().join(", "))]
pub struct CategoryError {
    pub label: String,
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| CategoryError {
                label: s.to_string(),
            })
    }
}

/// Numeric ids used by the listing site's `category` query parameter.
const BUILTIN_IDS: [(Category, &str); 20] = [
    (Category::AutosVehicles, "12"),
    (Category::Comedy, "30"),
    (Category::Education, "33"),
    (Category::Entertainment, "8"),
    (Category::FilmAnimation, "18"),
    (Category::Gaming, "9"),
    (Category::HowtoStyle, "6"),
    (Category::Movies, "42"),
    (Category::Music, "14"),
    (Category::NotAvailable, "0"),
    (Category::NewsPolitics, "46"),
    (Category::NonprofitsActivism, "2"),
    (Category::PeopleBlogs, "35"),
    (Category::PetsAnimals, "39"),
    (Category::ScienceTechnology, "3"),
    (Category::Shorts, "49"),
    (Category::Shows, "32"),
    (Category::Sports, "7"),
    (Category::Trailers, "26"),
    (Category::TravelEvents, "19"),
];

/// Category → external id table handed to the searcher.
///
/// The builtin table covers every category. Custom tables may be partial; a
/// category without an id is simply not sent as a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<(Category, String)>,
}

impl CategoryTable {
    pub fn builtin() -> Self {
        Self::new(BUILTIN_IDS.iter().map(|(c, id)| (*c, id.to_string())))
    }

    pub fn new(entries: impl IntoIterator<Item = (Category, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn external_id(&self, category: Category) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, id)| id.as_str())
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_labels() {
        assert_eq!("Gaming".parse::<Category>(), Ok(Category::Gaming));
        assert_eq!("N/A".parse::<Category>(), Ok(Category::NotAvailable));
        assert_eq!(
            "Science & Technology".parse::<Category>(),
            Ok(Category::ScienceTechnology)
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("gaming".parse::<Category>().is_err());
        assert!(" Gaming".parse::<Category>().is_err());
        assert!(!Category::is_valid("MUSIC"));
    }

    #[test]
    fn test_unknown_label_error_lists_every_category() {
        let err = "Cooking".parse::<Category>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Cooking"));
        for label in Category::labels() {
            assert!(message.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_builtin_table_is_total() {
        let table = CategoryTable::builtin();
        for category in Category::ALL {
            assert!(table.external_id(category).is_some(), "{category}");
        }
        assert_eq!(table.external_id(Category::Music), Some("14"));
        assert_eq!(table.external_id(Category::NotAvailable), Some("0"));
    }

    #[test]
    fn test_partial_table_returns_none() {
        let table = CategoryTable::new([(Category::Comedy, "30".to_string())]);
        assert_eq!(table.external_id(Category::Comedy), Some("30"));
        assert_eq!(table.external_id(Category::Sports), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::HowtoStyle).unwrap();
        assert_eq!(json, "\"Howto & Style\"");
    }

    #[test]
    fn test_labels_round_trip_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }
}
