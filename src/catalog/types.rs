use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of publication categories
///
/// Seed files spell categories with their display labels; the English keys
/// are accepted as aliases so fixtures can stay ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Статьи", alias = "articles")]
    Articles,
    #[serde(rename = "Учебные пособия", alias = "textbooks")]
    Textbooks,
    #[serde(rename = "Монографии", alias = "monographs")]
    Monographs,
    #[serde(rename = "Публицистика", alias = "essays")]
    Essays,
    #[serde(rename = "Литература", alias = "literature")]
    Literature,
    #[serde(rename = "Интервью", alias = "interviews")]
    Interviews,
}

impl Category {
    /// Every category, in selector order
    pub const ALL: [Category; 6] = [
        Category::Articles,
        Category::Textbooks,
        Category::Monographs,
        Category::Essays,
        Category::Literature,
        Category::Interviews,
    ];

    /// Display label used in the content language
    pub fn label(&self) -> &'static str {
        match self {
            Category::Articles => "Статьи",
            Category::Textbooks => "Учебные пособия",
            Category::Monographs => "Монографии",
            Category::Essays => "Публицистика",
            Category::Literature => "Литература",
            Category::Interviews => "Интервью",
        }
    }

    /// Stable ASCII key, used on the command line and in settings files
    pub fn key(&self) -> &'static str {
        match self {
            Category::Articles => "articles",
            Category::Textbooks => "textbooks",
            Category::Monographs => "monographs",
            Category::Essays => "essays",
            Category::Literature => "literature",
            Category::Interviews => "interviews",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(needle) || c.label() == needle)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub year: i32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    /// Page count or page range; the format is not interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
}

/// Profile shown on the about tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// On-disk shape of a seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub author: Option<AuthorProfile>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}
