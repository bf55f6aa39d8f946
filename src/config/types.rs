use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Category;
use crate::query::{CategoryFilter, SortOrder};

/// Root structure of folio.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub view: ViewSettings,

    #[serde(default)]
    pub display: DisplayRules,

    #[serde(default)]
    pub contact: ContactSettings,
}

/// Where the catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Seed file; the bundled catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Initial filter state of a new session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default)]
    pub default_sort: SortOrder,

    #[serde(default)]
    pub default_category: CategoryFilter,
}

/// Per-category formatting of publication cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRules {
    /// Appended after the page count
    #[serde(default = "default_page_suffix")]
    pub page_suffix: String,

    /// Categories whose page suffix differs from `page_suffix`
    #[serde(default = "default_page_suffix_overrides")]
    pub page_suffix_overrides: HashMap<Category, String>,
}

fn default_page_suffix() -> String {
    "стр.".to_string()
}

// Articles show a page range, which reads without a unit
fn default_page_suffix_overrides() -> HashMap<Category, String> {
    HashMap::from([(Category::Articles, String::new())])
}

impl Default for DisplayRules {
    fn default() -> Self {
        Self {
            page_suffix: default_page_suffix(),
            page_suffix_overrides: default_page_suffix_overrides(),
        }
    }
}

impl DisplayRules {
    pub fn page_suffix_for(&self, category: Category) -> &str {
        self.page_suffix_overrides
            .get(&category)
            .unwrap_or(&self.page_suffix)
    }

    /// Render the page info of a card
    pub fn format_pages(&self, category: Category, pages: &str) -> String {
        let suffix = self.page_suffix_for(category).trim();
        if suffix.is_empty() {
            pages.to_string()
        } else {
            format!("{} {}", pages, suffix)
        }
    }
}

/// Simulated contact submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Simulated round trip in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_acknowledgment")]
    pub acknowledgment: String,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_acknowledgment() -> String {
    "Сообщение отправлено! Спасибо, я отвечу в ближайшее время.".to_string()
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            acknowledgment: default_acknowledgment(),
        }
    }
}

impl ContactSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_articles_have_no_page_suffix_by_default() {
        let rules = DisplayRules::default();
        assert_eq!(rules.format_pages(Category::Articles, "45-62"), "45-62");
        assert_eq!(rules.format_pages(Category::Textbooks, "320"), "320 стр.");
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let yaml = r#"
contact:
  delay_ms: 250
display:
  page_suffix: "pp."
"#;
        let settings: Settings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(settings.contact.delay_ms, 250);
        assert_eq!(settings.contact.acknowledgment, default_acknowledgment());
        assert_eq!(settings.display.page_suffix, "pp.");
        assert_eq!(settings.display.page_suffix_for(Category::Articles), "");
        assert_eq!(settings.view.default_sort, SortOrder::YearDesc);
        assert!(settings.catalog.path.is_none());
    }

    #[test]
    fn test_override_keys_accept_category_aliases() {
        let yaml = r#"
display:
  page_suffix_overrides:
    monographs: "с."
    Статьи: ""
"#;
        let settings: Settings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(settings.display.format_pages(Category::Monographs, "456"), "456 с.");
        assert_eq!(settings.display.format_pages(Category::Articles, "1-2"), "1-2");
        assert_eq!(settings.display.format_pages(Category::Essays, "12"), "12 стр.");
    }

    #[test]
    fn test_view_defaults_parse() {
        let yaml = r#"
view:
  default_sort: title
  default_category: interviews
"#;
        let settings: Settings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(settings.view.default_sort, SortOrder::Title);
        assert_eq!(
            settings.view.default_category,
            CategoryFilter::Only(Category::Interviews)
        );
    }

    #[test]
    fn test_default_category_accepts_keys_and_labels() {
        let cases = [
            ("all", CategoryFilter::All),
            ("Все", CategoryFilter::All),
            ("articles", CategoryFilter::Only(Category::Articles)),
            ("Статьи", CategoryFilter::Only(Category::Articles)),
        ];
        for (value, expected) in cases {
            let yaml = format!("view:\n  default_category: {}\n", value);
            let settings: Settings = serde_yaml_ng::from_str(&yaml).unwrap();
            assert_eq!(settings.view.default_category, expected, "{}", value);
        }

        let err = serde_yaml_ng::from_str::<Settings>("view:\n  default_category: poems\n");
        assert!(err.is_err());
    }
}
