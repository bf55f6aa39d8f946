//! Query engine: filter and sort the catalog for display
//!
//! Everything here is a pure function of its inputs. An empty result is a
//! normal outcome, not an error.

pub mod collation;

use crate::catalog::{Category, Publication};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the catch-all category selector entry
pub const ALL_LABEL: &str = "Все";

/// Category selection: everything, or one category
///
/// Stored as a plain string: "all", a category key, or a Russian label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector entries in display order, "All" first
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// Step through the selector, wrapping at both ends
    pub fn cycle(&self, step: isize) -> CategoryFilter {
        let options = Self::options();
        let len = options.len() as isize;
        let current = options.iter().position(|o| o == self).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len);
        options[next as usize]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        trimmed.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.key().to_string()
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep seed order
    Seed,
    #[default]
    YearDesc,
    YearAsc,
    Title,
}

impl SortOrder {
    /// Orders offered by the sort selector
    pub const SELECTABLE: [SortOrder; 3] = [SortOrder::YearDesc, SortOrder::YearAsc, SortOrder::Title];

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Seed => "seed",
            SortOrder::YearDesc => "year-desc",
            SortOrder::YearAsc => "year-asc",
            SortOrder::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Seed => "По порядку",
            SortOrder::YearDesc => "Сначала новые",
            SortOrder::YearAsc => "Сначала старые",
            SortOrder::Title => "По названию",
        }
    }

    /// Next selectable order; `Seed` steps into the selector
    pub fn cycle(&self) -> SortOrder {
        match self {
            SortOrder::Seed | SortOrder::Title => SortOrder::YearDesc,
            SortOrder::YearDesc => SortOrder::YearAsc,
            SortOrder::YearAsc => SortOrder::Title,
        }
    }

    fn compare(&self, a: &Publication, b: &Publication) -> std::cmp::Ordering {
        match self {
            SortOrder::Seed => std::cmp::Ordering::Equal,
            SortOrder::YearDesc => b.year.cmp(&a.year),
            SortOrder::YearAsc => a.year.cmp(&b.year),
            SortOrder::Title => collation::compare(&a.title, &b.title),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seed" | "none" => Ok(SortOrder::Seed),
            "year-desc" | "newest" => Ok(SortOrder::YearDesc),
            "year-asc" | "oldest" => Ok(SortOrder::YearAsc),
            "title" | "alpha" => Ok(SortOrder::Title),
            other => Err(format!(
                "Unknown sort order: {} (expected year-desc, year-asc, title or seed)",
                other
            )),
        }
    }
}

/// Inputs of one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl Query {
    pub fn new(search: impl Into<String>, category: CategoryFilter, sort: SortOrder) -> Self {
        Self {
            search: search.into(),
            category,
            sort,
        }
    }
}

/// Case-insensitive substring match on title or description
pub fn matches_text(publication: &Publication, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || publication.title.to_lowercase().contains(needle_lower)
        || publication.description.to_lowercase().contains(needle_lower)
}

/// Filter then sort. The sort is stable, so equal keys keep seed order.
pub fn run<'a>(publications: &'a [Publication], query: &Query) -> Vec<&'a Publication> {
    let needle = query.search.to_lowercase();

    let mut results: Vec<&Publication> = publications
        .iter()
        .filter(|p| query.category.accepts(p.category) && matches_text(p, &needle))
        .collect();

    if query.sort != SortOrder::Seed {
        results.sort_by(|a, b| query.sort.compare(a, b));
    }

    results
}
