use serde::Serialize;
use std::fmt;

use crate::catalog::{Category, Publication};
use crate::config::DisplayRules;
use crate::query::{self, Query};

/// Shown instead of the list when nothing matches
pub const EMPTY_MESSAGE: &str = "По вашему запросу ничего не найдено";

/// Prefix of the result count footer
pub const COUNT_LABEL: &str = "Найдено публикаций";

/// Display-ready publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationCard {
    pub id: u32,
    pub title: String,
    /// Serialized as its display label
    pub category: Category,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    /// Page info with the category's suffix applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    pub description: String,
}

impl PublicationCard {
    pub fn from_publication(publication: &Publication, rules: &DisplayRules) -> Self {
        Self {
            id: publication.id,
            title: publication.title.clone(),
            category: publication.category,
            year: publication.year,
            journal: publication.journal.clone(),
            pages: publication
                .pages
                .as_deref()
                .map(|pages| rules.format_pages(publication.category, pages)),
            description: publication.description.clone(),
        }
    }

    /// Badge, year, journal and pages joined for a single meta line
    pub fn meta_line(&self) -> String {
        let mut parts = vec![format!("[{}]", self.category.label()), self.year.to_string()];
        parts.extend(self.journal.clone());
        parts.extend(self.pages.clone());
        parts.join(" · ")
    }
}

impl fmt::Display for PublicationCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  {}", self.meta_line())?;
        write!(f, "  {}", self.description)
    }
}

/// Everything the catalog tab needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogViewModel {
    pub query: Query,
    pub cards: Vec<PublicationCard>,
    /// Size of the unfiltered catalog
    pub total: usize,
}

impl CatalogViewModel {
    /// Run the query and project the results into cards
    pub fn build(publications: &[Publication], query: &Query, rules: &DisplayRules) -> Self {
        let cards = query::run(publications, query)
            .into_iter()
            .map(|p| PublicationCard::from_publication(p, rules))
            .collect();

        Self {
            query: query.clone(),
            cards,
            total: publications.len(),
        }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Result count footer; absent when the list is empty
    pub fn footer(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("{}: {}", COUNT_LABEL, self.count()))
        }
    }
}

impl fmt::Display for CatalogViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_MESSAGE);
        }
        for card in &self.cards {
            writeln!(f, "{}", card)?;
            writeln!(f)?;
        }
        if let Some(footer) = self.footer() {
            write!(f, "{}", footer)?;
        }
        Ok(())
    }
}
