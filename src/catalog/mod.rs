//! Read-only publication catalog
//!
//! A [`Catalog`] is validated once when it is built and never changes
//! afterwards. Seed data comes from a YAML or JSON file, or from the bundled
//! default that ships inside the binary.

pub mod loader;
pub mod types;

pub use loader::CatalogLoader;
pub use types::{AuthorProfile, CatalogFile, Category, Publication};

use crate::{FolioError, Result};
use std::collections::HashSet;

/// Validated, immutable set of publications
#[derive(Debug, Clone)]
pub struct Catalog {
    author: Option<AuthorProfile>,
    publications: Vec<Publication>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and empty required text
    pub fn new(publications: Vec<Publication>, author: Option<AuthorProfile>) -> Result<Self> {
        let mut seen = HashSet::new();
        for publication in &publications {
            if !seen.insert(publication.id) {
                return Err(FolioError::Catalog(format!(
                    "Duplicate publication id: {}",
                    publication.id
                )));
            }
            if publication.title.trim().is_empty() {
                return Err(FolioError::Catalog(format!(
                    "Publication {} has an empty title",
                    publication.id
                )));
            }
            if publication.description.trim().is_empty() {
                return Err(FolioError::Catalog(format!(
                    "Publication {} has an empty description",
                    publication.id
                )));
            }
        }

        Ok(Self {
            author,
            publications,
        })
    }

    /// Publications in seed order
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn author(&self) -> Option<&AuthorProfile> {
        self.author.as_ref()
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Publication> {
        self.publications.iter().find(|p| p.id == id)
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = FolioError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Catalog::new(file.publications, file.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(id: u32, title: &str) -> Publication {
        Publication {
            id,
            title: title.to_string(),
            category: Category::Articles,
            year: 2024,
            description: "Описание".to_string(),
            journal: None,
            pages: None,
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![publication(1, "А"), publication(1, "Б")], None).unwrap_err();
        assert!(matches!(err, FolioError::Catalog(msg) if msg.contains("Duplicate")));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = Catalog::new(vec![publication(1, "   ")], None).unwrap_err();
        assert!(matches!(err, FolioError::Catalog(msg) if msg.contains("empty title")));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new(), None).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.author().is_none());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(vec![publication(3, "В"), publication(7, "Г")], None).unwrap();
        assert_eq!(catalog.get(7).map(|p| p.title.as_str()), Some("Г"));
        assert!(catalog.get(4).is_none());
    }
}
