use folio::catalog::{Catalog, CatalogLoader, Category, Publication};
use folio::query::{self, collation, CategoryFilter, Query, SortOrder};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = r#"
publications:
  - { id: 10, title: "ёжик в тумане", type: literature, year: 1999, description: "Сказка" }
  - { id: 11, title: "Ёмкость памяти", type: articles, year: 2010, description: "Когнитивная статья", journal: "Психология", pages: "1-9" }
  - { id: 12, title: "Азбука", type: textbooks, year: 2010, description: "Учебник чтения", pages: "64" }
  - { id: 13, title: "жизнь и судьба", type: essays, year: 1980, description: "Эссе о прозе" }
  - { id: 14, title: "Zettelkasten", type: interviews, year: 2024, description: "Interview about NOTES" }
"#;

fn fixture() -> Catalog {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.yaml");
    fs::write(&path, FIXTURE).unwrap();
    CatalogLoader::load_file(&path).unwrap()
}

fn catalogs() -> Vec<Catalog> {
    vec![CatalogLoader::bundled().unwrap(), fixture()]
}

fn all_queries() -> Vec<Query> {
    let searches = ["", "литератур", "ЁМК", "notes", "а", "нет такого"];
    let mut queries = Vec::new();
    for search in searches {
        for category in CategoryFilter::options() {
            for sort in [SortOrder::Seed, SortOrder::YearDesc, SortOrder::YearAsc, SortOrder::Title] {
                queries.push(Query::new(search, category, sort));
            }
        }
    }
    queries
}

fn satisfies(publication: &Publication, query: &Query) -> bool {
    let needle = query.search.to_lowercase();
    let text = publication.title.to_lowercase().contains(&needle)
        || publication.description.to_lowercase().contains(&needle);
    text && query.category.accepts(publication.category)
}

#[test]
fn test_results_are_a_matching_subset() {
    for catalog in catalogs() {
        for query in all_queries() {
            let results = query::run(catalog.publications(), &query);
            assert!(results.len() <= catalog.len());
            for publication in &results {
                assert!(catalog.get(publication.id).is_some());
                assert!(satisfies(publication, &query), "{:?} vs {:?}", publication.id, query);
            }
            // Nothing that matches is dropped
            let expected = catalog
                .publications()
                .iter()
                .filter(|p| satisfies(p, &query))
                .count();
            assert_eq!(results.len(), expected);
        }
    }
}

#[test]
fn test_query_is_idempotent() {
    for catalog in catalogs() {
        for query in all_queries() {
            let first = query::run(catalog.publications(), &query);
            let second = query::run(catalog.publications(), &query);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_ordering_is_monotonic() {
    for catalog in catalogs() {
        for query in all_queries() {
            let results = query::run(catalog.publications(), &query);
            for pair in results.windows(2) {
                match query.sort {
                    SortOrder::YearDesc => assert!(pair[0].year >= pair[1].year),
                    SortOrder::YearAsc => assert!(pair[0].year <= pair[1].year),
                    SortOrder::Title => {
                        assert_ne!(collation::compare(&pair[0].title, &pair[1].title), Ordering::Greater)
                    }
                    SortOrder::Seed => {}
                }
            }
        }
    }
}

#[test]
fn test_empty_search_all_returns_everything() {
    for catalog in catalogs() {
        for sort in SortOrder::SELECTABLE {
            let results = query::run(catalog.publications(), &Query::new("", CategoryFilter::All, sort));
            assert_eq!(results.len(), catalog.len());
        }
    }
}

#[test]
fn test_category_exclusivity() {
    for catalog in catalogs() {
        for category in Category::ALL {
            let query = Query::new("", CategoryFilter::Only(category), SortOrder::YearDesc);
            for publication in query::run(catalog.publications(), &query) {
                assert_eq!(publication.category, category);
            }
        }
    }
}

#[test]
fn test_seed_order_is_kept_without_sort() {
    let catalog = fixture();
    let results = query::run(catalog.publications(), &Query::new("", CategoryFilter::All, SortOrder::Seed));
    let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![10, 11, 12, 13, 14]);
}

#[test]
fn test_title_order_handles_yo_and_case() {
    let catalog = fixture();
    let results = query::run(catalog.publications(), &Query::new("", CategoryFilter::All, SortOrder::Title));
    let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
    // Latin first, then а, ё (as е), ё, ж
    assert_eq!(ids, vec![14, 12, 10, 11, 13]);
}

#[test]
fn test_equal_years_keep_seed_order() {
    let catalog = fixture();
    let results = query::run(catalog.publications(), &Query::new("", CategoryFilter::All, SortOrder::YearDesc));
    let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![14, 11, 12, 10, 13]);
}

#[test]
fn test_case_insensitive_latin_and_cyrillic() {
    let catalog = fixture();
    let notes = query::run(catalog.publications(), &Query::new("notes", CategoryFilter::All, SortOrder::Seed));
    assert_eq!(notes.iter().map(|p| p.id).collect::<Vec<_>>(), vec![14]);

    let yo = query::run(catalog.publications(), &Query::new("ЁМК", CategoryFilter::All, SortOrder::Seed));
    assert_eq!(yo.iter().map(|p| p.id).collect::<Vec<_>>(), vec![11]);
}
