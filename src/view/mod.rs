//! Session view state and the controller that owns it
//!
//! Every setter replaces one field. The catalog never changes, so the view
//! model is simply recomputed on each read.

pub mod model;

pub use model::{CatalogViewModel, PublicationCard, COUNT_LABEL, EMPTY_MESSAGE};

use serde::Serialize;
use tracing::trace;

use crate::catalog::{AuthorProfile, Catalog, Publication};
use crate::config::{DisplayRules, Settings, ViewSettings};
use crate::contact::ContactSubmitter;
use crate::query::{self, CategoryFilter, Query, SortOrder};

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Catalog,
    About,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Catalog, Tab::About];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Catalog => "Публикации",
            Tab::About => "Об авторе",
        }
    }

    pub fn toggle(&self) -> Tab {
        match self {
            Tab::Catalog => Tab::About,
            Tab::About => Tab::Catalog,
        }
    }
}

/// User-controlled selections of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub search_query: String,
    pub selected_type: CategoryFilter,
    pub sort_order: SortOrder,
    pub active_tab: Tab,
}

impl ViewState {
    pub fn from_settings(settings: &ViewSettings) -> Self {
        Self {
            selected_type: settings.default_category,
            sort_order: settings.default_sort,
            ..Default::default()
        }
    }

    pub fn query(&self) -> Query {
        Query::new(self.search_query.clone(), self.selected_type, self.sort_order)
    }
}

/// Owns the catalog, the view state and the contact form of a session
#[derive(Debug)]
pub struct ViewController {
    catalog: Catalog,
    display: DisplayRules,
    defaults: ViewSettings,
    state: ViewState,
    contact: ContactSubmitter,
}

impl ViewController {
    pub fn new(catalog: Catalog, settings: &Settings) -> Self {
        Self {
            catalog,
            display: settings.display.clone(),
            defaults: settings.view.clone(),
            state: ViewState::from_settings(&settings.view),
            contact: ContactSubmitter::new(settings.contact.clone()),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn author(&self) -> Option<&AuthorProfile> {
        self.catalog.author()
    }

    pub fn contact(&self) -> &ContactSubmitter {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactSubmitter {
        &mut self.contact
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search_query = text.into();
        trace!(search = %self.state.search_query, "Search updated");
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.selected_type = category;
        trace!(category = %category, "Category updated");
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.state.sort_order = order;
        trace!(sort = %order, "Sort order updated");
    }

    /// Switch tabs; filters are kept as they are
    pub fn set_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
        trace!(?tab, "Tab switched");
    }

    pub fn cycle_category(&mut self, step: isize) {
        self.set_category(self.state.selected_type.cycle(step));
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.state.sort_order.cycle());
    }

    /// Restore search, category and sort to the session defaults
    pub fn reset_filters(&mut self) {
        let tab = self.state.active_tab;
        self.state = ViewState {
            active_tab: tab,
            ..ViewState::from_settings(&self.defaults)
        };
    }

    /// Current query result in display order
    pub fn results(&self) -> Vec<&Publication> {
        query::run(self.catalog.publications(), &self.state.query())
    }

    /// Recompute the catalog view model from the current state
    pub fn view_model(&self) -> CatalogViewModel {
        CatalogViewModel::build(self.catalog.publications(), &self.state.query(), &self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLoader, Category};
    use pretty_assertions::assert_eq;

    fn controller() -> ViewController {
        ViewController::new(CatalogLoader::bundled().unwrap(), &Settings::default())
    }

    #[test]
    fn test_defaults() {
        let controller = controller();
        assert_eq!(controller.state(), &ViewState::default());
        assert_eq!(controller.state().sort_order, SortOrder::YearDesc);
        assert_eq!(controller.state().active_tab, Tab::Catalog);
        assert_eq!(controller.view_model().count(), 8);
    }

    #[test]
    fn test_tab_switch_keeps_filters() {
        let mut controller = controller();
        controller.set_search("роман");
        controller.set_category(CategoryFilter::Only(Category::Monographs));
        controller.set_sort(SortOrder::Title);

        controller.set_tab(Tab::About);
        controller.set_tab(Tab::Catalog);

        assert_eq!(controller.state().search_query, "роман");
        assert_eq!(controller.state().selected_type, CategoryFilter::Only(Category::Monographs));
        assert_eq!(controller.state().sort_order, SortOrder::Title);
        let ids: Vec<u32> = controller.results().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_view_model_follows_each_setter() {
        let mut controller = controller();
        controller.set_category(CategoryFilter::Only(Category::Articles));
        assert_eq!(controller.view_model().count(), 2);

        controller.set_search("символ");
        assert_eq!(controller.view_model().count(), 1);

        controller.set_category(CategoryFilter::All);
        assert_eq!(controller.view_model().count(), 1);
    }

    #[test]
    fn test_reset_filters_keeps_tab() {
        let mut controller = controller();
        controller.set_tab(Tab::About);
        controller.set_search("x");
        controller.cycle_category(1);
        controller.cycle_sort();

        controller.reset_filters();

        assert_eq!(
            controller.state(),
            &ViewState {
                active_tab: Tab::About,
                ..ViewState::default()
            }
        );
    }

    #[test]
    fn test_settings_seed_initial_state() {
        let mut settings = Settings::default();
        settings.view.default_sort = SortOrder::YearAsc;
        settings.view.default_category = CategoryFilter::Only(Category::Interviews);

        let controller = ViewController::new(CatalogLoader::bundled().unwrap(), &settings);
        let ids: Vec<u32> = controller.results().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6]);
    }
}
