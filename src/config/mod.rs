//! Settings for catalog source, initial view, display rules and the contact stub

pub mod loader;
pub mod types;

pub use loader::SettingsLoader;
pub use types::{CatalogSettings, ContactSettings, DisplayRules, Settings, ViewSettings};
