//! Command-line surface: argument parsing, command handlers and the TUI

pub mod app;
pub mod commands;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, Commands, LogLevel, OutputFormat};

use std::path::Path;

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::{Settings, SettingsLoader};
use crate::Result;

/// Resolve settings and load the catalog they point at
///
/// `catalog_override` wins over `catalog.path` from the settings file.
pub fn load_context(config: Option<&Path>, catalog_override: Option<&Path>) -> Result<(Settings, Catalog)> {
    let settings = SettingsLoader::new().load(config)?;
    let seed = catalog_override.or(settings.catalog.path.as_deref());
    let catalog = CatalogLoader::load_or_bundled(seed)?;
    Ok((settings, catalog))
}
