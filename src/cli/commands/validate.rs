use std::path::PathBuf;

use super::CommandHandler;
use crate::catalog::{Catalog, CatalogLoader};
use crate::Result;

/// Handler for the `validate` command
pub struct ValidateCommand {
    /// Seed file; `None` checks the bundled catalog
    pub path: Option<PathBuf>,
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<()> {
        let catalog = self.check()?;
        let source = match &self.path {
            Some(path) => path.display().to_string(),
            None => "bundled catalog".to_string(),
        };
        println!("✓ {}: {} publications", source, catalog.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Load the seed, returning the first validation error
    pub fn check(&self) -> Result<Catalog> {
        CatalogLoader::load_or_bundled(self.path.as_deref())
    }
}
