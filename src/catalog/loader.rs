use super::{Catalog, CatalogFile};
use crate::{FolioError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Catalog shipped inside the binary
const BUNDLED_SEED: &str = include_str!("../../data/publications.yaml");

/// Supported seed file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Yaml,
    Json,
}

impl SeedFormat {
    /// Pick a format from the file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SeedFormat::Json,
            _ => SeedFormat::Yaml,
        }
    }
}

/// Loads and validates seed files
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog compiled into the binary
    pub fn bundled() -> Result<Catalog> {
        Self::parse_str(BUNDLED_SEED, SeedFormat::Yaml)
    }

    /// Load a catalog from a seed file on disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Catalog(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;

        let catalog = Self::parse_str(&contents, SeedFormat::from_path(path)).map_err(|e| {
            FolioError::Catalog(format!("Invalid seed file {}: {}", path.display(), e))
        })?;

        info!(
            path = %path.display(),
            publications = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Load from the explicit path when given, otherwise the bundled seed
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Catalog> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                debug!("No seed file configured, using bundled catalog");
                Self::bundled()
            }
        }
    }

    /// Parse seed text in the given format
    pub fn parse_str(contents: &str, format: SeedFormat) -> Result<Catalog> {
        let file: CatalogFile = match format {
            SeedFormat::Yaml => serde_yaml_ng::from_str(contents)?,
            SeedFormat::Json => serde_json::from_str(contents)?,
        };
        Catalog::try_from(file)
    }
}
