use super::types::Settings;
use crate::io::FolioPaths;
use crate::{FolioError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Settings discovery and parsing
pub struct SettingsLoader {
    /// Directory searched for a project-level folio.yaml
    project_root: PathBuf,
    /// Platform config directory; `None` skips the user-level lookup
    user_paths: Option<FolioPaths>,
}

impl SettingsLoader {
    /// Loader rooted at the current directory with the platform config dir
    pub fn new() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let user_paths = match FolioPaths::new() {
            Ok(paths) => Some(paths),
            Err(e) => {
                warn!("Skipping user settings: {}", e);
                None
            }
        };
        Self {
            project_root,
            user_paths,
        }
    }

    /// Loader with explicit search locations
    pub fn with_locations(project_root: impl Into<PathBuf>, user_paths: Option<FolioPaths>) -> Self {
        Self {
            project_root: project_root.into(),
            user_paths,
        }
    }

    /// Resolve settings: explicit file, then project file, then user file,
    /// then built-in defaults. An explicit path that does not exist is an error.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Settings> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(FolioError::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            return self.load_file(path);
        }

        let project_file = FolioPaths::project_settings_file(&self.project_root);
        if project_file.exists() {
            return self.load_file(&project_file);
        }

        if let Some(paths) = &self.user_paths {
            let user_file = paths.user_settings_file();
            if user_file.exists() {
                return self.load_file(&user_file);
            }
        }

        debug!("No settings file found, using defaults");
        Ok(Settings::default())
    }

    /// Parse one settings file
    pub fn load_file(&self, path: &Path) -> Result<Settings> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("Failed to read settings file {}: {}", path.display(), e))
        })?;

        let mut settings: Settings = serde_yaml_ng::from_str(&contents).map_err(|e| {
            FolioError::Config(format!("Failed to parse settings file {}: {}", path.display(), e))
        })?;

        // Relative seed paths are resolved against the settings file
        if let Some(seed) = settings.catalog.path.as_mut() {
            if seed.is_relative() {
                if let Some(parent) = path.parent() {
                    *seed = parent.join(&*seed);
                }
            }
        }

        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_nothing_found() {
        let dir = TempDir::new().unwrap();
        let loader = SettingsLoader::with_locations(dir.path(), None);
        let settings = loader.load(None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_project_file_is_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("folio.yaml"),
            "view:\n  default_sort: year-asc\ncatalog:\n  path: seed.json\n",
        )
        .unwrap();

        let loader = SettingsLoader::with_locations(dir.path(), None);
        let settings = loader.load(None).unwrap();
        assert_eq!(settings.view.default_sort, SortOrder::YearAsc);
        assert_eq!(settings.catalog.path, Some(dir.path().join("seed.json")));
    }

    #[test]
    fn test_user_file_is_fallback() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join("config.yaml"), "contact:\n  delay_ms: 10\n").unwrap();

        let loader = SettingsLoader::with_locations(
            project.path(),
            Some(FolioPaths {
                config_dir: user.path().to_path_buf(),
            }),
        );
        let settings = loader.load(None).unwrap();
        assert_eq!(settings.contact.delay_ms, 10);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let loader = SettingsLoader::with_locations(dir.path(), None);
        let err = loader.load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(matches!(err, FolioError::Config(msg) if msg.contains("not found")));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "contact: [unclosed").unwrap();

        let loader = SettingsLoader::with_locations(dir.path(), None);
        let err = loader.load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }
}
