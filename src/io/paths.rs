use crate::{FolioError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = "folio.yaml";

/// File name inside the platform config directory
pub const USER_SETTINGS_FILE: &str = "config.yaml";

/// Path management for folio settings files
#[derive(Debug, Clone)]
pub struct FolioPaths {
    /// Platform configuration directory
    pub config_dir: PathBuf,
}

impl FolioPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "folio").ok_or_else(|| {
            FolioError::Config("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// User-level settings file
    pub fn user_settings_file(&self) -> PathBuf {
        self.config_dir.join(USER_SETTINGS_FILE)
    }

    /// Project-level settings file for a working directory
    pub fn project_settings_file(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_settings_file() {
        let path = FolioPaths::project_settings_file(Path::new("/tmp/work"));
        assert_eq!(path, PathBuf::from("/tmp/work/folio.yaml"));
    }

    #[test]
    fn test_user_settings_file_is_inside_config_dir() {
        let paths = FolioPaths {
            config_dir: PathBuf::from("/home/u/.config/folio"),
        };
        assert_eq!(
            paths.user_settings_file(),
            PathBuf::from("/home/u/.config/folio/config.yaml")
        );
    }
}
