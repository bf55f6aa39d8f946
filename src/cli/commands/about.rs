use super::CommandHandler;
use crate::catalog::{AuthorProfile, Catalog};
use crate::cli::OutputFormat;
use crate::{FolioError, Result};

/// Handler for the `about` command
pub struct AboutCommand {
    pub author: Option<AuthorProfile>,
    pub format: OutputFormat,
}

impl CommandHandler for AboutCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "about"
    }
}

impl AboutCommand {
    /// Create new about command
    pub fn new(catalog: &Catalog, format: OutputFormat) -> Self {
        Self {
            author: catalog.author().cloned(),
            format,
        }
    }

    pub fn render(&self) -> Result<String> {
        let author = self
            .author
            .as_ref()
            .ok_or_else(|| FolioError::Catalog("The catalog has no author profile".to_string()))?;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(author)?),
            OutputFormat::Text => {
                let mut lines = vec![author.name.clone()];
                lines.extend(author.position.clone());
                lines.push(String::new());
                lines.extend(author.bio.iter().cloned());
                if !author.interests.is_empty() {
                    lines.push(String::new());
                    lines.push(format!("Научные интересы: {}", author.interests.join(", ")));
                }
                if let Some(email) = &author.email {
                    lines.push(format!("Email: {}", email));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}
