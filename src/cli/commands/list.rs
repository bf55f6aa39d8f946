use tracing::debug;

use super::CommandHandler;
use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::query::{CategoryFilter, SortOrder};
use crate::view::ViewController;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    controller: ViewController,
    pub format: OutputFormat,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command; unset filters fall back to the session defaults
    pub fn new(
        catalog: Catalog,
        settings: &Settings,
        search: String,
        category: Option<CategoryFilter>,
        sort: Option<SortOrder>,
        format: OutputFormat,
    ) -> Self {
        let mut controller = ViewController::new(catalog, settings);
        controller.set_search(search);
        if let Some(category) = category {
            controller.set_category(category);
        }
        if let Some(sort) = sort {
            controller.set_sort(sort);
        }
        Self { controller, format }
    }

    /// Render the result in the requested format
    pub fn render(&self) -> Result<String> {
        let view = self.controller.view_model();
        debug!(matches = view.count(), total = view.total, "Catalog query ran");

        match self.format {
            OutputFormat::Text => Ok(view.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLoader, Category};
    use crate::view::EMPTY_MESSAGE;

    fn command(search: &str, category: Option<CategoryFilter>, format: OutputFormat) -> ListCommand {
        ListCommand::new(
            CatalogLoader::bundled().unwrap(),
            &Settings::default(),
            search.to_string(),
            category,
            None,
            format,
        )
    }

    #[test]
    fn test_text_output_has_footer() {
        let output = command("", Some(CategoryFilter::Only(Category::Articles)), OutputFormat::Text)
            .render()
            .unwrap();
        assert!(output.contains("Символизм в поэзии Серебряного века"));
        assert!(output.ends_with("Найдено публикаций: 2"));
    }

    #[test]
    fn test_text_output_empty_state() {
        let output = command("нет такого", None, OutputFormat::Text).render().unwrap();
        assert_eq!(output, EMPTY_MESSAGE);
    }

    #[test]
    fn test_json_output() {
        let output = command("", None, OutputFormat::Json).render().unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["cards"].as_array().unwrap().len(), 8);
        assert_eq!(value["cards"][0]["id"], 1);
        assert_eq!(value["query"]["sort"], "year-desc");
    }
}
