use super::CommandHandler;
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub catalog: Catalog,
    pub settings: Settings,
}

impl CommandHandler for BrowseCommand {
    #[cfg(feature = "tui")]
    fn execute(&self) -> Result<()> {
        let controller = crate::view::ViewController::new(self.catalog.clone(), &self.settings);
        // One thread of control: input and timers are handled in turn
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(crate::cli::tui::run_browser(controller))
    }

    #[cfg(not(feature = "tui"))]
    fn execute(&self) -> Result<()> {
        Err(crate::FolioError::Cli(
            "folio was built without the `tui` feature; use `folio list` instead".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}

impl BrowseCommand {
    /// Create new browse command
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self { catalog, settings }
    }
}
