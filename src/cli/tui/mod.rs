/// Terminal User Interface module for interactive commands
pub mod browser;

use crate::view::ViewController;
use crate::Result;

/// Run the interactive catalog browser
pub async fn run_browser(controller: ViewController) -> Result<()> {
    browser::run(controller).await
}
