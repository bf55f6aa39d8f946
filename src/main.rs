use clap::Parser;
use folio::{
    cli::commands::{
        about::AboutCommand, browse::BrowseCommand, contact::ContactCommand, list::ListCommand,
        validate::ValidateCommand, CommandHandler,
    },
    cli::{load_context, Cli, Commands, LogLevel},
    config::SettingsLoader,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file for `browse`
const BROWSE_LOG_ENV: &str = "FOLIO_LOG";

/// Initialize tracing with CLI flags
///
/// Logs go to stderr, except in the browser where they would corrupt the
/// screen: there they go to the file named by `FOLIO_LOG`, or nowhere.
fn initialize_tracing(log_level: &LogLevel, interactive: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let Some(path) = std::env::var_os(BROWSE_LOG_ENV) else {
        return;
    };
    match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        Err(e) => eprintln!("Cannot open log file {:?}: {}", path, e),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, matches!(cli.command, Commands::Browse));
    tracing::debug!(command = cli.command.name(), "Starting folio");

    let config = cli.config.as_deref();
    let seed = cli.catalog.as_deref();

    match cli.command {
        Commands::Browse => {
            let (settings, catalog) = load_context(config, seed)?;
            BrowseCommand::new(catalog, settings).execute()?;
        }
        Commands::List {
            search,
            category,
            sort,
            format,
        } => {
            let (settings, catalog) = load_context(config, seed)?;
            ListCommand::new(catalog, &settings, search, category, sort, format).execute()?;
        }
        Commands::About { format } => {
            let (_, catalog) = load_context(config, seed)?;
            AboutCommand::new(&catalog, format).execute()?;
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let settings = SettingsLoader::new().load(config)?;
            ContactCommand::new(settings.contact, name, email, message).execute()?;
        }
        Commands::Validate { path } => {
            // Validation reports seed errors itself, so the catalog is not preloaded
            let settings = SettingsLoader::new().load(config)?;
            let path = path
                .or_else(|| seed.map(|p| p.to_path_buf()))
                .or(settings.catalog.path);
            ValidateCommand::new(path).execute()?;
        }
    }

    Ok(())
}
