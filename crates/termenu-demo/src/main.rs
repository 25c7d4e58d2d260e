//! termenu - interactive demo of the termenu menu framework.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::rc::Rc;
use termenu_core::{Console, MenuError};
use termenu_demo::{app, config, logging, state};

use logging::{LogConfig, LogFormat};

/// termenu - nested terminal menus with escape commands.
#[derive(Parser, Debug)]
#[command(name = "termenu")]
#[command(about = "Interactive demo of nested terminal menus with escape commands")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the escape command prefix from config
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Override the root menu title from config
    #[arg(long)]
    title: Option<String>,

    /// Print the menu tree as JSON and exit
    #[arg(long)]
    outline: bool,

    /// Enable verbose logging (INFO level, menu entry/exit at DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging (DEBUG level)
    #[arg(short, long)]
    debug: bool,

    /// Enable trace logging (TRACE level for everything)
    #[arg(long)]
    trace: bool,

    /// Quiet mode (ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "escape=debug" or "menu=trace")
    /// Can be specified multiple times. Targets are prefixed with "termenu::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

use config::Config;
use state::AppState;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(prefix) = cli.prefix {
        config.escape_prefix = prefix;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }

    tracing::info!(
        target: "termenu::startup",
        "Loaded configuration (prefix: {:?}, title: {:?})",
        config.escape_prefix,
        config.title
    );

    let state = Rc::new(AppState::stdout());
    let mut menu = app::build_menu(&config, state)?;

    if cli.outline {
        println!("{}", serde_json::to_string_pretty(&menu.outline())?);
        return Ok(());
    }

    let mut console = Console::stdio();
    match menu.run(&mut console) {
        Ok(()) => tracing::info!(target: "termenu::startup", "Menu exited"),
        Err(MenuError::InputClosed) => {
            tracing::info!(target: "termenu::startup", "Input closed, shutting down")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
