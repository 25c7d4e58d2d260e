//! Log setup for the demo binary.
//!
//! Logs go to stderr; stdout belongs to the menu. When `RUST_LOG` is set it
//! replaces both the preset and any `--log` overrides.

use anyhow::Result;
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Target every termenu event is logged under.
const ROOT_TARGET: &str = "termenu";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Base filter chosen from the verbosity flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogPreset {
    /// Warnings, plus startup info
    #[default]
    Production,
    /// Menu entry/exit and toggles
    Verbose,
    /// Escape dispatch details
    Debug,
    /// Every selection and command
    Trace,
    /// Errors only
    Quiet,
}

impl LogPreset {
    /// `quiet` beats `trace`, which beats `debug`, which beats `verbose`.
    pub fn from_flags(verbose: bool, debug: bool, trace: bool, quiet: bool) -> Self {
        match (quiet, trace, debug, verbose) {
            (true, ..) => LogPreset::Quiet,
            (_, true, ..) => LogPreset::Trace,
            (_, _, true, _) => LogPreset::Debug,
            (_, _, _, true) => LogPreset::Verbose,
            _ => LogPreset::Production,
        }
    }

    fn directives(self) -> &'static [&'static str] {
        match self {
            LogPreset::Production => &["termenu=warn", "termenu::startup=info"],
            LogPreset::Verbose => &["termenu=info", "termenu::menu=debug"],
            LogPreset::Debug => &["termenu=debug"],
            LogPreset::Trace => &["termenu=trace"],
            LogPreset::Quiet => &["termenu=error"],
        }
    }
}

/// Logging settings collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub preset: LogPreset,
    /// `(target, level)` pairs from `--log`, in the order given
    pub overrides: Vec<(String, LevelFilter)>,
    pub format: LogFormat,
}

impl LogConfig {
    pub fn from_cli(
        verbose: bool,
        debug: bool,
        trace: bool,
        quiet: bool,
        log_overrides: Vec<String>,
        format: LogFormat,
    ) -> Self {
        let overrides = log_overrides
            .iter()
            .flat_map(|arg| arg.split(','))
            .filter_map(parse_override)
            .collect();

        Self {
            preset: LogPreset::from_flags(verbose, debug, trace, quiet),
            overrides,
            format,
        }
    }

    /// Filter directives for the preset followed by the overrides.
    pub fn directives(&self) -> String {
        self.preset
            .directives()
            .iter()
            .map(|directive| directive.to_string())
            .chain(
                self.overrides
                    .iter()
                    .map(|(target, level)| format!("{}={}", target, level.to_string().to_lowercase())),
            )
            .collect::<Vec<_>>()
            .join(",")
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.directives()))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Parse one `target=level` entry. Bare targets such as `escape` are
/// namespaced as `termenu::escape`; malformed entries are skipped.
fn parse_override(entry: &str) -> Option<(String, LevelFilter)> {
    let (target, level) = entry.split_once('=')?;
    let target = target.trim();
    if target.is_empty() {
        return None;
    }
    let level = level.trim().parse::<LevelFilter>().ok()?;

    let target = if target == ROOT_TARGET || target.starts_with("termenu::") {
        target.to_string()
    } else {
        format!("{}::{}", ROOT_TARGET, target)
    };
    Some((target, level))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let layer = match config.format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(config.filter())
        .try_init()?;
    Ok(())
}
