#![deny(missing_docs)]
//! Shared logging utilities for the slack-image-dump workspace.
//!
//! This crate provides the `dump_*` logging macros used across the codebase,
//! the logger setup used by the command line binary, and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! dump_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! dump_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! dump_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! dump_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! dump_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Where and how verbosely the binary logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Level for both the terminal and the optional file logger.
    pub level: LevelFilter,
    /// Additional log file; truncated on start.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            file: None,
        }
    }
}

impl LogOptions {
    /// Options for a run with `verbose` toggling debug output.
    pub fn new(verbose: bool, file: Option<PathBuf>) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        Self { level, file }
    }
}

/// Initialize the global logger.
///
/// Terminal output goes to stderr so that the progress line on stdout stays
/// intact. A file that cannot be created is reported on stderr and skipped.
pub fn initialize(options: &LogOptions) {
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        options.level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = options.file.as_deref() {
        if let Some(file_logger) = create_file_logger(path, options.level, config) {
            loggers.push(file_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

/// Masks a credential for log output, keeping only a short recognizable prefix.
///
/// `xoxc-1234567890` becomes `xoxc-123…`.
pub fn redact(secret: &str) -> String {
    const VISIBLE: usize = 8;
    let mut visible: String = secret.chars().take(VISIBLE).collect();
    if secret.chars().count() > VISIBLE {
        visible.push('…');
    }
    visible
}

/// Installs a stdout/stderr logger for tests at debug level.
///
/// Later calls, and calls after another logger was installed, do nothing.
pub fn initialize_for_tests() {
    let options = LogOptions::new(true, None);
    let _ = TermLogger::init(
        options.level,
        build_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
