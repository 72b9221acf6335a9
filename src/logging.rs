use std::fs::OpenOptions;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::LoggingConfig;

/// Parse a level name; unknown names fall back to `warn`.
pub fn level_filter(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

/// Expand a leading `~` in the configured log path.
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&config.file).into_owned())
}

/// Install a file logger.
/// Best-effort: failures are reported on stderr and otherwise ignored
/// (logging must never block evaluation).
pub fn init(config: &LoggingConfig) {
    let level = level_filter(&config.level);
    if level == LevelFilter::Off {
        return;
    }

    let path = log_path(config);
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("shale: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let log_config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if WriteLogger::init(level, log_config, file).is_err() {
        eprintln!("shale: logger already initialized");
    }
}
