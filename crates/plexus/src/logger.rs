//! File logging.
//!
//! The terminal belongs to the TUI, so log records go to a file only.

use std::fs::{self, File};

use color_eyre::eyre::{Result, WrapErr};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Start writing log records at `level` to the platform log file.
///
/// Does nothing when logging is off or the platform has no data directory.
pub fn init(level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = plexus_config::log_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    WriteLogger::init(level, Config::default(), file).wrap_err("failed to install logger")?;
    log::info!("logging to {}", path.display());
    Ok(())
}
