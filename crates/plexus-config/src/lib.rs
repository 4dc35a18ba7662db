//! Configuration for the plexus particle field.
//!
//! Settings are read from `config.toml` in the platform config directory.
//! Every key is optional; missing keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, bail};
use directories::ProjectDirs;
use log::LevelFilter;
use plexus_core::{FieldSettings, LineTheme, MAX_GLOW_PHASE};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "plexus";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "plexus.log";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between simulation ticks.
    pub tick_ms: u64,
    /// Connection line colours.
    pub theme: LineTheme,
    /// Show the key help and status footer.
    pub show_help: bool,
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Simulation constants.
    pub field: FieldSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            theme: LineTheme::default(),
            show_help: true,
            log_level: "info".to_string(),
            field: FieldSettings::default(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory.
    ///
    /// A missing file (or an unknown config directory) yields the defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).wrap_err("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).wrap_err("failed to serialize config")?;
        fs::write(path, contents)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))
    }

    /// Check that every value is usable by the simulation.
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than zero");
        }
        if field.width == 0 || field.height == 0 {
            bail!(
                "field size must be non-zero, got {}x{}",
                field.width,
                field.height
            );
        }
        if !field.connection_distance.is_finite() || field.connection_distance <= 0.0 {
            bail!(
                "connection_distance must be positive, got {}",
                field.connection_distance
            );
        }
        if !field.influence_radius.is_finite() || field.influence_radius <= 0.0 {
            bail!(
                "influence_radius must be positive, got {}",
                field.influence_radius
            );
        }
        if !field.glow_step.is_finite() || !(0.0..MAX_GLOW_PHASE).contains(&field.glow_step) {
            bail!("glow_step must be in [0, 2π), got {}", field.glow_step);
        }
        if !field.boundary_offset.is_finite() || field.boundary_offset < 0.0 {
            bail!(
                "boundary_offset must be zero or positive, got {}",
                field.boundary_offset
            );
        }
        if !field.particle_speed.is_finite() {
            bail!("particle_speed must be finite, got {}", field.particle_speed);
        }
        if !field.attraction_strength.is_finite() {
            bail!(
                "attraction_strength must be finite, got {}",
                field.attraction_strength
            );
        }
        if field.min_size >= field.max_size {
            bail!(
                "min_size ({}) must be less than max_size ({})",
                field.min_size,
                field.max_size
            );
        }
        self.log_level_filter()?;
        Ok(())
    }

    /// Interval between simulation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Parsed log level.
    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        match LevelFilter::from_str(&self.log_level) {
            Ok(level) => Ok(level),
            Err(_) => bail!("unknown log level {:?}", self.log_level),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Location of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Location of the log file, if the platform has a data directory.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}
