//! Configuration for the w1 bus
//!
//! The base directory of the bus master's sysfs tree is carried in a
//! [`W1Config`] value and passed explicitly to every operation. Nothing is
//! validated against the filesystem here; a wrong path only shows up when a
//! file under it is read.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{env as env_vars, paths, temperature};
use crate::error::{Result, W1Error};

fn default_base_directory() -> PathBuf {
    PathBuf::from(paths::DEFAULT_BASE_DIR)
}

/// Bus configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct W1Config {
    /// Root of the bus master's sysfs tree
    pub base_directory: PathBuf,
    /// Default number of decimal places; `None` leaves readings unrounded
    pub precision: Option<i32>,
}

impl Default for W1Config {
    fn default() -> Self {
        Self {
            base_directory: default_base_directory(),
            precision: None,
        }
    }
}

impl W1Config {
    pub fn with_base_directory(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
            ..Self::default()
        }
    }
}

/// Location of the user configuration file
pub fn config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join(paths::APP_DIR).join(paths::CONFIG_FILE);
    }
    if let Ok(home) = env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(paths::APP_DIR)
            .join(paths::CONFIG_FILE);
    }
    dirs::config_dir()
        .map(|dir| dir.join(paths::APP_DIR).join(paths::CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(paths::SYSTEM_CONFIG_PATH))
}

/// Load and validate a configuration file.
///
/// A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<W1Config> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(W1Config::default());
        }
        Err(source) => {
            return Err(W1Error::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: W1Config = serde_json::from_str(&data)?;
    validate_config(&config)?;
    debug!(path = %path.display(), base = %config.base_directory.display(), "Loaded config");
    Ok(config)
}

/// Reject values no read could ever succeed with
pub fn validate_config(config: &W1Config) -> Result<()> {
    if config.base_directory.as_os_str().is_empty() {
        return Err(W1Error::invalid_config("base_directory", "must not be empty"));
    }
    if let Some(precision) = config.precision {
        validate_precision(precision)?;
    }
    Ok(())
}

/// Check a precision against the range accepted from config, env and flags
pub fn validate_precision(precision: i32) -> Result<()> {
    if !(temperature::MIN_PRECISION..=temperature::MAX_PRECISION).contains(&precision) {
        return Err(W1Error::invalid_config(
            "precision",
            format!(
                "{} is outside {}..={}",
                precision,
                temperature::MIN_PRECISION,
                temperature::MAX_PRECISION
            ),
        ));
    }
    Ok(())
}

/// Apply `W1THERM_BASE_DIR` and `W1THERM_PRECISION` on top of `config`
pub fn apply_env_overrides(mut config: W1Config) -> Result<W1Config> {
    if let Ok(base) = env::var(env_vars::BASE_DIR) {
        if base.is_empty() {
            warn!("{} is set but empty, ignoring", env_vars::BASE_DIR);
        } else {
            config.base_directory = PathBuf::from(base);
        }
    }

    if let Ok(raw) = env::var(env_vars::PRECISION) {
        let precision = raw.trim().parse::<i32>().map_err(|e| {
            W1Error::invalid_config(env_vars::PRECISION, format!("'{}': {}", raw, e))
        })?;
        validate_precision(precision)?;
        config.precision = Some(precision);
    }

    Ok(config)
}
