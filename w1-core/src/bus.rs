//! Handle to one w1 bus master
//!
//! [`W1Bus`] owns the configuration every path is resolved against. Changing
//! the base directory takes `&mut self`, so it can't race an operation that
//! borrows the same handle; clone the handle to point another one elsewhere.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::W1Config;
use crate::error::Result;
use crate::lister::list_sensors;
use crate::paths;
use crate::reading::read_temperature;
use crate::sensor::{Reading, SensorId};

#[derive(Debug, Clone, Default)]
pub struct W1Bus {
    config: W1Config,
}

impl W1Bus {
    pub fn new(config: W1Config) -> Self {
        Self { config }
    }

    /// Bus rooted at `base_directory` with default settings otherwise
    pub fn with_base_directory(base_directory: impl Into<PathBuf>) -> Self {
        Self::new(W1Config::with_base_directory(base_directory))
    }

    pub fn config(&self) -> &W1Config {
        &self.config
    }

    pub fn base_directory(&self) -> &Path {
        &self.config.base_directory
    }

    /// Point the bus at another sysfs tree. Takes effect for every later call.
    pub fn set_base_directory(&mut self, base_directory: impl Into<PathBuf>) {
        self.config.base_directory = base_directory.into();
        debug!(base = %self.config.base_directory.display(), "Base directory changed");
    }

    pub fn master_list_path(&self) -> PathBuf {
        paths::master_list_path(self.base_directory())
    }

    pub fn reading_path(&self, id: &SensorId) -> PathBuf {
        paths::reading_path(self.base_directory(), id)
    }

    /// Ids of the sensors that can be read right now, in master file order
    pub async fn list(&self) -> Result<Vec<SensorId>> {
        list_sensors(self.base_directory()).await
    }

    /// Precision configured for callers that don't pick one themselves
    pub fn default_precision(&self) -> Option<i32> {
        self.config.precision
    }

    /// Temperature of one sensor in degrees Celsius, `None` if it can't be read.
    ///
    /// `precision` is applied as given: `None` returns the unrounded value even
    /// when a default is configured. Pass [`W1Bus::default_precision`] to use it.
    pub async fn read(&self, id: &SensorId, precision: Option<i32>) -> Option<f64> {
        read_temperature(self.base_directory(), id, precision).await
    }

    /// List the bus, then read every live sensor
    pub async fn read_all(&self, precision: Option<i32>) -> Result<Vec<Reading>> {
        let ids = self.list().await?;

        let mut readings = Vec::with_capacity(ids.len());
        for id in ids {
            let celsius = self.read(&id, precision).await;
            readings.push(Reading { id, celsius });
        }
        Ok(readings)
    }
}
