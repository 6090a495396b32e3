//! w1therm Core Library
//!
//! Discovery and reading of DS18B20 temperature sensors through the Linux
//! kernel's w1 bus driver.
//!
//! # Module Structure
//!
//! - `paths` - Where the master list and per-sensor files live
//! - `lister` - Concurrent discovery of live sensors
//! - `reading` - The `w1_slave` text protocol
//! - `rounding` - Millidegrees to rounded Celsius
//! - `config` - Base directory and default precision
//! - `bus` - [`W1Bus`], the handle tying them together
//!
//! # Example
//!
//! ```no_run
//! use w1_core::W1Bus;
//!
//! # async fn demo() -> w1_core::Result<()> {
//! let bus = W1Bus::default();
//! for id in bus.list().await? {
//!     match bus.read(&id, Some(1)).await {
//!         Some(celsius) => println!("{id}: {celsius}"),
//!         None => println!("{id}: unavailable"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod bus;
pub mod config;
pub mod constants;
pub mod lister;
pub mod paths;
pub mod reading;
pub mod rounding;
pub mod sensor;

#[cfg(test)]
mod test_utils;

pub use w1_error as error;

pub use bus::W1Bus;
pub use config::{
    apply_env_overrides, config_path, load_config, validate_config, validate_precision, W1Config,
};
pub use error::{Result, W1Error};
pub use lister::{list_sensors, parse_master_list};
pub use paths::{master_list_path, reading_path};
pub use reading::{parse_reading, read_temperature};
pub use rounding::round_millidegrees;
pub use sensor::{Reading, SensorId};
