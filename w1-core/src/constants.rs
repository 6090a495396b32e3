//! Constants for w1therm
//!
//! Paths, file names and protocol markers of the kernel w1 driver live here.
//! Never use magic strings in other files - add them here first.

/// System paths
pub mod paths {
    /// Default sysfs directory of the first w1 bus master (Raspberry Pi layout)
    pub const DEFAULT_BASE_DIR: &str = "/sys/bus/w1/devices/w1_bus_master1";

    /// File listing every slave id known to the bus master
    pub const MASTER_SLAVES_FILE: &str = "w1_master_slaves";

    /// Per-sensor reading file
    pub const SLAVE_FILE: &str = "w1_slave";

    /// Application directory name under the user config dir
    pub const APP_DIR: &str = "w1therm";

    /// Configuration file name
    pub const CONFIG_FILE: &str = "config.json";

    /// System-wide configuration fallback
    pub const SYSTEM_CONFIG_PATH: &str = "/etc/w1therm/config.json";
}

/// Markers of the `w1_slave` text protocol
pub mod protocol {
    /// CRC byte of zero on line 1: the sensor dropped off the bus mid-read
    pub const CRC_DISCONNECTED: &str = "crc=00";

    /// Driver marker for a valid CRC
    pub const CRC_VALID: &str = "YES";

    /// Temperature field, `t=` + signed millidegrees at the end of a line.
    /// ASCII digits only; `\d` would also accept other Unicode digits.
    pub const TEMPERATURE_PATTERN: &str = r"(?m)t=(-?[0-9]+)$";
}

/// Temperature conversion
pub mod temperature {
    /// The driver reports millidegrees Celsius
    pub const MILLIDEGREE_DIVISOR: f64 = 1000.0;

    /// Decimal places carried by a millidegree value
    pub const MILLIDEGREE_DECIMALS: i32 = 3;

    /// Accepted range for a configured precision
    pub const MIN_PRECISION: i32 = -15;
    pub const MAX_PRECISION: i32 = 15;
}

/// Environment variables
pub mod env {
    /// Overrides the configured base directory
    pub const BASE_DIR: &str = "W1THERM_BASE_DIR";

    /// Overrides the configured default precision
    pub const PRECISION: &str = "W1THERM_PRECISION";

    /// Log filter for the CLI
    pub const LOG: &str = "W1THERM_LOG";
}
