//! Path resolution inside the bus master's sysfs tree
//!
//! ```text
//! <base>/w1_master_slaves
//! <base>/<sensor id>/w1_slave
//! ```

use std::path::{Path, PathBuf};

use crate::constants::paths;
use crate::sensor::SensorId;

/// File listing the ids the bus master knows about
pub fn master_list_path(base: &Path) -> PathBuf {
    base.join(paths::MASTER_SLAVES_FILE)
}

/// Reading file of one sensor
pub fn reading_path(base: &Path, id: &SensorId) -> PathBuf {
    base.join(id.as_str()).join(paths::SLAVE_FILE)
}
