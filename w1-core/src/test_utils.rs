//! Test fixtures that lay out a fake w1 sysfs tree in a temporary directory

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::constants::paths;

/// A bus master directory under a [`TempDir`], removed on drop
pub struct BusFixture {
    dir: TempDir,
}

impl BusFixture {
    /// Empty bus directory without a master file
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Bus directory whose master file lists `ids`, newline terminated like the driver writes it
    pub fn with_master(ids: &[&str]) -> Self {
        let fixture = Self::new();
        let contents: String = ids.iter().map(|id| format!("{}\n", id)).collect();
        fixture.write_master(&contents);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_master(&self, contents: &str) {
        fs::write(self.dir.path().join(paths::MASTER_SLAVES_FILE), contents)
            .expect("write master file");
    }

    /// Create `<id>/w1_slave` with raw `contents`
    pub fn add_sensor(&self, id: &str, contents: &str) {
        let sensor_dir = self.dir.path().join(id);
        fs::create_dir_all(&sensor_dir).expect("create sensor dir");
        fs::write(sensor_dir.join(paths::SLAVE_FILE), contents).expect("write w1_slave");
    }

    /// Create `<id>/w1_slave` holding a valid reading of `millis` millidegrees
    pub fn add_valid_sensor(&self, id: &str, millis: i64) {
        self.add_sensor(id, &valid_reading(millis));
    }
}

/// Two-line `w1_slave` document with a good CRC
pub fn valid_reading(millis: i64) -> String {
    format!(
        "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n72 01 4b 46 7f ff 0e 10 57 t={}\n",
        millis
    )
}

/// Document the driver writes when the sensor vanished mid-conversion
pub fn disconnected_reading() -> String {
    "00 00 00 00 00 00 00 00 00 : crc=00 YES\n00 00 00 00 00 00 00 00 00 t=0\n".to_string()
}

/// Document with a CRC mismatch
pub fn crc_mismatch_reading(millis: i64) -> String {
    format!(
        "72 01 4b 46 7f ff 0e 10 57 : crc=4e NO\n72 01 4b 46 7f ff 0e 10 57 t={}\n",
        millis
    )
}
