//! DS18B20 reading parser
//!
//! The kernel driver exposes each sensor's last conversion in `w1_slave`:
//!
//! ```text
//! 72 01 4b 46 7f ff 0e 10 57 : crc=57 YES
//! 72 01 4b 46 7f ff 0e 10 57 t=23125
//! ```
//!
//! Line 1 carries the scratchpad bytes and the CRC verdict. The `t=` field,
//! at the end of a later line, is the temperature in millidegrees Celsius.
//!
//! # Failure handling
//!
//! [`read_temperature`] never fails. A missing node, a bad CRC, a disconnected
//! sensor and a malformed document all come back as `None`; sensors are flaky
//! and callers poll them again. Those reasons are logged at `debug`; any other
//! I/O error is logged at `warn`. [`parse_reading`] exposes the reason to
//! diagnostics.

use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::constants::protocol;
use crate::error::{Result, W1Error};
use crate::paths::reading_path;
use crate::rounding::round_millidegrees;
use crate::sensor::SensorId;

lazy_static! {
    static ref TEMPERATURE_RE: Regex =
        Regex::new(protocol::TEMPERATURE_PATTERN).expect("temperature pattern is valid");
}

/// Parse a `w1_slave` document into millidegrees Celsius
pub fn parse_reading(id: &SensorId, content: &str) -> Result<i64> {
    let crc_line = content.split('\n').next().unwrap_or_default();

    if crc_line.contains(protocol::CRC_DISCONNECTED) {
        return Err(W1Error::Disconnected { id: id.to_string() });
    }
    if !crc_line.contains(protocol::CRC_VALID) {
        return Err(W1Error::CrcFailure { id: id.to_string() });
    }

    let captures = TEMPERATURE_RE
        .captures(content)
        .ok_or_else(|| W1Error::malformed(id.as_str(), "no t= field"))?;

    captures[1]
        .parse::<i64>()
        .map_err(|e| W1Error::malformed(id.as_str(), format!("t={}: {}", &captures[1], e)))
}

async fn read_millidegrees(base: &Path, id: &SensorId) -> Result<i64> {
    let path = reading_path(base, id);
    trace!(path = %path.display(), "Reading sensor");

    let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            W1Error::SensorNotFound {
                id: id.to_string(),
                path: path.clone(),
            }
        } else {
            W1Error::Io(e)
        }
    })?;

    parse_reading(id, &content)
}

/// Read one sensor and convert to degrees Celsius rounded to `precision` places.
///
/// Returns `None` for every failure; see the module docs.
pub async fn read_temperature(base: &Path, id: &SensorId, precision: Option<i32>) -> Option<f64> {
    match read_millidegrees(base, id).await {
        Ok(millis) => {
            let celsius = round_millidegrees(millis, precision);
            debug!(sensor = %id, millis, celsius, "Read sensor");
            Some(celsius)
        }
        Err(e) if e.is_sensor_fault() => {
            debug!(sensor = %id, error = %e, "No value from sensor");
            None
        }
        Err(e) => {
            warn!(sensor = %id, error = %e, "Failed to read sensor");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{crc_mismatch_reading, disconnected_reading, valid_reading, BusFixture};

    fn id() -> SensorId {
        SensorId::from("28-011111111111")
    }

    #[test]
    fn test_parse_valid_document() {
        assert_eq!(parse_reading(&id(), &valid_reading(23125)).unwrap(), 23125);
        assert_eq!(parse_reading(&id(), &valid_reading(-10062)).unwrap(), -10062);
    }

    #[test]
    fn test_parse_field_on_any_line() {
        let doc = "50 05 4b 46 7f ff 0c 10 1c : crc=1c YES\nextra line\n50 05 4b 46 7f ff 0c 10 1c t=85000";
        assert_eq!(parse_reading(&id(), doc).unwrap(), 85000);
    }

    #[test]
    fn test_parse_crc_zero_is_disconnected_even_with_temperature() {
        let err = parse_reading(&id(), &disconnected_reading()).unwrap_err();
        assert!(matches!(err, W1Error::Disconnected { .. }));
    }

    #[test]
    fn test_parse_crc_without_yes() {
        let err = parse_reading(&id(), &crc_mismatch_reading(23125)).unwrap_err();
        assert!(matches!(err, W1Error::CrcFailure { .. }));
    }

    #[test]
    fn test_parse_yes_only_counts_on_first_line() {
        let doc = "72 01 4b 46 7f ff 0e 10 57 : crc=57 NO\nYES t=23125\n";
        assert!(matches!(
            parse_reading(&id(), doc),
            Err(W1Error::CrcFailure { .. })
        ));
    }

    #[test]
    fn test_parse_missing_or_malformed_field() {
        for doc in [
            "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n",
            "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n72 01 4b 46 7f ff 0e 10 57 t=\n",
            "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n72 01 4b 46 7f ff 0e 10 57 t=12.5\n",
            "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\n72 01 4b 46 7f ff 0e 10 57 t=23125 \n",
        ] {
            assert!(
                matches!(parse_reading(&id(), doc), Err(W1Error::MalformedReading { .. })),
                "expected malformed for {:?}",
                doc
            );
        }
    }

    #[test]
    fn test_parse_skips_non_ascii_digits() {
        let doc = "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\nt=\u{0663}\n72 01 4b 46 7f ff 0e 10 57 t=23125\n";
        assert_eq!(parse_reading(&id(), doc).unwrap(), 23125);

        let only_arabic_indic = "72 01 4b 46 7f ff 0e 10 57 : crc=57 YES\nt=\u{0663}\n";
        assert!(matches!(
            parse_reading(&id(), only_arabic_indic),
            Err(W1Error::MalformedReading { .. })
        ));
    }

    #[test]
    fn test_parse_out_of_range_value() {
        let doc = "aa : crc=57 YES\naa t=99999999999999999999\n";
        assert!(matches!(
            parse_reading(&id(), doc),
            Err(W1Error::MalformedReading { .. })
        ));
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(matches!(parse_reading(&id(), ""), Err(W1Error::CrcFailure { .. })));
    }

    #[tokio::test]
    async fn test_read_without_precision() {
        let bus = BusFixture::with_master(&["28-011111111111"]);
        bus.add_valid_sensor("28-011111111111", 11111);

        assert_eq!(read_temperature(bus.path(), &id(), None).await, Some(11.111));
        assert_eq!(read_temperature(bus.path(), &id(), Some(0)).await, Some(11.0));
    }

    #[tokio::test]
    async fn test_read_rounds_each_sensor() {
        let bus = BusFixture::new();
        bus.add_valid_sensor("28-011111111111", 22221);
        bus.add_valid_sensor("28-022222222222", 22222);
        bus.add_valid_sensor("28-066666666666", 66666);

        let first = SensorId::from("28-011111111111");
        let second = SensorId::from("28-022222222222");
        let sixth = SensorId::from("28-066666666666");

        assert_eq!(read_temperature(bus.path(), &first, Some(1)).await, Some(22.2));
        assert_eq!(read_temperature(bus.path(), &second, Some(2)).await, Some(22.22));
        assert_eq!(read_temperature(bus.path(), &second, None).await, Some(22.222));
        assert_eq!(read_temperature(bus.path(), &sixth, Some(-1)).await, Some(70.0));
    }

    #[tokio::test]
    async fn test_read_failures_are_none() {
        let bus = BusFixture::new();
        assert_eq!(read_temperature(bus.path(), &id(), None).await, None);

        bus.add_sensor("28-011111111111", &disconnected_reading());
        assert_eq!(read_temperature(bus.path(), &id(), None).await, None);

        bus.add_sensor("28-011111111111", &crc_mismatch_reading(11111));
        assert_eq!(read_temperature(bus.path(), &id(), None).await, None);

        bus.add_sensor("28-011111111111", "this is not a sensor reading\n");
        assert_eq!(read_temperature(bus.path(), &id(), None).await, None);
    }

    #[tokio::test]
    async fn test_read_missing_base_directory() {
        let missing = Path::new("/nonexistent/w1_bus_master1");
        assert_eq!(read_temperature(missing, &id(), Some(1)).await, None);
    }

    #[tokio::test]
    async fn test_unreadable_node_is_io_error_and_none() {
        let bus = BusFixture::new();
        // A directory where the w1_slave file should be
        std::fs::create_dir_all(bus.path().join("28-011111111111").join("w1_slave")).unwrap();

        let err = read_millidegrees(bus.path(), &id()).await.unwrap_err();
        assert!(matches!(err, W1Error::Io(_)));
        assert!(!err.is_sensor_fault());
        assert_eq!(read_temperature(bus.path(), &id(), None).await, None);
    }

    #[tokio::test]
    async fn test_missing_node_maps_to_sensor_not_found() {
        let bus = BusFixture::new();
        let err = read_millidegrees(bus.path(), &id()).await.unwrap_err();
        assert!(matches!(err, W1Error::SensorNotFound { .. }));
    }
}
