/*
 * This file is part of w1therm.
 *
 * Copyright (C) 2025 w1therm contributors
 *
 * w1therm is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * w1therm is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with w1therm. If not, see <https://www.gnu.org/licenses/>.
 */

//! Text and JSON rendering of command results

use std::path::Path;

use serde_json::json;
use w1_core::{Reading, SensorId};

/// Shown in place of a temperature the sensor didn't deliver
pub const UNAVAILABLE: &str = "unavailable";

pub fn format_celsius(celsius: Option<f64>) -> String {
    match celsius {
        Some(value) => value.to_string(),
        None => UNAVAILABLE.to_string(),
    }
}

pub fn render_ids(ids: &[SensorId], as_json: bool) -> serde_json::Result<String> {
    if as_json {
        return serde_json::to_string_pretty(ids);
    }
    Ok(ids.iter().map(|id| format!("{}\n", id)).collect())
}

pub fn render_reading(reading: &Reading, as_json: bool) -> serde_json::Result<String> {
    if as_json {
        return serde_json::to_string_pretty(reading);
    }
    Ok(format!("{}\n", format_celsius(reading.celsius)))
}

pub fn render_readings(readings: &[Reading], as_json: bool) -> serde_json::Result<String> {
    if as_json {
        return serde_json::to_string_pretty(readings);
    }
    Ok(readings
        .iter()
        .map(|r| format!("{}\t{}\n", r.id, format_celsius(r.celsius)))
        .collect())
}

pub fn render_paths(
    master: &Path,
    sensor: Option<(&SensorId, &Path)>,
    as_json: bool,
) -> serde_json::Result<String> {
    if as_json {
        // Paths that aren't UTF-8 fail here rather than inside json!
        let master = serde_json::to_value(master)?;
        let value = match sensor {
            Some((id, path)) => json!({
                "master": master,
                "sensor": { "id": id, "reading": serde_json::to_value(path)? },
            }),
            None => json!({ "master": master }),
        };
        return serde_json::to_string_pretty(&value);
    }

    let mut out = format!("master\t{}\n", master.display());
    if let Some((id, path)) = sensor {
        out.push_str(&format!("{}\t{}\n", id, path.display()));
    }
    Ok(out)
}
