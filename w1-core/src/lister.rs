//! Sensor discovery
//!
//! The bus master lists every slave it has seen in `w1_master_slaves`, one id
//! per line. That list can name sensors that stopped answering, or whose
//! `<id>/w1_slave` node the driver hasn't created yet, so each candidate is
//! checked for read access before it's returned.
//!
//! The checks run concurrently in a [`JoinSet`]. Each task carries its candidate's
//! position in the master file and the survivors are put back in that order,
//! whatever order the checks finish in.

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tracing::{debug, info, trace, warn};

use crate::error::{Result, W1Error};
use crate::paths::{master_list_path, reading_path};
use crate::sensor::SensorId;

/// Split the master file into candidate ids.
///
/// The driver terminates its output with a newline; only that one trailing
/// empty element is dropped; blank lines in the middle stay and fail the read check.
pub fn parse_master_list(contents: &str) -> Vec<SensorId> {
    if contents.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<&str> = contents.split('\n').collect();
    if candidates.last() == Some(&"") {
        candidates.pop();
    }

    candidates.into_iter().map(SensorId::from).collect()
}

/// True when the file can be opened for reading right now
async fn is_readable(path: &Path) -> bool {
    match tokio::fs::File::open(path).await {
        Ok(_) => true,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "Not readable");
            false
        }
    }
}

/// List the ids of live sensors on the bus, in master file order.
///
/// Fails only when the master file itself can't be read.
pub async fn list_sensors(base: &Path) -> Result<Vec<SensorId>> {
    let master_path = master_list_path(base);
    debug!(path = %master_path.display(), "Reading bus master");

    let contents = tokio::fs::read_to_string(&master_path)
        .await
        .map_err(|source| W1Error::MasterRead {
            path: master_path.clone(),
            source,
        })?;

    let candidates = parse_master_list(&contents);
    if candidates.is_empty() {
        info!("Bus master reports no sensors");
        return Ok(Vec::new());
    }

    let mut checks = JoinSet::new();
    for (index, id) in candidates.iter().enumerate() {
        let path: PathBuf = reading_path(base, id);
        checks.spawn(async move { (index, is_readable(&path).await) });
    }

    let mut live = vec![false; candidates.len()];
    while let Some(outcome) = checks.join_next().await {
        match outcome {
            Ok((index, readable)) => live[index] = readable,
            Err(e) => warn!(error = %e, "Sensor read check task failed"),
        }
    }

    let sensors: Vec<SensorId> = candidates
        .into_iter()
        .zip(live)
        .filter_map(|(id, readable)| {
            if !readable {
                debug!(sensor = %id, "Skipping sensor without readable w1_slave");
            }
            readable.then_some(id)
        })
        .collect();

    info!(found = sensors.len(), "Listed live sensors");
    Ok(sensors)
}
