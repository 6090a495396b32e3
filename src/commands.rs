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

//! Command execution
//!
//! Commands produce their output as a string plus exit code; `main` prints it.
//! That keeps everything here testable against a fake bus tree.

use anyhow::Context;
use tracing::debug;
use w1_core::{
    apply_env_overrides, config_path, load_config, validate_config, validate_precision, W1Bus,
    W1Config,
};

use crate::cli::{Cli, Commands, GlobalArgs, RoundingArgs};
use crate::output;

/// Exit code when a single read gives no value
pub const EXIT_UNAVAILABLE: i32 = 2;

#[derive(Debug, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self { text, exit_code: 0 }
    }
}

/// Build the effective configuration: defaults < file < environment < flags
pub fn resolve_config(global: &GlobalArgs) -> anyhow::Result<W1Config> {
    let path = global.config.clone().unwrap_or_else(config_path);
    let config = load_config(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    let mut config = apply_env_overrides(config)?;

    if let Some(base_dir) = &global.base_dir {
        config.base_directory = base_dir.clone();
    }
    validate_config(&config)?;

    debug!(base = %config.base_directory.display(), precision = ?config.precision, "Effective configuration");
    Ok(config)
}

/// Precision for one command: the `-p` flag, else the configured default,
/// and no rounding at all with `--unrounded`. Flag values get the same bounds
/// as configured ones.
pub fn effective_precision(rounding: &RoundingArgs, bus: &W1Bus) -> anyhow::Result<Option<i32>> {
    if rounding.unrounded {
        return Ok(None);
    }
    let precision = rounding.precision.or(bus.default_precision());
    if let Some(precision) = precision {
        validate_precision(precision)?;
    }
    Ok(precision)
}

pub async fn execute(cli: &Cli, bus: &W1Bus) -> anyhow::Result<CommandOutput> {
    let as_json = cli.global.json;

    match &cli.command {
        Commands::List => {
            let ids = bus.list().await?;
            Ok(CommandOutput::success(output::render_ids(&ids, as_json)?))
        }
        Commands::Read { id, rounding } => {
            let precision = effective_precision(rounding, bus)?;
            let id = w1_core::SensorId::from(id.as_str());
            let celsius = bus.read(&id, precision).await;
            let exit_code = if celsius.is_some() { 0 } else { EXIT_UNAVAILABLE };
            let reading = w1_core::Reading { id, celsius };
            Ok(CommandOutput {
                text: output::render_reading(&reading, as_json)?,
                exit_code,
            })
        }
        Commands::ReadAll { rounding } => {
            let precision = effective_precision(rounding, bus)?;
            let readings = bus.read_all(precision).await?;
            Ok(CommandOutput::success(output::render_readings(&readings, as_json)?))
        }
        Commands::Paths { id } => {
            let master = bus.master_list_path();
            let text = match id {
                Some(id) => {
                    let id = w1_core::SensorId::from(id.as_str());
                    let reading = bus.reading_path(&id);
                    output::render_paths(&master, Some((&id, &reading)), as_json)?
                }
                None => output::render_paths(&master, None, as_json)?,
            };
            Ok(CommandOutput::success(text))
        }
    }
}
