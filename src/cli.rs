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

//! Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "w1therm")]
#[command(version)]
#[command(about = "List and read DS18B20 sensors on the Linux 1-Wire bus")]
#[command(long_about = "List and read DS18B20 sensors on the Linux 1-Wire bus

Sensors are discovered through the kernel w1 driver's sysfs tree
(default: /sys/bus/w1/devices/w1_bus_master1).

EXAMPLES:
    w1therm list                              List live sensor ids
    w1therm read 28-011111111111              Read one sensor
    w1therm read 28-011111111111 -p 1         Read, rounded to one decimal
    w1therm read-all --json                   Read every live sensor as JSON
    w1therm --base-dir /tmp/fake-bus list     Use another bus tree

ENVIRONMENT VARIABLES:
    W1THERM_BASE_DIR       Base directory of the bus master
    W1THERM_PRECISION      Default number of decimal places
    W1THERM_LOG=debug      Log filter (tracing EnvFilter syntax)

FILES:
    ~/.config/w1therm/config.json    { \"base_directory\": ..., \"precision\": ... }")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Base directory of the bus master's sysfs tree
    #[arg(long, global = true, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.config/w1therm/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoundingArgs {
    /// Decimal places; 0 rounds to whole degrees, negative to tens, hundreds, ...
    /// (default: the configured precision)
    #[arg(short, long, allow_negative_numbers = true)]
    pub precision: Option<i32>,

    /// Print the full value, ignoring any configured precision
    #[arg(long, conflicts_with = "precision")]
    pub unrounded: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List ids of sensors that can be read right now
    List,

    /// Read one sensor
    Read {
        /// Sensor id, e.g. 28-011111111111
        id: String,

        #[command(flatten)]
        rounding: RoundingArgs,
    },

    /// Read every live sensor
    ReadAll {
        #[command(flatten)]
        rounding: RoundingArgs,
    },

    /// Show the files the bus is read from
    Paths {
        /// Also resolve this sensor's reading file
        id: Option<String>,
    },
}
