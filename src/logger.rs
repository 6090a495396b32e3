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

//! Logging setup
//!
//! Logs go to stderr so command output on stdout stays machine readable.

use tracing_subscriber::EnvFilter;
use w1_core::constants::env;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Filter used when `W1THERM_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

pub fn init_logging(verbose: bool) {
    let filter = std::env::var(env::LOG).unwrap_or_else(|_| default_filter(verbose).to_string());

    let result = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(&filter))
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
