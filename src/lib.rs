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

//! w1therm - DS18B20 temperature sensors over the Linux 1-Wire bus
//!
//! The command line half of w1therm. Discovery and parsing live in `w1_core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod output;
