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

use std::io::Write;

use clap::Parser;
use w1_core::W1Bus;

use w1therm::cli::Cli;
use w1therm::commands::{execute, resolve_config};
use w1therm::logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logging(cli.global.verbose);

    let config = resolve_config(&cli.global)?;
    let bus = W1Bus::new(config);

    match execute(&cli, &bus).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.text.as_bytes())?;
            stdout.flush()?;
            if output.exit_code != 0 {
                std::process::exit(output.exit_code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
