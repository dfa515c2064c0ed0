/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::process::ExitCode;

use colored::Colorize;

use crate::Command;
use crate::config::Config;

mod convert;

pub fn handle_command(command: Command) -> ExitCode {
	let config = Config::global();
	let result = match command {
		Command::Convert { path } => convert::convert_file(&path, config),
		Command::Eval { source } => convert::convert_source(&source, config),
	};

	match result {
		Ok(report) if report.is_success() => ExitCode::SUCCESS,
		Ok(_) => ExitCode::FAILURE,
		Err(error) => {
			tracing::error!(%error, "conversion failed");
			eprintln!("{} {error}", "Error:".red().bold());
			ExitCode::FAILURE
		}
	}
}
