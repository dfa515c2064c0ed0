/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::handle_command;
use crate::config::{CONFIG, Config, LogLevel};

mod commands;
mod config;
mod error;
mod json;
mod logging;

#[derive(Parser)]
#[command(name = "bridge", version, about = "Sends JSON documents across the script/managed object bridge")]
pub struct Cli {
	#[command(subcommand)]
	command: Command,

	#[arg(help = "Sets logging level", long, global = true, value_enum, default_value = "warn")]
	log_level: LogLevel,

	#[arg(help = "Maximum container nesting", long, global = true)]
	max_depth: Option<usize>,

	#[arg(help = "Maximum number of live managed objects", long, global = true)]
	capacity: Option<usize>,

	#[arg(help = "Converts managed null to undefined", long, global = true)]
	undefined_for_null: bool,

	#[arg(help = "Disables coloured output", long, global = true)]
	no_color: bool,
}

#[derive(Subcommand)]
pub enum Command {
	#[command(about = "Converts a JSON file to managed objects and back")]
	Convert {
		#[arg(help = "Path to the JSON document")]
		path: PathBuf,
	},

	#[command(about = "Converts an inline JSON document to managed objects and back")]
	Eval {
		#[arg(help = "JSON source")]
		source: String,
	},
}

fn main() -> ExitCode {
	let args = Cli::parse();

	let config = Config::default()
		.log_level(args.log_level)
		.max_depth(args.max_depth)
		.capacity(args.capacity)
		.undefined_for_null(args.undefined_for_null)
		.colour(!args.no_color);
	if !config.colour {
		colored::control::set_override(false);
	}
	logging::init(&config);
	if CONFIG.set(config).is_err() {
		return ExitCode::FAILURE;
	}

	handle_command(args.command)
}
