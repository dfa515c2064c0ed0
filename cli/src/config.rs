/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use clap::ValueEnum;
use once_cell::sync::OnceCell;

pub static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum LogLevel {
	None = 0,
	Info = 1,
	Warn = 2,
	Error = 3,
	Debug = 4,
}

impl LogLevel {
	/// Returns the directive used when `RUST_LOG` is not set.
	pub fn directive(&self) -> &'static str {
		match self {
			LogLevel::None => "off",
			LogLevel::Info => "info",
			LogLevel::Warn => "warn",
			LogLevel::Error => "error",
			LogLevel::Debug => "debug",
		}
	}
}

#[derive(Copy, Clone, Debug)]
pub struct Config {
	pub log_level: LogLevel,
	pub max_depth: Option<usize>,
	pub capacity: Option<usize>,
	pub undefined_for_null: bool,
	pub colour: bool,
}

impl Config {
	pub fn log_level(self, log_level: LogLevel) -> Config {
		Config { log_level, ..self }
	}

	pub fn max_depth(self, max_depth: Option<usize>) -> Config {
		Config { max_depth, ..self }
	}

	pub fn capacity(self, capacity: Option<usize>) -> Config {
		Config { capacity, ..self }
	}

	pub fn undefined_for_null(self, undefined_for_null: bool) -> Config {
		Config { undefined_for_null, ..self }
	}

	pub fn colour(self, colour: bool) -> Config {
		Config { colour, ..self }
	}

	pub fn global() -> &'static Config {
		CONFIG.get().expect("Configuration not initialised")
	}

	pub fn conversion(&self) -> bridge::Config {
		bridge::Config::default()
			.max_depth(self.max_depth)
			.undefined_for_null(self.undefined_for_null)
	}

	pub fn format(&self) -> bridge::format::Config {
		if self.colour {
			bridge::format::Config::default()
		} else {
			bridge::format::Config::plain()
		}
	}
}

impl Default for Config {
	fn default() -> Config {
		Config {
			log_level: LogLevel::Warn,
			max_depth: None,
			capacity: None,
			undefined_for_null: false,
			colour: true,
		}
	}
}
