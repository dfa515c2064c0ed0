/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fs::read_to_string;
use std::path::Path;

use bridge::format::{format_handle, format_value};
use bridge::managed::Vm;
use bridge::{Value, inbound_with, outbound_with};
use colored::Colorize;

use crate::config::Config;
use crate::error::Error;
use crate::json::{to_value, to_value_with_null};

/// Outcome of sending a document across the bridge and back.
pub struct Report {
	pub identical: bool,
	pub released: bool,
}

impl Report {
	pub fn is_success(&self) -> bool {
		self.identical && self.released
	}
}

pub fn convert_file(path: &Path, config: &Config) -> Result<Report, Error> {
	tracing::info!(path = %path.display(), "reading document");
	let source = read_to_string(path)?;
	convert_source(&source, config)
}

pub fn convert_source(source: &str, config: &Config) -> Result<Report, Error> {
	let json: serde_json::Value = serde_json::from_str(source)?;
	let value = to_value(&json);
	let expected = if config.undefined_for_null {
		to_value_with_null(&json, &Value::Undefined)
	} else {
		value.clone()
	};

	let vm = match config.capacity {
		Some(capacity) => Vm::with_capacity(capacity),
		None => Vm::new(),
	};
	let conversion = config.conversion();
	let format = config.format();

	let identical = {
		let frame = vm.frame();
		let handle = outbound_with(&frame, &value, &conversion)?;
		println!("{}", "Managed".bold());
		println!("{}", format_handle(&frame, format, handle));

		let result = inbound_with(&frame, handle, &conversion)?;
		println!("{}", "Dynamic".bold());
		println!("{}", format_value(format.quoted(true), &result));
		result == expected
	};
	let released = vm.live_objects() == 0 && vm.live_refs() == 0;

	let status = |ok: bool, yes: &str, no: &str| {
		if ok {
			yes.green().to_string()
		} else {
			no.red().to_string()
		}
	};
	println!("Round trip: {}", status(identical, "identical", "differs"));
	println!("Frame: {}", status(released, "released every object", "leaked objects"));

	Ok(Report { identical, released })
}
