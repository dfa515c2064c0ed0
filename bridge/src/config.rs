/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// Options shared by the outbound and inbound converters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
	/// Maximum container nesting. [None] leaves recursion bounded only by the call stack.
	pub max_depth: Option<usize>,
	/// Rejects containers that contain themselves instead of recursing forever.
	pub detect_cycles: bool,
	/// Converts the managed null sentinel to `undefined` instead of `null`.
	pub undefined_for_null: bool,
}

impl Config {
	pub fn max_depth(self, max_depth: Option<usize>) -> Config {
		Config { max_depth, ..self }
	}

	pub fn detect_cycles(self, detect_cycles: bool) -> Config {
		Config { detect_cycles, ..self }
	}

	pub fn undefined_for_null(self, undefined_for_null: bool) -> Config {
		Config { undefined_for_null, ..self }
	}
}

impl Default for Config {
	fn default() -> Config {
		Config {
			max_depth: None,
			detect_cycles: true,
			undefined_for_null: false,
		}
	}
}
