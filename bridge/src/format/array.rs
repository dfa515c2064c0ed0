/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::Array;
use crate::format::{Config, format_value, write_container};

/// Formats an [Array] as a [String] using the given [Config].
/// Arrays nested 5 or more levels deep are shown as `[Array]`.
pub fn format_array(cfg: Config, array: &Array) -> ArrayDisplay<'_> {
	ArrayDisplay { array, cfg }
}

#[must_use]
pub struct ArrayDisplay<'a> {
	array: &'a Array,
	cfg: Config,
}

impl Display for ArrayDisplay<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let cfg = self.cfg;
		if cfg.depth >= 5 {
			return write!(f, "{}", cfg.paint("[Array]", |c| c.array));
		}

		let elements = self.array.to_vec();
		let inner = cfg.depth(cfg.depth + 1).quoted(true);
		let items = elements.iter().map(|value| format_value(inner, value).to_string());
		write_container(f, cfg, |c| c.array, ("[", "]"), items, elements.len())
	}
}
