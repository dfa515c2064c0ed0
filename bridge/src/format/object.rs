/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::Object;
use crate::format::{Config, format_value, write_container};

/// Formats an [Object] as a [String] using the given [Config].
/// Objects nested 4 or more levels deep are shown as `[Object]`.
pub fn format_object(cfg: Config, object: &Object) -> ObjectDisplay<'_> {
	ObjectDisplay { object, cfg }
}

#[must_use]
pub struct ObjectDisplay<'o> {
	object: &'o Object,
	cfg: Config,
}

impl Display for ObjectDisplay<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let cfg = self.cfg;
		if cfg.depth >= 4 {
			return write!(f, "{}", cfg.paint("[Object]", |c| c.object));
		}

		let entries = self.object.entries();
		let inner = cfg.depth(cfg.depth + 1).quoted(true);
		let items = entries
			.iter()
			.map(|(key, value)| format!("{}: {}", cfg.paint(key, |c| c.object), format_value(inner, value)));
		write_container(f, cfg, |c| c.object, ("{", "}"), items, entries.len())
	}
}
