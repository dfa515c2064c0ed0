/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Display, Formatter};

use colored::Color;

pub use array::format_array;
pub use config::{ColourConfig, Config};
pub use managed::format_handle;
pub use object::format_object;
pub use primitive::format_primitive;

use crate::Value;

pub mod array;
mod config;
pub mod managed;
pub mod object;
pub mod primitive;

pub const INDENT: &str = "  ";
pub const NEWLINE: &str = "\n";

/// Containers longer than this are cut off with a `... N more items` marker.
pub const MAX_ITEMS: usize = 100;

/// Formats a [Value] using the given [Config].
pub fn format_value(cfg: Config, value: &Value) -> ValueDisplay<'_> {
	ValueDisplay { value, cfg }
}

#[must_use]
pub struct ValueDisplay<'v> {
	value: &'v Value,
	cfg: Config,
}

impl Display for ValueDisplay<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.value {
			Value::Array(array) => format_array(self.cfg, array).fmt(f),
			Value::Object(object) => format_object(self.cfg, object).fmt(f),
			value => format_primitive(self.cfg, value).fmt(f),
		}
	}
}

fn more_items(remaining: usize) -> String {
	if remaining == 1 {
		String::from("... 1 more item")
	} else {
		format!("... {remaining} more items")
	}
}

/// Writes pre-rendered items between `open` and `close`, one per line if the [Config] is multiline.
pub(crate) fn write_container<I>(
	f: &mut Formatter<'_>, cfg: Config, colour: fn(&ColourConfig) -> Color, (open, close): (&str, &str), items: I,
	len: usize,
) -> fmt::Result
where
	I: IntoIterator<Item = String>,
{
	if len == 0 {
		return write!(f, "{}", cfg.paint(&format!("{open}{close}"), colour));
	}

	let shown = len.min(MAX_ITEMS);
	let remaining = len - shown;

	if cfg.multiline {
		let inner_indent = INDENT.repeat(usize::from(cfg.indentation + cfg.depth + 1));
		let outer_indent = INDENT.repeat(usize::from(cfg.indentation + cfg.depth));

		write!(f, "{}{NEWLINE}", cfg.paint(open, colour))?;
		for (index, item) in items.into_iter().take(shown).enumerate() {
			f.write_str(&inner_indent)?;
			f.write_str(&item)?;
			if index + 1 < shown || remaining > 0 {
				write!(f, "{}", cfg.paint(",", colour))?;
			}
			f.write_str(NEWLINE)?;
		}
		if remaining > 0 {
			write!(f, "{inner_indent}{}{NEWLINE}", cfg.paint(&more_items(remaining), colour))?;
		}
		write!(f, "{outer_indent}{}", cfg.paint(close, colour))
	} else {
		write!(f, "{} ", cfg.paint(open, colour))?;
		for (index, item) in items.into_iter().take(shown).enumerate() {
			if index > 0 {
				write!(f, "{}", cfg.paint(", ", colour))?;
			}
			f.write_str(&item)?;
		}
		if remaining > 0 {
			write!(f, "{}", cfg.paint(&format!(", {}", more_items(remaining)), colour))?;
		}
		write!(f, " {}", cfg.paint(close, colour))
	}
}
