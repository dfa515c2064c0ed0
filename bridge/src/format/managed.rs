/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Display, Formatter};

use colored::Color;

use crate::Result;
use crate::format::{ColourConfig, Config, write_container};
use crate::format::primitive::format_number;
use crate::managed::{Handle, LocalFrame, Number};

/// Formats the managed object behind a [Handle] using the given [Config].
///
/// Boxes are shown as `Double(1.5)`, collections as `ArrayList [ ... ]` and `HashMap { ... }`,
/// and other objects as `Class@id`. Stale handles are shown as `<invalid handle>`.
pub fn format_handle<'f, 'vm>(frame: &'f LocalFrame<'vm>, cfg: Config, handle: Handle) -> HandleDisplay<'f, 'vm> {
	HandleDisplay { frame, handle, cfg }
}

#[must_use]
pub struct HandleDisplay<'f, 'vm> {
	frame: &'f LocalFrame<'vm>,
	handle: Handle,
	cfg: Config,
}

impl Display for HandleDisplay<'_, '_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let cfg = self.cfg;
		match render(self.frame, cfg, self.handle) {
			Ok(string) => f.write_str(&string),
			Err(_) => write!(f, "{}", cfg.paint("<invalid handle>", |c| c.null)),
		}
	}
}

fn short_name(name: &str) -> &str {
	name.rsplit('.').next().unwrap_or(name)
}

fn render(frame: &LocalFrame, cfg: Config, handle: Handle) -> Result<String> {
	let Some(class) = frame.class_of(handle)? else {
		return Ok(cfg.paint("null", |c| c.null).to_string());
	};
	let vm = frame.vm();
	let builtins = vm.builtins();
	let class_name = vm.class_name(class)?;
	let name = short_name(&class_name);

	if frame.is_instance_of(handle, builtins.boolean)? {
		let b = frame.boolean_value(handle)?;
		let value = cfg.paint(if b { "true" } else { "false" }, |c| c.boolean);
		Ok(format!("{}({value})", cfg.paint(name, |c| c.class)))
	} else if frame.is_boxed_number(handle)? {
		let number = frame.number_value(handle)?;
		let number = match number {
			Number::Double(_) | Number::Float(_) => format_number(number.as_f64()),
			_ => number.as_i64().map(|integer| integer.to_string()).unwrap_or_default(),
		};
		Ok(format!("{}({})", cfg.paint(name, |c| c.class), cfg.paint(&number, |c| c.number)))
	} else if frame.is_instance_of(handle, builtins.string)? {
		let str = frame.string_value(handle)?;
		let value = cfg.paint(&format!(r#""{str}""#), |c| c.string);
		Ok(format!("{}({value})", cfg.paint(name, |c| c.class)))
	} else if frame.is_instance_of(handle, builtins.list)? {
		if cfg.depth >= 5 {
			return Ok(cfg.paint(&format!("[{name}]"), |c| c.array).to_string());
		}
		frame.scope(|scope| {
			let items = scope
				.list_items(handle)?
				.into_iter()
				.map(|item| render(scope, cfg.depth(cfg.depth + 1), item))
				.collect::<Result<Vec<_>>>()?;
			let open = format!("{name} [");
			Ok(container(cfg, |c| c.array, (&open, "]"), items))
		})
	} else if frame.is_instance_of(handle, builtins.map)? {
		if cfg.depth >= 4 {
			return Ok(cfg.paint(&format!("[{name}]"), |c| c.object).to_string());
		}
		frame.scope(|scope| {
			let items = scope
				.map_entries(handle)?
				.into_iter()
				.map(|(key, value)| {
					let value = render(scope, cfg.depth(cfg.depth + 1), value)?;
					Ok(format!("{}: {value}", cfg.paint(&key, |c| c.object)))
				})
				.collect::<Result<Vec<_>>>()?;
			let open = format!("{name} {{");
			Ok(container(cfg, |c| c.object, (&open, "}"), items))
		})
	} else {
		let id = frame.identity(handle)?.map(|id| id.0.index).unwrap_or_default();
		Ok(cfg.paint(&format!("{class_name}@{id:x}"), |c| c.class).to_string())
	}
}

struct Container<'c> {
	cfg: Config,
	colour: fn(&ColourConfig) -> Color,
	delimiters: (&'c str, &'c str),
	items: Vec<String>,
}

impl Display for Container<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write_container(f, self.cfg, self.colour, self.delimiters, self.items.iter().cloned(), self.items.len())
	}
}

fn container(
	cfg: Config, colour: fn(&ColourConfig) -> Color, delimiters: (&str, &str), items: Vec<String>,
) -> String {
	Container { cfg, colour, delimiters, items }.to_string()
}
