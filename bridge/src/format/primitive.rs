/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Display, Formatter};

use itoa::Buffer;

use crate::Value;
use crate::format::Config;
use crate::value::number_to_string;

/// Largest magnitude below which every integral [f64] is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Formats a primitive value as a string using the given [configuration](Config).
/// The supported types are `boolean`, `number`, `string`, `null`, `undefined`, functions and symbols.
pub fn format_primitive(cfg: Config, value: &Value) -> PrimitiveDisplay<'_> {
	PrimitiveDisplay { value, cfg }
}

#[must_use]
pub struct PrimitiveDisplay<'v> {
	value: &'v Value,
	cfg: Config,
}

impl Display for PrimitiveDisplay<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let cfg = self.cfg;
		match self.value {
			Value::Undefined => write!(f, "{}", cfg.paint("undefined", |c| c.undefined)),
			Value::Null => write!(f, "{}", cfg.paint("null", |c| c.null)),
			Value::Boolean(b) => write!(f, "{}", cfg.paint(if *b { "true" } else { "false" }, |c| c.boolean)),
			Value::Number(number) => write!(f, "{}", cfg.paint(&format_number(*number), |c| c.number)),
			Value::String(str) => {
				if cfg.quoted {
					write!(f, "{}", cfg.paint(&format!(r#""{str}""#), |c| c.string))
				} else {
					f.write_str(str)
				}
			}
			Value::Function(function) => {
				write!(f, "{}", cfg.paint(&format!("[Function: {}]", function.name()), |c| c.function))
			}
			Value::Symbol(symbol) => {
				let description = symbol.description().unwrap_or_default();
				write!(f, "{}", cfg.paint(&format!("Symbol({description})"), |c| c.symbol))
			}
			Value::Array(_) | Value::Object(_) => f.write_str("[object]"),
		}
	}
}

pub(crate) fn format_number(number: f64) -> String {
	if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
		let mut buffer = Buffer::new();
		String::from(buffer.format(number as i64))
	} else {
		number_to_string(number)
	}
}
