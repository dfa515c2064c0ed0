/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::{Array, Function, Object, Symbol};

/// Represents a value in the script engine's value graph.
///
/// Primitives are stored inline. Containers, functions and symbols are shared references, so cloning a [Value] never
/// copies the graph behind it.
#[derive(Clone, Debug)]
pub enum Value {
	Undefined,
	Null,
	Boolean(bool),
	Number(f64),
	String(String),
	Array(Array),
	Object(Object),
	Function(Function),
	Symbol(Symbol),
}

/// The tag of a [Value], as reported by [Value::type_of].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Type {
	Undefined,
	Null,
	Boolean,
	Number,
	String,
	Array,
	Object,
	Function,
	Symbol,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let str = match self {
			Type::Undefined => "undefined",
			Type::Null => "null",
			Type::Boolean => "boolean",
			Type::Number => "number",
			Type::String => "string",
			Type::Array => "array",
			Type::Object => "object",
			Type::Function => "function",
			Type::Symbol => "symbol",
		};
		f.write_str(str)
	}
}

impl Value {
	/// Creates a [Value] from a boolean.
	pub fn bool(b: bool) -> Value {
		Value::Boolean(b)
	}

	/// Creates a [Value] from a 32-bit signed integer.
	pub fn i32(i: i32) -> Value {
		Value::Number(f64::from(i))
	}

	/// Creates a [Value] from a 64-bit float.
	pub fn f64(f: f64) -> Value {
		Value::Number(f)
	}

	/// Creates a [Value] from a string.
	pub fn string(str: &str) -> Value {
		Value::String(String::from(str))
	}

	/// Creates a [Value] referencing an [Object].
	pub fn object(object: &Object) -> Value {
		Value::Object(object.clone())
	}

	/// Creates a [Value] referencing an [Array].
	pub fn array(array: &Array) -> Value {
		Value::Array(array.clone())
	}

	/// Creates an `undefined` [Value].
	pub fn undefined() -> Value {
		Value::Undefined
	}

	/// Creates a `null` [Value].
	pub fn null() -> Value {
		Value::Null
	}

	pub fn type_of(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Null => Type::Null,
			Value::Boolean(_) => Type::Boolean,
			Value::Number(_) => Type::Number,
			Value::String(_) => Type::String,
			Value::Array(_) => Type::Array,
			Value::Object(_) => Type::Object,
			Value::Function(_) => Type::Function,
			Value::Symbol(_) => Type::Symbol,
		}
	}

	pub fn is_null_or_undefined(&self) -> bool {
		matches!(self, Value::Null | Value::Undefined)
	}

	/// Checks if the value is a leaf with no recursive structure.
	pub fn is_primitive(&self) -> bool {
		matches!(
			self,
			Value::Undefined | Value::Null | Value::Boolean(_) | Value::Number(_) | Value::String(_) | Value::Symbol(_)
		)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(number) => Some(*number),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(str) => Some(str),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&Array> {
		match self {
			Value::Array(array) => Some(array),
			_ => None,
		}
	}

	/// Converts the value to a boolean with the script engine's truthiness rules.
	pub fn coerce_to_boolean(&self) -> bool {
		match self {
			Value::Undefined | Value::Null => false,
			Value::Boolean(b) => *b,
			Value::Number(number) => *number != 0.0 && !number.is_nan(),
			Value::String(str) => !str.is_empty(),
			Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::Symbol(_) => true,
		}
	}

	/// Converts the value to a number with the script engine's numeric coercion rules.
	///
	/// Containers and functions convert to `NaN`, except the empty array which converts to `0`.
	pub fn coerce_to_number(&self) -> f64 {
		match self {
			Value::Undefined => f64::NAN,
			Value::Null => 0.0,
			Value::Boolean(b) => f64::from(u8::from(*b)),
			Value::Number(number) => *number,
			Value::String(str) => string_to_number(str),
			Value::Array(array) if array.is_empty() => 0.0,
			Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::Symbol(_) => f64::NAN,
		}
	}

	/// Converts the value to a string with the script engine's string coercion rules.
	pub fn coerce_to_string(&self) -> String {
		match self {
			Value::Undefined => String::from("undefined"),
			Value::Null => String::from("null"),
			Value::Boolean(b) => b.to_string(),
			Value::Number(number) => number_to_string(*number),
			Value::String(str) => str.clone(),
			Value::Array(array) => array
				.to_vec()
				.iter()
				.map(|value| {
					if value.is_null_or_undefined() {
						String::new()
					} else {
						value.coerce_to_string()
					}
				})
				.collect::<Vec<_>>()
				.join(","),
			Value::Object(_) => String::from("[object Object]"),
			Value::Function(function) => format!("function {}() {{ [native code] }}", function.name()),
			Value::Symbol(symbol) => format!("Symbol({})", symbol.description().unwrap_or_default()),
		}
	}
}

pub(crate) fn number_to_string(number: f64) -> String {
	if number.is_nan() {
		String::from("NaN")
	} else if number == f64::INFINITY {
		String::from("Infinity")
	} else if number == f64::NEG_INFINITY {
		String::from("-Infinity")
	} else if number == 0.0 {
		String::from("0")
	} else if number < 0.0 {
		format!("-{}", number_to_string(-number))
	} else {
		// Shortest round-trip digits, as `d.ddde±x`.
		let scientific = format!("{number:e}");
		let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
		let digits = mantissa.replace('.', "");
		let exponent: i32 = exponent.parse().unwrap_or_default();
		format_decimal(&digits, exponent + 1)
	}
}

/// Lays out significant `digits` with the decimal point after `point` digits.
fn format_decimal(digits: &str, point: i32) -> String {
	let length = digits.len() as i32;
	if length <= point && point <= 21 {
		format!("{digits}{}", "0".repeat((point - length) as usize))
	} else if 0 < point && point <= 21 {
		let (integral, fraction) = digits.split_at(point as usize);
		format!("{integral}.{fraction}")
	} else if -6 < point && point <= 0 {
		format!("0.{}{digits}", "0".repeat(-point as usize))
	} else {
		let sign = if point > 0 { '+' } else { '-' };
		let exponent = (point - 1).abs();
		match digits.split_at(1) {
			(first, "") => format!("{first}e{sign}{exponent}"),
			(first, rest) => format!("{first}.{rest}e{sign}{exponent}"),
		}
	}
}

fn is_script_whitespace(c: char) -> bool {
	c.is_whitespace() || c == '\u{FEFF}'
}

/// Parses a string with the script engine's numeric literal grammar.
///
/// Accepts `Infinity` with an optional sign, unsigned `0x`, `0o` and `0b` integers, and decimal literals.
/// Anything else is `NaN`.
pub(crate) fn string_to_number(str: &str) -> f64 {
	let str = str.trim_matches(is_script_whitespace);
	if str.is_empty() {
		return 0.0;
	}

	let radix = match str.get(..2) {
		Some("0x" | "0X") => Some(16),
		Some("0o" | "0O") => Some(8),
		Some("0b" | "0B") => Some(2),
		_ => None,
	};
	if let Some(radix) = radix {
		return parse_radix(&str[2..], radix);
	}

	let (sign, unsigned) = match str.as_bytes()[0] {
		b'-' => (-1.0, &str[1..]),
		b'+' => (1.0, &str[1..]),
		_ => (1.0, str),
	};
	if unsigned == "Infinity" {
		sign * f64::INFINITY
	} else if is_decimal_literal(unsigned) {
		unsigned.parse::<f64>().map_or(f64::NAN, |number| sign * number)
	} else {
		f64::NAN
	}
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
	if digits.is_empty() {
		return f64::NAN;
	}
	if let Ok(integer) = u64::from_str_radix(digits, radix) {
		return integer as f64;
	}
	digits
		.chars()
		.try_fold(0.0, |number: f64, c| {
			c.to_digit(radix).map(|digit| number * f64::from(radix) + f64::from(digit))
		})
		.unwrap_or(f64::NAN)
}

/// Matches `digits [. digits] [e [sign] digits]` with at least one mantissa digit.
fn is_decimal_literal(str: &str) -> bool {
	let (mantissa, exponent) = match str.find(['e', 'E']) {
		Some(index) => (&str[..index], Some(&str[index + 1..])),
		None => (str, None),
	};

	let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
	let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
	if integral.len() + fraction.len() == 0 || !all_digits(integral) || !all_digits(fraction) {
		return false;
	}

	match exponent {
		None => true,
		Some(exponent) => {
			let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
			!exponent.is_empty() && all_digits(exponent)
		}
	}
}

/// Structural equality.
///
/// Containers compare by contents, functions and symbols by identity. Comparing a cyclic graph does not terminate.
impl PartialEq for Value {
	fn eq(&self, other: &Value) -> bool {
		match (self, other) {
			(Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
			(Value::Boolean(a), Value::Boolean(b)) => a == b,
			(Value::Number(a), Value::Number(b)) => a == b,
			(Value::String(a), Value::String(b)) => a == b,
			(Value::Array(a), Value::Array(b)) => a == b,
			(Value::Object(a), Value::Object(b)) => a == b,
			(Value::Function(a), Value::Function(b)) => a == b,
			(Value::Symbol(a), Value::Symbol(b)) => a == b,
			_ => false,
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Value {
		Value::Boolean(b)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Value {
		Value::i32(i)
	}
}

impl From<f64> for Value {
	fn from(f: f64) -> Value {
		Value::Number(f)
	}
}

impl From<&str> for Value {
	fn from(str: &str) -> Value {
		Value::string(str)
	}
}

impl From<String> for Value {
	fn from(string: String) -> Value {
		Value::String(string)
	}
}

impl From<Object> for Value {
	fn from(object: Object) -> Value {
		Value::Object(object)
	}
}

impl From<Array> for Value {
	fn from(array: Array) -> Value {
		Value::Array(array)
	}
}

impl From<Function> for Value {
	fn from(function: Function) -> Value {
		Value::Function(function)
	}
}

impl From<Symbol> for Value {
	fn from(symbol: Symbol) -> Value {
		Value::Symbol(symbol)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(option: Option<T>) -> Value {
		option.map_or(Value::Null, Into::into)
	}
}
