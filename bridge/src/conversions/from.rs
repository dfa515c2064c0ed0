/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{Array, Error, ErrorKind, Object, Result, Value};
use crate::conversions::inbound::unbox_primitive;
use crate::conversions::inbound_with;
use crate::managed::{Handle, LocalFrame, Number};

/// Represents types that can be converted to from managed objects.
pub trait FromManaged: Sized {
	type Config;

	/// Converts the object behind `handle` to the desired type.
	/// `strict` and `config` determine the strictness of the conversion and specify additional conversion constraints respectively.
	/// Returns [Err] with the [error](Error) if conversion fails.
	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, config: Self::Config) -> Result<Self>;
}

/// Determines how out-of-range numbers are converted to integers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConversionBehavior {
	/// Truncates and wraps around modulo the width of the integer. Non-finite numbers become 0.
	#[default]
	Default,
	/// Truncates and fails if the number is not finite or out of range.
	EnforceRange,
	/// Rounds to the nearest integer, ties to even, and saturates at the bounds.
	Clamp,
}

/// Converts null, boxed primitives and strings to their dynamic equivalent without touching containers.
fn primitive(frame: &LocalFrame, handle: Handle) -> Result<Option<Value>> {
	if handle.is_null() {
		Ok(Some(Value::Null))
	} else {
		unbox_primitive(frame, handle)
	}
}

fn coerce(frame: &LocalFrame, handle: Handle) -> Result<Value> {
	match primitive(frame, handle)? {
		Some(value) => Ok(value),
		None => inbound_with(frame, handle, &crate::Config::default()),
	}
}

impl FromManaged for bool {
	type Config = ();

	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, _: ()) -> Result<bool> {
		if frame.is_instance_of(handle, frame.vm().builtins().boolean)? {
			return frame.boolean_value(handle);
		}

		if strict {
			Err(Error::new("Expected Boolean in Strict Conversion", ErrorKind::Type))
		} else {
			Ok(primitive(frame, handle)?.is_none_or(|value| value.coerce_to_boolean()))
		}
	}
}

fn number(frame: &LocalFrame, handle: Handle, strict: bool) -> Result<Number> {
	if frame.is_boxed_number(handle)? {
		return frame.number_value(handle);
	}

	if strict {
		Err(Error::new("Expected Number in Strict Conversion", ErrorKind::Type))
	} else {
		Ok(Number::Double(coerce(frame, handle)?.coerce_to_number()))
	}
}

macro_rules! impl_from_managed_for_integer {
	($ty:ty) => {
		impl FromManaged for $ty {
			type Config = ConversionBehavior;

			fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, behavior: ConversionBehavior) -> Result<$ty> {
				let number = number(frame, handle, strict)?;
				let out_of_range = || {
					Error::new(
						&format!("{} is out of range for {}", crate::value::number_to_string(number.as_f64()), stringify!($ty)),
						ErrorKind::Type,
					)
				};

				if let Some(integer) = number.as_i64() {
					return match <$ty>::try_from(integer) {
						Ok(integer) => Ok(integer),
						Err(_) => match behavior {
							ConversionBehavior::Default => Ok(integer as $ty),
							ConversionBehavior::EnforceRange => Err(out_of_range()),
							ConversionBehavior::Clamp => Ok(if integer < 0 { <$ty>::MIN } else { <$ty>::MAX }),
						},
					};
				}

				let float = number.as_f64();
				let min = i128::from(<$ty>::MIN) as f64;
				let max = i128::from(<$ty>::MAX) as f64;
				// 2^bits or 2^(bits - 1), exact where MAX itself is not
				let limit = (i128::from(<$ty>::MAX) + 1) as f64;
				match behavior {
					ConversionBehavior::Default if float.is_finite() => Ok(float.trunc() as i128 as $ty),
					ConversionBehavior::Default => Ok(0),
					ConversionBehavior::EnforceRange => {
						let float = float.trunc();
						if float.is_finite() && float >= min && float < limit {
							Ok(float as $ty)
						} else {
							Err(out_of_range())
						}
					}
					ConversionBehavior::Clamp if float.is_nan() => Ok(0),
					ConversionBehavior::Clamp => Ok(float.round_ties_even().clamp(min, max) as $ty),
				}
			}
		}
	};
}

impl_from_managed_for_integer!(u8);
impl_from_managed_for_integer!(u16);
impl_from_managed_for_integer!(u32);
impl_from_managed_for_integer!(u64);

impl_from_managed_for_integer!(i8);
impl_from_managed_for_integer!(i16);
impl_from_managed_for_integer!(i32);
impl_from_managed_for_integer!(i64);

impl FromManaged for f32 {
	type Config = ();

	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, _: ()) -> Result<f32> {
		f64::from_managed(frame, handle, strict, ()).map(|float| float as f32)
	}
}

impl FromManaged for f64 {
	type Config = ();

	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, _: ()) -> Result<f64> {
		number(frame, handle, strict).map(|number| number.as_f64())
	}
}

impl FromManaged for String {
	type Config = ();

	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, _: ()) -> Result<String> {
		if frame.is_instance_of(handle, frame.vm().builtins().string)? {
			return frame.string_value(handle);
		}

		if strict {
			Err(Error::new("Expected String in Strict Conversion", ErrorKind::Type))
		} else {
			Ok(coerce(frame, handle)?.coerce_to_string())
		}
	}
}

impl FromManaged for Value {
	type Config = crate::Config;

	fn from_managed(frame: &LocalFrame, handle: Handle, _: bool, config: crate::Config) -> Result<Value> {
		inbound_with(frame, handle, &config)
	}
}

impl FromManaged for Object {
	type Config = crate::Config;

	fn from_managed(frame: &LocalFrame, handle: Handle, _: bool, config: crate::Config) -> Result<Object> {
		if !frame.is_instance_of(handle, frame.vm().builtins().map)? {
			return Err(Error::new("Expected Map", ErrorKind::Type));
		}
		match inbound_with(frame, handle, &config)? {
			Value::Object(object) => Ok(object),
			_ => Err(Error::new("Expected Map", ErrorKind::Type)),
		}
	}
}

impl FromManaged for Array {
	type Config = crate::Config;

	fn from_managed(frame: &LocalFrame, handle: Handle, _: bool, config: crate::Config) -> Result<Array> {
		if !frame.is_instance_of(handle, frame.vm().builtins().list)? {
			return Err(Error::new("Expected List", ErrorKind::Type));
		}
		match inbound_with(frame, handle, &config)? {
			Value::Array(array) => Ok(array),
			_ => Err(Error::new("Expected List", ErrorKind::Type)),
		}
	}
}

impl<T: FromManaged> FromManaged for Option<T> {
	type Config = T::Config;

	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, config: T::Config) -> Result<Option<T>> {
		if handle.is_null() {
			Ok(None)
		} else {
			Ok(Some(T::from_managed(frame, handle, strict, config)?))
		}
	}
}

impl<T: FromManaged> FromManaged for Vec<T>
where
	T::Config: Clone,
{
	type Config = T::Config;

	fn from_managed(frame: &LocalFrame, handle: Handle, strict: bool, config: T::Config) -> Result<Vec<T>> {
		if !frame.is_instance_of(handle, frame.vm().builtins().list)? {
			return Err(Error::new("Expected List", ErrorKind::Type));
		}

		frame.scope(|scope| {
			let items = scope.list_items(handle)?;
			let mut vec = Vec::new();
			vec.try_reserve_exact(items.len())?;
			for (index, item) in items.into_iter().enumerate() {
				let t = T::from_managed(scope, item, strict, config.clone()).map_err(|error| error.within_index(index))?;
				vec.push(t);
			}
			Ok(vec)
		})
	}
}
