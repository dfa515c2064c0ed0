/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{Array, Config, Error, Object, Result, Value};
use crate::conversions::traversal::Traversal;
use crate::managed::{Handle, LocalFrame};

/// Converts a dynamic [Value] to a managed [Handle] with the default [Config].
///
/// Every handle created along the way, including the returned one, is registered in `frame`.
/// Nothing is released on failure. Handles created before the error stay in `frame` until it is dropped.
pub fn outbound(frame: &LocalFrame, value: &Value) -> Result<Handle> {
	outbound_with(frame, value, &Config::default())
}

/// Converts a dynamic [Value] to a managed [Handle].
pub fn outbound_with(frame: &LocalFrame, value: &Value, config: &Config) -> Result<Handle> {
	let before = frame.len();
	tracing::debug!(kind = %value.type_of(), "outbound conversion started");

	let mut traversal = Traversal::new(config);
	let result = convert(frame, value, &mut traversal);
	match &result {
		Ok(_) => tracing::debug!(handles = frame.len() - before, "outbound conversion finished"),
		Err(error) => tracing::debug!(%error, "outbound conversion failed"),
	}
	result
}

/// Converts a dynamic [Object] directly to a managed `java.util.HashMap` with the default [Config].
pub fn outbound_object(frame: &LocalFrame, object: &Object) -> Result<Handle> {
	outbound_object_with(frame, object, &Config::default())
}

/// Converts a dynamic [Object] directly to a managed `java.util.HashMap`.
pub fn outbound_object_with(frame: &LocalFrame, object: &Object, config: &Config) -> Result<Handle> {
	let mut traversal = Traversal::new(config);
	convert_object(frame, object, &mut traversal)
}

fn convert(frame: &LocalFrame, value: &Value, traversal: &mut Traversal<usize>) -> Result<Handle> {
	match value {
		Value::Undefined | Value::Null => Ok(frame.null()),
		Value::Boolean(b) => frame.new_boolean(*b),
		Value::Number(number) => frame.new_double(*number),
		Value::String(str) => frame.new_string(str),
		Value::Object(object) => convert_object(frame, object, traversal),
		Value::Array(array) => convert_array(frame, array, traversal),
		Value::Function(function) => Err(Error::unsupported(&format!(
			"Cannot convert function {} to a managed value",
			function.name()
		))),
		Value::Symbol(_) => Err(Error::unsupported("Cannot convert symbol to a managed value")),
	}
}

fn convert_object(frame: &LocalFrame, object: &Object, traversal: &mut Traversal<usize>) -> Result<Handle> {
	traversal.enter(object.id(), "Object")?;
	let map = frame.new_hash_map()?;
	for (key, value) in object.entries() {
		let handle = convert(frame, &value, traversal).map_err(|error| error.within_key(&key))?;
		frame.map_put(map, &key, handle).map_err(|error| error.within_key(&key))?;
	}
	traversal.exit(object.id());
	Ok(map)
}

fn convert_array(frame: &LocalFrame, array: &Array, traversal: &mut Traversal<usize>) -> Result<Handle> {
	traversal.enter(array.id(), "Array")?;
	let elements = array.to_vec();
	let list = frame.new_array_list(elements.len())?;
	for (index, element) in elements.iter().enumerate() {
		let handle = convert(frame, element, traversal).map_err(|error| error.within_index(index))?;
		frame.list_add(list, handle).map_err(|error| error.within_index(index))?;
	}
	traversal.exit(array.id());
	Ok(list)
}
