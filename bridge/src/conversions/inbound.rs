/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::{Array, Config, Error, ErrorKind, Object, Result, Value};
use crate::conversions::traversal::Traversal;
use crate::managed::{Builtins, ClassId, Handle, LocalFrame, ObjectId};

/// Managed shapes with a dynamic equivalent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Variant {
	Boolean,
	Double,
	Float,
	Long,
	Integer,
	Short,
	Byte,
	String,
	List,
	Map,
}

/// Checked in order, so more specific classes must come first.
const KNOWN_VARIANTS: [Variant; 10] = [
	Variant::Boolean,
	Variant::Double,
	Variant::Float,
	Variant::Long,
	Variant::Integer,
	Variant::Short,
	Variant::Byte,
	Variant::String,
	Variant::List,
	Variant::Map,
];

impl Variant {
	fn class(self, builtins: &Builtins) -> ClassId {
		match self {
			Variant::Boolean => builtins.boolean,
			Variant::Double => builtins.double,
			Variant::Float => builtins.float,
			Variant::Long => builtins.long,
			Variant::Integer => builtins.integer,
			Variant::Short => builtins.short,
			Variant::Byte => builtins.byte,
			Variant::String => builtins.string,
			Variant::List => builtins.list,
			Variant::Map => builtins.map,
		}
	}

	fn classify(frame: &LocalFrame, handle: Handle) -> Result<Option<Variant>> {
		let builtins = frame.vm().builtins();
		for variant in KNOWN_VARIANTS {
			if frame.is_instance_of(handle, variant.class(builtins))? {
				return Ok(Some(variant));
			}
		}
		Ok(None)
	}

	/// Reads the value of a boxed boolean, number or string.
	fn unbox(self, frame: &LocalFrame, handle: Handle) -> Result<Value> {
		match self {
			Variant::Boolean => Ok(Value::Boolean(frame.boolean_value(handle)?)),
			Variant::Double | Variant::Float | Variant::Long | Variant::Integer | Variant::Short | Variant::Byte => {
				Ok(Value::Number(frame.number_value(handle)?.as_f64()))
			}
			Variant::String => Ok(Value::String(frame.string_value(handle)?)),
			Variant::List | Variant::Map => Err(Error::new(
				"Expected a boxed primitive, found a collection",
				ErrorKind::Type,
			)),
		}
	}
}

/// Unboxes a boxed boolean, number or string. Returns [None] for collections and unknown classes.
pub(crate) fn unbox_primitive(frame: &LocalFrame, handle: Handle) -> Result<Option<Value>> {
	match Variant::classify(frame, handle)? {
		Some(Variant::List | Variant::Map) | None => Ok(None),
		Some(variant) => variant.unbox(frame, handle).map(Some),
	}
}

/// Converts a managed [Handle] to a dynamic [Value] with the default [Config].
///
/// The returned value is owned by the dynamic side and does not depend on `frame`.
pub fn inbound(frame: &LocalFrame, handle: Handle) -> Result<Value> {
	inbound_with(frame, handle, &Config::default())
}

/// Converts a managed [Handle] to a dynamic [Value].
pub fn inbound_with(frame: &LocalFrame, handle: Handle, config: &Config) -> Result<Value> {
	tracing::debug!(?handle, "inbound conversion started");

	let mut traversal = Traversal::new(config);
	let result = convert(frame, handle, &mut traversal);
	match &result {
		Ok(value) => tracing::debug!(kind = %value.type_of(), "inbound conversion finished"),
		Err(error) => tracing::debug!(%error, "inbound conversion failed"),
	}
	result
}

fn convert(frame: &LocalFrame, handle: Handle, traversal: &mut Traversal<ObjectId>) -> Result<Value> {
	if handle.is_null() {
		return if traversal.config().undefined_for_null {
			Ok(Value::Undefined)
		} else {
			Ok(Value::Null)
		};
	}

	match Variant::classify(frame, handle)? {
		Some(Variant::List) => convert_list(frame, handle, traversal),
		Some(Variant::Map) => convert_map(frame, handle, traversal),
		Some(variant) => variant.unbox(frame, handle),
		None => {
			let vm = frame.vm();
			let class = frame.class_of(handle)?.map(|class| vm.class_name(class)).transpose()?.unwrap_or_default();
			tracing::error!(class = %class, "unsupported managed class");
			Err(Error::unsupported(&format!("Cannot convert instance of {class} to a dynamic value")))
		}
	}
}

fn identity(frame: &LocalFrame, handle: Handle) -> Result<ObjectId> {
	frame.identity(handle)?.ok_or_else(Error::invalid_handle)
}

fn convert_list(frame: &LocalFrame, list: Handle, traversal: &mut Traversal<ObjectId>) -> Result<Value> {
	let id = identity(frame, list)?;
	traversal.enter(id, "List")?;
	let array = frame.scope(|scope| {
		let items = scope.list_items(list)?;
		let array = Array::try_with_capacity(items.len())?;
		for (index, item) in items.into_iter().enumerate() {
			let value = convert(scope, item, traversal).map_err(|error| error.within_index(index))?;
			array.push(value);
		}
		Ok(array)
	})?;
	traversal.exit(id);
	Ok(Value::Array(array))
}

fn convert_map(frame: &LocalFrame, map: Handle, traversal: &mut Traversal<ObjectId>) -> Result<Value> {
	let id = identity(frame, map)?;
	traversal.enter(id, "Map")?;
	let object = frame.scope(|scope| {
		let entries = scope.map_entries(map)?;
		let object = Object::try_with_capacity(entries.len())?;
		for (key, value) in entries {
			let value = convert(scope, value, traversal).map_err(|error| error.within_key(&key))?;
			object.set(key, value);
		}
		Ok(object)
	})?;
	traversal.exit(id);
	Ok(Value::Object(object))
}
