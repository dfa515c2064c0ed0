/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::{Array, Object, Result, Value};
use crate::conversions::{outbound, outbound_object};
use crate::managed::{Handle, LocalFrame, Number};

/// Represents types that can be converted to managed objects.
pub trait ToManaged {
	/// Converts `self` to a new managed object registered in `frame`.
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle>;
}

impl ToManaged for bool {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		frame.new_boolean(*self)
	}
}

macro_rules! impl_to_managed_for_number {
	($ty:ty, $variant:ident) => {
		impl ToManaged for $ty {
			fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
				frame.new_number(Number::$variant(*self))
			}
		}
	};
}

impl_to_managed_for_number!(i8, Byte);
impl_to_managed_for_number!(i16, Short);
impl_to_managed_for_number!(i32, Integer);
impl_to_managed_for_number!(i64, Long);
impl_to_managed_for_number!(f32, Float);
impl_to_managed_for_number!(f64, Double);

impl ToManaged for str {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		frame.new_string(self)
	}
}

impl ToManaged for String {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		(**self).to_managed(frame)
	}
}

impl ToManaged for Value {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		outbound(frame, self)
	}
}

impl ToManaged for Object {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		outbound_object(frame, self)
	}
}

impl ToManaged for Array {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		outbound(frame, &Value::Array(self.clone()))
	}
}

impl<T: ToManaged + ?Sized> ToManaged for &T {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		(*self).to_managed(frame)
	}
}

impl<T: ToManaged + ?Sized> ToManaged for Box<T> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		(**self).to_managed(frame)
	}
}

impl<T: ToManaged + ?Sized> ToManaged for Rc<T> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		(**self).to_managed(frame)
	}
}

impl<T: ToManaged> ToManaged for Option<T> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		match self {
			Some(t) => t.to_managed(frame),
			None => Ok(frame.null()),
		}
	}
}

impl<T: ToManaged> ToManaged for [T] {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		let list = frame.new_array_list(self.len())?;
		for (index, t) in self.iter().enumerate() {
			let item = t.to_managed(frame).map_err(|error| error.within_index(index))?;
			frame.list_add(list, item).map_err(|error| error.within_index(index))?;
		}
		Ok(list)
	}
}

impl<T: ToManaged> ToManaged for Vec<T> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		(**self).to_managed(frame)
	}
}

fn entries_to_managed<'e, T, I>(frame: &LocalFrame, entries: I) -> Result<Handle>
where
	T: ToManaged + 'e,
	I: IntoIterator<Item = (&'e String, &'e T)>,
{
	let map = frame.new_hash_map()?;
	for (key, value) in entries {
		let value = value.to_managed(frame).map_err(|error| error.within_key(key))?;
		frame.map_put(map, key, value).map_err(|error| error.within_key(key))?;
	}
	Ok(map)
}

impl<T: ToManaged, S: BuildHasher> ToManaged for IndexMap<String, T, S> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		entries_to_managed(frame, self)
	}
}

impl<T: ToManaged, S: BuildHasher> ToManaged for HashMap<String, T, S> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		entries_to_managed(frame, self)
	}
}

impl<T: ToManaged> ToManaged for BTreeMap<String, T> {
	fn to_managed(&self, frame: &LocalFrame) -> Result<Handle> {
		entries_to_managed(frame, self)
	}
}
