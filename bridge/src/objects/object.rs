/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::cell::RefCell;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::{Result, Value};
use crate::format::{Config, format_object};

/// Represents a plain [Object] in the script engine.
///
/// Properties are keyed by string and keep their insertion order.
/// Clones share the same properties, mirroring object references in the engine.
#[derive(Clone, Default)]
pub struct Object {
	properties: Rc<RefCell<IndexMap<String, Value>>>,
}

impl Object {
	/// Creates a plain empty [Object].
	pub fn new() -> Object {
		Object::default()
	}

	/// Creates an empty [Object] with room for `capacity` properties.
	///
	/// Returns [Err] with an allocation failure if the space cannot be reserved.
	pub fn try_with_capacity(capacity: usize) -> Result<Object> {
		let mut properties = IndexMap::new();
		properties.try_reserve(capacity)?;
		Ok(Object {
			properties: Rc::new(RefCell::new(properties)),
		})
	}

	/// Checks if the [Object] has a value at the given key.
	pub fn has(&self, key: &str) -> bool {
		self.properties.borrow().contains_key(key)
	}

	/// Gets the [Value] at the given key of the [Object].
	///
	/// Returns [None] if there is no value at the given key.
	pub fn get(&self, key: &str) -> Option<Value> {
		self.properties.borrow().get(key).cloned()
	}

	/// Sets the [Value] at the given key of the [Object], returning the previous value.
	pub fn set<K: Into<String>>(&self, key: K, value: Value) -> Option<Value> {
		self.properties.borrow_mut().insert(key.into(), value)
	}

	/// Deletes the [Value] at the given key.
	///
	/// Returns `false` if the key was not present.
	pub fn delete(&self, key: &str) -> bool {
		self.properties.borrow_mut().shift_remove(key).is_some()
	}

	/// Returns the keys of the [Object], in insertion order.
	pub fn keys(&self) -> Vec<String> {
		self.properties.borrow().keys().cloned().collect()
	}

	/// Returns a snapshot of the key-value pairs of the [Object].
	///
	/// The snapshot holds no borrow of the object, so the object can be modified while iterating over it.
	pub fn entries(&self) -> Vec<(String, Value)> {
		self.properties.borrow().iter().map(|(key, value)| (key.clone(), value.clone())).collect()
	}

	pub fn len(&self) -> usize {
		self.properties.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.properties.borrow().is_empty()
	}

	/// Checks if both references point to the same [Object].
	pub fn ptr_eq(&self, other: &Object) -> bool {
		Rc::ptr_eq(&self.properties, &other.properties)
	}

	/// Identity of the underlying object, stable while any reference to it is alive.
	pub(crate) fn id(&self) -> usize {
		Rc::as_ptr(&self.properties).cast::<()>() as usize
	}
}

impl PartialEq for Object {
	fn eq(&self, other: &Object) -> bool {
		if self.ptr_eq(other) {
			return true;
		}
		let (properties, other) = (self.properties.borrow(), other.properties.borrow());
		properties.len() == other.len()
			&& properties.iter().all(|(key, value)| other.get(key).is_some_and(|other| value == other))
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", format_object(Config::plain().multiline(false), self))
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Object {
		let properties = iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
		Object {
			properties: Rc::new(RefCell::new(properties)),
		}
	}
}
