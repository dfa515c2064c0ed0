/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::cell::RefCell;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::{Result, Value};
use crate::format::{Config, format_array};

/// Represents an [Array] in the script engine.
///
/// Clones share the same elements, mirroring array references in the engine.
#[derive(Clone, Default)]
pub struct Array {
	elements: Rc<RefCell<Vec<Value>>>,
}

impl Array {
	/// Creates an empty [Array].
	pub fn new() -> Array {
		Array::default()
	}

	/// Creates an empty [Array] with room for `capacity` elements.
	///
	/// Returns [Err] with an allocation failure if the space cannot be reserved.
	pub fn try_with_capacity(capacity: usize) -> Result<Array> {
		let mut elements = Vec::new();
		elements.try_reserve_exact(capacity)?;
		Ok(Array::from_vec(elements))
	}

	/// Creates an [Array] from a [Vec].
	pub fn from_vec(vec: Vec<Value>) -> Array {
		Array {
			elements: Rc::new(RefCell::new(vec)),
		}
	}

	/// Creates an [Array] from a slice.
	pub fn from_slice(slice: &[Value]) -> Array {
		Array::from_vec(slice.to_vec())
	}

	/// Returns a snapshot of the elements of the [Array].
	pub fn to_vec(&self) -> Vec<Value> {
		self.elements.borrow().clone()
	}

	/// Returns the length of the [Array].
	pub fn len(&self) -> usize {
		self.elements.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.borrow().is_empty()
	}

	/// Gets the [Value] at the given index of the [Array].
	/// Returns [None] if the index is out of bounds.
	pub fn get(&self, index: usize) -> Option<Value> {
		self.elements.borrow().get(index).cloned()
	}

	/// Sets the [Value] at the given index of the [Array].
	/// Setting past the end extends the [Array] with `undefined` holes.
	pub fn set(&self, index: usize, value: Value) {
		let mut elements = self.elements.borrow_mut();
		if index >= elements.len() {
			elements.resize(index + 1, Value::Undefined);
		}
		elements[index] = value;
	}

	/// Appends a [Value] to the end of the [Array].
	pub fn push(&self, value: Value) {
		self.elements.borrow_mut().push(value);
	}

	/// Removes and returns the last [Value] of the [Array].
	pub fn pop(&self) -> Option<Value> {
		self.elements.borrow_mut().pop()
	}

	/// Checks if both references point to the same [Array].
	pub fn ptr_eq(&self, other: &Array) -> bool {
		Rc::ptr_eq(&self.elements, &other.elements)
	}

	pub(crate) fn id(&self) -> usize {
		Rc::as_ptr(&self.elements).cast::<()>() as usize
	}
}

impl PartialEq for Array {
	fn eq(&self, other: &Array) -> bool {
		self.ptr_eq(other) || *self.elements.borrow() == *other.elements.borrow()
	}
}

impl Debug for Array {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", format_array(Config::plain().multiline(false), self))
	}
}

impl<V: Into<Value>> FromIterator<V> for Array {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Array {
		Array::from_vec(iter.into_iter().map(Into::into).collect())
	}
}
