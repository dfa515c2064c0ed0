/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::mem::take;

use indexmap::IndexMap;
use typed_arena::Arena;

use crate::{Error, ErrorKind, Result};
use crate::managed::{ClassFlags, ClassId, Handle, Number, ObjectId, Vm};
use crate::managed::heap::{Entry, Heap, Key, Payload};

/// Represents a local reference frame in the managed runtime.
///
/// Every [Handle] created through a frame is registered in it and released when the frame is dropped,
/// on every exit path. Objects stay alive past the frame only if they are referenced by a surviving container,
/// another frame, or a [GlobalRef](crate::managed::GlobalRef).
pub struct LocalFrame<'vm> {
	vm: &'vm Vm,
	refs: Arena<Key>,
	depth: u32,
}

impl<'vm> LocalFrame<'vm> {
	pub(crate) fn new(vm: &'vm Vm) -> LocalFrame<'vm> {
		let depth = vm.enter_frame();
		tracing::trace!(depth, "local frame pushed");
		LocalFrame { vm, refs: Arena::new(), depth }
	}

	pub fn vm(&self) -> &'vm Vm {
		self.vm
	}

	/// Returns the nesting depth of the frame. Top-level frames have a depth of 1.
	pub fn depth(&self) -> u32 {
		self.depth
	}

	/// Returns the number of references registered in this frame, including released ones.
	pub fn len(&self) -> usize {
		self.refs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.refs.len() == 0
	}

	/// Runs `f` in a nested frame, releasing every reference it created when it returns.
	pub fn scope<T, F>(&self, f: F) -> Result<T>
	where
		F: FnOnce(&LocalFrame<'vm>) -> Result<T>,
	{
		let frame = LocalFrame::new(self.vm);
		f(&frame)
	}

	/// Runs `f` in a nested frame and re-registers the handle it returns in this frame before releasing the nested one.
	pub fn scope_promoting<F>(&self, f: F) -> Result<Handle>
	where
		F: FnOnce(&LocalFrame<'vm>) -> Result<Handle>,
	{
		let frame = LocalFrame::new(self.vm);
		let result = f(&frame)?;
		let promoted = self.new_local(result)?;
		drop(frame);
		Ok(promoted)
	}

	fn register(&self, heap: &mut Heap, object: Key) -> Handle {
		let reference = heap.new_ref(object);
		self.refs.alloc(reference);
		Handle::from_key(reference)
	}

	fn allocate(&self, class: ClassId, payload: Payload) -> Result<Handle> {
		let mut heap = self.vm.heap_mut();
		let object = heap.alloc(class, payload)?;
		Ok(self.register(&mut heap, object))
	}

	fn resolve(&self, heap: &Heap, handle: Handle) -> Result<Option<Key>> {
		handle.key().map(|reference| heap.resolve(reference)).transpose()
	}

	fn with_entry<T, F>(&self, handle: Handle, expected: &str, f: F) -> Result<T>
	where
		F: FnOnce(&Entry) -> Option<T>,
	{
		let heap = self.vm.heap();
		let object = self
			.resolve(&heap, handle)?
			.ok_or_else(|| Error::new(&format!("Expected {expected}, found null"), ErrorKind::Type))?;
		let entry = heap.entry(object)?;
		match f(entry) {
			Some(value) => Ok(value),
			None => {
				let class = self.vm.class_name(entry.class)?;
				Err(Error::new(&format!("Expected {expected}, found {class}"), ErrorKind::Type))
			}
		}
	}

	/// Returns the managed null sentinel.
	pub fn null(&self) -> Handle {
		Handle::null()
	}

	/// Creates a boxed `java.lang.Boolean`.
	pub fn new_boolean(&self, b: bool) -> Result<Handle> {
		self.allocate(self.vm.builtins().boolean, Payload::Boolean(b))
	}

	/// Creates a boxed number of the class matching its width.
	pub fn new_number(&self, number: Number) -> Result<Handle> {
		let builtins = self.vm.builtins();
		let class = match number {
			Number::Double(_) => builtins.double,
			Number::Float(_) => builtins.float,
			Number::Long(_) => builtins.long,
			Number::Integer(_) => builtins.integer,
			Number::Short(_) => builtins.short,
			Number::Byte(_) => builtins.byte,
		};
		self.allocate(class, Payload::Number(number))
	}

	/// Creates a boxed `java.lang.Double`.
	pub fn new_double(&self, d: f64) -> Result<Handle> {
		self.new_number(Number::Double(d))
	}

	/// Creates a boxed `java.lang.Integer`.
	pub fn new_integer(&self, i: i32) -> Result<Handle> {
		self.new_number(Number::Integer(i))
	}

	/// Creates a boxed `java.lang.Long`.
	pub fn new_long(&self, l: i64) -> Result<Handle> {
		self.new_number(Number::Long(l))
	}

	/// Creates a `java.lang.String`.
	pub fn new_string(&self, str: &str) -> Result<Handle> {
		self.allocate(self.vm.builtins().string, Payload::String(String::from(str)))
	}

	/// Creates an empty `java.util.ArrayList` with room for `capacity` elements.
	pub fn new_array_list(&self, capacity: usize) -> Result<Handle> {
		let mut items = Vec::new();
		items.try_reserve_exact(capacity)?;
		self.allocate(self.vm.builtins().array_list, Payload::List(items))
	}

	/// Creates an empty `java.util.HashMap`.
	pub fn new_hash_map(&self) -> Result<Handle> {
		self.allocate(self.vm.builtins().hash_map, Payload::Map(IndexMap::new()))
	}

	/// Creates an empty instance of `class`.
	///
	/// Boxed primitives and strings need a value and cannot be created this way. Neither can abstract classes.
	pub fn new_object(&self, class: ClassId) -> Result<Handle> {
		let vm = self.vm;
		let builtins = vm.builtins();
		let definition = vm.class(class)?;
		if definition.flags.contains(ClassFlags::ABSTRACT) {
			return Err(Error::new(
				&format!("Cannot instantiate abstract class {}", definition.name),
				ErrorKind::Type,
			));
		}

		if class == builtins.boolean || class == builtins.string || builtins.numbers().contains(&class) {
			return Err(Error::new(
				&format!("Cannot instantiate {} without a value", definition.name),
				ErrorKind::Type,
			));
		}

		let payload = if vm.is_assignable(class, builtins.list) {
			Payload::List(Vec::new())
		} else if vm.is_assignable(class, builtins.map) {
			Payload::Map(IndexMap::new())
		} else {
			Payload::Opaque
		};
		self.allocate(class, payload)
	}

	/// Creates another local reference to the object behind `handle` in this frame.
	pub fn new_local(&self, handle: Handle) -> Result<Handle> {
		let mut heap = self.vm.heap_mut();
		match self.resolve(&heap, handle)? {
			Some(object) => Ok(self.register(&mut heap, object)),
			None => Ok(Handle::null()),
		}
	}

	/// Releases a local reference before the frame ends.
	///
	/// Releasing the same handle twice fails with [InvalidHandle](ErrorKind::InvalidHandle).
	pub fn delete_local(&self, handle: Handle) -> Result<()> {
		match handle.key() {
			Some(reference) => self.vm.heap_mut().delete_ref(reference),
			None => Ok(()),
		}
	}

	/// Returns the class of the object behind `handle`, or [None] for null.
	pub fn class_of(&self, handle: Handle) -> Result<Option<ClassId>> {
		let heap = self.vm.heap();
		match self.resolve(&heap, handle)? {
			Some(object) => Ok(Some(heap.entry(object)?.class)),
			None => Ok(None),
		}
	}

	/// Checks if the object behind `handle` is an instance of `class`. Null is not an instance of anything.
	pub fn is_instance_of(&self, handle: Handle, class: ClassId) -> Result<bool> {
		Ok(self.class_of(handle)?.is_some_and(|own| self.vm.is_assignable(own, class)))
	}

	/// Returns the identity of the object behind `handle`, or [None] for null.
	pub fn identity(&self, handle: Handle) -> Result<Option<ObjectId>> {
		let heap = self.vm.heap();
		Ok(self.resolve(&heap, handle)?.map(ObjectId))
	}

	pub fn is_same_object(&self, first: Handle, second: Handle) -> Result<bool> {
		Ok(self.identity(first)? == self.identity(second)?)
	}

	/// Unboxes a `java.lang.Boolean`.
	pub fn boolean_value(&self, handle: Handle) -> Result<bool> {
		self.with_entry(handle, "java.lang.Boolean", |entry| match entry.payload {
			Payload::Boolean(b) => Some(b),
			_ => None,
		})
	}

	/// Checks if the object behind `handle` is one of the builtin boxed numbers.
	///
	/// Other subclasses of `java.lang.Number` are opaque and have no value to unbox.
	pub fn is_boxed_number(&self, handle: Handle) -> Result<bool> {
		for class in self.vm.builtins().numbers() {
			if self.is_instance_of(handle, class)? {
				return Ok(true);
			}
		}
		Ok(false)
	}

	/// Unboxes any builtin boxed number.
	pub fn number_value(&self, handle: Handle) -> Result<Number> {
		self.with_entry(handle, "java.lang.Number", |entry| match entry.payload {
			Payload::Number(number) => Some(number),
			_ => None,
		})
	}

	/// Copies the contents of a `java.lang.String`.
	pub fn string_value(&self, handle: Handle) -> Result<String> {
		self.with_entry(handle, "java.lang.String", |entry| match &entry.payload {
			Payload::String(str) => Some(str.clone()),
			_ => None,
		})
	}

	/// Returns the number of elements in a list.
	pub fn list_len(&self, list: Handle) -> Result<usize> {
		self.with_entry(list, "java.util.List", |entry| match &entry.payload {
			Payload::List(items) => Some(items.len()),
			_ => None,
		})
	}

	/// Appends `item` to a list. The list keeps its own reference to the item.
	pub fn list_add(&self, list: Handle, item: Handle) -> Result<()> {
		let mut heap = self.vm.heap_mut();
		let list = self
			.resolve(&heap, list)?
			.ok_or_else(|| Error::new("Expected java.util.List, found null", ErrorKind::Type))?;
		let item = self.resolve(&heap, item)?;
		heap.list_push(list, item)
	}

	/// Gets the element at `index` of a list as a new local reference.
	pub fn list_get(&self, list: Handle, index: usize) -> Result<Handle> {
		let item = self.with_entry(list, "java.util.List", |entry| match &entry.payload {
			Payload::List(items) => Some(items.get(index).copied()),
			_ => None,
		})?;
		match item {
			Some(item) => Ok(item.map(|item| self.register(&mut self.vm.heap_mut(), item)).unwrap_or_default()),
			None => Err(Error::new(&format!("Index {index} out of bounds"), ErrorKind::Type)),
		}
	}

	/// Gets every element of a list, in order, as new local references.
	pub fn list_items(&self, list: Handle) -> Result<Vec<Handle>> {
		let items = self.with_entry(list, "java.util.List", |entry| match &entry.payload {
			Payload::List(items) => Some(items.clone()),
			_ => None,
		})?;
		let mut heap = self.vm.heap_mut();
		Ok(items
			.into_iter()
			.map(|item| item.map(|item| self.register(&mut heap, item)).unwrap_or_default())
			.collect())
	}

	/// Returns the number of entries in a map.
	pub fn map_len(&self, map: Handle) -> Result<usize> {
		self.with_entry(map, "java.util.Map", |entry| match &entry.payload {
			Payload::Map(entries) => Some(entries.len()),
			_ => None,
		})
	}

	/// Puts `value` under `key` in a map, replacing and releasing any previous value.
	pub fn map_put(&self, map: Handle, key: &str, value: Handle) -> Result<()> {
		let mut heap = self.vm.heap_mut();
		let map = self
			.resolve(&heap, map)?
			.ok_or_else(|| Error::new("Expected java.util.Map, found null", ErrorKind::Type))?;
		let value = self.resolve(&heap, value)?;
		heap.map_put(map, key, value)
	}

	/// Gets the value under `key` in a map as a new local reference.
	///
	/// Returns [None] if the key is absent, and the null sentinel if it maps to null.
	pub fn map_get(&self, map: Handle, key: &str) -> Result<Option<Handle>> {
		let value = self.with_entry(map, "java.util.Map", |entry| match &entry.payload {
			Payload::Map(entries) => Some(entries.get(key).copied()),
			_ => None,
		})?;
		Ok(value.map(|value| value.map(|value| self.register(&mut self.vm.heap_mut(), value)).unwrap_or_default()))
	}

	/// Returns the keys of a map.
	pub fn map_keys(&self, map: Handle) -> Result<Vec<String>> {
		self.with_entry(map, "java.util.Map", |entry| match &entry.payload {
			Payload::Map(entries) => Some(entries.keys().cloned().collect()),
			_ => None,
		})
	}

	/// Gets every entry of a map, with values as new local references.
	pub fn map_entries(&self, map: Handle) -> Result<Vec<(String, Handle)>> {
		let entries = self.with_entry(map, "java.util.Map", |entry| match &entry.payload {
			Payload::Map(entries) => Some(entries.clone()),
			_ => None,
		})?;
		let mut heap = self.vm.heap_mut();
		Ok(entries
			.into_iter()
			.map(|(key, value)| (key, value.map(|value| self.register(&mut heap, value)).unwrap_or_default()))
			.collect())
	}
}

impl Drop for LocalFrame<'_> {
	fn drop(&mut self) {
		let refs = take(&mut self.refs).into_vec();
		let count = refs.len();
		{
			let mut heap = self.vm.heap_mut();
			for reference in refs.into_iter().rev() {
				// References deleted early with `delete_local` are already gone.
				let _ = heap.delete_ref(reference);
			}
		}
		self.vm.exit_frame();
		tracing::trace!(depth = self.depth, refs = count, "local frame released");
	}
}
