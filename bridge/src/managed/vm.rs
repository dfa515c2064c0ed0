/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::cell::{Cell, Ref, RefCell, RefMut};

use crate::Result;
use crate::managed::{Builtins, Class, ClassFlags, ClassId, GlobalRef, Handle, LocalFrame};
use crate::managed::class::ClassRegistry;
use crate::managed::heap::Heap;

/// Represents the managed-object runtime.
///
/// A [Vm] owns the class registry and the reference-counted heap. All objects are created through a [LocalFrame],
/// which registers a local reference for each new object and releases them when dropped.
pub struct Vm {
	heap: RefCell<Heap>,
	classes: RefCell<ClassRegistry>,
	builtins: Builtins,
	depth: Cell<u32>,
}

impl Vm {
	/// Creates a [Vm] with an unbounded heap.
	pub fn new() -> Vm {
		Vm::create(None)
	}

	/// Creates a [Vm] whose heap holds at most `max_objects` live objects.
	///
	/// Allocating beyond that fails with [AllocationFailure](crate::ErrorKind::AllocationFailure).
	pub fn with_capacity(max_objects: usize) -> Vm {
		Vm::create(Some(max_objects))
	}

	fn create(capacity: Option<usize>) -> Vm {
		let (classes, builtins) = ClassRegistry::with_builtins();
		Vm {
			heap: RefCell::new(Heap::new(capacity)),
			classes: RefCell::new(classes),
			builtins,
			depth: Cell::new(0),
		}
	}

	pub fn builtins(&self) -> &Builtins {
		&self.builtins
	}

	/// Opens a new top-level [LocalFrame].
	pub fn frame(&self) -> LocalFrame<'_> {
		LocalFrame::new(self)
	}

	/// Defines a class extending `superclass` and implementing `interfaces`.
	///
	/// Instances of classes assignable to `java.util.List` or `java.util.Map` get list or map storage.
	/// Instances of any other user class are opaque to the bridge.
	pub fn define_class(&self, name: &str, superclass: ClassId, interfaces: &[ClassId]) -> Result<ClassId> {
		self.classes.borrow_mut().define(Class {
			name: String::from(name),
			superclass: Some(superclass),
			interfaces: interfaces.to_vec(),
			flags: ClassFlags::empty(),
		})
	}

	/// Defines an interface extending `interfaces`.
	pub fn define_interface(&self, name: &str, interfaces: &[ClassId]) -> Result<ClassId> {
		self.classes.borrow_mut().define(Class {
			name: String::from(name),
			superclass: None,
			interfaces: interfaces.to_vec(),
			flags: ClassFlags::INTERFACE,
		})
	}

	/// Defines an abstract class, which can be extended but not instantiated.
	pub fn define_abstract_class(&self, name: &str, superclass: ClassId, interfaces: &[ClassId]) -> Result<ClassId> {
		self.classes.borrow_mut().define(Class {
			name: String::from(name),
			superclass: Some(superclass),
			interfaces: interfaces.to_vec(),
			flags: ClassFlags::ABSTRACT,
		})
	}

	pub fn find_class(&self, name: &str) -> Option<ClassId> {
		self.classes.borrow().find(name)
	}

	/// Returns the definition of `class`, or a [Type](crate::ErrorKind::Type) error if it belongs to another [Vm].
	pub fn class(&self, class: ClassId) -> Result<Class> {
		self.classes.borrow().get(class).cloned()
	}

	pub fn class_name(&self, class: ClassId) -> Result<String> {
		self.classes.borrow().get(class).map(|class| class.name.clone())
	}

	/// Checks if instances of `from` can be used where `to` is expected.
	pub fn is_assignable(&self, from: ClassId, to: ClassId) -> bool {
		self.classes.borrow().is_assignable(from, to)
	}

	/// Promotes `handle` to a global reference that outlives every [LocalFrame].
	///
	/// Returns [None] for the null sentinel.
	pub fn new_global_ref(&self, handle: Handle) -> Result<Option<GlobalRef<'_>>> {
		let Some(reference) = handle.key() else {
			return Ok(None);
		};
		let mut heap = self.heap_mut();
		let object = heap.resolve(reference)?;
		let global = heap.new_ref(object);
		Ok(Some(GlobalRef::new(self, global)))
	}

	/// Returns the number of objects currently alive in the heap.
	pub fn live_objects(&self) -> usize {
		self.heap().live_objects()
	}

	/// Returns the number of local and global references currently registered.
	pub fn live_refs(&self) -> usize {
		self.heap().live_refs()
	}

	pub(crate) fn heap(&self) -> Ref<'_, Heap> {
		self.heap.borrow()
	}

	pub(crate) fn heap_mut(&self) -> RefMut<'_, Heap> {
		self.heap.borrow_mut()
	}

	pub(crate) fn enter_frame(&self) -> u32 {
		let depth = self.depth.get() + 1;
		self.depth.set(depth);
		depth
	}

	pub(crate) fn exit_frame(&self) {
		self.depth.set(self.depth.get().saturating_sub(1));
	}
}

impl Default for Vm {
	fn default() -> Vm {
		Vm::new()
	}
}
