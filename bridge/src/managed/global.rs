/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::Result;
use crate::managed::{Handle, LocalFrame, Vm};
use crate::managed::heap::Key;

/// Reference to a managed object that is not tied to any [LocalFrame].
///
/// The reference is released when the [GlobalRef] is dropped.
pub struct GlobalRef<'vm> {
	vm: &'vm Vm,
	key: Key,
}

impl<'vm> GlobalRef<'vm> {
	pub(crate) fn new(vm: &'vm Vm, key: Key) -> GlobalRef<'vm> {
		GlobalRef { vm, key }
	}

	/// Returns the handle of the global reference. It stays valid as long as `self` is alive.
	pub fn handle(&self) -> Handle {
		Handle::from_key(self.key)
	}

	/// Creates a local reference to the object in `frame`.
	pub fn local(&self, frame: &LocalFrame<'vm>) -> Result<Handle> {
		frame.new_local(self.handle())
	}
}

impl Debug for GlobalRef<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("GlobalRef").field(&self.handle()).finish()
	}
}

impl Drop for GlobalRef<'_> {
	fn drop(&mut self) {
		let _ = self.vm.heap_mut().delete_ref(self.key);
	}
}
