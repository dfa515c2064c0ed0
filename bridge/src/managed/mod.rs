/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub use class::{Builtins, Class, ClassFlags, ClassId};
pub use frame::LocalFrame;
pub use global::GlobalRef;
pub use handle::{Handle, Number, ObjectId};
pub use vm::Vm;

mod class;
mod frame;
mod global;
mod handle;
pub(crate) mod heap;
mod vm;
