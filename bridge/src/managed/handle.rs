/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::managed::heap::Key;

/// Opaque reference to a managed object, or the managed null sentinel.
///
/// A [Handle] is only valid while the [LocalFrame](crate::managed::LocalFrame) or
/// [GlobalRef](crate::managed::GlobalRef) that registered it is alive.
/// Using it afterwards fails with [InvalidHandle](crate::ErrorKind::InvalidHandle).
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Handle {
	key: Option<Key>,
}

impl Handle {
	/// Returns the managed null sentinel.
	pub const fn null() -> Handle {
		Handle { key: None }
	}

	pub fn is_null(&self) -> bool {
		self.key.is_none()
	}

	pub(crate) fn from_key(key: Key) -> Handle {
		Handle { key: Some(key) }
	}

	pub(crate) fn key(&self) -> Option<Key> {
		self.key
	}
}

impl Default for Handle {
	fn default() -> Handle {
		Handle::null()
	}
}

impl Debug for Handle {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.key {
			Some(key) => write!(f, "Handle({}#{})", key.index, key.generation),
			None => f.write_str("Handle(null)"),
		}
	}
}

/// Identity of a managed object, independent of the references pointing to it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ObjectId(pub(crate) Key);

/// A boxed managed number, tagged with the width of its class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
	Double(f64),
	Float(f32),
	Long(i64),
	Integer(i32),
	Short(i16),
	Byte(i8),
}

impl Number {
	/// Widens the number to a 64-bit float.
	///
	/// Longs beyond 2^53 lose precision.
	pub fn as_f64(&self) -> f64 {
		match *self {
			Number::Double(d) => d,
			Number::Float(f) => f64::from(f),
			Number::Long(l) => l as f64,
			Number::Integer(i) => f64::from(i),
			Number::Short(s) => f64::from(s),
			Number::Byte(b) => f64::from(b),
		}
	}

	/// Returns the exact value of integral boxes, or [None] for `Double` and `Float`.
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			Number::Long(l) => Some(l),
			Number::Integer(i) => Some(i64::from(i)),
			Number::Short(s) => Some(i64::from(s)),
			Number::Byte(b) => Some(i64::from(b)),
			Number::Double(_) | Number::Float(_) => None,
		}
	}
}
