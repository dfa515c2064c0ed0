/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::TryReserveError;
use std::error;
use std::fmt::{Display, Formatter, Write};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
	/// The value has no equivalent on the target side.
	UnsupportedType,
	/// The target side could not allocate a container or primitive.
	AllocationFailure,
	/// A managed handle was stale or already released.
	InvalidHandle,
	/// A container was reached again through its own descendants.
	CyclicStructure,
	/// Nesting exceeded the configured maximum depth.
	DepthExceeded,
	/// A typed conversion or runtime operation received the wrong shape.
	Type,
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let str = match self {
			ErrorKind::UnsupportedType => "UnsupportedType",
			ErrorKind::AllocationFailure => "AllocationFailure",
			ErrorKind::InvalidHandle => "InvalidHandle",
			ErrorKind::CyclicStructure => "CyclicStructure",
			ErrorKind::DepthExceeded => "DepthExceeded",
			ErrorKind::Type => "TypeError",
		};
		f.write_str(str)
	}
}

/// Location of a value inside the tree being converted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
	Key(String),
	Index(usize),
}

/// Represents errors that can occur while bridging values.
///
/// The path runs from the root of the conversion to the element that failed and is empty when the root itself failed.
#[derive(Clone, Debug)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: String,
	pub path: Vec<PathSegment>,
}

impl Error {
	pub fn new(message: &str, kind: ErrorKind) -> Error {
		Error {
			kind,
			message: String::from(message),
			path: Vec::new(),
		}
	}

	pub fn unsupported(message: &str) -> Error {
		Error::new(message, ErrorKind::UnsupportedType)
	}

	pub fn invalid_handle() -> Error {
		Error::new("Handle is stale or has already been released", ErrorKind::InvalidHandle)
	}

	/// Prepends a segment to the path while unwinding out of a container.
	pub fn within(mut self, segment: PathSegment) -> Error {
		self.path.insert(0, segment);
		self
	}

	pub(crate) fn within_key(self, key: &str) -> Error {
		self.within(PathSegment::Key(String::from(key)))
	}

	pub(crate) fn within_index(self, index: usize) -> Error {
		self.within(PathSegment::Index(index))
	}

	/// Formats the path as `$.key[0].other`.
	pub fn path_string(&self) -> String {
		let mut string = String::from("$");
		for segment in &self.path {
			let _ = match segment {
				PathSegment::Key(key) => write!(string, ".{key}"),
				PathSegment::Index(index) => write!(string, "[{index}]"),
			};
		}
		string
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.path.is_empty() {
			write!(f, "{}: {}", self.kind, self.message)
		} else {
			write!(f, "{} at {}: {}", self.kind, self.path_string(), self.message)
		}
	}
}

impl error::Error for Error {}

impl From<TryReserveError> for Error {
	fn from(error: TryReserveError) -> Error {
		Error::new(&error.to_string(), ErrorKind::AllocationFailure)
	}
}

impl From<indexmap::TryReserveError> for Error {
	fn from(error: indexmap::TryReserveError) -> Error {
		Error::new(&error.to_string(), ErrorKind::AllocationFailure)
	}
}
