/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

#[derive(Debug)]
struct FunctionInfo {
	name: String,
	arity: u32,
}

/// Represents a callable [Function] in the script engine.
///
/// Functions only carry their name and arity here. They never cross to the managed side.
#[derive(Clone)]
pub struct Function {
	info: Rc<FunctionInfo>,
}

impl Function {
	pub fn new(name: &str, arity: u32) -> Function {
		Function {
			info: Rc::new(FunctionInfo { name: String::from(name), arity }),
		}
	}

	/// Returns the name of the [Function]. Anonymous functions have an empty name.
	pub fn name(&self) -> &str {
		&self.info.name
	}

	/// Returns the number of declared parameters.
	pub fn arity(&self) -> u32 {
		self.info.arity
	}
}

impl PartialEq for Function {
	fn eq(&self, other: &Function) -> bool {
		Rc::ptr_eq(&self.info, &other.info)
	}
}

impl Debug for Function {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[Function: {}]", self.info.name)
	}
}
