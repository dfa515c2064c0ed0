/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::rc::Rc;

/// Represents a unique [Symbol] in the script engine.
///
/// Two symbols are only equal if they are the same symbol, regardless of description.
#[derive(Clone, Debug)]
pub struct Symbol {
	description: Rc<Option<String>>,
}

impl Symbol {
	pub fn new(description: Option<&str>) -> Symbol {
		Symbol {
			description: Rc::new(description.map(String::from)),
		}
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}
}

impl PartialEq for Symbol {
	fn eq(&self, other: &Symbol) -> bool {
		Rc::ptr_eq(&self.description, &other.description)
	}
}
