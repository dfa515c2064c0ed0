/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::{Error, ErrorKind, Result};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ClassId(u32);

bitflags! {
	/// Represents the modifiers of a managed [Class].
	#[derive(Clone, Copy, Debug, Eq, PartialEq)]
	pub struct ClassFlags: u8 {
		/// Prevents the class from being subclassed.
		const FINAL = 1;
		/// Prevents the class from being instantiated.
		const ABSTRACT = 1 << 1;
		/// Marks the class as an interface. Interfaces are also abstract.
		const INTERFACE = 1 << 2 | ClassFlags::ABSTRACT.bits();
	}
}

#[derive(Clone, Debug)]
pub struct Class {
	pub name: String,
	pub superclass: Option<ClassId>,
	pub interfaces: Vec<ClassId>,
	pub flags: ClassFlags,
}

/// Classes every [Vm](crate::managed::Vm) starts with.
#[derive(Clone, Copy, Debug)]
pub struct Builtins {
	pub object: ClassId,
	pub boolean: ClassId,
	pub number: ClassId,
	pub double: ClassId,
	pub float: ClassId,
	pub long: ClassId,
	pub integer: ClassId,
	pub short: ClassId,
	pub byte: ClassId,
	pub string: ClassId,
	pub list: ClassId,
	pub array_list: ClassId,
	pub map: ClassId,
	pub hash_map: ClassId,
	pub linked_hash_map: ClassId,
}

impl Builtins {
	/// Returns the concrete boxed number classes, widest first.
	pub fn numbers(&self) -> [ClassId; 6] {
		[self.double, self.float, self.long, self.integer, self.short, self.byte]
	}
}

#[derive(Default)]
pub(crate) struct ClassRegistry {
	classes: Vec<Class>,
	by_name: HashMap<String, ClassId>,
}

impl ClassRegistry {
	pub(crate) fn with_builtins() -> (ClassRegistry, Builtins) {
		let mut registry = ClassRegistry::default();
		let mut define = |name: &str, superclass: Option<ClassId>, interfaces: &[ClassId], flags: ClassFlags| {
			registry.insert(Class {
				name: String::from(name),
				superclass,
				interfaces: interfaces.to_vec(),
				flags,
			})
		};

		let object = define("java.lang.Object", None, &[], ClassFlags::empty());
		let boolean = define("java.lang.Boolean", Some(object), &[], ClassFlags::FINAL);
		let number = define("java.lang.Number", Some(object), &[], ClassFlags::ABSTRACT);
		let double = define("java.lang.Double", Some(number), &[], ClassFlags::FINAL);
		let float = define("java.lang.Float", Some(number), &[], ClassFlags::FINAL);
		let long = define("java.lang.Long", Some(number), &[], ClassFlags::FINAL);
		let integer = define("java.lang.Integer", Some(number), &[], ClassFlags::FINAL);
		let short = define("java.lang.Short", Some(number), &[], ClassFlags::FINAL);
		let byte = define("java.lang.Byte", Some(number), &[], ClassFlags::FINAL);
		let string = define("java.lang.String", Some(object), &[], ClassFlags::FINAL);
		let list = define("java.util.List", None, &[], ClassFlags::INTERFACE);
		let array_list = define("java.util.ArrayList", Some(object), &[list], ClassFlags::empty());
		let map = define("java.util.Map", None, &[], ClassFlags::INTERFACE);
		let hash_map = define("java.util.HashMap", Some(object), &[map], ClassFlags::empty());
		let linked_hash_map = define("java.util.LinkedHashMap", Some(hash_map), &[map], ClassFlags::empty());

		let builtins = Builtins {
			object,
			boolean,
			number,
			double,
			float,
			long,
			integer,
			short,
			byte,
			string,
			list,
			array_list,
			map,
			hash_map,
			linked_hash_map,
		};
		(registry, builtins)
	}

	fn insert(&mut self, class: Class) -> ClassId {
		let id = ClassId(self.classes.len() as u32);
		self.by_name.insert(class.name.clone(), id);
		self.classes.push(class);
		id
	}

	/// Defines a new class after checking that its superclass and interfaces can be extended.
	pub(crate) fn define(&mut self, class: Class) -> Result<ClassId> {
		if self.by_name.contains_key(&class.name) {
			return Err(Error::new(&format!("Class {} is already defined", class.name), ErrorKind::Type));
		}
		if let Some(superclass) = class.superclass {
			let parent = self.get(superclass)?;
			if parent.flags.contains(ClassFlags::FINAL) {
				return Err(Error::new(
					&format!("Class {} cannot extend final class {}", class.name, parent.name),
					ErrorKind::Type,
				));
			}
			if parent.flags.contains(ClassFlags::INTERFACE) {
				return Err(Error::new(
					&format!("Class {} cannot extend interface {}", class.name, parent.name),
					ErrorKind::Type,
				));
			}
		}
		for interface in &class.interfaces {
			let interface = self.get(*interface)?;
			if !interface.flags.contains(ClassFlags::INTERFACE) {
				return Err(Error::new(
					&format!("Class {} cannot implement {}, which is not an interface", class.name, interface.name),
					ErrorKind::Type,
				));
			}
		}
		Ok(self.insert(class))
	}

	/// Fails for ids handed out by another registry.
	pub(crate) fn get(&self, id: ClassId) -> Result<&Class> {
		self.classes
			.get(id.0 as usize)
			.ok_or_else(|| Error::new(&format!("Class #{} is not defined in this runtime", id.0), ErrorKind::Type))
	}

	pub(crate) fn find(&self, name: &str) -> Option<ClassId> {
		self.by_name.get(name).copied()
	}

	/// Checks if instances of `from` can be used where `to` is expected, walking superclass and interface edges.
	pub(crate) fn is_assignable(&self, from: ClassId, to: ClassId) -> bool {
		let mut pending = vec![from];
		while let Some(id) = pending.pop() {
			if id == to {
				return true;
			}
			if let Ok(class) = self.get(id) {
				pending.extend(class.superclass);
				pending.extend(class.interfaces.iter().copied());
			}
		}
		false
	}
}
