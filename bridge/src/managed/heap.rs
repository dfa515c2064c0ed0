/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use indexmap::IndexMap;

use crate::{Error, ErrorKind, Result};
use crate::managed::{ClassId, Number};

/// Generational index into a [Slots] table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Key {
	pub(crate) index: u32,
	pub(crate) generation: u32,
}

struct Slot<T> {
	generation: u32,
	value: Option<T>,
}

/// Slot table that reuses freed indices and bumps their generation, so stale keys never resolve.
pub(crate) struct Slots<T> {
	slots: Vec<Slot<T>>,
	free: Vec<u32>,
	len: usize,
}

impl<T> Slots<T> {
	fn new() -> Slots<T> {
		Slots { slots: Vec::new(), free: Vec::new(), len: 0 }
	}

	fn insert(&mut self, value: T) -> Key {
		self.len += 1;
		if let Some(index) = self.free.pop() {
			let slot = &mut self.slots[index as usize];
			slot.value = Some(value);
			Key { index, generation: slot.generation }
		} else {
			let index = self.slots.len() as u32;
			self.slots.push(Slot { generation: 0, value: Some(value) });
			Key { index, generation: 0 }
		}
	}

	fn get(&self, key: Key) -> Option<&T> {
		self.slots
			.get(key.index as usize)
			.filter(|slot| slot.generation == key.generation)
			.and_then(|slot| slot.value.as_ref())
	}

	fn get_mut(&mut self, key: Key) -> Option<&mut T> {
		self.slots
			.get_mut(key.index as usize)
			.filter(|slot| slot.generation == key.generation)
			.and_then(|slot| slot.value.as_mut())
	}

	fn remove(&mut self, key: Key) -> Option<T> {
		let slot = self.slots.get_mut(key.index as usize)?;
		if slot.generation != key.generation {
			return None;
		}
		let value = slot.value.take()?;
		slot.generation = slot.generation.wrapping_add(1);
		self.free.push(key.index);
		self.len -= 1;
		Some(value)
	}
}

#[derive(Debug)]
pub(crate) enum Payload {
	Boolean(bool),
	Number(Number),
	String(String),
	List(Vec<Option<Key>>),
	Map(IndexMap<String, Option<Key>>),
	Opaque,
}

impl Payload {
	fn children(&self) -> Vec<Key> {
		match self {
			Payload::List(items) => items.iter().flatten().copied().collect(),
			Payload::Map(entries) => entries.values().flatten().copied().collect(),
			_ => Vec::new(),
		}
	}
}

pub(crate) struct Entry {
	pub(crate) class: ClassId,
	pub(crate) payload: Payload,
	strong: u32,
}

/// Reference-counted object storage plus the table of references pointing into it.
///
/// Objects are kept alive by references (local or global) and by membership in a list or map.
/// An object whose count drops to zero is freed and releases its children in turn.
pub(crate) struct Heap {
	objects: Slots<Entry>,
	refs: Slots<Key>,
	capacity: Option<usize>,
}

impl Heap {
	pub(crate) fn new(capacity: Option<usize>) -> Heap {
		Heap {
			objects: Slots::new(),
			refs: Slots::new(),
			capacity,
		}
	}

	pub(crate) fn live_objects(&self) -> usize {
		self.objects.len
	}

	pub(crate) fn live_refs(&self) -> usize {
		self.refs.len
	}

	/// Allocates an object with no references. The caller must reference it immediately.
	pub(crate) fn alloc(&mut self, class: ClassId, payload: Payload) -> Result<Key> {
		if let Some(capacity) = self.capacity {
			if self.objects.len >= capacity {
				return Err(Error::new(
					&format!("Managed heap is full ({capacity} objects)"),
					ErrorKind::AllocationFailure,
				));
			}
		}
		Ok(self.objects.insert(Entry { class, payload, strong: 0 }))
	}

	pub(crate) fn new_ref(&mut self, object: Key) -> Key {
		self.retain(object);
		self.refs.insert(object)
	}

	pub(crate) fn delete_ref(&mut self, reference: Key) -> Result<()> {
		let object = self.refs.remove(reference).ok_or_else(Error::invalid_handle)?;
		self.release(object);
		Ok(())
	}

	pub(crate) fn resolve(&self, reference: Key) -> Result<Key> {
		self.refs.get(reference).copied().ok_or_else(Error::invalid_handle)
	}

	pub(crate) fn entry(&self, object: Key) -> Result<&Entry> {
		self.objects.get(object).ok_or_else(Error::invalid_handle)
	}

	pub(crate) fn entry_mut(&mut self, object: Key) -> Result<&mut Entry> {
		self.objects.get_mut(object).ok_or_else(Error::invalid_handle)
	}

	pub(crate) fn retain(&mut self, object: Key) {
		if let Some(entry) = self.objects.get_mut(object) {
			entry.strong += 1;
		}
	}

	/// Drops one strong count and frees everything that becomes unreachable.
	pub(crate) fn release(&mut self, object: Key) {
		let mut pending = vec![object];
		while let Some(object) = pending.pop() {
			let Some(entry) = self.objects.get_mut(object) else {
				continue;
			};
			entry.strong = entry.strong.saturating_sub(1);
			if entry.strong == 0 {
				if let Some(entry) = self.objects.remove(object) {
					pending.extend(entry.payload.children());
				}
			}
		}
	}

	pub(crate) fn list_push(&mut self, list: Key, item: Option<Key>) -> Result<()> {
		match &mut self.entry_mut(list)?.payload {
			Payload::List(items) => {
				items.try_reserve(1)?;
				items.push(item);
			}
			_ => return Err(Error::new("Expected List", ErrorKind::Type)),
		}
		if let Some(item) = item {
			self.retain(item);
		}
		Ok(())
	}

	pub(crate) fn map_put(&mut self, map: Key, key: &str, value: Option<Key>) -> Result<()> {
		let previous = match &mut self.entry_mut(map)?.payload {
			Payload::Map(entries) => {
				entries.try_reserve(1)?;
				entries.insert(String::from(key), value)
			}
			_ => return Err(Error::new("Expected Map", ErrorKind::Type)),
		};
		if let Some(value) = value {
			self.retain(value);
		}
		if let Some(Some(previous)) = previous {
			self.release(previous);
		}
		Ok(())
	}
}
