/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;
use std::hash::Hash;

use crate::{Config, Error, ErrorKind, Result};

/// Tracks the containers on the current recursion path.
///
/// Only ancestors are recorded, so a container shared by two siblings is converted once per occurrence,
/// while a container reachable from its own descendants is rejected.
pub(crate) struct Traversal<'c, K> {
	config: &'c Config,
	ancestors: HashSet<K>,
	depth: usize,
}

impl<'c, K: Copy + Eq + Hash> Traversal<'c, K> {
	pub(crate) fn new(config: &'c Config) -> Traversal<'c, K> {
		Traversal {
			config,
			ancestors: HashSet::new(),
			depth: 0,
		}
	}

	pub(crate) fn config(&self) -> &'c Config {
		self.config
	}

	pub(crate) fn enter(&mut self, container: K, kind: &str) -> Result<()> {
		if let Some(max_depth) = self.config.max_depth {
			if self.depth >= max_depth {
				return Err(Error::new(
					&format!("{kind} is nested deeper than {max_depth} levels"),
					ErrorKind::DepthExceeded,
				));
			}
		}
		if self.config.detect_cycles && !self.ancestors.insert(container) {
			tracing::warn!(kind, depth = self.depth, "cyclic structure rejected");
			return Err(Error::new(
				&format!("{kind} contains itself"),
				ErrorKind::CyclicStructure,
			));
		}
		self.depth += 1;
		Ok(())
	}

	pub(crate) fn exit(&mut self, container: K) {
		self.ancestors.remove(&container);
		self.depth -= 1;
	}
}
