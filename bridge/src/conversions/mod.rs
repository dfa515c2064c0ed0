/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub use from::*;
pub use inbound::{inbound, inbound_with};
pub use outbound::{outbound, outbound_object, outbound_object_with, outbound_with};
pub use to::*;

mod from;
mod inbound;
mod outbound;
mod to;
mod traversal;
