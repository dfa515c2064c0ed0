/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#[macro_use]
extern crate bitflags;

use std::result::Result as Result2;

pub use config::Config;
pub use conversions::{
	FromManaged, ToManaged, inbound, inbound_with, outbound, outbound_object, outbound_object_with, outbound_with,
};
pub use error::{Error, ErrorKind, PathSegment};
pub use objects::*;
pub use value::{Type, Value};

mod config;
pub mod conversions;
pub mod error;
pub mod format;
pub mod managed;
mod objects;
mod value;

pub type Result<T> = Result2<T, Error>;
