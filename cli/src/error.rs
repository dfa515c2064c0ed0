/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Display, Formatter};
use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
	Io(io::Error),
	Json(serde_json::Error),
	Bridge(bridge::Error),
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Error::Io(error) => write!(f, "Failed to read input: {error}"),
			Error::Json(error) => write!(f, "Invalid JSON: {error}"),
			Error::Bridge(error) => Display::fmt(error, f),
		}
	}
}

impl error::Error for Error {}

impl From<io::Error> for Error {
	fn from(error: io::Error) -> Error {
		Error::Io(error)
	}
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Error {
		Error::Json(error)
	}
}

impl From<bridge::Error> for Error {
	fn from(error: bridge::Error) -> Error {
		Error::Bridge(error)
	}
}
