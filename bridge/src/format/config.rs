/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use colored::{Color, ColoredString, Colorize};

#[derive(Clone, Copy, Debug)]
pub struct Config {
	pub colours: Option<ColourConfig>,
	pub depth: u16,
	pub indentation: u16,
	pub multiline: bool,
	pub quoted: bool,
}

impl Config {
	/// Creates a [Config] that writes no colour codes.
	pub fn plain() -> Config {
		Config { colours: None, ..Config::default() }
	}

	pub fn colours(self, colours: Option<ColourConfig>) -> Config {
		Config { colours, ..self }
	}

	pub fn depth(self, depth: u16) -> Config {
		Config { depth, ..self }
	}

	pub fn indentation(self, indentation: u16) -> Config {
		Config { indentation, ..self }
	}

	pub fn multiline(self, multiline: bool) -> Config {
		Config { multiline, ..self }
	}

	pub fn quoted(self, quoted: bool) -> Config {
		Config { quoted, ..self }
	}

	pub(crate) fn paint(&self, str: &str, colour: fn(&ColourConfig) -> Color) -> ColoredString {
		match &self.colours {
			Some(colours) => str.color(colour(colours)),
			None => str.normal(),
		}
	}
}

impl Default for Config {
	fn default() -> Config {
		Config {
			colours: Some(ColourConfig::default()),
			depth: 0,
			indentation: 0,
			multiline: true,
			quoted: false,
		}
	}
}

#[derive(Clone, Copy, Debug)]
pub struct ColourConfig {
	pub boolean: Color,
	pub number: Color,
	pub string: Color,
	pub null: Color,
	pub undefined: Color,
	pub array: Color,
	pub object: Color,
	pub function: Color,
	pub symbol: Color,
	pub class: Color,
}

impl Default for ColourConfig {
	fn default() -> ColourConfig {
		ColourConfig {
			boolean: Color::Cyan,
			number: Color::Blue,
			string: Color::Green,
			null: Color::TrueColor { r: 118, g: 118, b: 118 },
			undefined: Color::TrueColor { r: 118, g: 118, b: 118 },
			array: Color::White,
			object: Color::White,
			function: Color::Magenta,
			symbol: Color::Green,
			class: Color::Yellow,
		}
	}
}

impl ColourConfig {
	pub fn white() -> ColourConfig {
		ColourConfig {
			boolean: Color::White,
			number: Color::White,
			string: Color::White,
			null: Color::White,
			undefined: Color::White,
			array: Color::White,
			object: Color::White,
			function: Color::White,
			symbol: Color::White,
			class: Color::White,
		}
	}
}
