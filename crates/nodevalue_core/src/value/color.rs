use std::fmt;

use crate::value::{Result, ValueError};

/// Input forms accepted by [`Color::from_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue<'a> {
	/// Red, green, blue; alpha is `1.0`.
	Rgb(f64, f64, f64),
	/// Red, green, blue, alpha.
	Rgba(f64, f64, f64, f64),
	/// Six hex digits (`rrggbb`), optional leading `#`; alpha is `1.0`.
	Hex(&'a str),
	/// Eight hex digits (`rrggbbaa`), optional leading `#`.
	Hexa(&'a str),
}

/// Four-channel color record.
///
/// Channels are stored as given. Only the hex conversions interpret them,
/// mapping `[0, 1]` onto `00..ff`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
	/// Red channel.
	pub r: f64,
	/// Green channel.
	pub g: f64,
	/// Blue channel.
	pub b: f64,
	/// Alpha channel.
	pub a: f64,
}

impl Color {
	/// Digits in the `rrggbb` form.
	pub const HEX_DIGITS: usize = 6;
	/// Digits in the `rrggbbaa` form.
	pub const HEXA_DIGITS: usize = 8;

	/// Build a color from raw channels.
	pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Build a color from one of the accepted input forms.
	pub fn from_value(value: ColorValue<'_>) -> Result<Self> {
		match value {
			ColorValue::Rgb(r, g, b) => Ok(Self::new(r, g, b, 1.0)),
			ColorValue::Rgba(r, g, b, a) => Ok(Self::new(r, g, b, a)),
			ColorValue::Hex(text) => {
				let [r, g, b] = parse_hex_bytes::<3>(text)?;
				Ok(Self::new(unit(r), unit(g), unit(b), 1.0))
			}
			ColorValue::Hexa(text) => {
				let [r, g, b, a] = parse_hex_bytes::<4>(text)?;
				Ok(Self::new(unit(r), unit(g), unit(b), unit(a)))
			}
		}
	}

	/// Red, green, blue.
	pub const fn rgb(self) -> (f64, f64, f64) {
		(self.r, self.g, self.b)
	}

	/// Red, green, blue, alpha.
	pub const fn rgba(self) -> (f64, f64, f64, f64) {
		(self.r, self.g, self.b, self.a)
	}

	/// Channels as `[r, g, b, a]`.
	pub const fn components(self) -> [f64; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Lowercase `rrggbb`, ignoring alpha.
	pub fn hex(self) -> String {
		format!("{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
	}

	/// Lowercase `rrggbbaa`.
	pub fn hexa(self) -> String {
		format!("{}{:02x}", self.hex(), byte(self.a))
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

fn parse_hex_bytes<const N: usize>(text: &str) -> Result<[u8; N]> {
	let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
	let invalid = || ValueError::InvalidHexColor {
		input: text.to_owned(),
		expected: N * 2,
	};

	if digits.len() != N * 2 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
		return Err(invalid());
	}

	let mut out = [0_u8; N];
	for (idx, slot) in out.iter_mut().enumerate() {
		*slot = u8::from_str_radix(&digits[idx * 2..idx * 2 + 2], 16).map_err(|_| invalid())?;
	}
	Ok(out)
}

fn unit(byte: u8) -> f64 {
	f64::from(byte) / 255.0
}

// Truncates; `as u8` saturates out-of-range channels and maps NaN to 0.
fn byte(channel: f64) -> u8 {
	(channel * 255.0) as u8
}
