use log::{debug, trace};

use crate::value::{Color, ColorValue, DataType, DataValue, Point3, Result, ValueError, Vec3};

/// Knobs for reading values from text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOptions {
	/// Alpha used when a color literal lists only three channels.
	pub default_alpha: f64,
	/// Separator between numeric components.
	pub separator: char,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			default_alpha: 1.0,
			separator: ',',
		}
	}
}

impl DataValue {
	/// Read a value of `kind` from its text literal.
	///
	/// Numbers use Rust float syntax, booleans are `true` or `false`, colors are
	/// `#rrggbb`, `#rrggbbaa` or 3-4 separated channels, and vectors and points
	/// are exactly 3 separated components.
	pub fn parse(kind: DataType, text: &str, options: &ParseOptions) -> Result<Self> {
		let parsed = match kind {
			DataType::Number => parse_number(text).map(Self::Number),
			DataType::Boolean => parse_bool(text).map(Self::Boolean),
			DataType::Color => parse_color(text, options).map(Self::Color),
			DataType::Vector3 => parse_triple(text, options).map(|[x, y, z]| Self::Vector3(Vec3::new(x, y, z))),
			DataType::Point3 => parse_triple(text, options).map(|[x, y, z]| Self::Point3(Point3::new(x, y, z))),
		};

		match parsed {
			Some(value) => {
				trace!("parsed {kind} literal {text:?} as {value}");
				Ok(value)
			}
			None => {
				debug!("rejected {kind} literal {text:?}");
				Err(ValueError::InvalidPayloadForTag {
					kind,
					payload: text.to_owned(),
				})
			}
		}
	}
}

fn parse_number(text: &str) -> Option<f64> {
	text.trim().parse::<f64>().ok()
}

fn parse_bool(text: &str) -> Option<bool> {
	match text.trim() {
		"true" => Some(true),
		"false" => Some(false),
		_ => None,
	}
}

fn parse_color(text: &str, options: &ParseOptions) -> Option<Color> {
	let trimmed = text.trim();
	if let Some(digits) = trimmed.strip_prefix('#') {
		let value = match digits.len() {
			Color::HEX_DIGITS => ColorValue::Hex(digits),
			Color::HEXA_DIGITS => ColorValue::Hexa(digits),
			_ => return None,
		};
		return Color::from_value(value).ok();
	}

	let channels = parse_components(trimmed, options.separator)?;
	let value = match channels[..] {
		[r, g, b] => ColorValue::Rgba(r, g, b, options.default_alpha),
		[r, g, b, a] => ColorValue::Rgba(r, g, b, a),
		_ => return None,
	};
	Color::from_value(value).ok()
}

fn parse_triple(text: &str, options: &ParseOptions) -> Option<[f64; 3]> {
	match parse_components(text, options.separator)?[..] {
		[x, y, z] => Some([x, y, z]),
		_ => None,
	}
}

fn parse_components(text: &str, separator: char) -> Option<Vec<f64>> {
	text.split(separator).map(parse_number).collect()
}

#[cfg(test)]
mod tests;
