use std::fmt;
use std::str::FromStr;

use crate::value::{Result, ValueError};

/// Kind tag identifying which payload a [`crate::value::DataValue`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
	/// Plain `f64` scalar.
	Number,
	/// Plain true/false.
	Boolean,
	/// Four-channel [`crate::value::Color`].
	Color,
	/// Direction or offset, [`crate::value::Vec3`].
	Vector3,
	/// Position, [`crate::value::Point3`].
	Point3,
}

impl DataType {
	/// Every kind in declaration order.
	pub const ALL: [DataType; 5] = [Self::Number, Self::Boolean, Self::Color, Self::Vector3, Self::Point3];

	/// Stable kind name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Number => "Number",
			Self::Boolean => "Boolean",
			Self::Color => "Color",
			Self::Vector3 => "Vector3",
			Self::Point3 => "Point3",
		}
	}

	/// Rust name of the payload shape.
	pub fn shape(self) -> &'static str {
		match self {
			Self::Number => "f64",
			Self::Boolean => "bool",
			Self::Color => "Color",
			Self::Vector3 => "Vec3",
			Self::Point3 => "Point3",
		}
	}

	/// Number of numeric components in the payload. Booleans count as one.
	pub fn component_count(self) -> usize {
		match self {
			Self::Number | Self::Boolean => 1,
			Self::Color => 4,
			Self::Vector3 | Self::Point3 => 3,
		}
	}
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DataType {
	type Err = ValueError;

	fn from_str(name: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
			.ok_or_else(|| ValueError::UnknownDataType { name: name.to_owned() })
	}
}
