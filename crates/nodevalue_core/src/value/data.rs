use std::fmt;

use crate::value::{Color, DataType, Point3, Result, ValueError, Vec3};

/// One value of exactly one [`DataType`].
///
/// The variant is the tag, so a payload can never disagree with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataValue {
	/// Scalar number.
	Number(f64),
	/// Boolean flag.
	Boolean(bool),
	/// Four-channel color.
	Color(Color),
	/// Direction or offset.
	Vector3(Vec3),
	/// Position.
	Point3(Point3),
}

impl DataValue {
	/// Initial value for an unconnected input of `kind`.
	pub fn default_for(kind: DataType) -> Self {
		match kind {
			DataType::Number => Self::Number(0.0),
			DataType::Boolean => Self::Boolean(false),
			DataType::Color => Self::Color(Color::default()),
			DataType::Vector3 => Self::Vector3(Vec3::ZERO),
			DataType::Point3 => Self::Point3(Point3::ORIGIN),
		}
	}

	/// Kind tag of this value.
	pub fn data_type(&self) -> DataType {
		match self {
			Self::Number(_) => DataType::Number,
			Self::Boolean(_) => DataType::Boolean,
			Self::Color(_) => DataType::Color,
			Self::Vector3(_) => DataType::Vector3,
			Self::Point3(_) => DataType::Point3,
		}
	}

	/// Numeric components; booleans read as `0.0`/`1.0`.
	pub fn components(&self) -> Vec<f64> {
		match *self {
			Self::Number(v) => vec![v],
			Self::Boolean(v) => vec![if v { 1.0 } else { 0.0 }],
			Self::Color(v) => v.components().to_vec(),
			Self::Vector3(v) => v.components().to_vec(),
			Self::Point3(v) => v.components().to_vec(),
		}
	}

	/// Number payload, if tagged `Number`.
	pub fn as_number(&self) -> Option<f64> {
		match *self {
			Self::Number(v) => Some(v),
			_ => None,
		}
	}

	/// Boolean payload, if tagged `Boolean`.
	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			Self::Boolean(v) => Some(v),
			_ => None,
		}
	}

	/// Color payload, if tagged `Color`.
	pub fn as_color(&self) -> Option<&Color> {
		match self {
			Self::Color(v) => Some(v),
			_ => None,
		}
	}

	/// Vector payload, if tagged `Vector3`.
	pub fn as_vec3(&self) -> Option<&Vec3> {
		match self {
			Self::Vector3(v) => Some(v),
			_ => None,
		}
	}

	/// Point payload, if tagged `Point3`.
	pub fn as_point3(&self) -> Option<&Point3> {
		match self {
			Self::Point3(v) => Some(v),
			_ => None,
		}
	}

	fn mismatch(&self, expected: DataType) -> ValueError {
		ValueError::TagMismatch {
			expected,
			got: self.data_type(),
		}
	}
}

impl fmt::Display for DataValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(v) => write!(f, "{v}"),
			Self::Boolean(v) => write!(f, "{v}"),
			Self::Color(v) => write!(f, "{v}"),
			Self::Vector3(v) => write!(f, "{v}"),
			Self::Point3(v) => write!(f, "{v}"),
		}
	}
}

impl From<f64> for DataValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<bool> for DataValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<Color> for DataValue {
	fn from(value: Color) -> Self {
		Self::Color(value)
	}
}

impl From<Vec3> for DataValue {
	fn from(value: Vec3) -> Self {
		Self::Vector3(value)
	}
}

impl From<Point3> for DataValue {
	fn from(value: Point3) -> Self {
		Self::Point3(value)
	}
}

impl TryFrom<DataValue> for f64 {
	type Error = ValueError;

	fn try_from(value: DataValue) -> Result<Self> {
		value.as_number().ok_or_else(|| value.mismatch(DataType::Number))
	}
}

impl TryFrom<DataValue> for bool {
	type Error = ValueError;

	fn try_from(value: DataValue) -> Result<Self> {
		value.as_bool().ok_or_else(|| value.mismatch(DataType::Boolean))
	}
}

impl TryFrom<DataValue> for Color {
	type Error = ValueError;

	fn try_from(value: DataValue) -> Result<Self> {
		value.as_color().copied().ok_or_else(|| value.mismatch(DataType::Color))
	}
}

impl TryFrom<DataValue> for Vec3 {
	type Error = ValueError;

	fn try_from(value: DataValue) -> Result<Self> {
		value.as_vec3().copied().ok_or_else(|| value.mismatch(DataType::Vector3))
	}
}

impl TryFrom<DataValue> for Point3 {
	type Error = ValueError;

	fn try_from(value: DataValue) -> Result<Self> {
		value.as_point3().copied().ok_or_else(|| value.mismatch(DataType::Point3))
	}
}
