use std::fmt;

/// Three-component vector: a direction or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
	/// X component.
	pub x: f64,
	/// Y component.
	pub y: f64,
	/// Z component.
	pub z: f64,
}

impl Vec3 {
	/// Zero vector.
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

	/// Build a vector from components.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Components as `[x, y, z]`.
	pub const fn components(self) -> [f64; 3] {
		[self.x, self.y, self.z]
	}
}

impl fmt::Display for Vec3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
	}
}

/// Three-component position.
///
/// Shares its layout with [`Vec3`] but is a separate type, so a point never
/// stands in for a vector without an explicit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
	/// X coordinate.
	pub x: f64,
	/// Y coordinate.
	pub y: f64,
	/// Z coordinate.
	pub z: f64,
}

impl Point3 {
	/// Origin point.
	pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

	/// Build a point from coordinates.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Coordinates as `[x, y, z]`.
	pub const fn components(self) -> [f64; 3] {
		[self.x, self.y, self.z]
	}
}

impl fmt::Display for Point3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Point3({}, {}, {})", self.x, self.y, self.z)
	}
}

impl From<Point3> for Vec3 {
	fn from(point: Point3) -> Self {
		Self::new(point.x, point.y, point.z)
	}
}

impl From<Vec3> for Point3 {
	fn from(vector: Vec3) -> Self {
		Self::new(vector.x, vector.y, vector.z)
	}
}

#[cfg(test)]
mod tests;
