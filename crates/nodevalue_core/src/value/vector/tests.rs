use crate::value::{Point3, Vec3};

#[test]
fn constants_are_zeroed() {
	assert_eq!(Vec3::ZERO, Vec3::default());
	assert_eq!(Point3::ORIGIN, Point3::default());
	assert_eq!(Vec3::ZERO.components(), [0.0, 0.0, 0.0]);
}

#[test]
fn explicit_conversion_keeps_components() {
	let point = Point3::new(1.0, 2.0, 3.0);
	let vector = Vec3::from(point);
	assert_eq!(vector.components(), point.components());
	assert_eq!(Point3::from(vector), point);
}

#[test]
fn display_names_the_nominal_type() {
	assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_string(), "Vec3(1, 2, 3)");
	assert_eq!(Point3::new(1.0, 2.5, -3.0).to_string(), "Point3(1, 2.5, -3)");
}
