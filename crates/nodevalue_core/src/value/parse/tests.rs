use crate::value::{Color, DataType, DataValue, ParseOptions, Point3, ValueError, Vec3};

fn parse(kind: DataType, text: &str) -> crate::value::Result<DataValue> {
	DataValue::parse(kind, text, &ParseOptions::default())
}

#[test]
fn parses_scalars() {
	assert_eq!(parse(DataType::Number, " 2.5 "), Ok(DataValue::Number(2.5)));
	assert_eq!(parse(DataType::Number, "-1e3"), Ok(DataValue::Number(-1000.0)));
	assert_eq!(parse(DataType::Boolean, "true"), Ok(DataValue::Boolean(true)));
	assert_eq!(parse(DataType::Boolean, "false"), Ok(DataValue::Boolean(false)));
}

#[test]
fn boolean_has_no_third_state() {
	for text in ["1", "yes", "True", "null", ""] {
		let err = parse(DataType::Boolean, text).expect_err("only true/false parse");
		assert!(matches!(err, ValueError::InvalidPayloadForTag { kind: DataType::Boolean, .. }), "accepted {text:?}");
	}
}

#[test]
fn parses_color_channel_lists() {
	assert_eq!(parse(DataType::Color, "1, 0, 0"), Ok(DataValue::Color(Color::new(1.0, 0.0, 0.0, 1.0))));
	assert_eq!(parse(DataType::Color, "0.2,0.4,0.6,0.5"), Ok(DataValue::Color(Color::new(0.2, 0.4, 0.6, 0.5))));
}

#[test]
fn parses_color_hex_forms() {
	assert_eq!(parse(DataType::Color, "#ff0000"), Ok(DataValue::Color(Color::new(1.0, 0.0, 0.0, 1.0))));
	let value = parse(DataType::Color, "#193296c8").expect("hexa parses");
	assert_eq!(value.as_color().map(|color| color.hexa()), Some("193296c8".to_owned()));
}

#[test]
fn three_channel_color_uses_configured_alpha() {
	let options = ParseOptions {
		default_alpha: 0.25,
		..ParseOptions::default()
	};
	let value = DataValue::parse(DataType::Color, "1,1,1", &options).expect("color parses");
	assert_eq!(value, DataValue::Color(Color::new(1.0, 1.0, 1.0, 0.25)));
}

#[test]
fn vector_and_point_parse_to_their_own_tags() {
	let vector = parse(DataType::Vector3, "1,2,3").expect("vector parses");
	let point = parse(DataType::Point3, "1,2,3").expect("point parses");
	assert_eq!(vector, DataValue::Vector3(Vec3::new(1.0, 2.0, 3.0)));
	assert_eq!(point, DataValue::Point3(Point3::new(1.0, 2.0, 3.0)));
}

#[test]
fn custom_separator_splits_components() {
	let options = ParseOptions {
		separator: ' ',
		..ParseOptions::default()
	};
	let value = DataValue::parse(DataType::Point3, "4 5 6", &options).expect("space separated point parses");
	assert_eq!(value, DataValue::Point3(Point3::new(4.0, 5.0, 6.0)));
}

#[test]
fn shape_mismatches_are_invalid_payloads() {
	let cases = [
		(DataType::Number, "1,2"),
		(DataType::Color, "1,0"),
		(DataType::Color, "1,0,0,1,1"),
		(DataType::Color, "#fff"),
		(DataType::Color, "#gg0000"),
		(DataType::Vector3, "1,2"),
		(DataType::Vector3, "1,2,3,4"),
		(DataType::Point3, "a,b,c"),
	];

	for (kind, text) in cases {
		let err = parse(kind, text).expect_err("mismatched payload fails");
		assert_eq!(
			err,
			ValueError::InvalidPayloadForTag {
				kind,
				payload: text.to_owned(),
			}
		);
	}
}
