#![allow(missing_docs)]

use std::process::{Command, Output};

use nodevalue_testkit::{MISMATCHED, SAMPLES, stdout_json};
use serde_json::Value;

#[test]
fn kinds_json_lists_all_five_kinds() {
	let json = run_json(&["kinds", "--json"]);

	let names: Vec<&str> = json["kinds"]
		.as_array()
		.expect("kinds array")
		.iter()
		.filter_map(|kind| kind["name"].as_str())
		.collect();
	assert_eq!(names, ["Number", "Boolean", "Color", "Vector3", "Point3"]);
	assert_eq!(json["kinds"][2]["components"], 4);
}

#[test]
fn parse_json_reports_kind_and_components_for_samples() {
	for sample in SAMPLES {
		let json = run_json(&["parse", sample.kind, sample.text, "--json"]);

		assert_eq!(json["kind"], sample.kind);
		let components: Vec<f64> = json["components"]
			.as_array()
			.expect("components array")
			.iter()
			.filter_map(Value::as_f64)
			.collect();
		assert_eq!(components, sample.components, "components for {}", sample.kind);
	}
}

#[test]
fn vector_and_point_stay_distinct_on_output() {
	let vector = run_json(&["parse", "vector3", "1,2,3", "--json"]);
	let point = run_json(&["parse", "point3", "1,2,3", "--json"]);

	assert_eq!(vector["components"], point["components"]);
	assert_eq!(vector["kind"], "Vector3");
	assert_eq!(point["kind"], "Point3");
	assert_eq!(point["display"], "Point3(1, 2, 3)");
}

#[test]
fn parse_honours_alpha_and_separator_flags() {
	let json = run_json(&["parse", "color", "1 1 1", "--separator", " ", "--alpha", "0.5", "--json"]);

	assert_eq!(json["hexa"], "ffffff7f");
}

#[test]
fn color_converts_bare_hex() {
	let json = run_json(&["color", "193296c8", "--json"]);

	assert_eq!(json["kind"], "Color");
	assert_eq!(json["hex"], "193296");
	assert_eq!(json["hexa"], "193296c8");
}

#[test]
fn default_json_is_zeroed_value_of_kind() {
	let json = run_json(&["default", "Point3", "--json"]);

	assert_eq!(json["kind"], "Point3");
	assert_eq!(json["components"], serde_json::json!([0.0, 0.0, 0.0]));
}

#[test]
fn mismatched_literal_fails_with_invalid_payload() {
	for (kind, text) in MISMATCHED {
		let output = run(&["parse", kind, text]);

		assert!(!output.status.success(), "{kind} {text:?} should fail");
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("invalid payload for"), "unexpected stderr: {stderr}");
	}
}

#[test]
fn unknown_kind_fails() {
	let output = run(&["default", "Quaternion"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown data type: Quaternion"));
}

#[test]
fn text_output_lists_fields() {
	let output = run(&["parse", "number", "2.5"]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("kind: Number"), "unexpected stdout: {stdout}");
	assert!(stdout.contains("value: 2.5"), "unexpected stdout: {stdout}");
	assert!(!stdout.contains("hex:"), "numbers have no hex form: {stdout}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_nodevalue")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"nodevalue command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	stdout_json(&output.stdout)
}
