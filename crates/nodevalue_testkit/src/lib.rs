//! Shared test helpers for workspace crates.

/// One well-formed literal per value kind.
#[derive(Debug, Clone, Copy)]
pub struct SampleLiteral {
	/// Kind name as accepted on the command line.
	pub kind: &'static str,
	/// Literal text.
	pub text: &'static str,
	/// Numeric components the literal should produce.
	pub components: &'static [f64],
}

/// Well-formed literals, one per kind, in kind declaration order.
pub const SAMPLES: [SampleLiteral; 5] = [
	SampleLiteral {
		kind: "Number",
		text: "2.5",
		components: &[2.5],
	},
	SampleLiteral {
		kind: "Boolean",
		text: "true",
		components: &[1.0],
	},
	SampleLiteral {
		kind: "Color",
		text: "#ff0000",
		components: &[1.0, 0.0, 0.0, 1.0],
	},
	SampleLiteral {
		kind: "Vector3",
		text: "1,2,3",
		components: &[1.0, 2.0, 3.0],
	},
	SampleLiteral {
		kind: "Point3",
		text: "1,2,3",
		components: &[1.0, 2.0, 3.0],
	},
];

/// Literals that do not fit the shape of the paired kind.
pub const MISMATCHED: [(&str, &str); 5] = [("Number", "true"), ("Boolean", "1"), ("Color", "1,2"), ("Vector3", "#ff0000"), ("Point3", "1,2,3,4")];

/// Parse command stdout as JSON, panicking with the raw text on failure.
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
	serde_json::from_slice(stdout).unwrap_or_else(|err| panic!("stdout should be valid json ({err}): {}", String::from_utf8_lossy(stdout)))
}
