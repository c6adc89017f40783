use thiserror::Error;

use crate::value::DataType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors produced while building or unpacking values from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
	/// Payload text does not fit the shape required by the declared kind.
	#[error("invalid payload for {kind}: {payload:?}")]
	InvalidPayloadForTag {
		/// Declared value kind.
		kind: DataType,
		/// Offending payload text.
		payload: String,
	},
	/// Typed extraction was attempted under the wrong kind.
	#[error("tag mismatch: expected {expected}, got {got}")]
	TagMismatch {
		/// Kind the caller asked for.
		expected: DataType,
		/// Kind the value actually carries.
		got: DataType,
	},
	/// Hex color text has the wrong length or non-hex digits.
	#[error("invalid hex color: {input:?} (expected {expected} hex digits)")]
	InvalidHexColor {
		/// User-provided hex text.
		input: String,
		/// Number of digits the requested form needs.
		expected: usize,
	},
	/// Kind name is not one of the known kinds.
	#[error("unknown data type: {name}")]
	UnknownDataType {
		/// User-provided kind name.
		name: String,
	},
}
