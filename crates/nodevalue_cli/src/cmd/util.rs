use nodevalue::value::{DataType, DataValue};

use crate::cmd::Result;

/// Parse a kind name given on the command line.
pub(crate) fn parse_kind(name: &str) -> Result<DataType> {
	Ok(name.parse()?)
}

/// Print a serializable payload as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", encode_json(payload)?);
	Ok(())
}

/// Encode a serializable payload as pretty JSON text.
pub(crate) fn encode_json<T: serde::Serialize>(payload: &T) -> Result<String> {
	serde_json::to_string_pretty(payload).map_err(|err| format!("failed to encode json: {err}").into())
}

/// Render numeric components as a separated list.
pub(crate) fn render_components(components: &[f64]) -> String {
	components.iter().map(f64::to_string).collect::<Vec<_>>().join(", ")
}

/// Build the JSON view of one value.
pub(crate) fn describe(value: &DataValue) -> ValueJson {
	let kind = value.data_type();
	ValueJson {
		kind: kind.as_str().to_owned(),
		shape: kind.shape().to_owned(),
		display: value.to_string(),
		components: value.components(),
		hex: value.as_color().map(|color| color.hex()),
		hexa: value.as_color().map(|color| color.hexa()),
	}
}

/// Print one value as `key: value` lines or JSON.
pub(crate) fn print_value(value: &DataValue, json: bool) -> Result<()> {
	let view = describe(value);
	if json {
		return emit_json(&view);
	}

	println!("kind: {}", view.kind);
	println!("shape: {}", view.shape);
	println!("value: {}", view.display);
	println!("components: {}", render_components(&view.components));
	if let Some(hex) = &view.hex {
		println!("hex: {hex}");
	}
	if let Some(hexa) = &view.hexa {
		println!("hexa: {hexa}");
	}
	Ok(())
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ValueJson {
	pub(crate) kind: String,
	pub(crate) shape: String,
	pub(crate) display: String,
	pub(crate) components: Vec<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) hex: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) hexa: Option<String>,
}
