use log::debug;
use nodevalue::value::{DataType, DataValue, ParseOptions};

use crate::cmd::util::print_value;

#[derive(clap::Args)]
pub struct Args {
	/// Hex color (`ff0000`, `#ff0000cc`) or channel list (`1,0,0[,1]`).
	pub input: String,
	#[arg(long)]
	pub json: bool,
}

/// Convert a color between channel and hex notation.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let literal = normalize_color_input(&args.input);
	debug!("color input={:?} literal={literal:?}", args.input);

	let value = DataValue::parse(DataType::Color, &literal, &ParseOptions::default())?;
	print_value(&value, args.json)
}

/// Bare hex digits get a `#` so the color parser treats them as hex.
fn normalize_color_input(input: &str) -> String {
	let trimmed = input.trim();
	let bare_hex = matches!(trimmed.len(), 6 | 8) && trimmed.bytes().all(|byte| byte.is_ascii_hexdigit());
	if bare_hex { format!("#{trimmed}") } else { trimmed.to_owned() }
}
