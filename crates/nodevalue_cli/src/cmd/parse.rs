use log::debug;
use nodevalue::value::{DataValue, ParseOptions};

use crate::cmd::util::{parse_kind, print_value};

#[derive(clap::Args)]
pub struct Args {
	/// Kind name, case-insensitive.
	pub kind: String,
	/// Literal text for the kind.
	#[arg(allow_hyphen_values = true)]
	pub literal: String,
	/// Alpha for three-channel color literals.
	#[arg(long)]
	pub alpha: Option<f64>,
	/// Component separator.
	#[arg(long)]
	pub separator: Option<char>,
	#[arg(long)]
	pub json: bool,
}

/// Parse one literal and describe the resulting value.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args {
		kind,
		literal,
		alpha,
		separator,
		json,
	} = args;

	let kind = parse_kind(&kind)?;
	let mut options = ParseOptions::default();
	if let Some(alpha) = alpha {
		options.default_alpha = alpha;
	}
	if let Some(separator) = separator {
		options.separator = separator;
	}
	debug!("parse kind={kind} literal={literal:?} options={options:?}");

	let value = DataValue::parse(kind, &literal, &options)?;
	print_value(&value, json)
}
