use nodevalue::value::DataValue;

use crate::cmd::util::{parse_kind, print_value};

#[derive(clap::Args)]
pub struct Args {
	pub kind: String,
	#[arg(long)]
	pub json: bool,
}

/// Describe the initial value an unconnected input of `kind` holds.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let kind = parse_kind(&args.kind)?;
	print_value(&DataValue::default_for(kind), args.json)
}
