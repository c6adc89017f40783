use nodevalue::value::DataType;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// List every value kind with its payload shape.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	if args.json {
		let payload = KindsJson {
			kinds: DataType::ALL
				.into_iter()
				.map(|kind| KindJson {
					name: kind.as_str().to_owned(),
					shape: kind.shape().to_owned(),
					components: kind.component_count(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	for kind in DataType::ALL {
		println!("{:<8} {:<7} components={}", kind.as_str(), kind.shape(), kind.component_count());
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct KindJson {
	name: String,
	shape: String,
	components: usize,
}

#[derive(serde::Serialize)]
struct KindsJson {
	kinds: Vec<KindJson>,
}
