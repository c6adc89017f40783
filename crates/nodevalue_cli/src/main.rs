#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "nodevalue", about = "Inspect and convert node graph values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Kinds(cmd::kinds::Args),
	Parse(cmd::parse::Args),
	Default(cmd::defaults::Args),
	Color(cmd::color::Args),
}

fn main() {
	pretty_env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Kinds(args) => cmd::kinds::run(args),
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Default(args) => cmd::defaults::run(args),
		Commands::Color(args) => cmd::color::run(args),
	}
}
