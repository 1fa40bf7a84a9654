#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use jsonvalue::json::ReadOptions;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "jsonvalue", about = "Fail-soft JSON navigation and editing")]
struct Cli {
	/// Only accept arrays and objects as document roots.
	#[arg(long, global = true)]
	strict: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the document root.
	Info(cmd::info::Args),
	/// Print the value at a path.
	Get(cmd::get::Args),
	/// List the children of the root or of a path.
	Keys(cmd::keys::Args),
	/// Assign a value at a path and print the document.
	Set(cmd::set::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();
	init_tracing();

	let read = if cli.strict { ReadOptions::strict() } else { ReadOptions::default() };

	match cli.command {
		Commands::Info(args) => cmd::info::run(args, read),
		Commands::Get(args) => cmd::get::run(args, read),
		Commands::Keys(args) => cmd::keys::run(args, read),
		Commands::Set(args) => cmd::set::run(args, read),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
