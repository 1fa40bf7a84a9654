use std::path::PathBuf;

use jsonvalue::json::{JsonPath, JsonValue, ReadOptions};

use crate::cmd::util::{load_document, print_json};
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Document to read, or `-` for stdin.
	pub file: PathBuf,
	/// Path to assign, such as `data[0].City`.
	pub path: JsonPath,
	/// JSON text for the new value; bare scalars are accepted.
	pub value: String,
	/// Single-line JSON output.
	#[arg(long)]
	pub compact: bool,
}

/// Assign a value at a path and print the updated document.
pub fn run(args: Args, read: ReadOptions) -> Result<()> {
	let Args { file, path, value, compact } = args;

	let mut doc = load_document(&file, read)?;
	let value = JsonValue::parse(&value);
	if let Some(err) = value.error() {
		return Err(CliError::Value { source: err.clone() });
	}

	doc.set(&path, value.clone());
	let written = doc.get(&path);
	if written.error().is_some() || written != value {
		return Err(CliError::Unwritable { path: path.to_string() });
	}
	tracing::debug!(path = %path, "value assigned");

	print_json(&doc, compact)
}
