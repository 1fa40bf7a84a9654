use std::path::PathBuf;

use jsonvalue::json::{JsonPath, ReadOptions};

use crate::cmd::Result;
use crate::cmd::util::{load_document, lookup};

#[derive(clap::Args)]
pub struct Args {
	/// Document to read, or `-` for stdin.
	pub file: PathBuf,
	/// Container to list; the root when omitted.
	pub path: Option<JsonPath>,
}

/// Print `key: kind` for every child.
pub fn run(args: Args, read: ReadOptions) -> Result<()> {
	let Args { file, path } = args;

	let doc = load_document(&file, read)?;
	let target = match &path {
		Some(path) => lookup(&doc, path)?,
		None => doc,
	};

	for (key, child) in &target {
		println!("{key}: {}", child.kind());
	}

	Ok(())
}
