use std::path::PathBuf;

use jsonvalue::json::ReadOptions;

use crate::cmd::Result;
use crate::cmd::util::load_document;

#[derive(clap::Args)]
pub struct Args {
	/// Document to read, or `-` for stdin.
	pub file: PathBuf,
}

/// Print the root kind and child count.
pub fn run(args: Args, read: ReadOptions) -> Result<()> {
	let Args { file } = args;

	let doc = load_document(&file, read)?;

	println!("path: {}", file.display());
	println!("kind: {}", doc.kind());
	println!("count: {}", doc.len());
	println!("empty: {}", doc.is_empty());

	Ok(())
}
