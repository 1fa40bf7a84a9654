use std::path::PathBuf;

use clap::ValueEnum;
use jsonvalue::json::{JsonPath, ReadOptions};

use crate::cmd::util::{load_document, lookup, print_json};
use crate::cmd::{CliError, Result};

/// Coercion applied to the value before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Coercion {
	Bool,
	String,
	Number,
	Int,
	Double,
	Url,
}

impl Coercion {
	fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::String => "string",
			Self::Number => "number",
			Self::Int => "int",
			Self::Double => "double",
			Self::Url => "url",
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	/// Document to read, or `-` for stdin.
	pub file: PathBuf,
	/// Path such as `data[0].City`.
	pub path: JsonPath,
	/// Print a coerced primitive instead of JSON.
	#[arg(long = "as", value_enum)]
	pub coerce: Option<Coercion>,
	/// Single-line JSON output.
	#[arg(long)]
	pub compact: bool,
}

/// Print the value at a path.
pub fn run(args: Args, read: ReadOptions) -> Result<()> {
	let Args { file, path, coerce, compact } = args;

	let doc = load_document(&file, read)?;
	let value = lookup(&doc, &path)?;

	let Some(coerce) = coerce else {
		return print_json(&value, compact);
	};

	let text = match coerce {
		Coercion::Bool => value.bool_value().to_string(),
		Coercion::String => value.string_value(),
		Coercion::Number => value.number_value().to_string(),
		Coercion::Int => value.i64_value().to_string(),
		Coercion::Double => value.f64_value().to_string(),
		Coercion::Url => value
			.as_url()
			.map(String::from)
			.ok_or_else(|| CliError::Coerce {
				path: path.to_string(),
				target: coerce.as_str(),
			})?,
	};
	println!("{text}");

	Ok(())
}
