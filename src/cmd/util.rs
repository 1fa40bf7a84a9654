use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use jsonvalue::json::{JsonPath, JsonValue, ReadOptions, WriteOptions};

use crate::cmd::{CliError, Result};

/// Read and decode a document; `-` reads stdin.
pub(crate) fn load_document(file: &Path, options: ReadOptions) -> Result<JsonValue> {
	let bytes = if file == Path::new("-") {
		let mut buf = Vec::new();
		io::stdin().read_to_end(&mut buf).map_err(|source| CliError::Read {
			path: file.to_path_buf(),
			source,
		})?;
		buf
	} else {
		fs::read(file).map_err(|source| CliError::Read {
			path: file.to_path_buf(),
			source,
		})?
	};

	tracing::debug!(file = %file.display(), len = bytes.len(), "document read");
	let doc = JsonValue::from_slice(&bytes, options);
	match doc.error() {
		Some(err) => Err(CliError::Document {
			path: PathBuf::from(file),
			source: err.clone(),
		}),
		None => Ok(doc),
	}
}

/// Resolve `path` against `doc`, turning a failed lookup into an error.
pub(crate) fn lookup(doc: &JsonValue, path: &JsonPath) -> Result<JsonValue> {
	let value = doc.get(path);
	match value.error() {
		Some(err) => Err(CliError::Lookup {
			path: path.to_string(),
			source: err.clone(),
		}),
		None => Ok(value),
	}
}

/// Write the JSON encoding of `value` followed by a newline.
pub(crate) fn print_json(value: &JsonValue, compact: bool) -> Result<()> {
	let options = if compact { WriteOptions::compact() } else { WriteOptions::pretty() };
	let data = value.raw_data(options)?;

	let mut stdout = io::stdout().lock();
	stdout.write_all(&data)?;
	stdout.write_all(b"\n")?;
	Ok(())
}
