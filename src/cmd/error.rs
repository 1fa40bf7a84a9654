use std::io;
use std::path::PathBuf;

use jsonvalue::json::JsonError;
use thiserror::Error;

/// Result alias for command handlers.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by the command line.
#[derive(Debug, Error)]
pub enum CliError {
	#[error("cannot read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("cannot decode {}: {source}", .path.display())]
	Document { path: PathBuf, source: JsonError },
	#[error("{path}: {source} (code {})", .source.code())]
	Lookup { path: String, source: JsonError },
	#[error("value at {path} is not a {target}")]
	Coerce { path: String, target: &'static str },
	#[error("cannot write {path}: an ancestor is missing or not a container")]
	Unwritable { path: String },
	#[error("invalid value argument: {source}")]
	Value { source: JsonError },
	#[error(transparent)]
	Json(#[from] JsonError),
	#[error("failed to write output: {0}")]
	Io(#[from] io::Error),
}
