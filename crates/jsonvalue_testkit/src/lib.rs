//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as raw bytes.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	fs::read(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()))
}

/// Decode a fixture file with plain `serde_json`.
pub fn fixture_json(name: &str) -> Value {
	serde_json::from_slice(&fixture_bytes(name)).unwrap_or_else(|err| panic!("fixture {name} should be valid json: {err}"))
}
