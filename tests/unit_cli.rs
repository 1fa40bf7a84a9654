#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use jsonvalue_testkit::fixture_path;
use serde_json::{Value, json};

#[test]
fn info_summarizes_root() {
	let output = run(&["info", &fixture("login_response.json")]);
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");

	assert!(stdout.contains("kind: object"), "unexpected output: {stdout}");
	assert!(stdout.contains("count: 4"), "unexpected output: {stdout}");
	assert!(stdout.contains("empty: false"), "unexpected output: {stdout}");
}

#[test]
fn get_prints_json_at_path() {
	let json = run_json(&["get", &fixture("login_response.json"), "data[0]", "--compact"]);
	assert_eq!(json["City"], "Pune");
	assert_eq!(json["EmployeeCode"], 10452);

	let city = run_json(&["get", &fixture("login_response.json"), "data[0].City"]);
	assert_eq!(city, json!("Pune"));
}

#[test]
fn get_coerces_on_request() {
	let output = run(&["get", &fixture("login_response.json"), "data[0].Pmobile1", "--as", "int"]);
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "9822012345");

	let output = run(&["get", &fixture("login_response.json"), "data[1].IsActive", "--as", "bool"]);
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

#[test]
fn get_reports_failed_lookup() {
	let output = run_failing(&["get", &fixture("login_response.json"), "data[5].City"]);
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: data[5].City: Array[5] is out of bounds (code 900)"), "unexpected stderr: {stderr}");
}

#[test]
fn get_rejects_malformed_path() {
	let output = run_failing(&["get", &fixture("login_response.json"), "data[x]"]);
	assert!(!output.stderr.is_empty());
}

#[test]
fn keys_lists_children_with_kinds() {
	let output = run(&["keys", &fixture("login_response.json"), "data[0]"]);
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	let lines: Vec<&str> = stdout.lines().collect();

	assert_eq!(lines[0], "ISPName: string");
	assert_eq!(lines[1], "EmployeeCode: number");
	assert!(lines.contains(&"Pmobile1: string"));
}

#[test]
fn set_rewrites_document() {
	let json = run_json(&["set", &fixture("login_response.json"), "data[1].City", "\"Thane\"", "--compact"]);
	assert_eq!(json["data"][1]["City"], "Thane");
	assert_eq!(json["data"][0]["City"], "Pune");
}

#[test]
fn set_refuses_unreachable_path() {
	let output = run_failing(&["set", &fixture("login_response.json"), "meta.cursor.next", "1"]);
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("cannot write meta.cursor.next"), "unexpected stderr: {stderr}");
}

#[test]
fn set_refuses_null_through_missing_element() {
	let output = run_failing(&["set", &fixture("login_response.json"), "data[9].City", "null", "--compact"]);
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("cannot write data[9].City"), "unexpected stderr: {stderr}");
	assert!(output.stdout.is_empty());
}

#[test]
fn strict_mode_rejects_scalar_roots() {
	run(&["info", &fixture("scalar.json")]);
	let output = run_failing(&["--strict", "info", &fixture("scalar.json")]);
	assert!(String::from_utf8_lossy(&output.stderr).contains("cannot decode"));
}

#[test]
fn broken_document_fails() {
	let output = run_failing(&["info", &fixture("broken.json")]);
	assert!(String::from_utf8_lossy(&output.stderr).contains("cannot decode"));
}

#[test]
fn reads_stdin_when_file_is_dash() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_jsonvalue"))
		.args(["get", "-", "[1].name", "--compact"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(br#"[{"name": "a"}, {"name": "b"}]"#)
		.expect("stdin accepts input");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success(), "command should succeed");
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "\"b\"");
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn run(args: &[&str]) -> Output {
	let output = Command::new(env!("CARGO_BIN_EXE_jsonvalue")).args(args).output().expect("command executes");
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	output
}

fn run_failing(args: &[&str]) -> Output {
	let output = Command::new(env!("CARGO_BIN_EXE_jsonvalue")).args(args).output().expect("command executes");
	assert!(!output.status.success(), "command should fail");
	output
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
