use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn flow(args: &[&str]) -> Result<Output, anyhow::Error> {
	Ok(Command::new(env!("CARGO_BIN_EXE_mockjson-flow")).args(args).output()?)
}

fn flow_with_log(args: &[&str], rust_log: Option<&str>) -> Result<Output, anyhow::Error> {
	let mut command = Command::new(env!("CARGO_BIN_EXE_mockjson-flow"));
	match rust_log {
		Some(filter) => command.env("RUST_LOG", filter),
		None => command.env_remove("RUST_LOG"),
	};
	Ok(command.args(args).output()?)
}

fn dir(root: &TempDir) -> String {
	root.path().to_string_lossy().into_owned()
}

fn write_fixture(
	root: &Path,
	module: &str,
	submodule: &str,
	raw: &str,
) -> Result<(), anyhow::Error> {
	fs::create_dir_all(root.join(module))?;
	fs::write(root.join(module).join(format!("{}.json", submodule)), raw)?;
	Ok(())
}

#[test]
fn test_missing_directory_exits_with_usage_error() -> Result<(), anyhow::Error> {
	let output = flow(&[])?;
	assert_eq!(output.status.code(), Some(2));
	assert!(!output.stderr.is_empty());
	Ok(())
}

#[test]
fn test_prints_declarations() -> Result<(), anyhow::Error> {
	let root = TempDir::new()?;
	let raw = r#"{"_": {"returns": "success"}, "foo": {"args": ["a:string"]}}"#;
	write_fixture(root.path(), "basic", "_", raw)?;

	let output = flow(&[dir(&root).as_str()])?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.starts_with("declare module \"basic\" {"));
	assert!(stdout.contains("(): string,"));
	assert!(stdout.contains("foo(a:string): void,"));
	Ok(())
}

#[test]
fn test_invalid_fixture_fails() -> Result<(), anyhow::Error> {
	let root = TempDir::new()?;
	write_fixture(root.path(), "broken", "_", r#"{"_": {"args": 1}}"#)?;

	let output = flow(&[dir(&root).as_str()])?;
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8(output.stderr)?.contains("args must be an array for broken._._"));
	Ok(())
}

#[test]
fn test_writes_json_tree_to_file() -> Result<(), anyhow::Error> {
	let root = TempDir::new()?;
	write_fixture(root.path(), "m", "sub", r#"{"f": {"returns": [1, 2]}}"#)?;
	let out = root.path().join("tree.json");

	let out_arg = out.to_string_lossy().into_owned();
	let output = flow(&[dir(&root).as_str(), "--json", "--output", out_arg.as_str()])?;
	assert!(output.status.success());

	let tree: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
	assert_eq!(tree["m"]["sub"]["f"]["returns"]["type"], "number[]");
	Ok(())
}

#[test]
fn test_custom_marker() -> Result<(), anyhow::Error> {
	let root = TempDir::new()?;
	write_fixture(root.path(), "m", "index", r#"{"index": {"returns": 1}}"#)?;

	let output = flow(&[dir(&root).as_str(), "--marker", "index"])?;
	assert!(String::from_utf8(output.stdout)?.contains("    (): number,"));
	Ok(())
}

#[test]
fn test_log_level_follows_rust_log() -> Result<(), anyhow::Error> {
	let root = TempDir::new()?;
	write_fixture(root.path(), "m", "_", r#"{"_": {}}"#)?;
	let path = dir(&root);

	let quiet = flow_with_log(&[path.as_str()], None)?;
	assert!(quiet.status.success());
	assert!(!String::from_utf8(quiet.stderr)?.contains("loading fixtures"));

	let verbose = flow_with_log(&[path.as_str(), "--verbose"], None)?;
	assert!(String::from_utf8(verbose.stderr)?.contains("loading fixtures"));

	let env_debug = flow_with_log(&[path.as_str()], Some("debug"))?;
	assert!(String::from_utf8(env_debug.stderr)?.contains("loading fixtures"));

	let env_warn = flow_with_log(&[path.as_str(), "--verbose"], Some("warn"))?;
	assert!(!String::from_utf8(env_warn.stderr)?.contains("loading fixtures"));
	Ok(())
}
