use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::FixtureError;

/// One fixture file, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSubmodule {
	pub name: String,
	pub raw: String,
}

impl RawSubmodule {
	pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
		Self { name: name.into(), raw: raw.into() }
	}
}

/// One module directory and its fixture files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawModule {
	pub name: String,
	pub path: Option<PathBuf>,
	pub submodules: Vec<RawSubmodule>,
}

impl RawModule {
	pub fn new(name: impl Into<String>, submodules: Vec<RawSubmodule>) -> Self {
		Self { name: name.into(), path: None, submodules }
	}
}

/// Read `root/<module>/<submodule>.<extension>` fixtures.
///
/// Entries are visited in file-name order. Non-directories at the root (including
/// dangling symlinks) and files with another extension inside a module are skipped.
/// Symlinks that resolve to a directory load as modules.
pub fn load_modules(root: &Path, extension: &str) -> Result<Vec<RawModule>, FixtureError> {
	let mut modules = Vec::new();
	for entry in entries(root)? {
		if !entry.path().is_dir() {
			debug!(path = %entry.path().display(), "skipping non-directory fixture entry");
			continue;
		}

		let name = entry.file_name().to_string_lossy().into_owned();
		let submodules = load_submodules(entry.path(), extension)?;
		debug!(module = %name, submodules = submodules.len(), "loaded fixture module");
		modules.push(RawModule { name, path: Some(entry.into_path()), submodules });
	}
	Ok(modules)
}

fn load_submodules(dir: &Path, extension: &str) -> Result<Vec<RawSubmodule>, FixtureError> {
	let mut submodules = Vec::new();
	for entry in entries(dir)? {
		let path = entry.path();
		if !path.is_file() || path.extension().is_none_or(|ext| ext != extension) {
			continue;
		}

		let Some(name) = path.file_stem().map(|stem| stem.to_string_lossy().into_owned()) else {
			continue;
		};
		let raw = std::fs::read_to_string(path)
			.map_err(|source| FixtureError::ReadFile { path: path.to_path_buf(), source })?;
		debug!(path = %path.display(), submodule = %name, "read fixture file");
		submodules.push(RawSubmodule { name, raw });
	}
	Ok(submodules)
}

fn entries(dir: &Path) -> Result<Vec<walkdir::DirEntry>, FixtureError> {
	WalkDir::new(dir)
		.min_depth(1)
		.max_depth(1)
		.follow_links(false)
		.sort_by_file_name()
		.into_iter()
		.collect::<Result<Vec<_>, _>>()
		.map_err(|source| FixtureError::ReadDir { path: dir.to_path_buf(), source })
}
