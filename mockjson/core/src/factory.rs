use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::builder::build_submodule;
use crate::config::MockConfig;
use crate::loader::{load_modules, RawModule};
use crate::registry::MockRegistry;
use crate::render::render_flow;
use crate::rewrite::ExpressionRewriter;
use crate::stub::{build_mock_table, MockObject};
use crate::tree::{ParsedModule, ParsedTree};
use crate::FixtureError;

/// Owns a parsed fixture tree and renders it as declarations or stubs.
#[derive(Debug, Clone)]
pub struct MockFactory {
	directory: Option<PathBuf>,
	config: MockConfig,
	tree: ParsedTree,
}

impl MockFactory {
	/// Load and parse every module under `directory` with the default config.
	pub fn new(directory: impl Into<PathBuf>) -> Result<Self, FixtureError> {
		Self::with_config(directory, MockConfig::default())
	}

	pub fn with_config(
		directory: impl Into<PathBuf>,
		config: MockConfig,
	) -> Result<Self, FixtureError> {
		let directory = directory.into();
		let modules = load_modules(&directory, &config.extension)?;
		let tree = build_tree(modules, &config)?;
		Ok(Self { directory: Some(directory), config, tree })
	}

	/// Build from in-memory fixtures; no file system access.
	pub fn from_sources(modules: Vec<RawModule>, config: MockConfig) -> Result<Self, FixtureError> {
		let tree = build_tree(modules, &config)?;
		Ok(Self { directory: None, config, tree })
	}

	/// Rebuild the tree from the directory. In-memory factories are left unchanged.
	///
	/// On error the previous tree is kept.
	pub fn reload(&mut self) -> Result<(), FixtureError> {
		if let Some(directory) = &self.directory {
			let modules = load_modules(directory, &self.config.extension)?;
			self.tree = build_tree(modules, &self.config)?;
		}
		Ok(())
	}

	pub fn directory(&self) -> Option<&Path> {
		self.directory.as_deref()
	}

	pub fn config(&self) -> &MockConfig {
		&self.config
	}

	pub fn tree(&self) -> &ParsedTree {
		&self.tree
	}

	/// Flow type declarations for every module.
	pub fn to_flow_string(&self) -> String {
		render_flow(&self.tree, &self.config.default_marker)
	}

	/// The `{module name -> stub object}` table.
	pub fn to_mocks(&self) -> BTreeMap<String, MockObject> {
		build_mock_table(&self.tree, &self.config.default_marker)
	}

	/// Register this factory's stub table, returning the registered module names.
	pub fn register(&self, registry: &mut MockRegistry) -> Vec<String> {
		registry.register_all(self.to_mocks())
	}
}

fn build_tree(modules: Vec<RawModule>, config: &MockConfig) -> Result<ParsedTree, FixtureError> {
	let rewriter = ExpressionRewriter::try_new(config.generator_prefix.as_str())?;
	let mut tree = ParsedTree::new();
	for module in modules {
		let mut parsed = ParsedModule::new();
		for submodule in module.submodules {
			let functions =
				build_submodule(&module.name, &submodule.name, &submodule.raw, &rewriter)?;
			parsed.insert(submodule.name, functions);
		}
		debug!(module = %module.name, "parsed fixture module");
		tree.insert(module.name, parsed);
	}
	Ok(tree)
}
