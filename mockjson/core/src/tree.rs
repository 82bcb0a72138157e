use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::descriptor::FunctionDescriptor;

/// Module name -> submodule name -> function name -> descriptor.
///
/// Built once; every rendering is a pure read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedTree {
	modules: BTreeMap<String, ParsedModule>,
}

impl ParsedTree {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: String, module: ParsedModule) {
		self.modules.insert(name, module);
	}

	pub fn get(&self, module: &str) -> Option<&ParsedModule> {
		self.modules.get(module)
	}

	pub fn modules(&self) -> impl Iterator<Item = (&str, &ParsedModule)> {
		self.modules.iter().map(|(name, module)| (name.as_str(), module))
	}

	pub fn function(
		&self,
		module: &str,
		submodule: &str,
		function: &str,
	) -> Option<&FunctionDescriptor> {
		self.get(module)?.get(submodule)?.get(function)
	}

	pub fn len(&self) -> usize {
		self.modules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.modules.is_empty()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedModule {
	submodules: BTreeMap<String, Submodule>,
}

impl ParsedModule {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: String, submodule: Submodule) {
		self.submodules.insert(name, submodule);
	}

	pub fn get(&self, submodule: &str) -> Option<&Submodule> {
		self.submodules.get(submodule)
	}

	pub fn submodules(&self) -> impl Iterator<Item = (&str, &Submodule)> {
		self.submodules.iter().map(|(name, submodule)| (name.as_str(), submodule))
	}
}

/// Functions of one fixture file, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submodule {
	functions: Vec<(String, FunctionDescriptor)>,
}

impl Submodule {
	pub fn new() -> Self {
		Self::default()
	}

	/// Last write wins; a redeclared function keeps its original position.
	pub fn insert(&mut self, name: String, function: FunctionDescriptor) {
		match self.functions.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, slot)) => *slot = function,
			None => self.functions.push((name, function)),
		}
	}

	pub fn get(&self, function: &str) -> Option<&FunctionDescriptor> {
		self.functions.iter().find(|(name, _)| name == function).map(|(_, function)| function)
	}

	pub fn functions(&self) -> impl Iterator<Item = (&str, &FunctionDescriptor)> {
		self.functions.iter().map(|(name, function)| (name.as_str(), function))
	}

	pub fn len(&self) -> usize {
		self.functions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.functions.is_empty()
	}
}

impl Serialize for Submodule {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.functions())
	}
}
