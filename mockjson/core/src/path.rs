use std::fmt;

/// Fully qualified location of a function within a fixture tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionPath {
	module: String,
	submodule: String,
	function: String,
}

impl FunctionPath {
	pub fn new(
		module: impl Into<String>,
		submodule: impl Into<String>,
		function: impl Into<String>,
	) -> Self {
		Self { module: module.into(), submodule: submodule.into(), function: function.into() }
	}

	pub fn module(&self) -> &str {
		&self.module
	}

	pub fn submodule(&self) -> &str {
		&self.submodule
	}

	pub fn function(&self) -> &str {
		&self.function
	}
}

impl fmt::Display for FunctionPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.module, self.submodule, self.function)
	}
}
