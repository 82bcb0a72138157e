use std::path::PathBuf;

use crate::generator::GeneratorExpressionError;
use crate::path::FunctionPath;

/// Errors thrown while building a [crate::ParsedTree].
///
/// All of them abort the whole construction; there is no partial tree.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
	#[error("Failed to read fixture directory {}: {source}", path.display())]
	ReadDir {
		path: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to read fixture file {}: {source}", path.display())]
	ReadFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Malformed fixture {module}.{submodule}: {source}")]
	MalformedFixture {
		module: String,
		submodule: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Fixture {module}.{submodule} must be an object keyed by function name")]
	FixtureNotObject { module: String, submodule: String },

	#[error("function entries must be objects for {path}")]
	FunctionNotObject { path: FunctionPath },

	#[error("args must be an array for {path}")]
	ArgumentList { path: FunctionPath },

	#[error("{reason} for {path}")]
	ArgumentDescriptor { path: FunctionPath, reason: String },

	#[error("Invalid generator expression for {path}: {source}")]
	Generator {
		path: FunctionPath,
		#[source]
		source: GeneratorExpressionError,
	},

	#[error("Invalid expression pattern: {0}")]
	Pattern(#[source] regex::Error),
}

impl FixtureError {
	/// The function the error is attributed to, if it is function scoped.
	pub fn function_path(&self) -> Option<&FunctionPath> {
		match self {
			FixtureError::FunctionNotObject { path }
			| FixtureError::ArgumentList { path }
			| FixtureError::ArgumentDescriptor { path, .. }
			| FixtureError::Generator { path, .. } => Some(path),
			_ => None,
		}
	}
}

/// Errors thrown when invoking a [crate::Stub] or [crate::MockObject].
#[derive(Debug, thiserror::Error)]
pub enum StubError {
	#[error("Wrong number of args for {path}; expected {expected}, got {actual} instead.")]
	Arity { path: FunctionPath, expected: usize, actual: usize },

	#[error("{path} is not callable")]
	NotCallable { path: String },

	#[error("{path} has no member named {member}")]
	UnknownMember { path: String, member: String },

	#[error("Generator failed for {path}: {source}")]
	Generator {
		path: FunctionPath,
		#[source]
		source: mockjson_fake::FakeError,
	},
}
