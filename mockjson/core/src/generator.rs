use mockjson_fake::{FakeError, Generator};
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::FixtureError;

/// Errors thrown when a rewritten expression cannot be resolved to a generator call.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorExpressionError {
	#[error("'{0}' is not a generator call expression")]
	NotACall(String),

	#[error("invalid arguments in '{expression}': {source}")]
	InvalidArguments {
		expression: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("unknown generator '{0}'")]
	UnknownGenerator(String),
}

/// Resolves `<prefix>name(args)` strings against the generator table.
#[derive(Debug, Clone)]
pub struct GeneratorParser {
	pattern: Regex,
	prefix: String,
}

impl GeneratorParser {
	const CALL_PATTERN: &str =
		r"^([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)\s*\((.*)\)\s*;?$";

	pub fn try_new(prefix: impl Into<String>) -> Result<Self, FixtureError> {
		let pattern = Regex::new(Self::CALL_PATTERN).map_err(FixtureError::Pattern)?;
		Ok(Self { pattern, prefix: prefix.into() })
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Parse `text` if it starts with the prefix.
	///
	/// Returns `Ok(None)` for plain strings, which stay literal values.
	pub fn parse(&self, text: &str) -> Result<Option<GeneratorCall>, GeneratorExpressionError> {
		let Some(expression) = text.strip_prefix(self.prefix.as_str()) else {
			return Ok(None);
		};
		let expression = expression.trim();

		let caps = self
			.pattern
			.captures(expression)
			.ok_or_else(|| GeneratorExpressionError::NotACall(text.to_string()))?;
		let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
		let raw_args = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();

		let args: Vec<Value> = if raw_args.is_empty() {
			Vec::new()
		} else {
			serde_json::from_str(&format!("[{}]", raw_args)).map_err(|source| {
				GeneratorExpressionError::InvalidArguments { expression: text.to_string(), source }
			})?
		};

		let generator = mockjson_fake::lookup(name)
			.ok_or_else(|| GeneratorExpressionError::UnknownGenerator(name.to_string()))?;

		Ok(Some(GeneratorCall { expression: text.to_string(), generator, args }))
	}
}

/// A generator expression resolved at build time: the generator from the fixed
/// table plus its literal arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorCall {
	expression: String,
	generator: Generator,
	args: Vec<Value>,
}

impl GeneratorCall {
	/// The rewritten expression text, e.g. `faker.random.uuid()`.
	pub fn expression(&self) -> &str {
		&self.expression
	}

	pub fn generator_name(&self) -> &'static str {
		self.generator.name()
	}

	pub fn args(&self) -> &[Value] {
		&self.args
	}

	/// Run the generator. Every call produces a fresh value.
	pub fn invoke(&self) -> Result<Value, FakeError> {
		self.generator.call(&self.args)
	}
}

impl Serialize for GeneratorCall {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.expression)
	}
}
