//! Normalized, in-memory descriptions of mocked functions.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::generator::GeneratorCall;

/// Type used for arguments declared without one.
pub const ANY_TYPE: &str = "any";

/// One declared argument: a non-empty name and a free-form type annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgDescriptor {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
}

impl ArgDescriptor {
	pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self { name: name.into(), ty: ty.into() }
	}

	/// An argument with the dynamic [ANY_TYPE].
	pub fn untyped(name: impl Into<String>) -> Self {
		Self::new(name, ANY_TYPE)
	}
}

impl fmt::Display for ArgDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.name, self.ty)
	}
}

/// Runtime type name of a JSON value, as used in return annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	String,
	Number,
	Boolean,
	Object,
	Any,
}

impl ValueType {
	/// `null` counts as an object, the way a dynamic `typeof` reports it.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::String(_) => ValueType::String,
			Value::Number(_) => ValueType::Number,
			Value::Bool(_) => ValueType::Boolean,
			Value::Null | Value::Array(_) | Value::Object(_) => ValueType::Object,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ValueType::String => "string",
			ValueType::Number => "number",
			ValueType::Boolean => "boolean",
			ValueType::Object => "Object",
			ValueType::Any => ANY_TYPE,
		}
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Inferred return type: `void`, `Object`, a primitive, or an array of one of those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
	Void,
	Value(ValueType),
	Array(ValueType),
}

impl fmt::Display for ReturnType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ReturnType::Void => f.write_str("void"),
			ReturnType::Value(ty) => write!(f, "{}", ty),
			ReturnType::Array(ty) => write!(f, "{}[]", ty),
		}
	}
}

/// What a stub hands back when invoked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReturnValue {
	Void,
	Literal(Value),
	Generated(GeneratorCall),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnDescriptor {
	#[serde(rename = "type", serialize_with = "serialize_display")]
	pub ty: ReturnType,
	pub value: ReturnValue,
}

impl ReturnDescriptor {
	pub fn void() -> Self {
		Self { ty: ReturnType::Void, value: ReturnValue::Void }
	}

	pub fn is_generated(&self) -> bool {
		matches!(self.value, ReturnValue::Generated(_))
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDescriptor {
	/// Declaration order is preserved.
	pub args: Vec<ArgDescriptor>,
	pub returns: ReturnDescriptor,
}

impl FunctionDescriptor {
	pub fn new(args: Vec<ArgDescriptor>, returns: ReturnDescriptor) -> Self {
		Self { args, returns }
	}

	pub fn arity(&self) -> usize {
		self.args.len()
	}
}

fn serialize_display<T: fmt::Display, S: serde::Serializer>(
	value: &T,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	serializer.collect_str(value)
}
