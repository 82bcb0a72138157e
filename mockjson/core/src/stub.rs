//! Invocable stand-ins built from a [ParsedTree].
//!
//! A [MockObject] is a namespace that may also be called directly: the entry named
//! with the default marker supplies the direct-call handler, its siblings become
//! named members.
//!
//! ```text
//! basic/_.json   {"_": {...}, "foo": {...}}    ->  basic(), basic.foo()
//! basic/sub.json {"_": {...}, "bar": {...}}    ->  basic.sub(), basic.sub.bar()
//! ```

use serde_json::Value;
use std::collections::BTreeMap;

use crate::descriptor::{FunctionDescriptor, ReturnValue};
use crate::path::FunctionPath;
use crate::tree::ParsedTree;
use crate::StubError;

/// A single mocked function with fixed arity.
#[derive(Debug, Clone, PartialEq)]
pub struct Stub {
	path: FunctionPath,
	arity: usize,
	returns: ReturnValue,
}

impl Stub {
	pub fn new(path: FunctionPath, function: &FunctionDescriptor) -> Self {
		Self { path, arity: function.arity(), returns: function.returns.value.clone() }
	}

	pub fn path(&self) -> &FunctionPath {
		&self.path
	}

	pub fn arity(&self) -> usize {
		self.arity
	}

	/// Check arity, then return the literal or a freshly generated value.
	///
	/// `void` functions return [Value::Null].
	pub fn call(&self, args: &[Value]) -> Result<Value, StubError> {
		if args.len() != self.arity {
			return Err(StubError::Arity {
				path: self.path.clone(),
				expected: self.arity,
				actual: args.len(),
			});
		}

		match &self.returns {
			ReturnValue::Void => Ok(Value::Null),
			ReturnValue::Literal(value) => Ok(value.clone()),
			ReturnValue::Generated(call) => call
				.invoke()
				.map_err(|source| StubError::Generator { path: self.path.clone(), source }),
		}
	}
}

/// A namespace of named members with an optional direct-call handler.
#[derive(Debug, Clone, PartialEq)]
pub struct MockObject {
	path: String,
	call: Option<Stub>,
	members: BTreeMap<String, MockObject>,
}

impl MockObject {
	pub fn namespace(path: impl Into<String>) -> Self {
		Self { path: path.into(), call: None, members: BTreeMap::new() }
	}

	pub fn function(stub: Stub) -> Self {
		Self { path: stub.path().to_string(), call: Some(stub), members: BTreeMap::new() }
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn is_callable(&self) -> bool {
		self.call.is_some()
	}

	pub fn stub(&self) -> Option<&Stub> {
		self.call.as_ref()
	}

	pub fn call(&self, args: &[Value]) -> Result<Value, StubError> {
		self.call
			.as_ref()
			.ok_or_else(|| StubError::NotCallable { path: self.path.clone() })?
			.call(args)
	}

	pub fn member(&self, name: &str) -> Option<&MockObject> {
		self.members.get(name)
	}

	pub fn call_member(&self, name: &str, args: &[Value]) -> Result<Value, StubError> {
		self.member(name)
			.ok_or_else(|| StubError::UnknownMember {
				path: self.path.clone(),
				member: name.to_string(),
			})?
			.call(args)
	}

	pub fn members(&self) -> impl Iterator<Item = (&str, &MockObject)> {
		self.members.iter().map(|(name, member)| (name.as_str(), member))
	}

	/// Fold sibling entries into one object.
	///
	/// The default-marker entry provides the direct call and its own members; named
	/// siblings are added afterwards and replace a same-named member.
	fn fold(path: String, entries: Vec<(String, MockObject)>, marker: &str) -> Self {
		let (defaults, named): (Vec<_>, Vec<_>) =
			entries.into_iter().partition(|(name, _)| name == marker);

		let mut object = MockObject::namespace(path);
		for (_, default) in defaults {
			object.call = default.call;
			object.members.extend(default.members);
		}
		object.members.extend(named);
		object
	}
}

/// Build the `{module name -> stub object}` table for a tree.
pub fn build_mock_table(tree: &ParsedTree, marker: &str) -> BTreeMap<String, MockObject> {
	tree.modules()
		.map(|(module_name, module)| {
			let submodules = module
				.submodules()
				.map(|(submodule_name, submodule)| {
					let functions = submodule
						.functions()
						.map(|(function_name, function)| {
							let path =
								FunctionPath::new(module_name, submodule_name, function_name);
							let stub = Stub::new(path, function);
							(function_name.to_string(), MockObject::function(stub))
						})
						.collect();
					let path = format!("{}.{}", module_name, submodule_name);
					(submodule_name.to_string(), MockObject::fold(path, functions, marker))
				})
				.collect();
			let object = MockObject::fold(module_name.to_string(), submodules, marker);
			(module_name.to_string(), object)
		})
		.collect()
}
