use std::collections::BTreeMap;
use tracing::debug;

use crate::stub::MockObject;

/// Explicit lookup table from module name to stub object.
///
/// Whatever intercepts module resolution receives a registry and calls
/// [MockRegistry::resolve]; nothing here is global.
#[derive(Debug, Clone, Default)]
pub struct MockRegistry {
	mocks: BTreeMap<String, MockObject>,
}

impl MockRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register one module, returning the object it replaced.
	pub fn register(&mut self, name: impl Into<String>, object: MockObject) -> Option<MockObject> {
		let name = name.into();
		debug!(module = %name, "registering mock");
		self.mocks.insert(name, object)
	}

	/// Register a whole stub table, returning the registered names.
	pub fn register_all(&mut self, table: BTreeMap<String, MockObject>) -> Vec<String> {
		table
			.into_iter()
			.map(|(name, object)| {
				self.register(name.clone(), object);
				name
			})
			.collect()
	}

	pub fn resolve(&self, name: &str) -> Option<&MockObject> {
		self.mocks.get(name)
	}

	pub fn unregister(&mut self, name: &str) -> Option<MockObject> {
		self.mocks.remove(name)
	}

	pub fn clear(&mut self) {
		self.mocks.clear();
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.mocks.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.mocks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mocks.is_empty()
	}
}
