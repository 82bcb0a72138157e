//! MockJSON Fake - the generator namespace for fixture expressions
//!
//! Fixture files may embed expressions such as `<% random.uuid %>` in their
//! return values. Those expressions are resolved against the fixed table of
//! generators in this crate rather than evaluated as free-form code.
//!
//! ```rust
//! use mockjson_fake::lookup;
//!
//! let uuid = lookup("random.uuid").unwrap();
//! let first = uuid.call(&[]).unwrap();
//! let second = uuid.call(&[]).unwrap();
//! assert_ne!(first, second);
//! ```
//!
//! # Naming
//!
//! Generators are addressed as `<group>.<name>`, following the faker
//! convention (`name.firstName`, `internet.email`, `lorem.sentence`, ...).
//! Arguments are JSON literals, e.g. `random.number(10)` or
//! `random.number({"min": 5, "max": 10})`.

pub mod generators;

use serde_json::Value;

/// Errors thrown by a [Generator].
#[derive(Debug, thiserror::Error)]
pub enum FakeError {
	#[error("Unknown generator: {0}")]
	UnknownGenerator(String),

	#[error("Invalid argument for {generator}: {reason}")]
	InvalidArgument { generator: &'static str, reason: String },
}

pub type GeneratorFn = fn(&[Value]) -> Result<Value, FakeError>;

/// A named entry of the generator table.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
	name: &'static str,
	func: GeneratorFn,
}

impl Generator {
	const fn new(name: &'static str, func: GeneratorFn) -> Self {
		Self { name, func }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Produce a fresh value. Nothing is cached between calls.
	pub fn call(&self, args: &[Value]) -> Result<Value, FakeError> {
		(self.func)(args)
	}
}

impl PartialEq for Generator {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Eq for Generator {}

const GENERATORS: &[Generator] = &[
	Generator::new("random.uuid", generators::uuid),
	Generator::new("random.number", generators::number),
	Generator::new("random.boolean", generators::boolean),
	Generator::new("random.word", generators::word),
	Generator::new("random.alphaNumeric", generators::alpha_numeric),
	Generator::new("datatype.uuid", generators::uuid),
	Generator::new("name.firstName", generators::first_name),
	Generator::new("name.lastName", generators::last_name),
	Generator::new("name.findName", generators::full_name),
	Generator::new("internet.email", generators::email),
	Generator::new("internet.userName", generators::user_name),
	Generator::new("internet.url", generators::url),
	Generator::new("internet.ip", generators::ip),
	Generator::new("lorem.word", generators::word),
	Generator::new("lorem.words", generators::words),
	Generator::new("lorem.sentence", generators::sentence),
	Generator::new("address.city", generators::city),
	Generator::new("address.zipCode", generators::zip_code),
	Generator::new("company.companyName", generators::company_name),
	Generator::new("phone.phoneNumber", generators::phone_number),
	Generator::new("date.recent", generators::recent_date),
];

/// Find a generator by its dotted name.
pub fn lookup(name: &str) -> Option<Generator> {
	GENERATORS.iter().find(|generator| generator.name == name).copied()
}

/// All generator names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
	GENERATORS.iter().map(|generator| generator.name)
}

/// Look up and call a generator in one step.
pub fn generate(name: &str, args: &[Value]) -> Result<Value, FakeError> {
	lookup(name).ok_or_else(|| FakeError::UnknownGenerator(name.to_string()))?.call(args)
}
