//! MockJSON Core - fixture directories to mock modules and type declarations
//!
//! A fixture directory describes the function surface of one or more modules:
//!
//! ```text
//! mocks/
//!   basic/
//!     _.json      functions callable on the module itself
//!     sub.json    functions under `basic.sub`
//! ```
//!
//! Each fixture file is a JSON object keyed by function name:
//!
//! ```json
//! {
//!   "_":   { "returns": "success" },
//!   "greet": { "args": ["name:string"], "returns": "hello" },
//!   "id":  { "returns": "<% random.uuid %>" }
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [loader] reads the directory into raw text.
//! 2. [rewrite] turns `<% expr %>` markers into generator call expressions.
//! 3. [builder] parses the JSON and builds a [FunctionDescriptor] per entry, using
//!    [args] and [returns].
//! 4. [render] and [stub] read the resulting [ParsedTree].
//!
//! ```rust
//! use mockjson_core::{MockConfig, MockFactory, RawModule, RawSubmodule};
//! use serde_json::json;
//!
//! let factory = MockFactory::from_sources(
//!     vec![RawModule::new(
//!         "basic",
//!         vec![RawSubmodule::new("_", r#"{"_": {"returns": "success"}, "foo": {"args": ["a"]}}"#)],
//!     )],
//!     MockConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(factory.to_flow_string().contains("foo(a:any): void"));
//!
//! let mocks = factory.to_mocks();
//! let basic = &mocks["basic"];
//! assert_eq!(basic.call(&[]).unwrap(), json!("success"));
//! assert!(basic.call_member("foo", &[]).is_err());
//! ```
//!
//! # Errors
//!
//! Construction is fail-fast: the first [FixtureError] aborts the whole tree and
//! names the offending `module.submodule.function`. Invocation errors, such as a
//! wrong argument count, are [StubError]s raised by the stub itself.

pub mod args;
pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod generator;
pub mod loader;
pub mod path;
pub mod registry;
pub mod render;
pub mod returns;
pub mod rewrite;
pub mod stub;
pub mod tree;

pub use config::MockConfig;
pub use descriptor::{
	ArgDescriptor, FunctionDescriptor, ReturnDescriptor, ReturnType, ReturnValue, ValueType,
};
pub use error::{FixtureError, StubError};
pub use factory::MockFactory;
pub use generator::{GeneratorCall, GeneratorExpressionError, GeneratorParser};
pub use loader::{RawModule, RawSubmodule};
pub use path::FunctionPath;
pub use registry::MockRegistry;
pub use stub::{MockObject, Stub};
pub use tree::{ParsedModule, ParsedTree, Submodule};
