use serde_json::{Map, Value};
use tracing::trace;

use crate::args::parse_arg;
use crate::descriptor::{FunctionDescriptor, ReturnValue};
use crate::generator::GeneratorParser;
use crate::path::FunctionPath;
use crate::returns::parse_returns;
use crate::rewrite::ExpressionRewriter;
use crate::tree::Submodule;
use crate::FixtureError;

/// Build every function of one fixture file.
///
/// The raw text is rewritten first and parsed second, so JSON that is malformed
/// outside of the markers still fails here.
pub fn build_submodule(
	module: &str,
	submodule: &str,
	raw: &str,
	rewriter: &ExpressionRewriter,
) -> Result<Submodule, FixtureError> {
	let rewritten = rewriter.rewrite(raw);
	let parsed: Value =
		serde_json::from_str(&rewritten).map_err(|source| FixtureError::MalformedFixture {
			module: module.to_string(),
			submodule: submodule.to_string(),
			source,
		})?;
	let Value::Object(entries) = parsed else {
		return Err(FixtureError::FixtureNotObject {
			module: module.to_string(),
			submodule: submodule.to_string(),
		});
	};

	let mut functions = Submodule::new();
	for (name, entry) in entries {
		let path = FunctionPath::new(module, submodule, name.as_str());
		let function = build_function(&path, &entry, rewriter.generators())?;
		trace!(%path, arity = function.arity(), returns = %function.returns.ty, "built function");
		functions.insert(name, function);
	}
	Ok(functions)
}

/// Build one function descriptor from its `{ args?, returns? }` entry.
pub fn build_function(
	path: &FunctionPath,
	entry: &Value,
	generators: &GeneratorParser,
) -> Result<FunctionDescriptor, FixtureError> {
	let entry: &Map<String, Value> = entry
		.as_object()
		.ok_or_else(|| FixtureError::FunctionNotObject { path: path.clone() })?;

	let report = |reason: &str| FixtureError::ArgumentDescriptor {
		path: path.clone(),
		reason: reason.to_string(),
	};

	let mut returns = parse_returns(entry.get("returns"));
	let generated = match &returns.value {
		ReturnValue::Literal(Value::String(text)) => generators
			.parse(text)
			.map_err(|source| FixtureError::Generator { path: path.clone(), source })?,
		_ => None,
	};
	if let Some(call) = generated {
		returns.value = ReturnValue::Generated(call);
	}

	let args = match entry.get("args") {
		None | Some(Value::Null) => Vec::new(),
		Some(Value::Array(args)) => {
			args.iter().map(|arg| parse_arg(arg, &report)).collect::<Result<Vec<_>, _>>()?
		}
		Some(_) => return Err(FixtureError::ArgumentList { path: path.clone() }),
	};

	Ok(FunctionDescriptor::new(args, returns))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::{ArgDescriptor, ReturnType, ValueType};
	use serde_json::json;

	fn rewriter() -> Result<ExpressionRewriter, FixtureError> {
		ExpressionRewriter::try_new("faker.")
	}

	fn path() -> FunctionPath {
		FunctionPath::new("m", "s", "f")
	}

	fn build(entry: Value) -> Result<FunctionDescriptor, FixtureError> {
		build_function(&path(), &entry, rewriter()?.generators())
	}

	#[test]
	fn test_absent_args_means_zero_arity() -> Result<(), anyhow::Error> {
		let function = build(json!({"returns": "success"}))?;
		assert!(function.args.is_empty());
		assert_eq!(function.returns.ty, ReturnType::Value(ValueType::String));

		let function = build(json!({"args": null}))?;
		assert!(function.args.is_empty());
		assert_eq!(function.returns.ty, ReturnType::Void);
		Ok(())
	}

	#[test]
	fn test_args_must_be_an_array() {
		let err = build(json!({"args": "a, b"}));
		match err {
			Err(err @ FixtureError::ArgumentList { .. }) => {
				assert_eq!(err.to_string(), "args must be an array for m.s.f");
			}
			other => panic!("expected ArgumentList, got {:?}", other),
		}
	}

	#[test]
	fn test_mixed_argument_shapes() -> Result<(), anyhow::Error> {
		let entry = json!({
			"args": ["a:string", ["b", "number"], {"name": "c", "type": "Object"}, "d"],
			"returns": "x"
		});
		let function = build(entry)?;
		assert_eq!(
			function.args,
			vec![
				ArgDescriptor::new("a", "string"),
				ArgDescriptor::new("b", "number"),
				ArgDescriptor::new("c", "Object"),
				ArgDescriptor::untyped("d"),
			]
		);
		Ok(())
	}

	#[test]
	fn test_argument_errors_carry_the_path() {
		let err = build(json!({"args": [{"name": "a"}]}));
		assert!(matches!(
			err,
			Err(FixtureError::ArgumentDescriptor { ref path, .. }) if path.to_string() == "m.s.f"
		));
	}

	#[test]
	fn test_generator_returns_are_resolved() -> Result<(), anyhow::Error> {
		let function = build(json!({"returns": "faker.random.uuid()"}))?;
		assert!(function.returns.is_generated());
		assert_eq!(function.returns.ty, ReturnType::Value(ValueType::String));

		let err = build(json!({"returns": "faker.nope()"}));
		assert!(matches!(err, Err(FixtureError::Generator { .. })));
		Ok(())
	}

	#[test]
	fn test_nested_generator_text_stays_literal() -> Result<(), anyhow::Error> {
		let function = build(json!({"returns": ["faker.random.uuid()"]}))?;
		assert!(!function.returns.is_generated());
		Ok(())
	}

	#[test]
	fn test_function_entries_must_be_objects() {
		let err = build(json!("success"));
		assert!(matches!(err, Err(FixtureError::FunctionNotObject { .. })));
	}

	#[test]
	fn test_build_submodule_preserves_order_and_folds_duplicates() -> Result<(), anyhow::Error> {
		let raw = r#"{
			"zeta": {"returns": 1},
			"alpha": {"args": ["a"]},
			"zeta": {"returns": "two"}
		}"#;
		let submodule = build_submodule("m", "s", raw, &rewriter()?)?;
		let names: Vec<_> = submodule.functions().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["zeta", "alpha"]);
		assert_eq!(
			submodule.get("zeta").map(|f| f.returns.ty),
			Some(ReturnType::Value(ValueType::String))
		);
		Ok(())
	}

	#[test]
	fn test_build_submodule_rewrites_markers() -> Result<(), anyhow::Error> {
		let raw = r#"{"id": {"returns": "<% random.uuid %>"}}"#;
		let submodule = build_submodule("m", "s", raw, &rewriter()?)?;
		assert!(submodule.get("id").is_some_and(|f| f.returns.is_generated()));
		Ok(())
	}

	#[test]
	fn test_build_submodule_rejects_malformed_json() -> Result<(), anyhow::Error> {
		let rewriter = rewriter()?;
		assert!(matches!(
			build_submodule("m", "s", r#"{"f": {"returns": <% random.uuid %>}}"#, &rewriter),
			Err(FixtureError::MalformedFixture { .. })
		));
		assert!(matches!(
			build_submodule("m", "s", "[1, 2]", &rewriter),
			Err(FixtureError::FixtureNotObject { .. })
		));
		Ok(())
	}
}
