//! Argument descriptor parsing.
//!
//! Four entry shapes normalize to the same [ArgDescriptor]:
//!
//! ```text
//! ["a", "string"]                     pair
//! {"name": "a", "type": "string"}     object
//! "a:string"                          colon string
//! "a"                                 bare name, typed `any`
//! ```

use serde_json::Value;

use crate::descriptor::{ArgDescriptor, ANY_TYPE};
use crate::FixtureError;

/// Turns a failure reason into an error annotated with the owning function's path.
pub type Reporter<'a> = dyn Fn(&str) -> FixtureError + 'a;

/// Normalize one raw argument entry.
///
/// Failures are raised through `report`, so the caller decides how the message is
/// attributed to its fixture.
pub fn parse_arg(arg: &Value, report: &Reporter<'_>) -> Result<ArgDescriptor, FixtureError> {
	match arg {
		Value::Array(items) => match items.as_slice() {
			[name, ty] => named(display_value(name), display_value(ty), report),
			_ => named(display_value(arg), ANY_TYPE.to_string(), report),
		},
		Value::Number(_) => Err(report("numbers are not valid argument descriptors")),
		Value::Object(descriptor) => {
			let name = descriptor.get("name").filter(|name| is_truthy(name));
			let ty = descriptor.get("type").filter(|ty| !ty.is_null());
			match (name, ty) {
				(Some(name), Some(ty)) => named(display_value(name), display_value(ty), report),
				_ => Err(report("arg descriptor objects must have type and name")),
			}
		}
		Value::String(text) => match text.split_once(':') {
			Some((name, ty)) => named(name.to_string(), ty.to_string(), report),
			None => named(text.clone(), ANY_TYPE.to_string(), report),
		},
		other => named(display_value(other), ANY_TYPE.to_string(), report),
	}
}

fn named(name: String, ty: String, report: &Reporter<'_>) -> Result<ArgDescriptor, FixtureError> {
	if name.is_empty() {
		return Err(report("arg descriptor names must not be empty"));
	}
	Ok(ArgDescriptor::new(name, ty))
}

/// Strings render bare; everything else renders as JSON text.
fn display_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FunctionPath;
	use serde_json::json;

	fn path() -> FunctionPath {
		FunctionPath::new("module", "sub", "func")
	}

	fn parse(arg: Value) -> Result<ArgDescriptor, FixtureError> {
		let report = |reason: &str| FixtureError::ArgumentDescriptor {
			path: path(),
			reason: reason.to_string(),
		};
		parse_arg(&arg, &report)
	}

	#[test]
	fn test_all_shapes_agree() -> Result<(), anyhow::Error> {
		let expected = ArgDescriptor::new("a", "string");
		assert_eq!(parse(json!(["a", "string"]))?, expected);
		assert_eq!(parse(json!({"name": "a", "type": "string"}))?, expected);
		assert_eq!(parse(json!("a:string"))?, expected);
		assert_eq!(parse(json!("a"))?, ArgDescriptor::untyped("a"));
		Ok(())
	}

	#[test]
	fn test_colon_splits_on_first_only() -> Result<(), anyhow::Error> {
		assert_eq!(parse(json!("cb:(err:Error) => void"))?.ty, "(err:Error) => void");
		assert_eq!(parse(json!("a:"))?, ArgDescriptor::new("a", ""));
		Ok(())
	}

	#[test]
	fn test_non_string_scalars_are_stringified() -> Result<(), anyhow::Error> {
		assert_eq!(parse(json!(true))?, ArgDescriptor::untyped("true"));
		assert_eq!(parse(Value::Null)?, ArgDescriptor::untyped("null"));
		assert_eq!(parse(json!({"name": "n", "type": 1}))?, ArgDescriptor::new("n", "1"));
		Ok(())
	}

	#[test]
	fn test_numbers_are_rejected() {
		let err = parse(json!(1));
		assert!(matches!(
			err,
			Err(FixtureError::ArgumentDescriptor { ref reason, .. })
				if reason == "numbers are not valid argument descriptors"
		));
	}

	#[test]
	fn test_partial_objects_are_rejected_with_path() {
		for arg in [
			json!({"name": "a"}),
			json!({"type": "string"}),
			json!({"name": "", "type": "string"}),
			json!({"name": "a", "type": null}),
		] {
			match parse(arg) {
				Err(err) => {
					assert_eq!(err.function_path(), Some(&path()));
					assert_eq!(
						err.to_string(),
						"arg descriptor objects must have type and name for module.sub.func"
					);
				}
				Ok(arg) => panic!("expected an error, got {:?}", arg),
			}
		}
	}

	#[test]
	fn test_other_arrays_are_stringified() -> Result<(), anyhow::Error> {
		assert_eq!(parse(json!(["a"]))?, ArgDescriptor::untyped(r#"["a"]"#));
		assert_eq!(parse(json!(["a", "b", "c"]))?, ArgDescriptor::untyped(r#"["a","b","c"]"#));
		assert_eq!(parse(json!([]))?, ArgDescriptor::untyped("[]"));
		assert_eq!(parse(json!(["x:y"]))?.ty, ANY_TYPE);
		Ok(())
	}

	#[test]
	fn test_empty_names_are_rejected() {
		assert!(parse(json!(["", "string"])).is_err());
		assert!(parse(json!("")).is_err());
		assert!(parse(json!(":string")).is_err());
	}
}
