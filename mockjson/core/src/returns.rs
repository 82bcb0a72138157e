use serde_json::Value;

use crate::descriptor::{ReturnDescriptor, ReturnType, ReturnValue, ValueType};

/// Infer the return descriptor of a function entry's `returns` field.
///
/// Never fails: any JSON literal is accepted. Absent, `null` and `""` mean `void`.
/// Arrays are typed by their first element; an empty array is `any[]`.
pub fn parse_returns(returns: Option<&Value>) -> ReturnDescriptor {
	match returns {
		None | Some(Value::Null) => ReturnDescriptor::void(),
		Some(Value::String(text)) if text.is_empty() => ReturnDescriptor::void(),
		Some(Value::Array(items)) => ReturnDescriptor {
			ty: ReturnType::Array(items.first().map(ValueType::of).unwrap_or(ValueType::Any)),
			value: ReturnValue::Literal(Value::Array(items.clone())),
		},
		Some(value) => ReturnDescriptor {
			ty: ReturnType::Value(ValueType::of(value)),
			value: ReturnValue::Literal(value.clone()),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn ty(value: Value) -> String {
		parse_returns(Some(&value)).ty.to_string()
	}

	#[test]
	fn test_void_returns() {
		assert_eq!(parse_returns(None), ReturnDescriptor::void());
		assert_eq!(parse_returns(Some(&Value::Null)), ReturnDescriptor::void());
		assert_eq!(parse_returns(Some(&json!(""))), ReturnDescriptor::void());
	}

	#[test]
	fn test_scalar_returns() {
		assert_eq!(ty(json!("success")), "string");
		assert_eq!(ty(json!(42)), "number");
		assert_eq!(ty(json!(true)), "boolean");
		assert_eq!(ty(json!({"a": 1})), "Object");
	}

	#[test]
	fn test_array_returns_use_first_element() {
		assert_eq!(ty(json!(["a", "b"])), "string[]");
		assert_eq!(ty(json!([{}, {}])), "Object[]");
		assert_eq!(ty(json!([1, "mixed"])), "number[]");
		assert_eq!(ty(json!([[1], [2]])), "Object[]");
		assert_eq!(ty(json!([null])), "Object[]");
		assert_eq!(ty(json!([])), "any[]");
	}

	#[test]
	fn test_literal_value_is_kept() {
		let returns = parse_returns(Some(&json!({"nested": [1, 2]})));
		assert_eq!(returns.value, ReturnValue::Literal(json!({"nested": [1, 2]})));
		assert!(!returns.is_generated());
	}
}
