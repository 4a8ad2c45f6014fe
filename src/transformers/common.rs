//! Common helpers shared across transformers

use serde_json::Value;

use crate::result::FieldResult;

/// Name of a JSON value's type as it appears in failure messages
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Failure for a value whose JSON type is not the one expected
pub fn type_mismatch<T>(expected: &str, actual: &Value) -> FieldResult<T> {
    FieldResult::failure(
        actual,
        format!("Expected {expected}, got {}", json_type_name(actual)),
    )
}

/// Comma separated list of accepted ids for enum failure messages
pub fn one_of<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    ids.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_type_mismatch_names_both_types() {
        let result: FieldResult<String> = type_mismatch("string", &json!(12));
        let FieldResult::Failure(failure) = result else {
            unreachable!("type_mismatch always fails");
        };
        assert_eq!(failure.message, "Expected string, got number");
        assert_eq!(failure.raw, json!(12));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
    }
}
