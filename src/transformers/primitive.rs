//! Transformers for plain JSON types

use serde_json::{Map, Value};

use super::common::type_mismatch;
use crate::result::FieldResult;

/// Any string
pub fn string(value: &Value) -> FieldResult<String> {
    match value {
        Value::String(s) => FieldResult::Success(s.clone()),
        other => type_mismatch("string", other),
    }
}

/// A string that is not `""`
pub fn non_empty_string(value: &Value) -> FieldResult<String> {
    string(value).and_then(|s| {
        if s.is_empty() {
            FieldResult::failure(value, "String must not be empty")
        } else {
            FieldResult::Success(s)
        }
    })
}

/// Any JSON number, as `f64`
pub fn float(value: &Value) -> FieldResult<f64> {
    match value.as_f64() {
        Some(f) if value.is_number() => FieldResult::Success(f),
        _ => type_mismatch("number", value),
    }
}

/// Largest magnitude an `f64` holds without losing integer precision
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A JSON number with no fractional part
pub fn int(value: &Value) -> FieldResult<i64> {
    let Value::Number(number) = value else {
        return type_mismatch("integer", value);
    };
    if let Some(i) = number.as_i64() {
        return FieldResult::Success(i);
    }
    match number.as_f64() {
        Some(f) if f.fract() != 0.0 => {
            FieldResult::failure(value, format!("Expected integer, got non-integral {number}"))
        }
        #[allow(clippy::cast_possible_truncation)]
        Some(f) if f.abs() <= MAX_EXACT_INTEGER => FieldResult::Success(f as i64),
        _ => FieldResult::failure(value, format!("Integer {number} is out of range")),
    }
}

/// `true` or `false`
pub fn boolean(value: &Value) -> FieldResult<bool> {
    match value {
        Value::Bool(b) => FieldResult::Success(*b),
        other => type_mismatch("boolean", other),
    }
}

/// An array whose every element is a string
pub fn string_array(value: &Value) -> FieldResult<Vec<String>> {
    let Value::Array(items) = value else {
        return type_mismatch("array of strings", value);
    };
    let mut strings = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => strings.push(s.clone()),
            other => {
                return FieldResult::failure(
                    value,
                    format!(
                        "Expected array of strings, element {index} is {}",
                        super::json_type_name(other)
                    ),
                );
            }
        }
    }
    FieldResult::Success(strings)
}

/// Free-form string-keyed object, kept as raw JSON
pub fn metadata(value: &Value) -> FieldResult<Map<String, Value>> {
    match value {
        Value::Object(map) => FieldResult::Success(map.clone()),
        other => type_mismatch("object", other),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_rejects_number() {
        assert!(!string(&json!(1)).is_success());
        assert_eq!(string(&json!("")), FieldResult::Success(String::new()));
    }

    #[test]
    fn test_non_empty_string() {
        assert!(!non_empty_string(&json!("")).is_success());
        assert_eq!(
            non_empty_string(&json!("Karate Man")),
            FieldResult::Success("Karate Man".to_string())
        );
    }

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(float(&json!(2)), FieldResult::Success(2.0));
        assert_eq!(float(&json!(1.5)), FieldResult::Success(1.5));
        assert!(!float(&json!("1.5")).is_success());
        assert!(!float(&json!(null)).is_success());
    }

    #[test]
    fn test_int_rejects_fractions() {
        assert_eq!(int(&json!(3)), FieldResult::Success(3));
        assert_eq!(int(&json!(4.0)), FieldResult::Success(4));
        assert!(!int(&json!(4.5)).is_success());
        assert!(!int(&json!(true)).is_success());
    }

    #[test]
    fn test_int_reports_huge_values_as_out_of_range() {
        for raw in [json!(u64::MAX), json!(1.0e300)] {
            let FieldResult::Failure(failure) = int(&raw) else {
                unreachable!("{raw} does not fit an i64");
            };
            assert!(failure.message.contains("out of range"), "{}", failure.message);
        }
        let FieldResult::Failure(failure) = int(&json!(0.25)) else {
            unreachable!("fractions are rejected");
        };
        assert!(failure.message.contains("non-integral"));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(boolean(&json!(true)), FieldResult::Success(true));
        assert!(!boolean(&json!("true")).is_success());
    }

    #[test]
    fn test_string_array_rejects_mixed_elements() {
        assert_eq!(
            string_array(&json!(["a", "b"])),
            FieldResult::Success(vec!["a".to_string(), "b".to_string()])
        );
        let FieldResult::Failure(failure) = string_array(&json!(["a", 2])) else {
            unreachable!("mixed array must fail");
        };
        assert!(failure.message.contains("element 1 is number"));
        assert!(!string_array(&json!("a")).is_success());
    }

    #[test]
    fn test_metadata_requires_object() {
        assert!(metadata(&json!({"key": [1, 2]})).is_success());
        assert!(!metadata(&json!([])).is_success());
    }
}
