//! Numeric transformers with range checks

use serde_json::Value;

use super::Transformer;
use super::primitive::{float, int};
use crate::constants::VOLUME_RANGE;
use crate::result::FieldResult;

/// Integer volume within [`VOLUME_RANGE`]
pub fn volume(value: &Value) -> FieldResult<i64> {
    int(value).and_then(|v| {
        if VOLUME_RANGE.contains(&v) {
            FieldResult::Success(v)
        } else {
            FieldResult::failure(
                value,
                format!(
                    "Volume {v} is outside {}..={}",
                    VOLUME_RANGE.start(),
                    VOLUME_RANGE.end()
                ),
            )
        }
    })
}

/// Float that must be `>= 0` (`inclusive`) or `> 0`; `message` names the rule
/// in failures
#[must_use]
pub fn positive_float(message: &'static str, inclusive: bool) -> impl Transformer<f64> {
    move |value: &Value| -> FieldResult<f64> {
        float(value).and_then(|f| {
            let accepted = if inclusive { f >= 0.0 } else { f > 0.0 };
            if accepted {
                FieldResult::Success(f)
            } else {
                FieldResult::failure(value, format!("{message}, got {f}"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_volume_range() {
        assert_eq!(volume(&json!(50)), FieldResult::Success(50));
        assert_eq!(volume(&json!(0)), FieldResult::Success(0));
        assert_eq!(volume(&json!(100)), FieldResult::Success(100));
        assert!(!volume(&json!(150)).is_success());
        assert!(!volume(&json!(-1)).is_success());
        assert!(!volume(&json!(50.5)).is_success());
    }

    #[test]
    fn test_positive_float_inclusive_accepts_zero() {
        let transformer = positive_float("Must be non-negative", true);
        assert_eq!(transformer.transform(&json!(0.0)), FieldResult::Success(0.0));
        assert!(!transformer.transform(&json!(-0.5)).is_success());
    }

    #[test]
    fn test_positive_float_exclusive_rejects_zero() {
        let transformer = positive_float("Must be positive", false);
        let FieldResult::Failure(failure) = transformer.transform(&json!(0.0)) else {
            unreachable!("zero is not strictly positive");
        };
        assert!(failure.message.starts_with("Must be positive"));
        assert_eq!(transformer.transform(&json!(0.25)), FieldResult::Success(0.25));
    }
}
