//! Tri-state outcome of validating one field

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Outcome of running a transformer over one raw JSON value
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldResult<T> {
    /// Never supplied and no default
    Unset,
    /// Validation passed
    Success(T),
    /// Validation ran and rejected the input
    Failure(Failure<T>),
}

/// A rejected field: the raw input, the reason and, for nested structs, what
/// could still be built
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<T> {
    /// The JSON value exactly as it appeared in the input
    pub raw:     Value,
    /// Human readable reason
    pub message: String,
    /// Partially valid struct, set only by struct-building transformers
    pub partial: Option<Box<T>>,
    /// Offending nested fields, relative to this value
    pub causes:  Vec<FieldError>,
}

/// One offending field, flattened for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Dotted path from the struct being reported on, e.g. `cues[0].volume`
    pub path:    String,
    /// Raw input, absent when the field was never supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw:     Option<Value>,
    /// Why the field is not `Success`
    pub message: String,
}

impl FieldError {
    /// Same error, re-rooted under `prefix`
    #[must_use]
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self {
            path:    join_path(prefix, &self.path),
            raw:     self.raw.clone(),
            message: self.message.clone(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "{}: ", self.path)?;
        }
        match &self.raw {
            Some(raw) => write!(f, "{} (got {raw})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Join two path segments; index segments (`[n]`) attach without a dot
#[must_use]
pub fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else if segment.is_empty() {
        prefix.to_string()
    } else if segment.starts_with('[') {
        format!("{prefix}{segment}")
    } else {
        format!("{prefix}.{segment}")
    }
}

impl<T> FieldResult<T> {
    /// Plain failure with no nested detail
    pub fn failure(raw: &Value, message: impl Into<String>) -> Self {
        Self::Failure(Failure {
            raw:     raw.clone(),
            message: message.into(),
            partial: None,
            causes:  Vec::new(),
        })
    }

    /// `true` only for `Success`
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the validated value, if any
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Unset | Self::Failure(_) => None,
        }
    }

    /// Map the success value; failures keep their raw input and message but
    /// lose any partial struct
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldResult<U> {
        match self {
            Self::Unset => FieldResult::Unset,
            Self::Success(value) => FieldResult::Success(f(value)),
            Self::Failure(failure) => FieldResult::Failure(failure.discard_partial()),
        }
    }

    /// Chain a further check onto a successful value
    pub fn and_then<U>(self, f: impl FnOnce(T) -> FieldResult<U>) -> FieldResult<U> {
        match self {
            Self::Unset => FieldResult::Unset,
            Self::Success(value) => f(value),
            Self::Failure(failure) => FieldResult::Failure(failure.discard_partial()),
        }
    }

    /// Describe a non-`Success` result as report entries rooted at `path`.
    /// Returns nothing for `Success`.
    #[must_use]
    pub fn errors_at(&self, path: &str) -> Vec<FieldError> {
        match self {
            Self::Success(_) => Vec::new(),
            Self::Unset => vec![FieldError {
                path:    path.to_string(),
                raw:     None,
                message: "missing required field".to_string(),
            }],
            Self::Failure(failure) if !failure.causes.is_empty() => failure
                .causes
                .iter()
                .map(|cause| cause.prefixed(path))
                .collect(),
            Self::Failure(failure) => vec![FieldError {
                path:    path.to_string(),
                raw:     Some(failure.raw.clone()),
                message: failure.message.clone(),
            }],
        }
    }
}

impl<T> Failure<T> {
    /// Drop the partial struct so the failure can change value type
    #[must_use]
    pub fn discard_partial<U>(self) -> Failure<U> {
        Failure {
            raw:     self.raw,
            message: self.message,
            partial: None,
            causes:  self.causes,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_map_keeps_failure_message() {
        let result: FieldResult<i64> = FieldResult::failure(&json!("x"), "expected number");
        let mapped = result.map(|v| v + 1);
        assert_eq!(mapped, FieldResult::failure(&json!("x"), "expected number"));
    }

    #[test]
    fn test_and_then_runs_only_on_success() {
        let ok = FieldResult::Success(5).and_then(|v| {
            if v > 3 {
                FieldResult::failure(&json!(v), "too big")
            } else {
                FieldResult::Success(v)
            }
        });
        assert!(!ok.is_success());

        let unset: FieldResult<i32> = FieldResult::Unset;
        assert_eq!(unset.and_then(FieldResult::Success), FieldResult::Unset);
    }

    #[test]
    fn test_errors_at_reports_unset_as_missing() {
        let unset: FieldResult<String> = FieldResult::Unset;
        let errors = unset.errors_at("name");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "name");
        assert_eq!(errors[0].message, "missing required field");
        assert!(errors[0].raw.is_none());
    }

    #[test]
    fn test_errors_at_expands_causes() {
        let failure: FieldResult<()> = FieldResult::Failure(Failure {
            raw:     json!({}),
            message: "Error in datamodel a".to_string(),
            partial: None,
            causes:  vec![FieldError {
                path:    "cues[0].volume".to_string(),
                raw:     Some(json!(150)),
                message: "out of range".to_string(),
            }],
        });
        let errors = failure.errors_at("objects[3]");
        assert_eq!(errors[0].path, "objects[3].cues[0].volume");
    }

    #[test]
    fn test_display_omits_empty_path() {
        let root = FieldError {
            path:    String::new(),
            raw:     Some(json!([])),
            message: "Expected object, got array".to_string(),
        };
        assert_eq!(root.to_string(), "Expected object, got array (got [])");
        let field = FieldError {
            path:    "name".to_string(),
            raw:     None,
            message: "missing required field".to_string(),
        };
        assert_eq!(field.to_string(), "name: missing required field");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "id"), "id");
        assert_eq!(join_path("objects", "[2]"), "objects[2]");
        assert_eq!(join_path("objects[2]", "name"), "objects[2].name");
        assert_eq!(join_path("cues", ""), "cues");
    }
}
