//! Transformers built from other transformers

use serde_json::Value;

use super::Transformer;
use super::common::type_mismatch;
use crate::result::FieldResult;

/// Validate an array element by element.
///
/// The outer result is `Success` whenever the value is an array, even if
/// some elements failed; callers inspect the per-element results.
#[must_use]
pub fn to_list<T, E>(element: E) -> impl Transformer<Vec<FieldResult<T>>>
where
    E: Transformer<T>,
{
    move |value: &Value| -> FieldResult<Vec<FieldResult<T>>> {
        match value {
            Value::Array(items) => {
                FieldResult::Success(items.iter().map(|item| element.transform(item)).collect())
            }
            other => type_mismatch("array", other),
        }
    }
}

/// Accept JSON `null` as `None`, otherwise defer to `inner`
#[must_use]
pub fn nullable<T, E>(inner: E) -> impl Transformer<Option<T>>
where
    E: Transformer<T>,
{
    move |value: &Value| -> FieldResult<Option<T>> {
        if value.is_null() {
            FieldResult::Success(None)
        } else {
            inner.transform(value).map(Some)
        }
    }
}
