//! Struct binding layer
//!
//! Every schema struct publishes an ordered capability table of its
//! properties ([`Struct::properties`]). Binding, failure collection and the
//! dispatcher's aggregation all run over that table.

use serde_json::{Map, Value};

use crate::property::Property;
use crate::result::{Failure, FieldError, FieldResult, join_path};
use crate::types::{
    Language, PlayalongInput, PlayalongMethod, Series, SoundFileExtension, SubtitleType,
};

mod binding;
mod reconstruct;

pub use self::binding::bind_object;
pub use self::reconstruct::{Reconstruct, Reconstruction};

/// A value a property can hold.
///
/// Only list-of-result values have anything to say: they report elements that
/// are not `Success`, which is what lets a successfully parsed `cues` array
/// still mark its parent as failed.
pub trait FieldValue {
    /// Offending entries inside an otherwise `Success` value, rooted at `path`
    #[must_use]
    fn nested_errors(&self, _path: &str) -> Vec<FieldError> {
        Vec::new()
    }
}

macro_rules! plain_field_values {
    ($($ty:ty),* $(,)?) => {
        $(impl FieldValue for $ty {})*
    };
}

plain_field_values!(
    String,
    bool,
    i64,
    f64,
    Vec<String>,
    Option<String>,
    Map<String, Value>,
    Series,
    SoundFileExtension,
    SubtitleType,
    PlayalongInput,
    PlayalongMethod,
    Language,
);

impl<T> FieldValue for Vec<FieldResult<T>> {
    fn nested_errors(&self, path: &str) -> Vec<FieldError> {
        self.iter()
            .enumerate()
            .flat_map(|(index, element)| element.errors_at(&join_path(path, &format!("[{index}]"))))
            .collect()
    }
}

/// Type-erased view of a [`Property`] used by the capability tables
pub trait AnyProperty {
    /// JSON key
    fn name(&self) -> &'static str;

    /// Run the property's transformer on `value`
    fn set_from_json(&mut self, value: &Value);

    /// `true` when the property's own result is `Success`
    fn is_success(&self) -> bool;

    /// Report entries for this property: its own non-`Success` result, or
    /// non-`Success` elements of a `Success` list
    fn errors(&self) -> Vec<FieldError>;
}

impl<T: FieldValue> AnyProperty for Property<T> {
    fn name(&self) -> &'static str {
        Property::name(self)
    }

    fn set_from_json(&mut self, value: &Value) {
        Property::set_from_json(self, value);
    }

    fn is_success(&self) -> bool {
        self.result().is_success()
    }

    fn errors(&self) -> Vec<FieldError> {
        match self.result() {
            FieldResult::Success(value) => value.nested_errors(self.name()),
            other => other.errors_at(self.name()),
        }
    }
}

/// A schema object made of named properties
pub trait Struct {
    /// Properties in declaration order
    fn properties(&self) -> Vec<&dyn AnyProperty>;

    /// Mutable view of the same table, same order
    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty>;

    /// Every property that is not `Success`, one level into list fields
    #[must_use]
    fn unsuccessful_fields(&self) -> Vec<FieldError> {
        self.properties()
            .into_iter()
            .flat_map(|property| property.errors())
            .collect()
    }

    /// `true` when nothing is reported by [`Self::unsuccessful_fields`]
    #[must_use]
    fn is_valid(&self) -> bool {
        self.properties()
            .into_iter()
            .all(|property| property.errors().is_empty())
    }
}

/// Fold a bound struct into one result: `Success` when every field is, or a
/// `Failure` carrying the partial struct and every offending field
pub fn aggregate<S: Struct>(object: S, raw: &Value, message: impl FnOnce(&S) -> String) -> FieldResult<S> {
    let causes = object.unsuccessful_fields();
    if causes.is_empty() {
        return FieldResult::Success(object);
    }
    tracing::debug!(
        failed_fields = causes.len(),
        "struct has fields that are not successful"
    );
    FieldResult::Failure(Failure {
        raw: raw.clone(),
        message: message(&object),
        partial: Some(Box::new(object)),
        causes,
    })
}
