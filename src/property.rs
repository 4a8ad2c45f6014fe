//! Named, lazily validated field slot

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::result::FieldResult;
use crate::transformers::{SharedTransformer, Transformer};

/// One field of a schema struct: its JSON key, the transformer that validates
/// it, the current outcome, and the value lenient reconstruction falls back to
#[derive(Clone)]
pub struct Property<T> {
    name:        &'static str,
    transformer: SharedTransformer<T>,
    result:      FieldResult<T>,
    fallback:    T,
}

impl<T> Property<T> {
    /// Field that starts `Unset`; `fallback` is only used by lenient
    /// reconstruction
    #[must_use]
    pub fn required(
        name: &'static str,
        transformer: impl Transformer<T> + 'static,
        fallback: T,
    ) -> Self {
        Self {
            name,
            transformer: Arc::new(transformer),
            result: FieldResult::Unset,
            fallback,
        }
    }

    /// Field that starts as `Success(default)`
    #[must_use]
    pub fn optional(name: &'static str, transformer: impl Transformer<T> + 'static, default: T) -> Self
    where
        T: Clone,
    {
        Self {
            name,
            transformer: Arc::new(transformer),
            result: FieldResult::Success(default.clone()),
            fallback: default,
        }
    }

    /// JSON key this property binds to
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Current outcome
    #[must_use]
    pub const fn result(&self) -> &FieldResult<T> {
        &self.result
    }

    /// Validated value, if the field is `Success`
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.result.success()
    }

    /// Default used when the field is not `Success`
    #[must_use]
    pub const fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Run the bound transformer and store its outcome
    pub fn set_from_json(&mut self, value: &Value) {
        self.result = self.transformer.transform(value);
    }

    /// Overwrite the outcome without running the transformer
    pub fn set_result(&mut self, result: FieldResult<T>) {
        self.result = result;
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
