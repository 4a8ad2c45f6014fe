//! Strict and lenient reconstruction of plain records
//!
//! Both strategies run the same per-schema `reconstruct` body, so a field's
//! default is declared once (on its [`Property`]) and read by both paths.

use tracing::warn;

use crate::error::{Error, Result};
use crate::property::Property;
use crate::result::{FieldError, FieldResult, join_path};

/// Which reconstruction is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every field must be `Success`
    Perfect,
    /// Non-`Success` fields fall back to their defaults
    Imperfect,
}

/// State threaded through one reconstruction pass
#[derive(Debug)]
pub struct Reconstruction {
    mode:    Mode,
    path:    String,
    missing: Vec<FieldError>,
}

impl Reconstruction {
    const fn new(mode: Mode) -> Self {
        Self {
            mode,
            path: String::new(),
            missing: Vec::new(),
        }
    }

    /// Take a field's value, or its fallback when it is not `Success`
    pub fn take<T: Clone>(&mut self, property: &Property<T>) -> T {
        if let Some(value) = property.value() {
            return value.clone();
        }
        self.note_missing(property.result(), property.name());
        property.fallback().clone()
    }

    /// Rebuild every `Success` element of a list field.
    ///
    /// Elements that are not `Success` are dropped (lenient) or recorded as
    /// errors (strict); they are never replaced by defaults.
    pub fn take_list<T, R>(
        &mut self,
        property: &Property<Vec<FieldResult<T>>>,
        mut rebuild: impl FnMut(&T, &mut Self) -> R,
    ) -> Vec<R> {
        let Some(elements) = property.value() else {
            self.note_missing(property.result(), property.name());
            return Vec::new();
        };

        let mut records = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let segment = join_path(property.name(), &format!("[{index}]"));
            match element {
                FieldResult::Success(item) => {
                    records.push(self.nested(&segment, |this| rebuild(item, this)));
                }
                other => self.note_missing(other, &segment),
            }
        }
        records
    }

    /// Run `f` with `segment` appended to the current path
    pub fn nested<R>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let joined = join_path(&self.path, segment);
        let saved = std::mem::replace(&mut self.path, joined);
        let record = f(self);
        self.path = saved;
        record
    }

    fn note_missing<T>(&mut self, result: &FieldResult<T>, segment: &str) {
        let path = join_path(&self.path, segment);
        match self.mode {
            Mode::Perfect => self.missing.extend(result.errors_at(&path)),
            Mode::Imperfect => {
                if !matches!(result, FieldResult::Unset) {
                    warn!(path = %path, "using default in place of an invalid value");
                }
            }
        }
    }

    fn finish<R>(self, record: R) -> Result<R> {
        match self.missing.into_iter().next() {
            None => Ok(record),
            Some(first) => Err(Error::StrictReconstruction {
                path:    first.path,
                message: first.message,
            }),
        }
    }
}

/// Conversion of a validated struct into its plain record
pub trait Reconstruct {
    /// Immutable record produced by either strategy
    type Record;

    /// Shared body of both strategies; read fields through `reconstruction`
    fn reconstruct(&self, reconstruction: &mut Reconstruction) -> Self::Record;

    /// Strict record; fails if any field (or list element) is not `Success`
    ///
    /// # Errors
    ///
    /// Returns [`Error::StrictReconstruction`] naming the first offending
    /// field.
    fn produce_perfect_adt(&self) -> Result<Self::Record> {
        let mut reconstruction = Reconstruction::new(Mode::Perfect);
        let record = self.reconstruct(&mut reconstruction);
        reconstruction.finish(record)
    }

    /// Best-effort record with defaults for invalid or missing fields
    #[must_use]
    fn produce_imperfect_adt(&self) -> Self::Record {
        self.reconstruct(&mut Reconstruction::new(Mode::Imperfect))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transformers::{int, non_empty_string, to_list};

    struct Row {
        label:  Property<String>,
        values: Property<Vec<FieldResult<i64>>>,
    }

    impl Reconstruct for Row {
        type Record = (String, Vec<i64>);

        fn reconstruct(&self, r: &mut Reconstruction) -> Self::Record {
            (r.take(&self.label), r.take_list(&self.values, |v, _| *v))
        }
    }

    fn row(label: &serde_json::Value, values: &serde_json::Value) -> Row {
        let mut row = Row {
            label:  Property::required("label", non_empty_string, "untitled".to_string()),
            values: Property::optional("values", to_list(int), Vec::new()),
        };
        row.label.set_from_json(label);
        row.values.set_from_json(values);
        row
    }

    #[test]
    fn test_both_strategies_agree_on_valid_input() {
        let row = row(&json!("a"), &json!([1, 2]));
        let perfect = row.produce_perfect_adt().ok();
        assert_eq!(perfect, Some(row.produce_imperfect_adt()));
    }

    #[test]
    fn test_imperfect_uses_fallback_and_drops_bad_elements() {
        let row = row(&json!(""), &json!([1, "x", 3]));
        assert_eq!(
            row.produce_imperfect_adt(),
            ("untitled".to_string(), vec![1, 3])
        );
    }

    #[test]
    fn test_perfect_reports_first_offending_path() {
        let row = row(&json!("a"), &json!([1, "x"]));
        let Err(Error::StrictReconstruction { path, .. }) = row.produce_perfect_adt() else {
            unreachable!("element 1 is not an integer");
        };
        assert_eq!(path, "values[1]");
    }

    #[test]
    fn test_nested_extends_and_restores_path() {
        let mut reconstruction = Reconstruction::new(Mode::Perfect);
        let inner = reconstruction.nested("objects[2]", |r| r.nested("cues", |r| r.path.clone()));
        assert_eq!(inner, "objects[2].cues");
        assert_eq!(reconstruction.path, "");
    }
}
