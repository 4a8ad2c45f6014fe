//! Cue pointers: references to cues nested inside pattern-like datamodels

use serde_json::{Map, Value};

use crate::constants::{CUE_POINTER_NOT_USED, DEFAULT_VOLUME, UNKNOWN_ID};
use crate::property::Property;
use crate::records::CuePointer;
use crate::result::FieldResult;
use crate::schema::{AnyProperty, Reconstruct, Reconstruction, Struct, aggregate, bind_object};
use crate::transformers::{
    Transformer, float, id, int, metadata, positive_float, to_list, type_mismatch, volume,
};

/// Which placement fields the embedding datamodel reads.
///
/// Unused fields are overwritten with [`CUE_POINTER_NOT_USED`] after binding,
/// whatever the input held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuePointerUsage {
    /// `beat` is read
    pub beat:     bool,
    /// `duration` is read
    pub duration: bool,
}

impl CuePointerUsage {
    /// Pattern and keep-the-beat: explicit placement
    pub const PLACED: Self = Self {
        beat:     true,
        duration: true,
    };

    /// Equidistant and random cue: placement comes from the parent
    pub const UNPLACED: Self = Self {
        beat:     false,
        duration: false,
    };
}

/// Schema for one cue pointer
#[derive(Debug, Clone)]
pub struct CuePointerObject {
    /// `id` of the referenced cue
    pub id:       Property<String>,
    /// `beat` offset from the parent start
    pub beat:     Property<f64>,
    /// `duration`, `0` means the cue's own duration
    pub duration: Property<f64>,
    /// `track`
    pub track:    Property<i64>,
    /// `semitone`
    pub semitone: Property<i64>,
    /// `volume` in percent
    pub volume:   Property<i64>,
    /// `metadata`, kept as raw JSON
    pub metadata: Property<Map<String, Value>>,
}

impl CuePointerObject {
    /// Empty schema ready for binding
    #[must_use]
    pub fn new() -> Self {
        Self {
            id:       Property::required("id", id, String::new()),
            beat:     Property::optional("beat", float, 0.0),
            duration: Property::optional(
                "duration",
                positive_float("Duration must be non-negative", true),
                0.0,
            ),
            track:    Property::optional("track", int, 0),
            semitone: Property::optional("semitone", int, 0),
            volume:   Property::optional("volume", volume, DEFAULT_VOLUME),
            metadata: Property::optional("metadata", metadata, Map::new()),
        }
    }

    /// Second write path: stamp the not-used sentinel on fields the parent
    /// kind ignores
    pub fn apply_usage(&mut self, usage: CuePointerUsage) {
        if !usage.beat {
            self.beat.set_result(FieldResult::Success(CUE_POINTER_NOT_USED));
        }
        if !usage.duration {
            self.duration.set_result(FieldResult::Success(CUE_POINTER_NOT_USED));
        }
    }
}

impl Default for CuePointerObject {
    fn default() -> Self {
        Self::new()
    }
}

impl Struct for CuePointerObject {
    fn properties(&self) -> Vec<&dyn AnyProperty> {
        vec![
            &self.id as &dyn AnyProperty,
            &self.beat,
            &self.duration,
            &self.track,
            &self.semitone,
            &self.volume,
            &self.metadata,
        ]
    }

    fn properties_mut(&mut self) -> Vec<&mut dyn AnyProperty> {
        vec![
            &mut self.id as &mut dyn AnyProperty,
            &mut self.beat,
            &mut self.duration,
            &mut self.track,
            &mut self.semitone,
            &mut self.volume,
            &mut self.metadata,
        ]
    }
}

impl Reconstruct for CuePointerObject {
    type Record = CuePointer;

    fn reconstruct(&self, r: &mut Reconstruction) -> CuePointer {
        CuePointer {
            id:       r.take(&self.id),
            beat:     r.take(&self.beat),
            duration: r.take(&self.duration),
            track:    r.take(&self.track),
            semitone: r.take(&self.semitone),
            volume:   r.take(&self.volume),
            metadata: r.take(&self.metadata),
        }
    }
}

/// Build one cue pointer: bind, apply `usage`, then aggregate failures
pub fn transform_cue_pointer(value: &Value, usage: CuePointerUsage) -> FieldResult<CuePointerObject> {
    let Value::Object(object) = value else {
        return type_mismatch("object", value);
    };
    let mut pointer = CuePointerObject::new();
    bind_object(&mut pointer, object);
    pointer.apply_usage(usage);
    aggregate(pointer, value, |pointer| {
        format!(
            "Error in cue pointer {}",
            pointer.id.value().map_or(UNKNOWN_ID, String::as_str)
        )
    })
}

/// Transformer for a `cues` array under a parent with the given usage
#[must_use]
pub fn cue_pointer_list(usage: CuePointerUsage) -> impl Transformer<Vec<FieldResult<CuePointerObject>>> {
    to_list(move |value: &Value| -> FieldResult<CuePointerObject> {
        transform_cue_pointer(value, usage)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use serde_json::json;

    use super::*;

    #[test]
    fn test_placed_pointer_requires_id() {
        let result = transform_cue_pointer(&json!({"beat": 1}), CuePointerUsage::PLACED);
        let FieldResult::Failure(failure) = result else {
            unreachable!("id is required");
        };
        assert_eq!(failure.causes.len(), 1);
        assert_eq!(failure.causes[0].path, "id");
        assert!(failure.partial.is_some());
    }

    #[test]
    fn test_placed_pointer_beat_defaults_to_zero() {
        let FieldResult::Success(pointer) =
            transform_cue_pointer(&json!({"id": "game/hit"}), CuePointerUsage::PLACED)
        else {
            unreachable!("beat is optional");
        };
        assert_eq!(pointer.beat.value(), Some(&0.0));
    }

    #[test]
    fn test_unplaced_pointer_ignores_beat_input() {
        let result = transform_cue_pointer(
            &json!({"id": "game/hit", "beat": "garbage", "duration": -3}),
            CuePointerUsage::UNPLACED,
        );
        let FieldResult::Success(pointer) = result else {
            unreachable!("unused fields are overwritten");
        };
        assert_eq!(pointer.beat.value(), Some(&CUE_POINTER_NOT_USED));
        assert_eq!(pointer.duration.value(), Some(&CUE_POINTER_NOT_USED));
    }

    #[test]
    fn test_out_of_range_volume_fails_pointer() {
        let result = transform_cue_pointer(
            &json!({"id": "game/hit", "beat": 1, "volume": 150}),
            CuePointerUsage::PLACED,
        );
        let FieldResult::Failure(failure) = result else {
            unreachable!("volume 150 is out of range");
        };
        assert_eq!(failure.message, "Error in cue pointer game/hit");
        assert_eq!(failure.causes[0].path, "volume");
        assert_eq!(failure.causes[0].raw, Some(json!(150)));
    }

    #[test]
    fn test_pointer_record_defaults() {
        let FieldResult::Success(pointer) = transform_cue_pointer(
            &json!({"id": "*/applause", "beat": 2.5, "metadata": {"note": "x"}}),
            CuePointerUsage::PLACED,
        ) else {
            unreachable!("valid pointer");
        };
        let record = pointer.produce_perfect_adt().unwrap();
        assert_eq!(record.id, "*/applause");
        assert!((record.beat - 2.5).abs() < f64::EPSILON);
        assert_eq!(record.volume, 100);
        assert_eq!(record.track, 0);
        assert_eq!(record.metadata.get("note"), Some(&json!("x")));
    }

    #[test]
    fn test_non_object_pointer_is_type_mismatch() {
        let FieldResult::Failure(failure) =
            transform_cue_pointer(&json!("game/hit"), CuePointerUsage::PLACED)
        else {
            unreachable!("a string is not a cue pointer");
        };
        assert_eq!(failure.message, "Expected object, got string");
    }
}
