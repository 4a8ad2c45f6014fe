//! Field transformers
//!
//! A transformer is a total function from one raw JSON value to a
//! [`FieldResult`]. Type mismatches and rule violations come back as
//! `Failure`; nothing here panics or returns a Rust error.

use std::sync::Arc;

use serde_json::Value;

use crate::result::FieldResult;

mod common;
mod compose;
mod enums;
mod ids;
mod primitive;
mod ranged;

pub use self::common::json_type_name;
pub(crate) use self::common::type_mismatch;
pub use self::compose::{nullable, to_list};
pub use self::enums::{
    language, playalong_input, playalong_method, series, sound_file_extension, subtitle_type,
};
pub use self::ids::{game_id, id, response_ids};
pub use self::primitive::{boolean, float, int, metadata, non_empty_string, string, string_array};
pub use self::ranged::{positive_float, volume};

/// Validates one raw JSON value into a typed field outcome
pub trait Transformer<T>: Send + Sync {
    /// Run the validation
    fn transform(&self, value: &Value) -> FieldResult<T>;
}

impl<T, F> Transformer<T> for F
where
    F: Fn(&Value) -> FieldResult<T> + Send + Sync,
{
    fn transform(&self, value: &Value) -> FieldResult<T> {
        self(value)
    }
}

/// Shared handle so properties (and the structs holding them) stay cloneable
pub type SharedTransformer<T> = Arc<dyn Transformer<T>>;
