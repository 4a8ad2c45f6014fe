//! Validation and transformation engine for RHRE sound-effects database game
//! definitions.
//!
//! A definition is read as an untyped [`serde_json::Value`], bound onto schema
//! structs made of [`Property`] slots, validated field by field into
//! [`FieldResult`]s, and finally reconstructed into plain [`records`] either
//! strictly ([`Reconstruct::produce_perfect_adt`]) or leniently
//! ([`Reconstruct::produce_imperfect_adt`]).
//!
//! ```
//! use rhre_sfxdb::{Reconstruct, parse_game};
//! use serde_json::json;
//!
//! let json = json!({
//!     "id": "game1",
//!     "name": "Game One",
//!     "series": "other",
//!     "objects": [{"type": "cue", "id": "a", "name": "A", "duration": 1.5}]
//! });
//! let game = parse_game(&json).success().cloned().expect("valid game");
//! let record = game.produce_perfect_adt().expect("all fields valid");
//! assert_eq!(record.objects.len(), 1);
//! ```

use std::path::Path;

mod constants;
pub mod datamodel;
mod error;
mod game;
mod property;
pub mod records;
mod report;
mod result;
pub mod schema;
pub mod transformers;
pub mod types;


pub use self::constants::{CUE_POINTER_NOT_USED, DEFAULT_VOLUME, VOLUME_RANGE};
pub use self::datamodel::{DatamodelObject, transform_datamodel};
pub use self::error::{Error, Result};
pub use self::game::{GameObject, bind_game, parse_game, validate_game};
pub use self::property::Property;
pub use self::report::ValidationReport;
pub use self::result::{Failure, FieldError, FieldResult};
pub use self::schema::{Reconstruct, Struct};

/// Parse definition text and bind it into a [`GameObject`]
///
/// # Errors
///
/// Returns [`Error::Json`] if `text` is not valid JSON.
pub fn game_from_str(text: &str) -> Result<GameObject> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(bind_game(&value))
}

/// Read a definition file as an untyped JSON tree
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if it
/// is not valid JSON.
pub fn read_definition(path: impl AsRef<Path>) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
