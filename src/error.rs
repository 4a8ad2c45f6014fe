use thiserror::Error;

/// Errors raised by the engine.
///
/// Data-validation outcomes are not errors: they travel as
/// [`FieldResult::Failure`](crate::FieldResult::Failure) values. These variants
/// cover contract violations and input that is not JSON at all.
#[derive(Error, Debug)]
pub enum Error {
    /// Strict reconstruction was asked for on a struct with a non-`Success` field
    #[error("Strict reconstruction failed at `{path}`: {message}")]
    StrictReconstruction {
        /// Path of the first offending field, e.g. `objects[1].duration`
        path:    String,
        /// Why the field could not be taken
        message: String,
    },

    /// The input text is not valid JSON
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a definition file failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
