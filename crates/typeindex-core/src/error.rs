//! Error types for name decoding.
//!
//! None of these errors ever reach users of [`TypeIndex`](crate::TypeIndex):
//! the name codec recovers from every one of them by handing back the raw
//! name. They exist so that [`Demangle`](crate::name::Demangle)
//! implementations can report *why* they declined a name, which the codec
//! logs before falling back.

use thiserror::Error;

/// Result alias used by the name codec.
pub type Result<T> = std::result::Result<T, NameError>;

/// Reasons a raw type name could not be turned into a readable one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The raw name is not valid UTF-8.
    #[error("raw name is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    /// The raw name is empty.
    #[error("raw name is empty")]
    Empty,

    /// The raw name does not use any symbol encoding the demangler knows.
    #[error("'{name}' is not a mangled symbol")]
    NotMangled { name: String },

    /// The name looked like a mangled symbol but could not be decoded.
    #[error("malformed symbol '{name}': {detail}")]
    Malformed { name: String, detail: String },
}

impl From<std::str::Utf8Error> for NameError {
    fn from(err: std::str::Utf8Error) -> Self {
        NameError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}
