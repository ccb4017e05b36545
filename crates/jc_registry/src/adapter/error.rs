use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::engine::EngineError;

// -----------------------------------------------------------------------------
// AdapterError

/// Failure raised by a [`JsonAdapter`](crate::adapter::JsonAdapter) while
/// constructing itself or converting a value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdapterError {
    #[error("value passed to the adapter is not a `{expected}`")]
    TypeMismatch { expected: &'static str },

    #[error("unexpected null for non-null type `{expected}`")]
    UnexpectedNull { expected: &'static str },

    #[error("json conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A nested adapter, usually for a type argument, could not be obtained.
    #[error(transparent)]
    Engine(Box<EngineError>),

    #[error("{0}")]
    Custom(String),
}

impl From<EngineError> for AdapterError {
    #[inline]
    fn from(value: EngineError) -> Self {
        Self::Engine(Box::new(value))
    }
}

impl AdapterError {
    /// Create an error carrying a free-form message.
    #[inline]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
