//! Error type for element access, mutation, and JSON bridging.

use crate::types::Type;
use thiserror::Error;

/// Errors raised by [`Element`](crate::Element) operations.
///
/// Fixed-fallback getters and `execute_function` on non-function elements
/// are defined fallback behaviors, not failures; they never produce one of
/// these. Failing operations leave the element unmodified.
#[derive(Error, Debug)]
pub enum ElementError {
    /// A mutable scalar reference was requested from an element of a
    /// different type. The named setter replaces the value and retypes.
    #[error("cannot take a {expected} reference from a non-{expected} element; use set_{expected} to set the value and change the type")]
    TypeMismatch { expected: Type },

    /// A structural mutator was invoked on an element whose type does not
    /// support it.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Index-based access or removal beyond the current child count.
    #[error("index {index} is out of range for an element with {len} children")]
    OutOfRange { index: usize, len: usize },

    /// Appending synthesized a key that is already present (defensive;
    /// indicates inconsistent child storage).
    #[error("synthetic key \"{key}\" already exists; child keys are inconsistent")]
    KeyCollision { key: String },

    /// The parallel key and child sequences diverged in length.
    #[error("element corrupted: {keys} keys for {children} children")]
    CorruptState { keys: usize, children: usize },

    /// The parallel-lists object constructor received differing lengths.
    #[error("keys and values do not have the same size: {keys} keys, {values} values")]
    SizeMismatch { keys: usize, values: usize },

    /// The input string was not valid JSON, or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout dynel-core.
pub type Result<T> = std::result::Result<T, ElementError>;
