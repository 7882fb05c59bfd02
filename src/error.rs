//! Error types for the dispatch layer.

use thiserror::Error;

/// Errors surfaced by the dynamic dispatch entry point.
///
/// Read paths never produce these: an absent key reports absence through the
/// return value, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The method name does not match the dispatch grammar.
    #[error("method {model}::{method} not found")]
    MethodNotFound { model: String, method: String },

    /// A set-dispatch was invoked without the value to store.
    #[error("method {model}::{method} called without a value argument")]
    MissingArgument { model: String, method: String },
}
