//! Domain-level error taxonomy for the compatibility gate.

use std::path::PathBuf;

/// Errors produced while gathering host facts, parsing versions, or
/// persisting conditional items.
#[derive(Debug, thiserror::Error)]
pub enum CompatError {
    /// An external query could not be completed or returned unparsable data.
    #[error("facts unavailable: {query}: {reason}")]
    FactsUnavailable { query: String, reason: String },

    /// A version string did not parse as dotted non-negative integers.
    ///
    /// Fatal for the run: a gate that mis-compares versions silently is
    /// worse than one that refuses to answer.
    #[error("malformed version string: '{input}'")]
    MalformedVersion { input: String },

    /// Reading, merging, or writing the conditional-items store failed.
    ///
    /// Surfaced to the caller but never changes the computed verdict.
    #[error("conditional items store {path:?}: {reason}")]
    Persistence { path: PathBuf, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for compatibility gate operations.
pub type Result<T> = std::result::Result<T, CompatError>;
