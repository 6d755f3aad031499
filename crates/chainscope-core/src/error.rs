//! Error types for the chainscope core
//!
//! The text transforms in this crate are total and never fail; the only
//! fallible operations are document parsing and capability-name lookup.

/// Chainscope core error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The chain document is not valid JSON or has the wrong shape
    #[error("malformed chain document: {0}")]
    Json(#[from] serde_json::Error),

    /// A capability name that the listing API does not define
    #[error("unknown capability: {0:?}")]
    UnknownCapability(String),
}

/// Result type alias for chainscope operations
pub type Result<T> = std::result::Result<T, Error>;
