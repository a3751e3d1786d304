//! Error types for the table-finding pipeline.

use std::fmt;

/// Errors the pipeline can return. All are terminal: callers get no partial
/// results, and none of these conditions are retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A setting failed validation (e.g. a negative tolerance).
    InvalidSettings(String),
    /// The page is not in a state the requested operation can run against
    /// (e.g. primitives have not been extracted, or the page was released).
    InvalidPageState,
    /// Text extraction was requested but no page was supplied to reconstruct
    /// words from.
    MissingPage,
    /// The operation was aborted via an external cancellation token.
    Cancelled,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
            CoreError::InvalidPageState => write!(f, "page is not in a state this operation can run against"),
            CoreError::MissingPage => write!(f, "text extraction requires a page but none was supplied"),
            CoreError::Cancelled => write!(f, "operation was cancelled"),
        }
    }
}

impl std::error::Error for CoreError {}
