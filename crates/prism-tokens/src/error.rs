//! Error types for the token build pipeline.

use thiserror::Error;

/// Main error type for token build operations.
///
/// There is no recovery path: any failure aborts the build and propagates
/// to the caller.
#[derive(Error, Debug)]
pub enum TokenError {
    /// General I/O error while reading sources or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token file is not valid JSON
    #[error("failed to parse token file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A token file parsed but does not have the expected shape
    #[error("invalid token file {file}: {reason}")]
    InvalidTokenFile { file: String, reason: String },

    /// A token value references a path no token defines
    #[error("unresolved reference {{{reference}}} in token {token}")]
    UnresolvedReference { token: String, reference: String },

    /// Token references form a cycle
    #[error("reference cycle while resolving token {0}")]
    ReferenceCycle(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;
