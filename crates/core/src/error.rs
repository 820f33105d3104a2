//! Error types for r2-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for r2-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for r2-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing command argument
    #[error("Usage error: {0}")]
    Usage(String),

    /// Target object key does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Target bucket does not exist
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    /// Local file I/O or stream failure during upload/download
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// Authentication or permission failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Service rejected the request for any other reason
    #[error("Remote error: {0}")]
    Remote(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,                                  // UsageError
            Error::Remote(_) => 3,                                 // RemoteError
            Error::Auth(_) => 4,                                   // AuthError
            Error::NotFound(_) | Error::BucketNotFound(_) => 5,    // NotFound
            Error::Transfer(_) | Error::Io(_) => 1                 // GeneralError
        }
    }

    /// Whether this error means the target bucket or key is absent
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::BucketNotFound(_))
    }
}
