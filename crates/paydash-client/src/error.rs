//! Error types for paydash-client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Unknown employee: {id}")]
    UnknownEmployee { id: String },

    #[error("Invalid page cursor: {cursor}")]
    InvalidCursor { cursor: String },
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
