//! Error types for the TRV gateway client.
//!
//! # Design
//! An unexpected status code is not an error here; it is reported through
//! `Outcome::Unexpected`. Errors are reserved for transport failures and for
//! response bodies that do not have the shape the caller relies on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, or an I/O error mid-request.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The server returned an empty array where at least one TRV was expected.
    #[error("response array is empty, no element at index 0")]
    EmptyList,

    /// Writing diagnostic output failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}
