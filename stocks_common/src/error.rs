//! Error types shared between the client and the stub server.
//!
//! The `StocksError` enum unifies infrastructure failures (I/O, JSON encoding,
//! channel communication, lock poisoning, lookups) so that every crate in the
//! workspace can propagate a single error type. Quote fetch failures are not
//! errors in this sense; they are reported as `FetchOutcome` values.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and stub server.
#[derive(Error, Debug)]
pub enum StocksError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Channel receive failed (e.g., all senders closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// A poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// A company name or ticker could not be resolved against the directory.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),
}

impl<T> From<PoisonError<T>> for StocksError {
    fn from(err: PoisonError<T>) -> Self {
        StocksError::MutexLock(err.to_string())
    }
}
