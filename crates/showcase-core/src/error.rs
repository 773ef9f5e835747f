//! Core Errors
//!
//! Failures of the I/O collaborators around the pipeline. The pipeline itself
//! is pure and has no error type.

use thiserror::Error;

/// Key-value persistence failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt value under {key}: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Mocked HTTP layer failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no handler for {0}")]
    NotFound(String),
    #[error("request to {0} failed (simulated)")]
    Unavailable(String),
    #[error("failed to encode response: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Theme variable validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("not a color: {0:?}")]
    InvalidColor(String),
}
