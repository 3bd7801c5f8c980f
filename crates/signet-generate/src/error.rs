//! Error types for `signet-generate`.

use thiserror::Error;

/// Errors produced by credential and identifier generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Key derivation parameter validation failed.
    #[error("invalid key derivation parameters: {0}")]
    InvalidParams(String),

    /// The operating-system entropy source could not be read to completion.
    #[error("entropy source failure: {0}")]
    EntropySource(String),
}
