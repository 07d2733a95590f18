//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input was not valid hexadecimal
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// File could not be read
    #[error("Error reading file {path}: {source}")]
    Io {
        /// Path of the file being read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
