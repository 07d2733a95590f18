//! # Bastion Crypto - Post-Quantum Verification Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signatures` | ML-DSA-44 (FIPS 204) | Detached request signatures |
//! | `hashing` | SHA-256 / SHA-512 | Streaming file digests |
//!
//! ## Security Properties
//!
//! - **ML-DSA-44**: lattice-based, no reliance on factoring or discrete-log
//!   hardness; verification is deterministic and side-effect-free
//! - **Hex boundary**: keys and signatures travel as lowercase hex; decoding
//!   failures never panic past the boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{hash_file, hash_file_with, HashAlgorithm};
pub use signatures::{
    verify_bytes_signature, verify_signature, MlDsaKeyPair, PUBLIC_KEY_LEN, SIGNATURE_LEN,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
