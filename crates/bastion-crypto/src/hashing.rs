//! # Streaming File Digests
//!
//! Incremental hashing of file contents without loading them into memory.
//! Usable mid-request: read failures surface as errors, never terminate the
//! process.

use crate::CryptoError;
use sha2::{Digest, Sha256, Sha512};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Digest algorithms supported for file hashing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-256 (default)
    #[default]
    Sha256,
    /// SHA-512
    Sha512,
}

/// Hash a file's contents with SHA-256, returning the lowercase-hex digest.
pub async fn hash_file(path: impl AsRef<Path>) -> Result<String, CryptoError> {
    hash_file_with(path, HashAlgorithm::Sha256).await
}

/// Hash a file's contents with the given algorithm.
///
/// Streams the file in chunks; the digest over a file equals the one-shot
/// digest over its full contents.
pub async fn hash_file_with(
    path: impl AsRef<Path>,
    algorithm: HashAlgorithm,
) -> Result<String, CryptoError> {
    match algorithm {
        HashAlgorithm::Sha256 => digest_stream::<Sha256>(path.as_ref()).await,
        HashAlgorithm::Sha512 => digest_stream::<Sha512>(path.as_ref()).await,
    }
}

async fn digest_stream<D: Digest>(path: &Path) -> Result<String, CryptoError> {
    let io_err = |source| CryptoError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut file = File::open(path).await.map_err(io_err)?;
    let mut hasher = D::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let read = file.read(&mut buffer).await.map_err(io_err)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
