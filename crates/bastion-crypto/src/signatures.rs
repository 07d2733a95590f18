//! # ML-DSA-44 Signatures
//!
//! Lattice-based detached signatures (FIPS 204, formerly CRYSTALS-Dilithium).
//!
//! Keys and signatures cross this module's boundary as lowercase hex. The
//! verify path distinguishes two failure classes: malformed hex propagates as
//! [`CryptoError::InvalidHex`], while a wrong-length or undecodable key or
//! signature fails closed with `Ok(false)`. A mismatched signature is the
//! normal `Ok(false)` outcome, never an error.

use crate::CryptoError;
use fips204::ml_dsa_44::{self, PrivateKey, PublicKey};
use fips204::traits::{SerDes, Signer, Verifier};

/// ML-DSA-44 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = ml_dsa_44::PK_LEN;

/// ML-DSA-44 signature length in bytes.
pub const SIGNATURE_LEN: usize = ml_dsa_44::SIG_LEN;

// Signatures here carry no per-message context, so the FIPS 204 context
// string is always empty.
const CTX: &[u8] = &[];

/// Verify a detached signature over a UTF-8 string payload.
///
/// Convenience wrapper around [`verify_bytes_signature`] for callers holding
/// text rather than raw bytes.
pub fn verify_signature(
    data: &str,
    public_key_hex: &str,
    signature_hex: &str,
) -> Result<bool, CryptoError> {
    verify_bytes_signature(data.as_bytes(), public_key_hex, signature_hex)
}

/// Verify a detached ML-DSA-44 signature over a byte payload.
///
/// Deterministic: the same (message, key, signature) triple always yields
/// the same boolean.
pub fn verify_bytes_signature(
    message: &[u8],
    public_key_hex: &str,
    signature_hex: &str,
) -> Result<bool, CryptoError> {
    let public_key_bytes = hex::decode(public_key_hex)?;
    let signature_bytes = hex::decode(signature_hex)?;

    // Length mismatches fail closed rather than erroring: a truncated or
    // padded key/signature can never verify.
    let public_key_bytes: [u8; PUBLIC_KEY_LEN] = match public_key_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };
    let signature: [u8; SIGNATURE_LEN] = match signature_bytes.try_into() {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };
    let public_key = match PublicKey::try_from_bytes(public_key_bytes) {
        Ok(key) => key,
        Err(_) => return Ok(false),
    };

    Ok(public_key.verify(message, &signature, CTX))
}

/// ML-DSA-44 keypair.
///
/// Verify-only deployments never need this; it exists so key provisioning
/// and the sign/verify round-trip live next to the verifier they must agree
/// with.
pub struct MlDsaKeyPair {
    public_key_hex: String,
    private_key: PrivateKey,
}

impl MlDsaKeyPair {
    /// Generate a fresh keypair from the OS RNG.
    pub fn generate() -> Result<Self, CryptoError> {
        let (public_key, private_key) = ml_dsa_44::try_keygen()
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        Ok(Self {
            public_key_hex: hex::encode(public_key.into_bytes()),
            private_key,
        })
    }

    /// Public key as lowercase hex.
    pub fn public_key_hex(&self) -> String {
        self.public_key_hex.clone()
    }

    /// Sign a byte payload, returning the detached signature as lowercase hex.
    pub fn sign(&self, message: &[u8]) -> Result<String, CryptoError> {
        let signature = self
            .private_key
            .try_sign(message, CTX)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        Ok(hex::encode(signature))
    }
}
