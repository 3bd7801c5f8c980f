//! Cryptographically secure salt and UUID generation.
//!
//! Both operations read the operating system's entropy source through
//! [`OsRng`]. A failing entropy source indicates a degraded environment, so
//! failures are surfaced to the caller and never retried internally.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use crate::error::GenerateError;

/// Length of a generated salt in bytes.
pub const SALT_LEN: usize = 256;

/// Fill `buf` from the OS entropy source.
fn fill_secure(buf: &mut [u8]) -> Result<(), GenerateError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| GenerateError::EntropySource(format!("OS random source unreadable: {e}")))
}

/// Generate a fresh 256-byte salt for password key derivation.
///
/// # Errors
///
/// Returns [`GenerateError::EntropySource`] if the entropy source cannot be
/// read to completion.
pub fn salt() -> Result<[u8; SALT_LEN], GenerateError> {
    let mut salt = [0u8; SALT_LEN];
    fill_secure(&mut salt)?;
    Ok(salt)
}

/// Generate a random RFC 4122 version-4 UUID as its canonical 36-character
/// hyphenated lowercase string.
///
/// Reads exactly 16 bytes of OS entropy, then stamps the variant bits
/// (section 4.1.1) and the version nibble (section 4.1.3).
///
/// # Errors
///
/// Returns [`GenerateError::EntropySource`] if fewer than 16 bytes can be
/// obtained.
pub fn new_uuid() -> Result<String, GenerateError> {
    let mut bytes = [0u8; 16];
    fill_secure(&mut bytes)?;

    let uuid = Builder::from_random_bytes(bytes).into_uuid();
    Ok(uuid.as_hyphenated().to_string())
}
