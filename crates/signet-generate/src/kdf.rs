//! scrypt password key derivation with fixed work-factor parameters.
//!
//! The parameters are compile-time constants so every stored credential
//! carries the same security posture. They are deliberately not runtime
//! configuration.

use crate::error::GenerateError;

/// Length of a derived key in bytes.
pub const KEY_LEN: usize = 256;

/// scrypt cost parameter as log2(N); N = 2^15 = 32768 iterations.
const SCRYPT_LOG_N: u8 = 15;

/// scrypt block size parameter.
const SCRYPT_R: u32 = 8;

/// scrypt parallelization parameter.
const SCRYPT_P: u32 = 1;

/// Derive a 256-byte key from a password and salt using scrypt.
///
/// Deterministic for a given (password, salt) pair. The password is borrowed
/// for the duration of the call and never retained. Both password and salt
/// may be any byte sequence, including empty.
///
/// This call is intentionally expensive in CPU and memory; keep it off
/// latency-sensitive paths.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidParams`] if scrypt rejects the parameter
/// combination or the output length. Not expected in normal operation since
/// the parameters are fixed constants, but checked rather than assumed.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN], GenerateError> {
    // The 4th `Params::new` argument is the PHC-string output-length field
    // (constrained to 10..=64 and only consulted by scrypt's `simple` feature).
    // It does not affect `scrypt::scrypt`, whose output length is taken from the
    // `key` buffer below, so the derived 256-byte key is unchanged by its value.
    let params = scrypt::Params::new(
        SCRYPT_LOG_N,
        SCRYPT_R,
        SCRYPT_P,
        scrypt::Params::RECOMMENDED_LEN,
    )
    .map_err(|e| GenerateError::InvalidParams(format!("invalid scrypt parameters: {e}")))?;

    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(password, salt, &params, &mut key)
        .map_err(|e| GenerateError::InvalidParams(format!("scrypt rejected output length: {e}")))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_key_produces_256_bytes() {
        let key = derive_key(b"password", b"salt").expect("derive should succeed");
        assert_eq!(key.len(), KEY_LEN);
    }

    #[test]
    fn derive_key_is_deterministic() {
        let a = derive_key(b"password", b"salt").expect("derive should succeed");
        let b = derive_key(b"password", b"salt").expect("derive should succeed");
        assert_eq!(a, b);
    }

    #[test]
    fn different_salts_produce_different_keys() {
        let a = derive_key(b"password", b"salt-a").expect("derive should succeed");
        let b = derive_key(b"password", b"salt-b").expect("derive should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn different_passwords_produce_different_keys() {
        let a = derive_key(b"password-a", b"salt").expect("derive should succeed");
        let b = derive_key(b"password-b", b"salt").expect("derive should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_salt_is_accepted() {
        let key = derive_key(b"password", b"").expect("empty salt should be accepted");
        // A derived key is never degenerate even without a salt.
        assert!(key.iter().any(|&b| b != 0));
    }
}
