//! `signet-generate`: credential and identifier generation primitives.
//!
//! Four independent operations, no shared state:
//! - [`derive_key`]: scrypt password key derivation with fixed work factors
//! - [`salt`]: 256 bytes from the OS entropy source
//! - [`new_uuid`]: RFC 4122 version-4 UUID as a canonical hyphenated string
//! - [`TokenGenerator`] / [`random_string`]: fast non-cryptographic tokens
//!   from a frozen printable alphabet

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod kdf;
pub mod random;
pub mod token;

pub use error::GenerateError;
pub use kdf::{derive_key, KEY_LEN};
pub use random::{new_uuid, salt, SALT_LEN};
pub use token::{random_string, TokenGenerator, ALPHABET};
