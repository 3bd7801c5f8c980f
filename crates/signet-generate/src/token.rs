//! Non-cryptographic pseudo-random token generation.
//!
//! Produces printable-ASCII strings for high-volume opaque identifiers where
//! unpredictability requirements are lower than for credentials. Characters
//! are drawn by rejection sampling over fixed-width bit groups, never by
//! modulo reduction, so no alphabet position is favored over another.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Token alphabet. Stored tokens depend on this exact byte sequence; never
/// reorder, extend, or shrink it.
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ~!$%^&*()_+{}:\"|<>?`-=[];'\\,./";

/// Bits consumed per candidate alphabet index.
const INDEX_BITS: u32 = 6;

/// All 1-bits, as many as [`INDEX_BITS`].
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;

/// Number of 6-bit groups available in one 63-bit draw.
const INDEX_MAX: u32 = 63 / INDEX_BITS;

/// Caller-owned pseudo-random token generator.
///
/// Wraps a seeded `ChaCha8` stream, so output for a fixed seed is identical
/// across runs and platforms. Not cryptographically secure, and a single
/// instance is not safe for shared concurrent use; give each thread or
/// request its own.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    rng: ChaCha8Rng,
}

impl TokenGenerator {
    /// Create a generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the wall clock at nanosecond
    /// resolution.
    #[must_use]
    pub fn from_clock() -> Self {
        // Truncating to the low 64 bits keeps full nanosecond resolution.
        #[allow(clippy::cast_possible_truncation)]
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Self::from_seed(seed)
    }

    /// Draw a fresh 63-bit word from the underlying stream.
    fn next_word(&mut self) -> u64 {
        self.rng.next_u64() >> 1
    }

    /// Produce `len` bytes drawn from [`ALPHABET`].
    ///
    /// Peels the low 6 bits of the current word as a candidate index; the
    /// candidate is consumed only when it falls inside the alphabet, and the
    /// 6 bits are discarded either way. Output positions are filled from the
    /// last to the first. After [`INDEX_MAX`] extractions the word is
    /// exhausted and a fresh one is drawn.
    // Decrements are guarded: `i > 0` by the loop condition, `remaining > 0`
    // by the refill branch above it.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        let mut cache = self.next_word();
        let mut remaining = INDEX_MAX;

        let mut i = len;
        while i > 0 {
            if remaining == 0 {
                cache = self.next_word();
                remaining = INDEX_MAX;
            }
            let idx = (cache & INDEX_MASK) as usize;
            if idx < ALPHABET.len() {
                i -= 1;
                out[i] = ALPHABET[idx];
            }
            cache >>= INDEX_BITS;
            remaining -= 1;
        }

        out
    }

    /// Produce a `len`-character token string.
    ///
    /// # Panics
    ///
    /// Panics if the generated bytes are not valid UTF-8, which cannot happen
    /// since [`ALPHABET`] is printable ASCII.
    pub fn random_string(&mut self, len: usize) -> String {
        String::from_utf8(self.random_bytes(len)).expect("token bytes are ASCII")
    }
}

/// Generate a token string from a generator seeded with the current
/// wall-clock time.
///
/// Convenience entry point. Callers needing reproducibility, or running
/// token generation concurrently, should own a [`TokenGenerator`] instance
/// per caller instead.
#[must_use]
pub fn random_string(len: usize) -> String {
    TokenGenerator::from_clock().random_string(len)
}
