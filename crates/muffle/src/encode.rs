// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-time encoder: plaintext to ciphertext words.

use alloc::vec::Vec;

use muffle_zero::{DeepWipe, ScratchGuard};

use crate::checksum::{checksum, verify};
use crate::error::MuffleError;
use crate::keystream::Keystream;
use crate::limits::MAX_PLAINTEXT_BYTES;

/// Packs up to 8 bytes into a little-endian word, zero-padding the tail.
pub(crate) fn pack_word(bytes: &[u8]) -> u64 {
    let mut word = 0u64;
    for (i, &byte) in bytes.iter().take(8).enumerate() {
        word |= (byte as u64) << (i * 8);
    }
    word
}

/// Unpacks a word into up to 8 little-endian bytes.
pub(crate) fn unpack_word(word: u64, out: &mut [u8]) {
    for (i, slot) in out.iter_mut().take(8).enumerate() {
        *slot = (word >> (i * 8)) as u8;
    }
}

/// Encodes a plaintext string into a ciphertext array.
///
/// The result is `{key, word_1, .., word_n}` with `n = ceil(len/8)`: word 0
/// is a freshly drawn non-zero key, each following word is 8 little-endian
/// plaintext bytes XORed with one keystream word. The serialization copy of
/// the plaintext is wiped whether or not encoding succeeds.
///
/// # Errors
///
/// - [`MuffleError::InvalidInput`] if the plaintext contains an embedded NUL
/// - [`MuffleError::InputTooLarge`] if it serializes to more than 256 KiB
/// - [`MuffleError::IntegrityViolation`] if the output fails its own
///   checksum self-check (memory corruption between computation and return);
///   the output is wiped before the error propagates
/// - [`MuffleError::Entropy`] if the OS entropy source fails
///
/// # Example
///
/// ```rust
/// use muffle::encode;
///
/// let words = encode("internal-endpoint")?;
/// assert_eq!(words.len(), 1 + 17usize.div_ceil(8));
/// assert_ne!(words[0], 0);
/// # Ok::<(), muffle::MuffleError>(())
/// ```
pub fn encode(plaintext: &str) -> Result<Vec<u64>, MuffleError> {
    validate_plaintext(plaintext)?;

    let key = muffle_rand::generate_key()?;
    encode_words(plaintext, key)
}

/// Encodes with a caller-supplied key instead of a random one.
///
/// Exists for deterministic tests; production callers want [`encode`].
#[cfg(any(test, feature = "test-utils"))]
pub fn encode_with_key(plaintext: &str, key: u64) -> Result<Vec<u64>, MuffleError> {
    validate_plaintext(plaintext)?;

    if key == 0 {
        return Err(MuffleError::InvalidInput);
    }

    encode_words(plaintext, key)
}

fn validate_plaintext(plaintext: &str) -> Result<(), MuffleError> {
    if plaintext.bytes().any(|b| b == 0) {
        return Err(MuffleError::InvalidInput);
    }
    if plaintext.len() > MAX_PLAINTEXT_BYTES {
        return Err(MuffleError::InputTooLarge);
    }

    Ok(())
}

fn encode_words(plaintext: &str, key: u64) -> Result<Vec<u64>, MuffleError> {
    // Private serialization copy; the guard wipes it on every exit path.
    let scratch = ScratchGuard::from_slice(plaintext.as_bytes());

    let mut words = Vec::with_capacity(1 + scratch.len().div_ceil(8));
    words.push(key);

    let mut stream = Keystream::new(key);
    for chunk in scratch.chunks(8) {
        words.push(pack_word(chunk) ^ stream.next_word());
    }

    // Self-check against corruption between computation and return.
    let expected = checksum(&words);
    if let Err(err) = verify(&words, expected) {
        words.deep_wipe();
        return Err(err);
    }

    Ok(words)
}
