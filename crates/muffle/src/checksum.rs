// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Order-and-content-sensitive integrity checksum.
//!
//! A seeded rolling hash over the ciphertext array: rotate, XOR the element,
//! add a position-weighted seed term. It detects accidental corruption and
//! incidental tampering of the owned array between construction and use. It
//! is **not** a MAC and carries no authenticity guarantee.

use subtle::ConstantTimeEq;

use crate::error::MuffleError;

/// Seed constant for the rolling checksum.
pub const INTEGRITY_SEED: u64 = 0x1234_5678_90AB_CDEF;

/// Bits the running checksum is rotated left per element.
const ROTATE_BITS: u32 = 7;

/// Computes the integrity checksum of a ciphertext array.
///
/// An empty array checksums to 0.
///
/// # Example
///
/// ```rust
/// use muffle::checksum;
///
/// let words = [0x1u64, 0x2, 0x3];
/// let a = checksum(&words);
/// let b = checksum(&[0x2u64, 0x1, 0x3]);
/// assert_ne!(a, b); // order-sensitive
/// ```
pub fn checksum(words: &[u64]) -> u64 {
    if words.is_empty() {
        return 0;
    }

    let mut acc = INTEGRITY_SEED;
    for (i, &word) in words.iter().enumerate() {
        acc = acc.rotate_left(ROTATE_BITS);
        acc ^= word;
        acc = acc.wrapping_add((i as u64).wrapping_mul(INTEGRITY_SEED));
    }

    acc
}

/// Recomputes the checksum and compares it against `expected` in constant
/// time.
///
/// The comparison has no early exit, so timing reveals nothing about which
/// bits matched.
///
/// # Errors
///
/// - [`MuffleError::InvalidInput`] if `words` is empty
/// - [`MuffleError::IntegrityViolation`] on mismatch
pub fn verify(words: &[u64], expected: u64) -> Result<(), MuffleError> {
    if words.is_empty() {
        return Err(MuffleError::InvalidInput);
    }

    let actual = checksum(words);
    if bool::from(actual.ct_eq(&expected)) {
        Ok(())
    } else {
        Err(MuffleError::IntegrityViolation)
    }
}
