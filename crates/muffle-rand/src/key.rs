// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Obfuscation key generation.

use crate::error::EntropyError;
use crate::system::fill_u64;

/// Generates a non-zero 64-bit obfuscation key from OS entropy.
///
/// A raw zero draw is replaced by a fresh draw ORed with 1: a zero key
/// collapses the keystream on its first seed path and is a trivially
/// recognizable structural signature in static data.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS CSPRNG fails.
///
/// # Example
///
/// ```rust
/// use muffle_rand::generate_key;
///
/// let key = generate_key().expect("entropy unavailable");
/// assert_ne!(key, 0);
/// ```
pub fn generate_key() -> Result<u64, EntropyError> {
    let mut key = 0u64;
    fill_u64(&mut key)?;

    if key == 0 {
        fill_u64(&mut key)?;
        key |= 1;
    }

    Ok(key)
}

/// Draws one raw entropy word.
///
/// Used for non-keying purposes such as timing jitter on rejection paths;
/// zero is a legal value here.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS CSPRNG fails.
pub fn entropy_u64() -> Result<u64, EntropyError> {
    let mut word = 0u64;
    fill_u64(&mut word)?;

    Ok(word)
}
