// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic counter-based keystream.
//!
//! The keystream word for position `i` is a pure function of `seed + i`:
//! the generator keeps a counter starting at the seed and pushes each value
//! through a SplitMix64-style finalizer. Two consequences the codec relies
//! on:
//!
//! - a generator seeded at `key` and advanced `k` steps produces the same
//!   word as a fresh generator seeded at `key + k`, so chunked decoding is
//!   byte-identical to one-shot decoding for any chunk size;
//! - generators are cheap value types created per call (or per chunk), so
//!   no keystream state is ever shared across threads.

/// Deterministic keystream generator.
///
/// # Example
///
/// ```rust
/// use muffle::Keystream;
///
/// let mut a = Keystream::new(42);
/// let mut b = Keystream::new(42);
/// assert_eq!(a.next_word(), b.next_word());
/// ```
#[derive(Clone)]
pub struct Keystream {
    counter: u64,
}

impl Keystream {
    /// Creates a generator positioned at `seed`.
    pub fn new(seed: u64) -> Self {
        Self { counter: seed }
    }

    /// Returns the next keystream word and advances the counter.
    pub fn next_word(&mut self) -> u64 {
        let word = mix(self.counter);
        self.counter = self.counter.wrapping_add(1);
        word
    }
}

/// SplitMix64 finalizer: bijective avalanche over the counter value.
fn mix(counter: u64) -> u64 {
    let mut z = counter.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
