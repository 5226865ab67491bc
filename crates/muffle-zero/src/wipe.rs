// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Volatile multi-pattern overwrite routines.

use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::patterns::{BYTE_PATTERNS, CHAR_PATTERNS, WIPE_PASSES, WORD_PATTERNS};

/// Fills a slice with `value` through volatile stores.
///
/// `write_volatile` keeps every store alive through dead-store elimination;
/// the trailing fence stops the compiler from reordering the pass against
/// later reads of the same memory.
#[inline]
fn fill_volatile<T: Copy>(slice: &mut [T], value: T) {
    for elem in slice.iter_mut() {
        // SAFETY: `elem` is a valid, aligned, exclusive reference.
        unsafe { ptr::write_volatile(elem, value) };
    }
    compiler_fence(Ordering::SeqCst);
}

/// Runs the full wipe schedule over a slice with the given pattern set.
#[inline]
fn wipe_with<T: Copy>(slice: &mut [T], patterns: &[T], zero: T) {
    for _ in 0..WIPE_PASSES {
        for &pattern in patterns {
            fill_volatile(slice, pattern);
        }
    }
    fill_volatile(slice, zero);
}

/// Overwrites a byte buffer with multiple non-zero patterns, ending at zero.
///
/// # Example
///
/// ```rust
/// use muffle_zero::wipe_bytes;
///
/// let mut secret = *b"hunter2";
/// wipe_bytes(&mut secret);
///
/// assert_eq!(secret, [0u8; 7]);
/// ```
pub fn wipe_bytes(buf: &mut [u8]) {
    wipe_with(buf, &BYTE_PATTERNS, 0);
}

/// Overwrites a `u64` buffer with multiple non-zero patterns, ending at zero.
pub fn wipe_words(buf: &mut [u64]) {
    wipe_with(buf, &WORD_PATTERNS, 0);
}

/// Overwrites a `char` buffer with multiple non-zero patterns, ending at NUL.
pub fn wipe_chars(buf: &mut [char]) {
    wipe_with(buf, &CHAR_PATTERNS, '\u{0}');
}
