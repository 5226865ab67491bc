// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wipe traits for sensitive storage.

use alloc::string::String;
use alloc::vec::Vec;

use crate::wipe::{wipe_bytes, wipe_chars, wipe_words};

/// Trait for storage holding sensitive material that must be multi-pass wiped.
///
/// Implementations run the full wipe schedule (several non-zero patterns,
/// then zeros) so the final state is all-zero bytes and no intermediate
/// state equals the original contents.
///
/// # Example
///
/// ```rust
/// use muffle_zero::DeepWipe;
///
/// let mut key = 0x1234_5678_90AB_CDEFu64;
/// key.deep_wipe();
/// assert_eq!(key, 0);
/// ```
pub trait DeepWipe {
    /// Overwrites the contents in place with the full wipe schedule.
    fn deep_wipe(&mut self);
}

/// Runtime probe verifying that a wipe actually happened.
///
/// Used by tests and assertions to check that no sensitive data remains.
pub trait WipeProbe {
    /// Returns `true` if every element is at the wipe sentinel (zero).
    fn is_wiped(&self) -> bool;
}

impl DeepWipe for u64 {
    fn deep_wipe(&mut self) {
        wipe_words(core::slice::from_mut(self));
    }
}

impl WipeProbe for u64 {
    fn is_wiped(&self) -> bool {
        *self == 0
    }
}

impl DeepWipe for [u8] {
    fn deep_wipe(&mut self) {
        wipe_bytes(self);
    }
}

impl WipeProbe for [u8] {
    fn is_wiped(&self) -> bool {
        self.iter().all(|&b| b == 0)
    }
}

impl DeepWipe for [u64] {
    fn deep_wipe(&mut self) {
        wipe_words(self);
    }
}

impl WipeProbe for [u64] {
    fn is_wiped(&self) -> bool {
        self.iter().all(|&w| w == 0)
    }
}

impl DeepWipe for [char] {
    fn deep_wipe(&mut self) {
        wipe_chars(self);
    }
}

impl WipeProbe for [char] {
    fn is_wiped(&self) -> bool {
        self.iter().all(|&c| c == '\u{0}')
    }
}

impl DeepWipe for Vec<u8> {
    fn deep_wipe(&mut self) {
        wipe_bytes(self.as_mut_slice());
    }
}

impl WipeProbe for Vec<u8> {
    fn is_wiped(&self) -> bool {
        self.as_slice().is_wiped()
    }
}

impl DeepWipe for Vec<u64> {
    fn deep_wipe(&mut self) {
        wipe_words(self.as_mut_slice());
    }
}

impl WipeProbe for Vec<u64> {
    fn is_wiped(&self) -> bool {
        self.as_slice().is_wiped()
    }
}

impl DeepWipe for String {
    fn deep_wipe(&mut self) {
        // SAFETY: the intermediate patterns are not valid UTF-8, but no str
        // method runs while the byte view is borrowed, and the final zero
        // pass leaves all-NUL contents, which are valid UTF-8.
        unsafe { self.as_mut_vec() }.deep_wipe();
    }
}

impl WipeProbe for String {
    fn is_wiped(&self) -> bool {
        self.as_bytes().is_wiped()
    }
}

impl DeepWipe for Vec<char> {
    fn deep_wipe(&mut self) {
        wipe_chars(self.as_mut_slice());
    }
}

impl WipeProbe for Vec<char> {
    fn is_wiped(&self) -> bool {
        self.as_slice().is_wiped()
    }
}
