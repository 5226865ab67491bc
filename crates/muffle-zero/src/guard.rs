// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII scratch buffer that wipes itself on drop.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::sentinel::WipeSentinel;
use crate::traits::{DeepWipe, WipeProbe};

/// Transient byte buffer for sensitive intermediate data.
///
/// `ScratchGuard` owns a heap buffer and guarantees the full wipe schedule
/// runs when the guard goes out of scope, on success and error paths alike.
/// Access goes through `Deref`/`DerefMut`, so the guard can be used anywhere
/// `&[u8]` / `&mut [u8]` is expected.
///
/// # Example
///
/// ```rust
/// use muffle_zero::ScratchGuard;
///
/// {
///     let mut scratch = ScratchGuard::from_slice(b"transient secret");
///     scratch[0] ^= 0x20;
///     assert_eq!(&scratch[..2], b"Tr");
/// } // wiped here
/// ```
pub struct ScratchGuard {
    buf: Vec<u8>,
    __sentinel: WipeSentinel,
}

impl ScratchGuard {
    /// Creates a zero-initialized scratch buffer of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            buf: vec![0u8; len],
            __sentinel: WipeSentinel::default(),
        }
    }

    /// Creates a scratch buffer holding a private copy of `src`.
    pub fn from_slice(src: &[u8]) -> Self {
        Self {
            buf: src.to_vec(),
            __sentinel: WipeSentinel::default(),
        }
    }

    /// Wipes the buffer contents now instead of at drop.
    ///
    /// The buffer stays usable (all zeros) afterwards; drop will wipe again,
    /// which is harmless.
    pub fn wipe(&mut self) {
        self.buf.deep_wipe();
        self.__sentinel.mark_wiped();
    }

    /// Clones the internal [`WipeSentinel`] for verification.
    ///
    /// The clone shares state with the guard, so it can be checked after
    /// the guard is dropped (including via unwinding) to verify the wipe
    /// ran.
    pub fn clone_sentinel(&self) -> WipeSentinel {
        self.__sentinel.clone()
    }
}

impl Deref for ScratchGuard {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl DerefMut for ScratchGuard {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl WipeProbe for ScratchGuard {
    fn is_wiped(&self) -> bool {
        self.buf.is_wiped()
    }
}

impl fmt::Debug for ScratchGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ScratchGuard]")
    }
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        self.wipe();
    }
}
