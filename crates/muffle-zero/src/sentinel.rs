// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Observable wipe marker for verifying drop-path wipes.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// Shared marker recording whether a wipe happened.
///
/// All clones of a sentinel share one flag, so a clone taken before a guard
/// is dropped can be inspected afterwards to verify the drop-path wipe
/// actually ran. The sentinel deliberately has no `Drop` of its own: it is
/// marked only by an explicit [`mark_wiped`](WipeSentinel::mark_wiped)
/// call, so dropping a guard without wiping would be visible as a
/// still-unmarked sentinel rather than a false positive.
///
/// # Example
///
/// ```rust
/// use muffle_zero::{ScratchGuard, WipeSentinel};
///
/// let guard = ScratchGuard::from_slice(b"transient");
/// let sentinel = guard.clone_sentinel();
///
/// assert!(!sentinel.is_wiped());
/// drop(guard);
/// assert!(sentinel.is_wiped());
/// ```
#[derive(Clone, Debug, Default)]
pub struct WipeSentinel {
    wiped: Arc<AtomicBool>,
}

impl WipeSentinel {
    /// Marks the sentinel (and every clone of it) as wiped.
    pub fn mark_wiped(&self) {
        self.wiped.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once any clone of this sentinel was marked.
    pub fn is_wiped(&self) -> bool {
        self.wiped.load(Ordering::SeqCst)
    }
}
