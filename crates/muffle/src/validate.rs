// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time structural validation and the rejection-path delay.

use subtle::{Choice, ConstantTimeEq};

use crate::limits::MAX_WORDS;

/// Upper bound on rejection-delay spin iterations.
const MAX_REJECT_SPINS: u64 = 1 << 12;

/// Checks `1 <= len <= MAX_WORDS` in a fixed number of comparison steps.
///
/// The acceptance decision accumulates one constant-time equality per
/// admissible length, so the step count never depends on the value of
/// `len`. The cost is paid once per handle construction.
pub(crate) fn constant_time_len_ok(len: usize) -> bool {
    let len = len as u64;
    let mut ok = Choice::from(0u8);

    for admissible in 1..=MAX_WORDS as u64 {
        ok |= len.ct_eq(&admissible);
    }

    bool::from(ok)
}

/// Spins for an entropy-derived number of iterations.
///
/// Inserted before rejecting structurally invalid input so an observer
/// cannot distinguish "rejected quickly" from "rejected after work". If the
/// entropy source itself fails, the delay degrades to its maximum rather
/// than to none.
pub(crate) fn reject_delay() {
    let spins = muffle_rand::entropy_u64().unwrap_or(u64::MAX) % MAX_REJECT_SPINS;

    for _ in 0..spins {
        core::hint::spin_loop();
    }
}
