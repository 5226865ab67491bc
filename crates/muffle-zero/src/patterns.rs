// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wipe schedule constants.

/// Number of multi-pattern iterations before the final zero pass.
pub const WIPE_PASSES: usize = 3;

/// Patterns written over byte buffers on each pass.
pub(crate) const BYTE_PATTERNS: [u8; 4] = [0xFF, 0x00, 0xAA, 0x55];

/// Patterns written over word buffers on each pass.
pub(crate) const WORD_PATTERNS: [u64; 4] = [!0, 0, i64::MAX as u64, i64::MIN as u64];

/// Patterns written over char buffers on each pass.
///
/// All of these are valid Unicode scalar values, so volatile stores through
/// `&mut char` never materialize an invalid `char`.
pub(crate) const CHAR_PATTERNS: [char; 4] = ['\u{FF}', '\u{0}', '\u{AA}', '\u{55}'];
