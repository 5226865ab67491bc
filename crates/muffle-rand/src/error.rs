// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for muffle-rand.

use thiserror::Error;

/// Errors from entropy acquisition.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EntropyError {
    /// The OS entropy source failed or is unavailable.
    #[error("entropy source not available")]
    EntropyNotAvailable,
}
