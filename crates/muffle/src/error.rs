// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for muffle.
//!
//! Every variant is unrecoverable at the point of detection: implicated
//! sensitive buffers are wiped before the error propagates, and there is no
//! retry anywhere in the crate.

use muffle_rand::EntropyError;
use thiserror::Error;

/// Errors surfaced by encoding, decoding, and validation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum MuffleError {
    /// Plaintext serializes to more than the 256 KiB input cap.
    #[error("plaintext exceeds the 256 KiB input cap")]
    InputTooLarge,

    /// Malformed input: embedded NUL, empty array, or recovered bytes that
    /// are not valid UTF-8.
    #[error("invalid input")]
    InvalidInput,

    /// The ciphertext array no longer matches its recorded checksum.
    ///
    /// Always fatal; indicates memory corruption or tampering, never a
    /// transient condition.
    #[error("ciphertext integrity check failed")]
    IntegrityViolation,

    /// Constant-time structural validation failed, or the handle was
    /// already released.
    #[error("security violation")]
    SecurityViolation,

    /// The OS entropy source failed during key generation.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
