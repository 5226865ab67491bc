// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # muffle
//!
//! Reversible obfuscation of string literals embedded in compiled programs.
//!
//! Plaintext is XORed against a deterministic keystream into an array of
//! `u64` words whose first element is the (randomly drawn, non-zero) key.
//! The array can be spliced into generated source as an integer literal; at
//! run time an [`ObfuscatedString`] handle reconstructs the plaintext on
//! demand and wipes everything sensitive when released.
//!
//! This is obfuscation against static inspection of a binary, **not**
//! encryption: the key ships next to the ciphertext, and an attacker who can
//! dump live process memory is out of scope.
//!
//! ## Defensive envelope
//!
//! - Integrity checksum computed at construction and re-verified before
//!   every decode; any mismatch is fatal ([`MuffleError::IntegrityViolation`])
//! - Constant-time structural validation with a randomized delay on the
//!   rejection path
//! - Multi-pattern secure wipe (via `muffle-zero`) of every transient buffer
//!   and of the owned ciphertext on release
//!
//! ## Example
//!
//! ```rust
//! use muffle::{ObfuscatedString, encode};
//!
//! // Build time: turn the literal into opaque words.
//! let words = encode("hello, world")?;
//!
//! // Run time: reconstruct on demand.
//! let mut handle = ObfuscatedString::new(&words)?;
//! assert_eq!(handle.reveal()?, "hello, world");
//!
//! // Release wipes the owned ciphertext exactly once.
//! handle.close();
//! # Ok::<(), muffle::MuffleError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod checksum;
mod encode;
mod error;
mod keystream;
mod limits;
mod obfuscated;
mod render;
mod validate;

pub use checksum::{INTEGRITY_SEED, checksum, verify};
pub use encode::encode;
#[cfg(any(test, feature = "test-utils"))]
pub use encode::encode_with_key;
pub use error::MuffleError;
pub use keystream::Keystream;
pub use limits::{CHUNK_WORDS, MAX_PLAINTEXT_BYTES, MAX_WORDS};
pub use obfuscated::ObfuscatedString;
pub use render::{obfuscate, source_literal};
