// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # muffle_rand
//!
//! Cryptographically secure key material for the muffle obfuscation
//! protocol.
//!
//! Obfuscation keys are single `u64` values drawn from the operating
//! system's CSPRNG. Keys are guaranteed non-zero: a zero key would collapse
//! the keystream and is an easy structural signature in a binary.
//!
//! ## Platform Support
//!
//! - Linux/Android: `getrandom()` syscall via libc
//! - macOS/iOS: `getentropy()` via libc
//! - WASI/browsers: `crypto.getRandomValues` via the `getrandom` crate
//! - Everything else: the `getrandom` crate
//!
//! ## Example
//!
//! ```rust
//! use muffle_rand::generate_key;
//!
//! let key = generate_key().expect("entropy unavailable");
//! assert_ne!(key, 0);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod key;
mod system;

pub use error::EntropyError;
pub use key::{entropy_u64, generate_key};
