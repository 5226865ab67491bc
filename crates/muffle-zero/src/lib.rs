// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # muffle_zero
//!
//! Secure-wipe primitives for the muffle obfuscation stack.
//!
//! Every buffer that ever holds plaintext or keying material is overwritten
//! through this crate before being discarded. Wipes run [`WIPE_PASSES`]
//! iterations of distinct non-zero bit patterns followed by a final zero
//! pass, implemented with `core::ptr::write_volatile` plus a compiler fence
//! so dead-store elimination cannot remove them.
//!
//! ## Core Types
//!
//! - [`ScratchGuard`]: RAII byte buffer that wipes itself on drop
//! - [`WipeSentinel`]: shared marker for verifying drop-path wipes in tests
//!
//! ## Traits
//!
//! - [`DeepWipe`]: multi-pattern overwrite for sensitive storage
//! - [`WipeProbe`]: runtime verification that a wipe actually happened
//!
//! ## Example
//!
//! ```rust
//! use muffle_zero::{DeepWipe, WipeProbe};
//!
//! let mut words = vec![0xDEAD_BEEFu64, 0xCAFE_BABE];
//! words.deep_wipe();
//!
//! assert!(words.is_wiped());
//! assert_eq!(words, [0, 0]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod guard;
mod patterns;
mod sentinel;
mod traits;
mod wipe;

pub use guard::ScratchGuard;
pub use patterns::WIPE_PASSES;
pub use sentinel::WipeSentinel;
pub use traits::{DeepWipe, WipeProbe};
pub use wipe::{wipe_bytes, wipe_chars, wipe_words};
