// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Protocol limits.

/// Maximum ciphertext array length in words, key word included.
///
/// Bounds the memory a handle can be made to own from adversarial input.
pub const MAX_WORDS: usize = 32767;

/// Maximum serialized plaintext size accepted by the encoder (256 KiB).
pub const MAX_PLAINTEXT_BYTES: usize = 262_144;

/// Words decoded per keystream window (8 KiB of plaintext).
///
/// Each window seeds its own generator from `key + word_offset`, so decoding
/// never holds more than one window's generator state. The keystream is
/// counter-based, which makes the window size invisible in the output.
pub const CHUNK_WORDS: usize = 1024;
