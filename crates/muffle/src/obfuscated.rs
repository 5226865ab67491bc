// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Run-time decoder handle.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use muffle_zero::{DeepWipe, ScratchGuard};

use crate::checksum::{checksum, verify};
use crate::encode::unpack_word;
use crate::error::MuffleError;
use crate::keystream::Keystream;
use crate::limits::CHUNK_WORDS;
use crate::validate::{constant_time_len_ok, reject_delay};

/// Decoder handle owning a private copy of a ciphertext array.
///
/// The handle records an integrity checksum at construction and re-verifies
/// it before every decode; a mismatch is always fatal. On release (explicit
/// [`close`](ObfuscatedString::close) or `Drop`) the owned words are wiped
/// with multiple non-zero patterns, exactly once even when both paths run.
///
/// `reveal*` take `&self` and decode into private buffers with their own
/// locally-seeded keystream instances, so a handle can be shared across
/// threads (for example behind an `Arc`) and revealed concurrently.
///
/// # Example
///
/// ```rust
/// use muffle::{ObfuscatedString, encode};
///
/// let words = encode("s3cret")?;
/// let handle = ObfuscatedString::new(&words)?;
///
/// assert_eq!(handle.reveal()?, "s3cret");
/// assert_eq!(handle.reveal_chars()?, vec!['s', '3', 'c', 'r', 'e', 't']);
/// # Ok::<(), muffle::MuffleError>(())
/// ```
pub struct ObfuscatedString {
    pub(crate) words: Vec<u64>,
    integrity: u64,
    released: AtomicBool,
}

impl ObfuscatedString {
    /// Constructs a handle from a ciphertext array.
    ///
    /// The array length is validated in a fixed number of comparison steps
    /// (see [`MAX_WORDS`](crate::MAX_WORDS)); rejection inserts a small
    /// entropy-derived delay so observers cannot distinguish a fast reject
    /// from a slow one. The input is cloned, never aliased.
    ///
    /// # Errors
    ///
    /// [`MuffleError::SecurityViolation`] if the length is 0 or exceeds the
    /// cap.
    pub fn new(words: &[u64]) -> Result<Self, MuffleError> {
        if !constant_time_len_ok(words.len()) {
            reject_delay();
            return Err(MuffleError::SecurityViolation);
        }

        let owned = words.to_vec();
        let integrity = checksum(&owned);

        Ok(Self {
            words: owned,
            integrity,
            released: AtomicBool::new(false),
        })
    }

    /// Reconstructs the plaintext as a `String`.
    ///
    /// Trailing zero bytes are trimmed as padding. This assumes plaintext
    /// never legitimately ends in NUL bytes; the encoder rejects embedded
    /// NUL, so encoder-produced arrays always round-trip. Decoding is
    /// explicit UTF-8, never a locale default.
    ///
    /// Ownership of the returned `String` passes to the caller, who is
    /// responsible for treating it as sensitive and not retaining it longer
    /// than necessary; callers that want to scrub it afterwards can use
    /// `muffle_zero::DeepWipe` on the returned `String`.
    ///
    /// # Errors
    ///
    /// - [`MuffleError::SecurityViolation`] if the handle was released
    /// - [`MuffleError::IntegrityViolation`] on checksum mismatch (fatal,
    ///   never retried)
    /// - [`MuffleError::InvalidInput`] if the recovered bytes are not valid
    ///   UTF-8 (the buffer is wiped before the error propagates)
    pub fn reveal(&self) -> Result<String, MuffleError> {
        let scratch = self.reconstruct()?;
        let len = trimmed_len(&scratch);

        match String::from_utf8(scratch[..len].to_vec()) {
            Ok(text) => Ok(text),
            Err(err) => {
                let mut bytes = err.into_bytes();
                bytes.deep_wipe();
                Err(MuffleError::InvalidInput)
            }
        }
    }

    /// Reconstructs the plaintext as a character sequence.
    ///
    /// Same semantics as [`reveal`](ObfuscatedString::reveal); callers that
    /// want to scrub the result afterwards can use
    /// `muffle_zero::DeepWipe` on the returned `Vec<char>`.
    pub fn reveal_chars(&self) -> Result<Vec<char>, MuffleError> {
        let scratch = self.reconstruct()?;
        let len = trimmed_len(&scratch);

        match core::str::from_utf8(&scratch[..len]) {
            Ok(text) => Ok(text.chars().collect()),
            Err(_) => Err(MuffleError::InvalidInput),
        }
    }

    /// Wipes the owned ciphertext words and marks the handle released.
    ///
    /// Idempotent: the first call (or `Drop`, whichever comes first)
    /// performs the single wipe; later calls are no-ops. Revealing a
    /// released handle fails with [`MuffleError::SecurityViolation`].
    pub fn close(&mut self) {
        self.release();
    }

    /// Returns `true` once the handle has been released.
    pub fn is_closed(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Decodes the ciphertext words into a wiped-on-drop byte buffer.
    ///
    /// Works in [`CHUNK_WORDS`] windows, each with a fresh generator seeded
    /// at `key + word_offset`; the counter-based keystream makes the window
    /// size invisible in the output. Long buffers get a fresh integrity
    /// check per window.
    fn reconstruct(&self) -> Result<ScratchGuard, MuffleError> {
        if self.is_closed() {
            return Err(MuffleError::SecurityViolation);
        }
        verify(&self.words, self.integrity)?;

        let total = self.words.len();
        let mut scratch = ScratchGuard::zeroed(8 * (total - 1));

        let key = self.words[0];
        let mut offset = 1usize;
        while offset < total {
            if offset > 1 {
                // Re-check before each additional window of a long decode.
                verify(&self.words, self.integrity)?;
            }

            let end = usize::min(offset + CHUNK_WORDS, total);
            let mut stream = Keystream::new(key.wrapping_add((offset - 1) as u64));
            for i in offset..end {
                let word = self.words[i] ^ stream.next_word();
                unpack_word(word, &mut scratch[8 * (i - 1)..8 * i]);
            }

            offset = end;
        }

        Ok(scratch)
    }

    /// Single guarded wipe shared by `close` and `Drop`.
    fn release(&mut self) {
        if !self.released.swap(true, Ordering::SeqCst) {
            self.words.deep_wipe();
        }
    }
}

impl fmt::Debug for ObfuscatedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObfuscatedString([REDACTED])")
    }
}

impl Drop for ObfuscatedString {
    fn drop(&mut self) {
        self.release();
    }
}

/// Length of `bytes` with trailing zero padding trimmed.
///
/// Plaintexts that legitimately end in NUL are not round-trip safe through
/// this trim; that ambiguity is inherited from the wire format, which
/// carries no explicit length field.
fn trimmed_len(bytes: &[u8]) -> usize {
    let mut len = bytes.len();
    while len > 0 && bytes[len - 1] == 0 {
        len -= 1;
    }
    len
}
