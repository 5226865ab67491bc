// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Source-literal rendering for the code-generation boundary.
//!
//! A code generator calls [`obfuscate`] (or [`encode`](crate::encode) plus
//! [`source_literal`]) at build time and splices the returned expression
//! into generated source. The plaintext comment is a debugging aid; the
//! recovery that produces it goes through the real decode path, so any
//! integrity or decode failure here fails the build step instead of being
//! swallowed.

use alloc::format;
use alloc::string::String;

use crate::encode::encode;
use crate::error::MuffleError;
use crate::obfuscated::ObfuscatedString;

/// Renders a ciphertext array as a Rust expression with a plaintext comment.
///
/// The output looks like:
///
/// ```text
/// ObfuscatedString::new(&[0x1f3a…u64, 0x9c02…u64])? /* => "hello" */
/// ```
///
/// `*/` in the plaintext is escaped so the comment cannot break out of
/// itself.
///
/// # Errors
///
/// Any constructor or decode error for `words`; an array this function
/// cannot reveal must not be spliced into generated source.
pub fn source_literal(words: &[u64]) -> Result<String, MuffleError> {
    if words.is_empty() {
        return Err(MuffleError::InvalidInput);
    }

    // Recover through the real decode path before rendering anything.
    let mut handle = ObfuscatedString::new(words)?;
    let plaintext = handle.reveal()?;
    handle.close();

    let mut code = String::from("ObfuscatedString::new(&[");
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            code.push_str(", ");
        }
        code.push_str(&format!("{word:#x}u64"));
    }
    code.push_str("])? /* => \"");
    code.push_str(&plaintext.replace("*/", "*\\/"));
    code.push_str("\" */");

    Ok(code)
}

/// One-shot convenience: encode a plaintext and render the literal.
///
/// # Example
///
/// ```rust
/// use muffle::obfuscate;
///
/// let expr = obfuscate("hello")?;
/// assert!(expr.starts_with("ObfuscatedString::new(&[0x"));
/// assert!(expr.ends_with("/* => \"hello\" */"));
/// # Ok::<(), muffle::MuffleError>(())
/// ```
pub fn obfuscate(plaintext: &str) -> Result<String, MuffleError> {
    let words = encode(plaintext)?;
    source_literal(&words)
}
