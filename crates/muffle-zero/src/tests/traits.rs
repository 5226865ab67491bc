// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DeepWipe, WipeProbe};

#[test]
fn test_u64_deep_wipe() {
    let mut key = 0x1234_5678_90AB_CDEFu64;
    assert!(!key.is_wiped());

    key.deep_wipe();

    assert!(key.is_wiped());
    assert_eq!(key, 0);
}

#[test]
fn test_vec_u64_deep_wipe() {
    let mut words = vec![0xAAAAu64, 0x5555, u64::MAX];
    assert!(!words.is_wiped());

    words.deep_wipe();

    assert!(words.is_wiped());
    assert_eq!(words, [0, 0, 0]);
}

#[test]
fn test_vec_u8_deep_wipe() {
    let mut bytes = b"api key material".to_vec();
    bytes.deep_wipe();

    assert!(bytes.is_wiped());
    assert_eq!(bytes.len(), 16); // length preserved, contents gone
}

#[test]
fn test_string_deep_wipe() {
    let mut text = String::from("revealed plaintext");
    assert!(!text.is_wiped());

    text.deep_wipe();

    assert!(text.is_wiped());
    assert_eq!(text.len(), 18); // length preserved, contents gone
    assert!(text.bytes().all(|b| b == 0));
}

#[test]
fn test_string_deep_wipe_multibyte() {
    let mut text = String::from("pässwörd");
    text.deep_wipe();

    assert!(text.is_wiped());
}

#[test]
fn test_vec_char_deep_wipe() {
    let mut chars: Vec<char> = "pässwörd".chars().collect();
    chars.deep_wipe();

    assert!(chars.is_wiped());
}

#[test]
fn test_probe_detects_residue() {
    let mut words = vec![0u64, 0, 7];
    assert!(!words.is_wiped());

    words[2] = 0;
    assert!(words.is_wiped());
}
