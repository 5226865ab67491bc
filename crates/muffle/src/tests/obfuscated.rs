// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use muffle_zero::WipeProbe;

use crate::{CHUNK_WORDS, MAX_WORDS, MuffleError, ObfuscatedString, encode, encode_with_key};

#[test]
fn test_round_trip_ascii() {
    let words = encode("the quick brown fox").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    assert_eq!(handle.reveal().expect("reveal failed"), "the quick brown fox");
}

#[test]
fn test_round_trip_unicode() {
    let plaintext = "pässwörter — ключи — 鍵";
    let words = encode(plaintext).expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    assert_eq!(handle.reveal().expect("reveal failed"), plaintext);
}

#[test]
fn test_round_trip_empty() {
    let words = encode("").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    assert_eq!(handle.reveal().expect("reveal failed"), "");
}

#[test]
fn test_reveal_is_repeatable() {
    let words = encode("stable").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    for _ in 0..16 {
        assert_eq!(handle.reveal().expect("reveal failed"), "stable");
    }
}

#[test]
fn test_revealed_string_can_be_scrubbed() {
    use muffle_zero::DeepWipe;

    let words = encode("short lived").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    let mut text = handle.reveal().expect("reveal failed");
    text.deep_wipe();

    assert!(text.is_wiped());
    assert_eq!(text.len(), 11);
}

#[test]
fn test_reveal_chars() {
    let words = encode("abc").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    assert_eq!(
        handle.reveal_chars().expect("reveal failed"),
        vec!['a', 'b', 'c']
    );
}

#[test]
fn test_multi_chunk_round_trip() {
    // Longer than one 1024-word window, not 8-byte aligned, no NUL bytes.
    let plaintext: String = ('!'..='~')
        .cycle()
        .take(8 * CHUNK_WORDS + 1234)
        .collect();

    let words = encode(&plaintext).expect("encode failed");
    assert!(words.len() > 1 + CHUNK_WORDS);

    let handle = ObfuscatedString::new(&words).expect("construction failed");
    assert_eq!(handle.reveal().expect("reveal failed"), plaintext);
}

#[test]
fn test_handle_clones_input() {
    let mut words = encode("independent").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    // Corrupting the caller's copy must not affect the handle.
    words[1] ^= 0xFFFF;
    assert_eq!(handle.reveal().expect("reveal failed"), "independent");
}

#[test]
fn test_tamper_detection_every_bit_of_key_word() {
    let words = encode_with_key("tamper", 0xABCD_EF01_2345_6789).expect("encode failed");

    for bit in 0..64 {
        let mut handle = ObfuscatedString::new(&words).expect("construction failed");
        handle.words[0] ^= 1u64 << bit;

        assert_eq!(handle.reveal(), Err(MuffleError::IntegrityViolation));
    }
}

#[test]
fn test_tamper_detection_every_word() {
    let words = encode_with_key("longer tamper target", 0x1357_9BDF_0246_8ACE)
        .expect("encode failed");

    for i in 0..words.len() {
        let mut handle = ObfuscatedString::new(&words).expect("construction failed");
        handle.words[i] ^= 1;

        assert_eq!(
            handle.reveal(),
            Err(MuffleError::IntegrityViolation),
            "tampered word {i} went undetected"
        );
    }
}

#[test]
fn test_length_cap_boundary() {
    let mut words = vec![1u64; MAX_WORDS];
    words[0] = 0x1234_5678;
    assert!(ObfuscatedString::new(&words).is_ok());

    words.push(1);
    assert_eq!(
        ObfuscatedString::new(&words).err(),
        Some(MuffleError::SecurityViolation)
    );
}

#[test]
fn test_empty_array_is_rejected() {
    assert_eq!(
        ObfuscatedString::new(&[]).err(),
        Some(MuffleError::SecurityViolation)
    );
}

#[test]
fn test_close_wipes_owned_words() {
    let words = encode_with_key("wipe me", 0xCAFE_D00D_1234_5678).expect("encode failed");
    let mut handle = ObfuscatedString::new(&words).expect("construction failed");

    let snapshot = handle.words.clone();
    assert!(snapshot.iter().any(|&w| w != 0));

    handle.close();

    assert!(handle.is_closed());
    assert!(handle.words.is_wiped());
    for (i, &pre) in snapshot.iter().enumerate() {
        assert_ne!(handle.words[i], pre, "word {i} survived the wipe");
    }
}

#[test]
fn test_close_is_idempotent() {
    let words = encode("twice").expect("encode failed");
    let mut handle = ObfuscatedString::new(&words).expect("construction failed");

    handle.close();
    handle.close();

    assert!(handle.is_closed());
    assert!(handle.words.is_wiped());
}

#[test]
fn test_reveal_after_close_fails() {
    let words = encode("gone").expect("encode failed");
    let mut handle = ObfuscatedString::new(&words).expect("construction failed");

    handle.close();

    assert_eq!(handle.reveal(), Err(MuffleError::SecurityViolation));
    assert_eq!(handle.reveal_chars(), Err(MuffleError::SecurityViolation));
}

#[test]
fn test_debug_redacts() {
    let words = encode("visible nowhere").expect("encode failed");
    let handle = ObfuscatedString::new(&words).expect("construction failed");

    let debug_str = format!("{:?}", handle);
    assert!(debug_str.contains("REDACTED"));
    assert!(!debug_str.contains("visible"));
}
