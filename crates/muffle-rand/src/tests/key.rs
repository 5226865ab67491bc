// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{entropy_u64, generate_key};

#[test]
fn test_generate_key_is_nonzero() {
    for _ in 0..256 {
        let key = generate_key().expect("entropy unavailable");
        assert_ne!(key, 0);
    }
}

#[test]
fn test_generate_key_varies() {
    let a = generate_key().expect("entropy unavailable");
    let b = generate_key().expect("entropy unavailable");

    // 2^-64 collision odds; a failure here means the source is broken
    assert_ne!(a, b);
}

#[test]
fn test_entropy_u64_varies() {
    let draws: Vec<u64> = (0..8)
        .map(|_| entropy_u64().expect("entropy unavailable"))
        .collect();

    let first = draws[0];
    assert!(draws.iter().any(|&d| d != first));
}
