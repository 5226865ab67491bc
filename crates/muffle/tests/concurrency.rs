// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::thread;

use muffle::{ObfuscatedString, encode};

#[test]
fn test_concurrent_reveals_agree() {
    const THREADS: usize = 8;
    const REVEALS_PER_THREAD: usize = 64;

    let plaintext = "shared across every thread";
    let words = encode(plaintext).expect("encode failed");
    let handle = Arc::new(ObfuscatedString::new(&words).expect("construction failed"));

    let mut joins = Vec::with_capacity(THREADS);
    for _ in 0..THREADS {
        let handle = Arc::clone(&handle);
        joins.push(thread::spawn(move || {
            for _ in 0..REVEALS_PER_THREAD {
                assert_eq!(handle.reveal().expect("reveal failed"), plaintext);
            }
        }));
    }

    for join in joins {
        join.join().expect("worker panicked");
    }
}

#[test]
fn test_drop_after_concurrent_use_is_clean() {
    let words = encode("short lived").expect("encode failed");
    let handle = Arc::new(ObfuscatedString::new(&words).expect("construction failed"));

    let joins: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            thread::spawn(move || handle.reveal().expect("reveal failed"))
        })
        .collect();

    for join in joins {
        assert_eq!(join.join().expect("worker panicked"), "short lived");
    }

    // Last owner drops here; the single guarded wipe runs in Drop.
    drop(handle);
}
