// Copyright (c) 2026 The muffle developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OS entropy acquisition.
//!
//! Prefers direct libc syscalls where available (Linux, macOS) to keep the
//! path from kernel entropy to the destination word short, falling back to
//! the `getrandom` crate everywhere else.

use core::mem::size_of;

use crate::error::EntropyError;

/// Fills `dst` with entropy from the operating system CSPRNG.
pub(crate) fn fill_u64(dst: &mut u64) -> Result<(), EntropyError> {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        let ret = unsafe {
            libc::getrandom(dst as *mut u64 as *mut libc::c_void, size_of::<u64>(), 0)
        };

        if ret == size_of::<u64>() as libc::ssize_t {
            Ok(())
        } else {
            Err(EntropyError::EntropyNotAvailable)
        }
    }

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        let ret =
            unsafe { libc::getentropy(dst as *mut u64 as *mut libc::c_void, size_of::<u64>()) };

        if ret == 0 {
            Ok(())
        } else {
            Err(EntropyError::EntropyNotAvailable)
        }
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    )))]
    {
        use muffle_zero::DeepWipe;

        let mut bytes = [0u8; size_of::<u64>()];
        getrandom::fill(&mut bytes).map_err(|_| EntropyError::EntropyNotAvailable)?;
        *dst = u64::from_le_bytes(bytes);
        bytes.as_mut_slice().deep_wipe();

        Ok(())
    }
}
