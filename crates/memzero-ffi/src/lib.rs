// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C ABI entry points for [`memzero`].
//!
//! Exports exactly one unmangled definition of each function so C code can
//! link against it; Rust callers should use the `memzero` crate directly
//! and let `#[inline]` do its work. Declarations live in
//! `include/memzero.h`.
//!
//! ```c
//! #include "memzero.h"
//!
//! char pass[128];
//! read_password(pass, sizeof pass);
//! check(pass);
//! strzero(pass);
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

use libc::{c_char, c_void, size_t};

/// Zeroes `size` bytes at `ptr` and returns `ptr`.
///
/// The stores cannot be removed by dead-store elimination, unlike a plain
/// `memset(ptr, 0, size)`.
///
/// # Safety
///
/// Caller must ensure:
/// - `ptr` is valid for writes of `size` bytes (non-null when `size > 0`)
/// - No data races on the region
///
/// `size == 0` writes nothing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memzero(ptr: *mut c_void, size: size_t) -> *mut c_void {
    // SAFETY: forwarded caller contract.
    unsafe { ::memzero::memzero(ptr, size) }
}

/// Zeroes the bytes of the NUL-terminated string `s` before its terminator
/// and returns `s`.
///
/// # Safety
///
/// Caller must ensure:
/// - `s` is non-null and NUL-terminated
/// - every byte before the terminator is writable
/// - No data races on the string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strzero(s: *mut c_char) -> *mut c_char {
    // SAFETY: forwarded caller contract.
    unsafe { ::memzero::strzero(s) }
}
