// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pointer-level zeroing: [`memzero`] and [`strzero`].

use core::ffi::{CStr, c_char};
use core::mem::size_of;
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

pub(crate) const WORD: usize = size_of::<usize>();

/// Overwrites `size` bytes starting at `ptr` with zeros and returns `ptr`.
///
/// Every byte is written with [`ptr::write_volatile`], followed by a
/// sequentially consistent compiler fence. Volatile stores are observable
/// side effects, so the optimizer may not drop them even when the memory is
/// never read again or is about to be deallocated. A plain loop,
/// `slice::fill(0)` or `ptr::write_bytes` carries no such guarantee.
///
/// The bulk of the region is written one `usize` word at a time once `ptr`
/// is word-aligned; the unaligned head and the tail are written bytewise.
///
/// `size` is a byte count regardless of `T`.
///
/// # Safety
///
/// - `ptr` must be [valid](core::ptr#safety) for writes of `size` bytes.
/// - Writing zeros over the region must not break any invariant the owner
///   of the memory relies on (e.g. non-null pointers or enum tags).
///
/// When `size == 0` nothing is written and `ptr` may be any value,
/// including null or dangling.
///
/// # Example
///
/// ```
/// use memzero::memzero;
///
/// let mut buf = [0xAAu8; 4];
/// let ptr = buf.as_mut_ptr();
///
/// let ret = unsafe { memzero(ptr, buf.len()) };
///
/// assert_eq!(ret, ptr);
/// assert_eq!(buf, [0u8; 4]);
/// ```
#[inline]
pub unsafe fn memzero<T>(ptr: *mut T, size: usize) -> *mut T {
    let base = ptr.cast::<u8>();
    let head = base.align_offset(WORD).min(size);
    let mut offset = 0;

    // SAFETY (all three loops): the caller guarantees `base..base + size`
    // is writable, and every access stays below `size`.
    while offset < head {
        unsafe { ptr::write_volatile(base.add(offset), 0u8) };
        offset += 1;
    }

    while size - offset >= WORD {
        // `base + offset` is word-aligned here.
        unsafe { ptr::write_volatile(base.add(offset).cast::<usize>(), 0usize) };
        offset += WORD;
    }

    while offset < size {
        unsafe { ptr::write_volatile(base.add(offset), 0u8) };
        offset += 1;
    }

    compiler_fence(Ordering::SeqCst);

    ptr
}

/// Zeroes the content of a NUL-terminated string and returns `s`.
///
/// Counts the bytes before the terminator and hands exactly that many to
/// [`memzero`]. The terminator itself is not written; it is zero already.
///
/// # Safety
///
/// `s` must be non-null, valid for reads up to and including its NUL
/// terminator, and valid for writes of every byte before it.
///
/// # Example
///
/// ```
/// use core::ffi::c_char;
/// use memzero::strzero;
///
/// let mut pass = *b"secret\0";
/// let s = pass.as_mut_ptr().cast::<c_char>();
///
/// let ret = unsafe { strzero(s) };
///
/// assert_eq!(ret, s);
/// assert_eq!(pass, [0u8; 7]);
/// ```
#[inline]
pub unsafe fn strzero(s: *mut c_char) -> *mut c_char {
    // SAFETY: the caller guarantees `s` points to a NUL-terminated string.
    // The `CStr` borrow ends before anything is written.
    let len = unsafe { CStr::from_ptr(s) }.count_bytes();

    // SAFETY: the `len` bytes before the terminator are writable.
    unsafe { memzero(s, len) }
}
