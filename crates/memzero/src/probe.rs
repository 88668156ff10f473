// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Read-side helpers for verifying that memory was zeroed.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::mem::size_of_val;
use core::ptr;

use crate::traits::ZeroValid;

/// Returns `true` if every byte of `slice` is zero.
///
/// Checks raw bytes, so `-0.0` counts as not zeroed.
///
/// # Example
///
/// ```
/// use memzero::is_zeroed;
///
/// assert!(is_zeroed(&[0u8; 10]));
/// assert!(!is_zeroed(&[0u8, 1, 0, 0]));
/// assert!(!is_zeroed(&[-0.0f32]));
/// ```
#[inline(always)]
pub fn is_zeroed<T: ZeroValid>(slice: &[T]) -> bool {
    // SAFETY: `ZeroValid` types have no padding, so every byte is initialized.
    let bytes =
        unsafe { core::slice::from_raw_parts(slice.as_ptr().cast::<u8>(), size_of_val(slice)) };
    bytes.iter().all(|&b| b == 0)
}

/// Returns `true` if `len` bytes starting at `ptr` are all zero.
///
/// Each byte is loaded with [`ptr::read_volatile`], so the check is a real
/// observation of memory rather than something the optimizer can answer
/// from what it believes was last stored there.
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` initialized bytes.
#[inline(never)]
pub unsafe fn is_region_zeroed(ptr: *const u8, len: usize) -> bool {
    for i in 0..len {
        // SAFETY: `i < len`, readable per the caller's guarantee.
        if unsafe { ptr::read_volatile(ptr.add(i)) } != 0 {
            return false;
        }
    }

    true
}

/// Returns `true` if the whole allocation of `vec` (up to `capacity`) is
/// zero, not just the active elements.
///
/// # Safety
///
/// Every byte between `len` and `capacity` must have been initialized,
/// for example by elements that were later removed with `truncate()`, or
/// by [`zero_vec`](crate::zero_vec).
///
/// # Example
///
/// ```
/// use memzero::{is_vec_fully_zeroed, zero_vec};
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10);
/// for b in vec.iter_mut() {
///     *b = 0;
/// }
///
/// // Spare capacity still holds 0xFF
/// assert!(!unsafe { is_vec_fully_zeroed(&vec) });
///
/// zero_vec(&mut vec);
/// assert!(unsafe { is_vec_fully_zeroed(&vec) });
/// ```
#[cfg(feature = "alloc")]
#[inline(never)]
pub unsafe fn is_vec_fully_zeroed(vec: &Vec<u8>) -> bool {
    // SAFETY: `Vec` guarantees `capacity` bytes are allocated; the caller
    // guarantees they are initialized.
    unsafe { is_region_zeroed(vec.as_ptr(), vec.capacity()) }
}

/// Fills `slice` with `pattern` and returns it.
///
/// Test helper for seeding buffers with recognizable secret bytes.
#[cfg(feature = "test-utils")]
#[inline]
pub fn fill_with_pattern(slice: &mut [u8], pattern: u8) -> &mut [u8] {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
    slice
}
