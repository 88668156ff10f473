// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Safe wrappers over [`memzero`](crate::memzero) for borrowed memory.

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::mem::{size_of, size_of_val};

use crate::error::StrZeroError;
use crate::raw::memzero;
use crate::traits::ZeroValid;

/// Zeroes every element of `slice` and returns it.
///
/// # Example
///
/// ```
/// use memzero::zero_slice;
///
/// let mut key = [0xDEADBEEFu32; 8];
/// assert!(zero_slice(&mut key).iter().all(|&w| w == 0));
/// ```
#[inline]
pub fn zero_slice<T: ZeroValid>(slice: &mut [T]) -> &mut [T] {
    let byte_len = size_of_val(slice);
    // SAFETY: the slice is valid for writes of `size_of_val` bytes, and
    // all-zero is a valid `T`.
    unsafe { memzero(slice.as_mut_ptr(), byte_len) };
    slice
}

/// Zeroes a fixed-size array in place and returns it.
///
/// Backs the [`memzero_a!`](crate::memzero_a) macro.
#[inline]
pub fn zero_array<T: ZeroValid, const N: usize>(arr: &mut [T; N]) -> &mut [T; N] {
    zero_slice(arr.as_mut_slice());
    arr
}

/// Zeroes a single value and returns it.
///
/// # Example
///
/// ```
/// use memzero::zero_val;
///
/// let mut pin = 4821u16;
/// assert_eq!(*zero_val(&mut pin), 0);
/// ```
#[inline]
pub fn zero_val<T: ZeroValid>(val: &mut T) -> &mut T {
    // SAFETY: `val` is valid for writes of `size_of::<T>()` bytes, and
    // all-zero is a valid `T`.
    unsafe { memzero(val as *mut T, size_of::<T>()) };
    val
}

/// Zeroes the string content of a NUL-terminated byte buffer.
///
/// Bytes before the first NUL are zeroed. The NUL and anything after it are
/// left untouched. If `buf` holds no NUL the buffer is not modified and
/// [`StrZeroError::MissingTerminator`] is returned.
///
/// # Example
///
/// ```
/// use memzero::zero_str_bytes;
///
/// let mut buf = *b"secret\0tail";
/// zero_str_bytes(&mut buf)?;
/// assert_eq!(&buf, b"\0\0\0\0\0\0\0tail");
/// # Ok::<(), memzero::StrZeroError>(())
/// ```
pub fn zero_str_bytes(buf: &mut [u8]) -> Result<&mut [u8], StrZeroError> {
    let len = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or(StrZeroError::MissingTerminator { len: buf.len() })?;

    zero_slice(&mut buf[..len]);

    Ok(buf)
}

/// Zeroes the entire allocation of a `Vec`, spare capacity included.
///
/// The length is left unchanged, so the active elements read back as zero.
/// Bytes between `len` and `capacity` that an earlier `truncate()` or
/// `clear()` left behind are scrubbed as well.
///
/// # Example
///
/// ```
/// use memzero::zero_vec;
///
/// let mut token = b"ghp_0123456789".to_vec();
/// token.truncate(4);
///
/// zero_vec(&mut token);
/// assert_eq!(token, [0u8; 4]);
/// ```
#[cfg(feature = "alloc")]
pub fn zero_vec<T: ZeroValid>(vec: &mut Vec<T>) -> &mut Vec<T> {
    let byte_len = vec.capacity() * size_of::<T>();
    // SAFETY: `Vec` guarantees its buffer is valid for `capacity` elements,
    // spare capacity included.
    unsafe { memzero(vec.as_mut_ptr(), byte_len) };
    vec
}

/// Zeroes every byte a `String` has allocated, then clears it.
///
/// The capacity is kept, so the scrubbed buffer can be reused.
///
/// # Example
///
/// ```
/// use memzero::zero_string;
///
/// let mut pass = String::from("hunter2");
/// zero_string(&mut pass);
/// assert!(pass.is_empty());
/// ```
#[cfg(feature = "alloc")]
pub fn zero_string(s: &mut String) {
    // SAFETY: NUL bytes are valid UTF-8, and the string is cleared right
    // after.
    zero_vec(unsafe { s.as_mut_vec() });
    s.clear();
}
