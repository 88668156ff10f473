// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Marker trait gating the safe zeroing wrappers.

/// Types for which the all-zero bit pattern is a valid value.
///
/// Implemented for integer primitives, `bool` (`false`), `char` (`'\0'`),
/// floats (`0.0`), `()` and arrays of any `ZeroValid` type. The safe
/// wrappers ([`zero_slice`](crate::zero_slice), [`zero_val`](crate::zero_val),
/// [`Zeroizing`](crate::Zeroizing)) are only available for these types.
///
/// The `Copy` bound rules out types with drop glue, so a zeroed value never
/// reaches a destructor that expects live resources.
///
/// # Safety
///
/// Implementors must guarantee that:
/// - every byte of the type may be set to zero and the result is a valid
///   value of the type;
/// - the type has no padding bytes whose contents would be skipped when the
///   value is inspected byte by byte.
///
/// # Example
///
/// ```
/// use memzero::{ZeroValid, zero_val};
///
/// #[derive(Clone, Copy)]
/// #[repr(C)]
/// struct FailRecord {
///     count: u32,
///     max: u32,
///     last_tty: [u8; 8],
/// }
///
/// unsafe impl ZeroValid for FailRecord {}
///
/// let mut rec = FailRecord { count: 3, max: 5, last_tty: *b"pts/0\0\0\0" };
/// zero_val(&mut rec);
/// assert_eq!((rec.count, rec.max, rec.last_tty), (0, 0, [0u8; 8]));
/// ```
pub unsafe trait ZeroValid: Copy {}

macro_rules! impl_zero_valid {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: zero is a valid bit pattern and the type has no padding.
            unsafe impl ZeroValid for $ty {}
        )*
    };
}

impl_zero_valid!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, f32, f64, (),
);

// SAFETY: arrays have no padding between elements and inherit validity.
unsafe impl<T: ZeroValid, const N: usize> ZeroValid for [T; N] {}
