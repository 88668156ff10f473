// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Explicit memory zeroing that the optimizer cannot remove.
//!
//! A zero-fill of a buffer that is never read again is a dead store, and
//! optimizers are allowed to delete it. That is exactly the situation when
//! scrubbing a password or key right before the memory is freed. Every
//! write in this crate goes through volatile stores followed by a compiler
//! fence, so it always happens.
//!
//! ## Pointer level
//!
//! - [`memzero`]: zero `size` bytes at `ptr`, return `ptr`
//! - [`strzero`]: zero the content of a NUL-terminated string, return it
//!
//! ## Safe wrappers
//!
//! - [`zero_slice`], [`zero_val`], [`zero_array`] / [`memzero_a!`] for
//!   [`ZeroValid`] types
//! - [`zero_str_bytes`] for NUL-terminated strings in a bounded buffer
//! - [`zero_vec`], [`zero_string`] for heap buffers, spare capacity included
//!   (`alloc` feature, on by default)
//! - [`Zeroizing`], a guard that zeroes its value on drop
//!
//! ## Verification
//!
//! - [`is_zeroed`], [`is_region_zeroed`], [`is_vec_fully_zeroed`]
//!
//! ```rust
//! use memzero::{memzero_a, zero_str_bytes};
//!
//! let mut pass = *b"correct horse\0";
//! zero_str_bytes(&mut pass)?;
//! assert!(pass.iter().all(|&b| b == 0));
//!
//! let mut key = [0x5Au8; 32];
//! memzero_a!(key);
//! assert_eq!(key, [0u8; 32]);
//! # Ok::<(), memzero::StrZeroError>(())
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod guard;
mod probe;
mod raw;
mod slice;
mod traits;

pub use error::StrZeroError;
pub use guard::Zeroizing;
pub use probe::{is_region_zeroed, is_zeroed};
pub use raw::{memzero, strzero};
pub use slice::{zero_array, zero_slice, zero_str_bytes, zero_val};
pub use traits::ZeroValid;

#[cfg(feature = "alloc")]
pub use probe::is_vec_fully_zeroed;
#[cfg(feature = "alloc")]
pub use slice::{zero_string, zero_vec};

#[cfg(feature = "test-utils")]
pub use probe::fill_with_pattern;

/// Zeroes a whole fixed-size array of [`ZeroValid`] elements.
///
/// Expands to [`zero_array`], so only real arrays are accepted; the length
/// always comes from the array type.
///
/// ```
/// use memzero::memzero_a;
///
/// let mut tty = *b"pts/3\0\0\0";
/// memzero_a!(tty);
/// assert_eq!(tty, [0u8; 8]);
/// ```
#[macro_export]
macro_rules! memzero_a {
    ($arr:expr) => {
        $crate::zero_array(&mut $arr)
    };
}
