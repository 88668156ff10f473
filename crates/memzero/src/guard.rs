// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard that zeroes its value on drop.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::slice::zero_val;
use crate::traits::ZeroValid;

/// Owns a value and zeroes it with [`memzero`](crate::memzero) on drop.
///
/// # Design
///
/// - Holds `T` inline, no heap allocation
/// - [`from_mut`](Zeroizing::from_mut) copies the value in and zeroes the
///   source, so no unguarded copy is left behind
/// - Implements `Deref` and `DerefMut` for convenient access
/// - `Debug` never prints the value
///
/// Moving the guard moves its bytes, and the old location is not scrubbed.
/// Keep the guard where it was created, or put it in a `Box` before handing
/// it around.
///
/// # Usage
///
/// ```rust
/// use memzero::{Zeroizing, is_zeroed};
///
/// let mut pin = *b"1234";
///
/// {
///     let guard = Zeroizing::from_mut(&mut pin);
///     assert_eq!(&*guard, b"1234");
///     assert!(is_zeroed(&pin)); // source is zeroed
/// } // guard drops here, its bytes are zeroed
/// ```
#[repr(transparent)]
pub struct Zeroizing<T: ZeroValid> {
    inner: T,
}

impl<T: ZeroValid> fmt::Debug for Zeroizing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED Zeroizing]")
    }
}

impl<T: ZeroValid> Zeroizing<T> {
    /// Wraps `value`.
    ///
    /// `T` is `Copy`, so whatever `value` was copied from is left untouched.
    /// Use [`from_mut`](Self::from_mut) to scrub the source as well.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Copies the value out of `source` into a new guard and zeroes `source`.
    ///
    /// ```rust
    /// use memzero::Zeroizing;
    ///
    /// let mut key = [0x5Au8; 16];
    /// let guard = Zeroizing::from_mut(&mut key);
    ///
    /// assert_eq!(*guard, [0x5Au8; 16]);
    /// assert_eq!(key, [0u8; 16]);
    /// ```
    #[inline]
    pub fn from_mut(source: &mut T) -> Self {
        let guard = Self::new(*source);
        zero_val(source);
        guard
    }

    /// Zeroes the wrapped value now. The guard stays usable.
    #[inline]
    pub fn zeroize(&mut self) {
        zero_val(&mut self.inner);
    }

    /// Returns a copy of the value and zeroes the guard's own storage.
    ///
    /// The returned copy is not zeroed; the caller takes responsibility.
    ///
    /// ```rust
    /// use memzero::Zeroizing;
    ///
    /// let mut secret = 42u64;
    /// let guard = Zeroizing::from_mut(&mut secret);
    /// let mut value = guard.into_inner();
    /// assert_eq!(value, 42);
    ///
    /// memzero::zero_val(&mut value);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: ZeroValid> Deref for Zeroizing<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: ZeroValid> DerefMut for Zeroizing<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: ZeroValid + Default> Default for Zeroizing<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ZeroValid> From<T> for Zeroizing<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ZeroValid> Drop for Zeroizing<T> {
    #[inline]
    fn drop(&mut self) {
        self.zeroize();
    }
}
