// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for memzero.
use thiserror::Error;

/// Errors from the bounded string wrappers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StrZeroError {
    /// The buffer holds no NUL byte, so the string content has no end.
    #[error("no NUL terminator within {len} bytes")]
    MissingTerminator {
        /// Length of the buffer that was searched.
        len: usize,
    },
}
