// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zero_str_bytes_tests {
    use memzero::{StrZeroError, zero_str_bytes};

    #[test]
    fn test_zero_str_bytes_secret() {
        let mut buf = *b"secret\0";

        let ret = zero_str_bytes(&mut buf).expect("terminator present");

        assert_eq!(ret.len(), 7);
        assert_eq!(buf, [0u8; 7]);
    }

    #[test]
    fn test_zero_str_bytes_empty_string() {
        let mut buf = *b"\0";
        zero_str_bytes(&mut buf).expect("terminator present");
        assert_eq!(buf, [0u8]);
    }

    #[test]
    fn test_zero_str_bytes_keeps_bytes_after_terminator() {
        let mut buf = [0u8; 16];
        buf[..9].copy_from_slice(b"p4ssw0rd\0");
        buf[9..].copy_from_slice(b"garbage");

        zero_str_bytes(&mut buf).expect("terminator present");

        assert_eq!(&buf[..9], &[0u8; 9]);
        assert_eq!(&buf[9..], b"garbage");
    }

    #[test]
    fn test_zero_str_bytes_missing_terminator() {
        let mut buf = *b"unterminated";

        let err = zero_str_bytes(&mut buf).expect_err("no terminator");

        assert_eq!(err, StrZeroError::MissingTerminator { len: 12 });
        // Nothing is touched on error.
        assert_eq!(&buf, b"unterminated");
    }

    #[test]
    fn test_zero_str_bytes_empty_buffer() {
        let mut buf: [u8; 0] = [];
        let err = zero_str_bytes(&mut buf).expect_err("no terminator");
        assert_eq!(err, StrZeroError::MissingTerminator { len: 0 });
    }

    #[test]
    fn test_str_zero_error_display() {
        let err = StrZeroError::MissingTerminator { len: 42 };
        assert_eq!(err.to_string(), "no NUL terminator within 42 bytes");
    }
}
