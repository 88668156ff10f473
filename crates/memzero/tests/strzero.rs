// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod strzero_tests {
    use core::ffi::c_char;

    use memzero::strzero;

    #[test]
    fn test_strzero_secret() {
        let mut s = *b"secret\0";
        let ptr = s.as_mut_ptr().cast::<c_char>();

        let ret = unsafe { strzero(ptr) };

        assert_eq!(ret, ptr);
        assert_eq!(&s[..6], &[0u8; 6]);
        assert_eq!(s[6], 0);
    }

    #[test]
    fn test_strzero_empty_string() {
        let mut s = *b"\0";
        let ptr = s.as_mut_ptr().cast::<c_char>();

        let ret = unsafe { strzero(ptr) };

        assert_eq!(ret, ptr);
        assert_eq!(s, [0u8]);
    }

    #[test]
    fn test_strzero_stops_at_first_terminator() {
        let mut s = *b"old\0new\0";
        let ptr = s.as_mut_ptr().cast::<c_char>();

        unsafe { strzero(ptr) };

        assert_eq!(&s, b"\0\0\0\0new\0");
    }

    #[test]
    fn test_strzero_heap_buffer() {
        let mut buf = std::ffi::CString::new("correct horse battery staple")
            .expect("no interior NUL")
            .into_bytes_with_nul();
        let ptr = buf.as_mut_ptr().cast::<c_char>();

        unsafe { strzero(ptr) };

        assert!(buf.iter().all(|&b| b == 0));
    }
}
