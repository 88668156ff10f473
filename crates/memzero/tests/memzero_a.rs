// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod memzero_a_tests {
    use memzero::memzero_a;

    #[test]
    fn test_memzero_a_byte_array() {
        let mut username = [0u8; 32];
        username[..5].copy_from_slice(b"alice");

        memzero_a!(username);

        assert_eq!(username, [0u8; 32]);
    }

    #[test]
    fn test_memzero_a_returns_array() {
        let mut orig = [0x41u8; 8];
        let ret = memzero_a!(orig);
        assert_eq!(ret.len(), 8);
        assert_eq!(*ret, [0u8; 8]);
    }

    #[test]
    fn test_memzero_a_struct_field() {
        struct Utmp {
            host: [u8; 16],
            pid: i32,
        }

        let mut ut = Utmp {
            host: *b"remote.example\0\0",
            pid: 4242,
        };

        memzero_a!(ut.host);

        assert_eq!(ut.host, [0u8; 16]);
        assert_eq!(ut.pid, 4242);
    }
}
