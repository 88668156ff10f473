// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zero_vec_tests {
    use memzero::{fill_with_pattern, is_vec_fully_zeroed, zero_vec};

    #[test]
    fn test_zero_vec_clears_spare_capacity() {
        let mut vec = vec![0xFFu8; 100];
        vec.truncate(10); // len = 10, capacity = 100, spare has 0xFF

        assert!(!unsafe { is_vec_fully_zeroed(&vec) });

        zero_vec(&mut vec);

        assert_eq!(vec.len(), 10);
        assert!(unsafe { is_vec_fully_zeroed(&vec) });
    }

    #[test]
    fn test_zero_vec_keeps_length_and_capacity() {
        let mut vec = Vec::with_capacity(64);
        vec.extend_from_slice(&[0xAAu8; 32]);
        fill_with_pattern(&mut vec, 0x11);
        let cap = vec.capacity();

        zero_vec(&mut vec);

        assert_eq!(vec.len(), 32);
        assert_eq!(vec.capacity(), cap);
        assert!(vec.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_vec_unallocated() {
        let mut vec: Vec<u64> = Vec::new();
        zero_vec(&mut vec); // should not panic
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn test_zero_vec_wide_elements() {
        let mut vec = vec![u64::MAX; 8];
        vec.truncate(3);

        zero_vec(&mut vec);

        assert_eq!(vec, [0u64; 3]);
        // Restore the truncated elements to inspect the old spare capacity.
        unsafe { vec.set_len(8) };
        assert_eq!(vec, [0u64; 8]);
    }
}
