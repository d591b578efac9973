// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod initialize_tests {
    use arrayutil::initialize;

    #[test]
    fn test_initialize_writes_first_count_elements() {
        let mut buf = [0i32; 5];
        initialize(Some(&mut buf[..]), 7, 3);
        assert_eq!(buf, [7, 7, 7, 0, 0]);
    }

    #[test]
    fn test_initialize_whole_buffer() {
        let mut buf = vec![0xABu8; 64];
        initialize(Some(buf.as_mut_slice()), 0x11, 64);
        assert!(buf.iter().all(|&b| b == 0x11));
    }

    #[test]
    fn test_initialize_zero_count() {
        let mut buf = [1u16, 2, 3];
        initialize(Some(&mut buf[..]), 9, 0);
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn test_initialize_absent_buffer() {
        initialize::<u64>(None, 1, 0);
        initialize::<u64>(None, 1, 1024); // should not panic
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut once = [5i8; 8];
        let mut twice = [5i8; 8];

        initialize(Some(&mut once[..]), -1, 6);
        initialize(Some(&mut twice[..]), -1, 6);
        initialize(Some(&mut twice[..]), -1, 6);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_initialize_clones_owned_values() {
        let mut words = vec![String::from("old"); 4];
        initialize(Some(words.as_mut_slice()), String::from("new"), 2);
        assert_eq!(words, ["new", "new", "old", "old"]);
    }

    #[test]
    #[should_panic]
    fn test_initialize_count_past_end() {
        let mut buf = [0u8; 4];
        initialize(Some(&mut buf[..]), 1, 5);
    }

    #[test]
    fn test_initialize_count_past_end_writes_nothing() {
        let mut buf = [0u8; 4];
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            initialize(Some(&mut buf[..]), 1, 5);
        }));

        assert!(result.is_err());
        assert_eq!(buf, [0, 0, 0, 0]);
    }
}
