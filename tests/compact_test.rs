// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/compact_test.rs
// Version: 1.0.1
//
// This file contains unit tests for the compact-difficulty expansion in
// noncescan, located in the tests directory. It verifies the bit-exact
// mantissa placement, the zero-fill behavior, and the rejection of exponents
// that would place mantissa bytes outside the 32-byte target.

#[cfg(test)]
mod tests {
    use noncescan::core::compact::{
        CompactError, bits_difficulty, expand_compact, expand_compact_into, hash_meets_target,
    };

    #[test]
    fn test_expand_1d00ffff() {
        let target = expand_compact(0x1d00ffff).unwrap();
        let mut expected = [0u8; 32];
        expected[3] = 0x00;
        expected[4] = 0xff;
        expected[5] = 0xff;
        assert_eq!(target, expected, "exponent 29 places mantissa at bytes 3..=5");
    }

    #[test]
    fn test_expand_1b0404cb() {
        let target = expand_compact(0x1b0404cb).unwrap();
        let mut expected = [0u8; 32];
        expected[5] = 0x04;
        expected[6] = 0x04;
        expected[7] = 0xcb;
        assert_eq!(target, expected, "exponent 27 places mantissa at bytes 5..=7");
    }

    #[test]
    fn test_expand_exponent_32_zero_mantissa() {
        let target = expand_compact(0x20000000).unwrap();
        assert_eq!(target, [0u8; 32], "zero mantissa at exponent 32 yields an all-zero target");
    }

    #[test]
    fn test_expand_exponent_boundaries() {
        // Exponent 3 is the lowest value keeping all three writes in bounds.
        let target = expand_compact(0x03123456).unwrap();
        let mut expected = [0u8; 32];
        expected[29] = 0x12;
        expected[30] = 0x34;
        expected[31] = 0x56;
        assert_eq!(target, expected, "exponent 3 places mantissa at bytes 29..=31");

        // Exponent 32 starts the mantissa at byte 0.
        let target = expand_compact(0x20abcdef).unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 0xab;
        expected[1] = 0xcd;
        expected[2] = 0xef;
        assert_eq!(target, expected, "exponent 32 places mantissa at bytes 0..=2");
    }

    #[test]
    fn test_zero_fill_overwrites_garbage() {
        let mut target = [0xAA; 32];
        expand_compact_into(&mut target, 0x1b0404cb).unwrap();
        assert_eq!(
            target,
            expand_compact(0x1b0404cb).unwrap(),
            "pre-filled garbage must be cleared, not just the mantissa window written"
        );
    }

    #[test]
    fn test_idempotent() {
        let a = expand_compact(0x1d00ffff).unwrap();
        let b = expand_compact(0x1d00ffff).unwrap();
        assert_eq!(a, b, "expansion is a pure function of the compact value");
    }

    #[test]
    fn test_reject_out_of_range_exponents() {
        assert_eq!(
            expand_compact(0x00000000),
            Err(CompactError::OutOfRange { exponent: 0 }),
            "exponent 0 would write at offsets 32..=34"
        );
        assert_eq!(
            expand_compact(0x0000ffff),
            Err(CompactError::OutOfRange { exponent: 0 })
        );
        assert_eq!(
            expand_compact(0x01ffffff),
            Err(CompactError::OutOfRange { exponent: 1 })
        );
        assert_eq!(
            expand_compact(0x02ffffff),
            Err(CompactError::OutOfRange { exponent: 2 })
        );
        assert_eq!(
            expand_compact(0x21ffffff),
            Err(CompactError::OutOfRange { exponent: 33 }),
            "exponent 33 would write at a negative offset"
        );
        assert_eq!(
            expand_compact(0xff123456),
            Err(CompactError::OutOfRange { exponent: 255 })
        );
    }

    #[test]
    fn test_reject_leaves_buffer_untouched() {
        let mut target = [0xAA; 32];
        let err = expand_compact_into(&mut target, 0x21ffffff);
        assert!(err.is_err(), "exponent 33 must be rejected");
        assert_eq!(target, [0xAA; 32], "rejected expansion must not modify the buffer");
    }

    #[test]
    fn test_hash_meets_target() {
        let target = expand_compact(0x1b0404cb).unwrap();

        assert!(hash_meets_target(&[0u8; 32], &target), "all-zero hash meets any non-zero target");
        assert!(hash_meets_target(&target, &target), "a hash equal to the target meets it");

        let mut above = target;
        above[7] = 0xcc; // one above the mantissa's least significant byte
        assert!(!hash_meets_target(&above, &target), "a hash above the target must not meet it");

        assert!(!hash_meets_target(&[0u8; 31], &target), "wrong-length hash never meets");
    }

    #[test]
    fn test_bits_difficulty() {
        assert_eq!(bits_difficulty(0x1d00ffff), 1.0, "the difficulty-1 compact value");
        assert_eq!(bits_difficulty(0x1b0404cb), 16307.0, "difficulty 16307.42, truncated");
        assert_eq!(bits_difficulty(0x00ffffff), 0.0, "invalid compact value reports 0");
        assert_eq!(bits_difficulty(0x20000000), f64::INFINITY, "all-zero target is unsatisfiable");
    }
}
