//! The bucket hash used by the catalog.
//!
//! Each byte doubles the running total and adds its character code:
//! `total = total + total + code`, in wrapping 32-bit unsigned arithmetic. Character codes are
//! taken as signed 8-bit values, so bytes above `0x7F` contribute a negative code. The result is
//! reduced modulo the bucket count. Keys are hashed as given; callers normalize case first.

use std::num::NonZeroU32;

/// Full 32-bit rolling hash of `key`, before reduction.
#[must_use]
pub fn rolling_hash(key: &str) -> u32 {
    key.bytes().fold(0_u32, |total, byte| total.wrapping_add(total).wrapping_add(char_code(byte)))
}

/// Bucket index of `key` for a table with `buckets` slots; always `< buckets`.
#[must_use]
pub fn bucket_index(key: &str, buckets: NonZeroU32) -> u32 {
    rolling_hash(key) % buckets.get()
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn char_code(byte: u8) -> u32 {
    i32::from(byte as i8) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn known_vectors() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("A"), 65);
        assert_eq!(rolling_hash("CS101"), 2077);
        assert_eq!(rolling_hash("cs101"), 2845);
        assert_eq!(rolling_hash("CSCI100"), 8940);
        assert_eq!(rolling_hash("MATH201"), 9273);
    }

    #[test]
    fn non_ascii_bytes_are_signed() {
        // 'é' is 0xC3 0xA9: (-61 * 2) - 87 = -209 wrapped to 32 bits.
        assert_eq!(rolling_hash("é"), 4_294_967_087);
        assert_eq!(bucket_index("é", buckets(100)), 87);
    }

    #[test]
    fn reduction_by_bucket_count() {
        assert_eq!(bucket_index("CS101", buckets(10)), 7);
        assert_eq!(bucket_index("CS102", buckets(10)), 8);
        assert_eq!(bucket_index("CSCI300", buckets(10)), 8);
        assert_eq!(bucket_index("CSCI350", buckets(10)), 8);
        assert_eq!(bucket_index("CS101", buckets(1)), 0);
    }

    #[test]
    fn long_keys_wrap_instead_of_overflowing() {
        let key = "Z".repeat(64);
        assert!(bucket_index(&key, buckets(97)) < 97);
        assert_eq!(rolling_hash(&key), rolling_hash(&key));
    }
}
