//! String hashing and bucket placement.

/// Multiplier of the rolling hash.
pub const HASH_MULTIPLIER: u64 = 31;

/// Polynomial rolling hash over the key's Unicode scalar values:
/// `h = h * 31 + code_point`, wrapping on overflow.
#[inline]
pub fn string_hash(key: &str) -> u64 {
    key.chars().fold(0u64, |h, c| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(c))
    })
}

/// Bucket that `key` lands in for a table of `bucket_count` buckets.
///
/// `bucket_count` must be non-zero.
#[inline]
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0, "bucket_count must be non-zero");
    (string_hash(key) % bucket_count as u64) as usize
}
