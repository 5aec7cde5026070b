//! XXH3-based digest computation.

use crate::digest::Digest;
use xxhash_rust::xxh3::xxh3_64;

/// Computes the unseeded 64-bit XXH3 digest of `data`.
///
/// Pure and deterministic; every input has a defined digest, including the
/// empty slice.
#[inline]
pub(crate) fn digest_bytes(data: &[u8]) -> Digest {
    Digest::new(xxh3_64(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let digest = digest_bytes(b"hello world");
        assert_eq!(digest, digest_bytes(b"hello world"));

        // Different data should give a different digest
        assert_ne!(digest, digest_bytes(b"hello world!"));
    }

    #[test]
    fn test_empty_input() {
        // Reference XXH3-64 digest of the empty input, seed 0
        assert_eq!(digest_bytes(b"").as_u64(), 0x2d06_8005_38d3_94c2);
    }

    #[test]
    fn test_matches_primitive() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(digest_bytes(data).as_u64(), xxh3_64(data));
    }
}
