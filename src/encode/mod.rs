//! UTF-8 encoding strategy for character input.
//!
//! Hashing text means hashing its UTF-8 bytes. Character sequences are
//! encoded into a transient buffer first: inputs that fit within
//! [`INLINE_BUF_SIZE`] bytes use a fixed stack buffer scoped to the call,
//! larger inputs borrow storage from the shared buffer pool and return it
//! when the call completes.
//!
//! The threshold is a performance knob, not a correctness boundary: both
//! paths hand the continuation exactly the UTF-8 encoding of the input.

use crate::buffer::Buffer;

/// Byte-length threshold up to which encoding uses a stack buffer.
///
/// Inputs whose UTF-8 form is longer than this borrow a pooled buffer
/// instead. The produced hash is identical on both sides of the threshold.
pub const INLINE_BUF_SIZE: usize = 256;

/// Returns the exact UTF-8 byte length of `chars` without allocating.
pub(crate) fn utf8_len<I>(chars: I) -> usize
where
    I: Iterator<Item = char>,
{
    chars.map(char::len_utf8).sum()
}

/// Encodes `chars` as UTF-8 and passes the encoded bytes to `f`.
///
/// The byte length is computed in a sizing pass up front, and the slice
/// handed to `f` is exactly that long. Empty input invokes `f` with an
/// empty slice. When the pooled path is taken, the buffer goes back to the
/// pool when `f` returns or unwinds.
pub(crate) fn with_utf8<I, T>(chars: I, f: impl FnOnce(&[u8]) -> T) -> T
where
    I: Iterator<Item = char> + Clone,
{
    let byte_len = utf8_len(chars.clone());

    if byte_len <= INLINE_BUF_SIZE {
        let mut buf = [0u8; INLINE_BUF_SIZE];
        let mut written = 0;
        for ch in chars {
            written += ch.encode_utf8(&mut buf[written..]).len();
        }
        debug_assert_eq!(written, byte_len);
        f(&buf[..written])
    } else {
        let mut buf = Buffer::take(byte_len);
        let mut scratch = [0u8; 4];
        for ch in chars {
            buf.extend_from_slice(ch.encode_utf8(&mut scratch).as_bytes());
        }
        debug_assert_eq!(buf.len(), byte_len);
        f(buf.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(text: &str) -> Vec<u8> {
        with_utf8(text.chars(), <[u8]>::to_vec)
    }

    #[test]
    fn test_utf8_len_matches_str_len() {
        for text in ["", "a", "hello world", "héllo", "\u{1F980}", "ザ・ハッシュ"] {
            assert_eq!(utf8_len(text.chars()), text.len());
        }
    }

    #[test]
    fn test_empty_input_yields_empty_slice() {
        assert!(encoded("").is_empty());
    }

    #[test]
    fn test_inline_path_encodes_exactly() {
        let text = "héllo wörld \u{1F980}";
        assert!(text.len() <= INLINE_BUF_SIZE);
        assert_eq!(encoded(text), text.as_bytes());
    }

    #[test]
    fn test_pooled_path_encodes_exactly() {
        let text = "pooled-παράδειγμα-".repeat(64);
        assert!(text.len() > INLINE_BUF_SIZE);
        assert_eq!(encoded(&text), text.as_bytes());
    }

    #[test]
    fn test_threshold_boundary() {
        for len in [INLINE_BUF_SIZE - 1, INLINE_BUF_SIZE, INLINE_BUF_SIZE + 1] {
            let text = "x".repeat(len);
            assert_eq!(encoded(&text), text.as_bytes());
        }
    }

    #[test]
    fn test_multibyte_straddles_threshold() {
        // 255 single-byte chars plus one two-byte char crosses the threshold
        let mut text = "x".repeat(INLINE_BUF_SIZE - 1);
        text.push('é');
        assert_eq!(text.len(), INLINE_BUF_SIZE + 1);
        assert_eq!(encoded(&text), text.as_bytes());
    }

    #[test]
    fn test_non_contiguous_char_input() {
        let chars = vec!['h', 'a', 's', 'h', '\u{1F980}'];
        let bytes = with_utf8(chars.iter().copied(), <[u8]>::to_vec);
        assert_eq!(bytes, "hash\u{1F980}".as_bytes());
    }
}
