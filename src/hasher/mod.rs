//! Public hashing entry points.
//!
//! - [`hash`] - text in, 16-character lowercase hex digest out
//! - [`hash_to_u64`] - text in, raw 64-bit digest out
//! - [`hash_bytes`] - bytes in, raw 64-bit digest out
//! - [`hash_chars`] - character sequence in, raw 64-bit digest out
//! - [`verify`] - compares text against an expected hex digest
//!
//! Required text arguments are taken as `impl Into<Option<&str>>`: callers
//! with a value pass `&str` directly, absence is `None` and is rejected up
//! front with [`HashError::MissingInput`].

use crate::digest::Digest;
use crate::encode;
use crate::error::HashError;
use crate::hash::digest_bytes;

/// Hashes `text` and returns its canonical 16-character lowercase hex
/// digest.
///
/// The digest is the unseeded XXH3-64 hash of the text's UTF-8 bytes,
/// zero-padded to full width with no prefix.
///
/// # Errors
///
/// Returns [`HashError::MissingInput`] if `text` is `None`.
///
/// # Example
///
/// ```
/// let digest = hashrs::hash("hello world")?;
/// assert_eq!(digest.len(), 16);
/// # Ok::<(), hashrs::HashError>(())
/// ```
pub fn hash<'a>(text: impl Into<Option<&'a str>>) -> Result<String, HashError> {
    let text = required(text, "text")?;
    Ok(digest_bytes(text.as_bytes()).to_hex())
}

/// Hashes `text` and returns the raw 64-bit digest.
///
/// Same pipeline as [`hash`] without the hex rendering, for callers that
/// want the integer digest for further bit manipulation or non-hex
/// serialization.
///
/// # Errors
///
/// Returns [`HashError::MissingInput`] if `text` is `None`.
pub fn hash_to_u64<'a>(text: impl Into<Option<&'a str>>) -> Result<u64, HashError> {
    let text = required(text, "text")?;
    Ok(digest_bytes(text.as_bytes()).as_u64())
}

/// Hashes a byte slice directly.
///
/// This is the leaf of the pipeline: no encoding step and no error cases.
/// Callers that already hold bytes should use this entry point rather than
/// pay an encoding cost.
///
/// # Example
///
/// ```
/// assert_eq!(
///     hashrs::hash_bytes(b"hello world"),
///     hashrs::hash_to_u64("hello world")?,
/// );
/// # Ok::<(), hashrs::HashError>(())
/// ```
pub fn hash_bytes(data: &[u8]) -> u64 {
    digest_bytes(data).as_u64()
}

/// Hashes a character sequence.
///
/// The characters are encoded as UTF-8 into a transient buffer first: a
/// stack buffer for inputs up to [`INLINE_BUF_SIZE`](crate::INLINE_BUF_SIZE)
/// bytes, a pooled buffer beyond that. The result equals [`hash_bytes`] of
/// the equivalent UTF-8 bytes for every input.
///
/// # Example
///
/// ```
/// let chars = ['h', 'i', '!'];
/// assert_eq!(
///     hashrs::hash_chars(chars.iter().copied()),
///     hashrs::hash_bytes(b"hi!"),
/// );
/// ```
pub fn hash_chars<I>(chars: I) -> u64
where
    I: IntoIterator<Item = char>,
    I::IntoIter: Clone,
{
    encode::with_utf8(chars.into_iter(), |bytes| digest_bytes(bytes).as_u64())
}

/// Verifies that `text` hashes to `expected_hex`.
///
/// The expected digest is decoded first; a malformed `expected_hex` (wrong
/// length, uppercase digits, characters outside `0-9a-f`) yields
/// `Ok(false)` without hashing the input. A failed decode and a mismatched
/// digest are indistinguishable to the caller: both mean "not verified".
///
/// # Errors
///
/// Returns [`HashError::MissingInput`] if either argument is `None`.
///
/// # Example
///
/// ```
/// let digest = hashrs::hash("hello world")?;
/// assert!(hashrs::verify("hello world", digest.as_str())?);
/// assert!(!hashrs::verify("hello world", "not-hex!!")?);
/// # Ok::<(), hashrs::HashError>(())
/// ```
pub fn verify<'a>(
    text: impl Into<Option<&'a str>>,
    expected_hex: impl Into<Option<&'a str>>,
) -> Result<bool, HashError> {
    let text = required(text, "text")?;
    let expected_hex = required(expected_hex, "expected_hex")?;

    let Some(expected) = Digest::from_hex(expected_hex) else {
        return Ok(false);
    };
    Ok(digest_bytes(text.as_bytes()) == expected)
}

fn required<'a>(
    arg: impl Into<Option<&'a str>>,
    param: &'static str,
) -> Result<&'a str, HashError> {
    arg.into().ok_or(HashError::MissingInput { param })
}
