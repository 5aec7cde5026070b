//! Digest type and its hexadecimal codec.
//!
//! - [`Digest`] - 64-bit hash value with a canonical lowercase hex form

use std::fmt;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// A 64-bit hash digest.
///
/// This is a thin wrapper around the `u64` produced by the hash primitive.
/// Its canonical textual form is exactly 16 lowercase hexadecimal
/// characters, most-significant nibble first, zero-padded, with no prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(u64);

impl Digest {
    /// The length of the canonical hex form in characters.
    pub const HEX_LEN: usize = 16;

    /// Creates a digest from a raw 64-bit value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Renders the digest as its canonical 16-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        let mut buf = [0u8; Self::HEX_LEN];
        let mut value = self.0;
        for slot in buf.iter_mut().rev() {
            *slot = HEX_CHARS[(value & 0xf) as usize];
            value >>= 4;
        }
        buf.iter().map(|&b| char::from(b)).collect()
    }

    /// Parses a digest from its canonical hex form.
    ///
    /// Accepts exactly 16 characters drawn from `0-9` and lowercase `a-f`,
    /// matching the output of [`Digest::to_hex`]. Uppercase digits, any
    /// other character, or any other length fail to parse.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let bytes = hex_str.as_bytes();
        if bytes.len() != Self::HEX_LEN {
            return None;
        }
        let mut value = 0u64;
        for &b in bytes {
            let nibble = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => return None,
            };
            value = (value << 4) | u64::from(nibble);
        }
        Some(Self(value))
    }
}

impl From<u64> for Digest {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Digest> for u64 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
