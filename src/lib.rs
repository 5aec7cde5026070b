//! hashrs
//!
//! Deterministic 64-bit content hashing (XXH3) for text and bytes.
//!
//! `hashrs` adapts the XXH3-64 primitive into a text-friendly API: hash
//! string-like input to a canonical 16-character lowercase hex digest, get
//! the raw 64-bit digest, or verify input against an expected digest
//! without allocating on the hot path. It is designed as a small,
//! composable primitive for:
//!
//! - content fingerprinting and change detection
//! - cache keys and deduplication
//! - integrity checks where speed matters more than adversarial resistance
//!
//! The crate intentionally:
//! - does NOT reimplement the XXH3 algorithm (it is consumed as a primitive)
//! - does NOT offer streaming or incremental hashing
//! - does NOT offer seeded or 128-bit variants
//! - does NOT provide cryptographic guarantees (collisions are statistically
//!   rare, not infeasible to construct)
//!
//! It only does one thing: **text or bytes in → 64-bit digest out**
//!
//! # Hashing
//!
//! ```
//! use hashrs::{HashError, hash, hash_bytes, hash_to_u64};
//!
//! fn main() -> Result<(), HashError> {
//!     let digest = hash("hello world")?;
//!     assert_eq!(digest.len(), 16);
//!
//!     // Same digest as the byte-level entry point
//!     assert_eq!(hash_to_u64("hello world")?, hash_bytes(b"hello world"));
//!     Ok(())
//! }
//! ```
//!
//! # Verification
//!
//! ```
//! use hashrs::{HashError, hash, verify};
//!
//! fn main() -> Result<(), HashError> {
//!     let digest = hash("hello world")?;
//!
//!     assert!(verify("hello world", digest.as_str())?);
//!     assert!(!verify("something else", digest.as_str())?);
//!
//!     // A malformed expected digest is a mismatch, not an error
//!     assert!(!verify("hello world", "not-hex!!")?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod digest;
mod error;
mod hasher;

mod buffer; // internal (process-wide reuse)
mod encode; // internal utf-8 encode strategy
mod hash; // internal xxh3 primitive wrapper

//
// Public surface (intentionally tiny)
//

pub use digest::Digest;
pub use encode::INLINE_BUF_SIZE;
pub use error::HashError;
pub use hasher::{hash, hash_bytes, hash_chars, hash_to_u64, verify};
