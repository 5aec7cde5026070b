#![no_main]

use hashrs::{hash, hash_bytes, hash_chars, verify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    // Every entry point agrees on the digest
    let byte_digest = hash_bytes(text.as_bytes());
    assert_eq!(hash_chars(text.chars()), byte_digest);

    let hex = hash(text.as_str()).unwrap();
    assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), byte_digest);

    // Round-trip verification always succeeds
    assert!(verify(text.as_str(), hex.as_str()).unwrap());

    // Mangled digests never verify and never error
    let mangled = hex.to_uppercase();
    if mangled != hex {
        assert!(!verify(text.as_str(), mangled.as_str()).unwrap());
    }
});
