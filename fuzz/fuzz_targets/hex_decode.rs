#![no_main]

use hashrs::Digest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Decoding must never panic, and anything it accepts must round-trip
    if let Some(digest) = Digest::from_hex(data) {
        assert_eq!(data.len(), Digest::HEX_LEN);
        assert_eq!(digest.to_hex(), data);
    }

    // Encoder output always parses back to the same value
    let digest = Digest::new(hashrs::hash_bytes(data.as_bytes()));
    assert_eq!(Digest::from_hex(&digest.to_hex()), Some(digest));
});
