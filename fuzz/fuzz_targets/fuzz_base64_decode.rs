//! Fuzz target for the unpadded base64 decoder.
//!
//! Tests that decoding arbitrary bytes is handled safely and that anything
//! accepted is a canonical encoding.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Should succeed only for canonical unpadded base64 - never panic
    if let Ok(decoded) = vesper_crypto::base64::decode(data) {
        // Anything accepted must re-encode to exactly the input
        let reencoded = vesper_crypto::base64::encode(&decoded);
        assert_eq!(reencoded.as_bytes(), data);
        assert_eq!(
            vesper_crypto::base64::decoded_len(data.len()).unwrap(),
            decoded.len()
        );
    }
});
