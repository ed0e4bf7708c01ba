//! Fuzz target for AES-256-CBC decryption.
//!
//! Tests that decrypting arbitrary bytes is handled safely: either a clean
//! error or a plaintext consistent with the padding contract - never a
//! panic, never an out-of-range length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vesper_crypto::{decrypt, Aes256Iv, Aes256Key};

fuzz_target!(|data: &[u8]| {
    let key = Aes256Key::from_bytes(&[0x42u8; 32]).unwrap();
    let iv = Aes256Iv::from_bytes(&[0x24u8; 16]).unwrap();

    if let Ok(plaintext) = decrypt(&key, &iv, data) {
        // Only block-aligned input can succeed, and between 1 and 16 bytes
        // of padding must have been stripped.
        assert!(!data.is_empty() && data.len() % 16 == 0);
        let stripped = data.len() - plaintext.len();
        assert!((1..=16).contains(&stripped));
    }
});
