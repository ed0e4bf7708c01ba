//! Fuzz target for Ed25519 key and signature parsing.
//!
//! Tests that parsing arbitrary bytes as public keys, signatures, and
//! serialized key pairs is handled safely.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vesper_crypto::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

fuzz_target!(|data: &[u8]| {
    // Should succeed for canonical 32-byte point encodings, fail otherwise
    // - never panic
    if let Ok(key) = Ed25519PublicKey::from_bytes(data) {
        let roundtrip = Ed25519PublicKey::from_bytes(key.as_bytes()).unwrap();
        assert_eq!(key, roundtrip);
    }

    if let Ok(signature) = Ed25519Signature::from_bytes(data) {
        let roundtrip = Ed25519Signature::from_bytes(&signature.to_bytes()).unwrap();
        assert_eq!(signature, roundtrip);
    }

    // A restored key pair must be internally consistent
    if let Ok(pair) = Ed25519KeyPair::from_keypair_bytes(data) {
        let bytes = pair.to_keypair_bytes();
        assert_eq!(&bytes[32..], &pair.public_key().as_bytes()[..]);
    }
});
