//! Property-based tests for the primitive layer.
//!
//! These tests use proptest to verify that the algebraic and rejection
//! properties hold for arbitrary inputs:
//!
//! - Roundtrip properties (base64, CBC, key serialization)
//! - Symmetry and consistency properties (ECDH, HKDF, HMAC)
//! - Rejection properties (tampered signatures, malformed input)

use proptest::prelude::*;

use crate::{
    cipher, decrypt, encrypt, encrypted_len, hkdf_sha256, hmac_sha256, Aes256Iv, Aes256Key,
    Curve25519KeyPair, Ed25519KeyPair,
};

// ==================== Base64 Property Tests ====================

proptest! {
    /// Decoding an encoding returns the original bytes, and the encoded
    /// length obeys the ceil(4n/3) law.
    #[test]
    fn base64_roundtrip(data: Vec<u8>) {
        let encoded = crate::base64::encode(&data);
        prop_assert_eq!(encoded.len(), crate::base64::encoded_len(data.len()));
        prop_assert_eq!(crate::base64::decoded_len(encoded.len()).unwrap(), data.len());

        let decoded = crate::base64::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, data);
    }

    /// Anything the decoder accepts is a canonical encoding: re-encoding
    /// the decoded bytes reproduces the input exactly.
    #[test]
    fn base64_decode_accepts_only_canonical_form(input in "[A-Za-z0-9+/]{0,120}") {
        if let Ok(decoded) = crate::base64::decode(&input) {
            prop_assert_eq!(crate::base64::encode(&decoded), input);
        }
    }

    /// Inputs with a length of 1 mod 4 never decode.
    #[test]
    fn base64_rejects_impossible_lengths(input in "[A-Za-z0-9+/]{0,120}") {
        if input.len() % 4 == 1 {
            prop_assert!(crate::base64::decode(&input).is_err());
        }
    }
}

// ==================== AES-256-CBC Property Tests ====================

proptest! {
    /// Decryption inverts encryption, and the ciphertext length obeys the
    /// always-pad law.
    #[test]
    fn cbc_roundtrip(
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform16(any::<u8>()),
        plaintext: Vec<u8>,
    ) {
        let key = Aes256Key::from_bytes(&key).unwrap();
        let iv = Aes256Iv::from_bytes(&iv).unwrap();

        let ciphertext = encrypt(&key, &iv, &plaintext);
        prop_assert_eq!(ciphertext.len(), encrypted_len(plaintext.len()));
        prop_assert!(ciphertext.len() > plaintext.len());

        let decrypted = decrypt(&key, &iv, &ciphertext).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    /// Ciphertexts that are empty or not block-aligned are rejected before
    /// any decryption happens.
    #[test]
    fn cbc_rejects_misaligned_ciphertext(
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform16(any::<u8>()),
        ciphertext in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        prop_assume!(ciphertext.len() % cipher::BLOCK_SIZE != 0 || ciphertext.is_empty());

        let key = Aes256Key::from_bytes(&key).unwrap();
        let iv = Aes256Iv::from_bytes(&iv).unwrap();
        prop_assert!(decrypt(&key, &iv, &ciphertext).is_err());
    }
}

// ==================== X25519 Property Tests ====================

proptest! {
    /// Both sides of an exchange derive the same shared secret.
    #[test]
    fn ecdh_symmetry(
        a in prop::array::uniform32(any::<u8>()),
        b in prop::array::uniform32(any::<u8>()),
    ) {
        let alice = Curve25519KeyPair::from_random_bytes(a);
        let bob = Curve25519KeyPair::from_random_bytes(b);

        let alice_shared = alice.diffie_hellman(bob.public_key());
        let bob_shared = bob.diffie_hellman(alice.public_key());

        prop_assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
    }

    /// Key pair serialization roundtrips through the 64-byte form.
    #[test]
    fn curve25519_key_pair_roundtrip(entropy in prop::array::uniform32(any::<u8>())) {
        let pair = Curve25519KeyPair::from_random_bytes(entropy);
        let restored = Curve25519KeyPair::from_bytes(pair.to_bytes().as_ref()).unwrap();
        prop_assert_eq!(pair.public_key(), restored.public_key());
    }
}

// ==================== Ed25519 Property Tests ====================

proptest! {
    /// A signature over any message verifies under the signing key.
    #[test]
    fn ed25519_sign_verify(seed in prop::array::uniform32(any::<u8>()), message: Vec<u8>) {
        let pair = Ed25519KeyPair::from_seed(&seed).unwrap();
        let signature = pair.sign(&message);
        prop_assert!(pair.public_key().verify(&message, &signature).is_ok());
    }

    /// Flipping any single bit of the message invalidates the signature.
    #[test]
    fn ed25519_tampered_message_fails(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 1..100),
        bit: usize,
    ) {
        let pair = Ed25519KeyPair::from_seed(&seed).unwrap();
        let signature = pair.sign(&message);

        let mut tampered = message.clone();
        let bit = bit % (tampered.len() * 8);
        tampered[bit / 8] ^= 1 << (bit % 8);

        prop_assert!(pair.public_key().verify(&tampered, &signature).is_err());
    }

    /// Flipping any single bit of the signature invalidates it.
    #[test]
    fn ed25519_tampered_signature_fails(
        seed in prop::array::uniform32(any::<u8>()),
        message: Vec<u8>,
        bit in 0usize..(crate::ed25519::SIGNATURE_SIZE * 8),
    ) {
        let pair = Ed25519KeyPair::from_seed(&seed).unwrap();
        let mut bytes = pair.sign(&message).to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);

        let verdict = crate::Ed25519Signature::from_bytes(&bytes)
            .and_then(|sig| pair.public_key().verify(&message, &sig));
        prop_assert!(verdict.is_err());
    }

    /// Flipping any single bit of the public key invalidates the
    /// signature: the bytes either stop being a valid point encoding or
    /// decode to a key the signature does not verify under.
    #[test]
    fn ed25519_tampered_public_key_fails(
        seed in prop::array::uniform32(any::<u8>()),
        message: Vec<u8>,
        bit in 0usize..(crate::ed25519::PUBLIC_KEY_SIZE * 8),
    ) {
        let pair = Ed25519KeyPair::from_seed(&seed).unwrap();
        let signature = pair.sign(&message);

        let mut bytes = pair.public_key().to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);

        let verdict = crate::Ed25519PublicKey::from_bytes(&bytes)
            .and_then(|key| key.verify(&message, &signature));
        prop_assert!(verdict.is_err());
    }
}

// ==================== Hash and KDF Property Tests ====================

proptest! {
    /// The same key and message always produce the same tag, and the tag
    /// only verifies against itself.
    #[test]
    fn hmac_deterministic(
        key in prop::collection::vec(any::<u8>(), 0..100),
        message: Vec<u8>,
        other: Vec<u8>,
    ) {
        let tag = hmac_sha256(&key, &message);
        prop_assert_eq!(tag.clone(), hmac_sha256(&key, &message));

        let other_tag = hmac_sha256(&key, &other);
        if message == other {
            prop_assert!(tag.verify(other_tag.as_bytes()).is_ok());
        } else {
            prop_assert!(tag.verify(other_tag.as_bytes()).is_err());
        }
    }

    /// A longer derivation is a strict extension of a shorter one with the
    /// same inputs.
    #[test]
    fn hkdf_prefix_consistent(
        ikm in prop::collection::vec(any::<u8>(), 0..64),
        info in prop::collection::vec(any::<u8>(), 0..32),
        len in 0usize..96,
        pad in 0usize..96,
    ) {
        let mut short = vec![0u8; len];
        let mut long = vec![0u8; len + pad];
        hkdf_sha256(&ikm, None, &info, &mut short);
        hkdf_sha256(&ikm, None, &info, &mut long);
        prop_assert_eq!(&short[..], &long[..len]);
    }

    /// SHA-256 is a function.
    #[test]
    fn sha256_deterministic(data: Vec<u8>) {
        prop_assert_eq!(crate::sha256(&data), crate::sha256(&data));
    }
}
