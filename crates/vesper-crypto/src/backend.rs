//! Backend selection for the hash, MAC, KDF, and block-cipher core.
//!
//! The public modules in this crate are thin typed wrappers over a single
//! [`Backend`] implementation, chosen at compile time through the `Active`
//! alias. Call sites never branch on the backend and nothing is dispatched
//! dynamically. A replacement implementation (for example one delegating to
//! a platform library) plugs in here and must pass the same frozen vector
//! suite in `tests/rfc_vectors.rs` — backends are required to be
//! observationally indistinguishable.

use crate::{CryptoError, Result};

/// SHA-256 block size in bytes.
pub const SHA256_BLOCK_SIZE: usize = 64;

/// SHA-256 output size in bytes.
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// AES block (and IV) size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// The hash, MAC, KDF, and block-cipher core.
///
/// Implementations must be bit-exactly interoperable, producing identical
/// outputs and identical error behavior. Secret scratch state must be
/// scrubbed before every return.
pub trait Backend {
    /// One-shot SHA-256 (FIPS 180-4).
    fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE];

    /// One-shot HMAC-SHA-256 (RFC 2104). Keys longer than the SHA-256
    /// block are hashed down first; shorter keys are zero-padded.
    fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE];

    /// HKDF-SHA-256 extract-then-expand (RFC 5869), filling `okm`.
    ///
    /// `None` and `Some(&[])` both select the default all-zero salt.
    /// Zero-length `ikm` is valid input. The caller has already validated
    /// `okm.len()` against the 255 * 32 byte limit.
    fn hkdf_sha256(ikm: &[u8], salt: Option<&[u8]>, info: &[u8], okm: &mut [u8]);

    /// AES-256-CBC encryption with PKCS#7 padding.
    ///
    /// A full padding block is appended when the plaintext is already
    /// block-aligned, so the output is always
    /// `plaintext.len() + 16 - plaintext.len() % 16` bytes.
    fn aes256_cbc_encrypt(
        key: &[u8; 32],
        iv: &[u8; AES_BLOCK_SIZE],
        plaintext: &[u8],
    ) -> Vec<u8>;

    /// AES-256-CBC decryption with full PKCS#7 tail validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the ciphertext is empty or not a multiple of the
    /// block size, or if the padding tail is malformed.
    fn aes256_cbc_decrypt(
        key: &[u8; 32],
        iv: &[u8; AES_BLOCK_SIZE],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Portable pure-Rust backend built on the RustCrypto crates.
pub struct Portable;

impl Backend for Portable {
    fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        use sha2::{Digest, Sha256};
        Sha256::digest(data).into()
    }

    fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        use hmac::{Hmac, Mac};
        let mut mac =
            Hmac::<sha2::Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }

    fn hkdf_sha256(ikm: &[u8], salt: Option<&[u8]>, info: &[u8], okm: &mut [u8]) {
        use hkdf::Hkdf;
        // An empty salt and an absent salt are the same thing: the RFC 5869
        // default of HashLen zero bytes.
        let salt = salt.filter(|s| !s.is_empty());
        Hkdf::<sha2::Sha256>::new(salt, ikm)
            .expand(info, okm)
            .expect("okm length is validated by the caller");
    }

    fn aes256_cbc_encrypt(
        key: &[u8; 32],
        iv: &[u8; AES_BLOCK_SIZE],
        plaintext: &[u8],
    ) -> Vec<u8> {
        use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
        cbc::Encryptor::<aes::Aes256>::new(key.into(), iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    fn aes256_cbc_decrypt(
        key: &[u8; 32],
        iv: &[u8; AES_BLOCK_SIZE],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(CryptoError::InvalidCiphertextLength(ciphertext.len()));
        }
        cbc::Decryptor::<aes::Aes256>::new(key.into(), iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::InvalidPadding)
    }
}

/// The backend compiled into this build.
pub(crate) type Active = Portable;
