//! AES-256-CBC symmetric encryption with PKCS#7 padding.
//!
//! ## Security Notes
//!
//! - Keys are zeroized on drop
//! - The IV must be unique per key
//! - This mode authenticates nothing. Callers MUST verify an HMAC over the
//!   IV and ciphertext in constant time before calling [`decrypt`]; a bare
//!   CBC decryption is a padding oracle.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backend::{Active, Backend};
use crate::{CryptoError, Result};

/// Size of an AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of an AES block, and of the CBC initialization vector, in bytes.
pub const BLOCK_SIZE: usize = 16;

/// A 256-bit AES key.
///
/// The key is zeroized when dropped and intentionally does not implement
/// `Clone`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key {
    bytes: [u8; KEY_SIZE],
}

impl Aes256Key {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Create a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the key as a byte array reference.
    ///
    /// # Security
    ///
    /// Handle with care - avoid logging or persisting the returned bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aes256Key([REDACTED])")
    }
}

/// A CBC initialization vector.
///
/// IVs are public once used, but must never repeat under the same key.
#[derive(Clone)]
pub struct Aes256Iv {
    bytes: [u8; BLOCK_SIZE],
}

impl Aes256Iv {
    /// Generate a new random IV.
    pub fn generate() -> Self {
        let mut bytes = [0u8; BLOCK_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Create an IV from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != BLOCK_SIZE {
            return Err(CryptoError::InvalidIvLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the IV as a byte array reference.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for Aes256Iv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aes256Iv({:02x}{:02x}..)", self.bytes[0], self.bytes[1])
    }
}

/// Ciphertext length for a plaintext of `plaintext_len` bytes.
///
/// A full block of padding is appended even when the plaintext is already
/// block-aligned, so the result is always strictly larger than the input.
pub const fn encrypted_len(plaintext_len: usize) -> usize {
    plaintext_len + BLOCK_SIZE - plaintext_len % BLOCK_SIZE
}

/// Encrypt a plaintext with AES-256-CBC and PKCS#7 padding.
///
/// The output length is [`encrypted_len`] of the input length.
pub fn encrypt(key: &Aes256Key, iv: &Aes256Iv, plaintext: &[u8]) -> Vec<u8> {
    Active::aes256_cbc_encrypt(&key.bytes, &iv.bytes, plaintext)
}

/// Decrypt an AES-256-CBC ciphertext and strip PKCS#7 padding.
///
/// The full padding tail is validated, not just the trailing length byte.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidCiphertextLength`] if the ciphertext is
/// empty or not a multiple of 16 bytes, and [`CryptoError::InvalidPadding`]
/// if the padding tail is malformed. Reaching either error on
/// MAC-authenticated input indicates a bug in the caller.
pub fn decrypt(key: &Aes256Key, iv: &Aes256Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
    Active::aes256_cbc_decrypt(&key.bytes, &iv.bytes, ciphertext)
}
