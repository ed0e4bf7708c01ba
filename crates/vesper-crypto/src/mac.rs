//! HMAC-SHA-256 message authentication (RFC 2104).
//!
//! ## Security Notes
//!
//! - Tags are compared in constant time; use [`MacTag::verify`] rather than
//!   comparing bytes directly
//! - The session layer truncates wire MACs; truncated comparison goes
//!   through [`crate::mem::constant_time_eq`]

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::backend::{Active, Backend};
use crate::{CryptoError, Result};

/// Size of an HMAC-SHA-256 tag in bytes.
pub const TAG_SIZE: usize = 32;

/// An HMAC-SHA-256 authentication tag.
#[derive(Clone, Zeroize)]
pub struct MacTag([u8; TAG_SIZE]);

impl MacTag {
    /// Create a tag from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != TAG_SIZE {
            return Err(CryptoError::InvalidTagLength {
                expected: TAG_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; TAG_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Get the tag as a byte array reference.
    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }

    /// Convert to an owned byte array.
    pub fn to_bytes(&self) -> [u8; TAG_SIZE] {
        self.0
    }

    /// Check a received tag against this one in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MacVerification`] if the tags differ.
    pub fn verify(&self, received: &[u8]) -> Result<()> {
        if crate::mem::constant_time_eq(&self.0, received) {
            Ok(())
        } else {
            Err(CryptoError::MacVerification)
        }
    }
}

impl ConstantTimeEq for MacTag {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for MacTag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MacTag {}

impl std::fmt::Debug for MacTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MacTag({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

impl AsRef<[u8]> for MacTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute the HMAC-SHA-256 of a message under `key`.
///
/// Keys of any length are accepted: longer than 64 bytes they are hashed
/// down first, shorter they are zero-padded, per RFC 2104.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> MacTag {
    MacTag(Active::hmac_sha256(key, message))
}
