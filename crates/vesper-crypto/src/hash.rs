//! SHA-256 hashing.
//!
//! One-shot hashing matching FIPS 180-4 bit for bit; the digest type
//! compares in constant time.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::backend::{Active, Backend};

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// A SHA-256 digest.
#[derive(Clone, Default, Serialize, Deserialize, Zeroize)]
pub struct Sha256Digest([u8; DIGEST_SIZE]);

impl Sha256Digest {
    /// Create a digest from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        if bytes.len() != DIGEST_SIZE {
            return Err(crate::CryptoError::InvalidDigestLength {
                expected: DIGEST_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; DIGEST_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Get the digest as a byte array reference.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Convert to an owned byte array.
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Format as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(DIGEST_SIZE * 2);
        for byte in &self.0 {
            s.push_str(&format!("{:02x}", byte));
        }
        s
    }
}

impl ConstantTimeEq for Sha256Digest {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Sha256Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Sha256Digest {}

impl std::fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sha256Digest({})", &self.to_hex()[..16])
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Hash a byte string with SHA-256.
pub fn sha256(data: &[u8]) -> Sha256Digest {
    Sha256Digest(Active::sha256(data))
}
