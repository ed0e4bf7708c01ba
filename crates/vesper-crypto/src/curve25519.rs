//! Curve25519 Diffie-Hellman key exchange (X25519, RFC 7748).
//!
//! ## Security Notes
//!
//! - Private keys and shared secrets are zeroized on drop
//! - Scalar multiplication is constant-time in the scalar
//! - The raw shared secret must be fed through a KDF before use as a key

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{CryptoError, Result};

/// Size of a Curve25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a Curve25519 private key in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of a serialized key pair (private followed by public) in bytes.
pub const KEY_PAIR_SIZE: usize = SECRET_KEY_SIZE + PUBLIC_KEY_SIZE;

/// Size of an X25519 shared secret in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;

/// A Curve25519 public key: the u-coordinate of `scalar * basepoint(9)`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve25519PublicKey {
    bytes: [u8; PUBLIC_KEY_SIZE],
}

impl Curve25519PublicKey {
    /// Create from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PUBLIC_KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Parse from the unpadded base64 wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not canonical base64 or does not
    /// decode to 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Self::from_bytes(&crate::base64::decode(encoded)?)
    }

    /// Get the key as a byte array reference.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.bytes
    }

    /// Convert to an owned byte array.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.bytes
    }

    /// Encode in the unpadded base64 wire form.
    pub fn to_base64(&self) -> String {
        crate::base64::encode(&self.bytes)
    }
}

impl std::fmt::Debug for Curve25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Curve25519PublicKey({:02x}{:02x}..)",
            self.bytes[0], self.bytes[1]
        )
    }
}

impl From<PublicKey> for Curve25519PublicKey {
    fn from(key: PublicKey) -> Self {
        Self {
            bytes: key.to_bytes(),
        }
    }
}

impl From<&Curve25519PublicKey> for PublicKey {
    fn from(key: &Curve25519PublicKey) -> Self {
        PublicKey::from(key.bytes)
    }
}

/// A Curve25519 private key.
///
/// The scalar is stored as supplied; RFC 7748 clamping is applied inside
/// the scalar multiplication.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Curve25519SecretKey {
    bytes: [u8; SECRET_KEY_SIZE],
}

impl Curve25519SecretKey {
    /// Generate a new random private key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SECRET_KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Create from 32 uniformly random bytes supplied by the caller.
    pub fn from_random_bytes(bytes: [u8; SECRET_KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Create from raw bytes.
    ///
    /// # Security
    ///
    /// Only use bytes from a secure source.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; SECRET_KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the corresponding public key.
    pub fn public_key(&self) -> Curve25519PublicKey {
        let secret = StaticSecret::from(self.bytes);
        Curve25519PublicKey::from(PublicKey::from(&secret))
    }

    /// Perform X25519 key exchange with a peer's public key.
    ///
    /// The result must be fed through a KDF before use as a key.
    pub fn diffie_hellman(&self, peer_public: &Curve25519PublicKey) -> SharedSecret {
        let secret = StaticSecret::from(self.bytes);
        let shared = secret.diffie_hellman(&PublicKey::from(peer_public));
        SharedSecret {
            bytes: shared.to_bytes(),
        }
    }

    /// Get raw bytes (for serialization).
    ///
    /// # Security
    ///
    /// Handle with care - this exposes the private key.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for Curve25519SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Curve25519SecretKey([REDACTED])")
    }
}

// Clone intentionally NOT implemented for Curve25519SecretKey: secret
// material must not be silently duplicated in memory.

/// A Curve25519 key pair.
pub struct Curve25519KeyPair {
    secret: Curve25519SecretKey,
    public: Curve25519PublicKey,
}

impl Curve25519KeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        Self::from_secret(Curve25519SecretKey::generate())
    }

    /// Build a key pair from 32 uniformly random bytes supplied by the
    /// caller.
    pub fn from_random_bytes(bytes: [u8; SECRET_KEY_SIZE]) -> Self {
        Self::from_secret(Curve25519SecretKey::from_random_bytes(bytes))
    }

    /// Build a key pair from an existing private key.
    pub fn from_secret(secret: Curve25519SecretKey) -> Self {
        let public = secret.public_key();
        Self { secret, public }
    }

    /// Restore a key pair from its 64-byte serialized form (private
    /// followed by public).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 64 bytes, or if the
    /// public half does not match the private half.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_PAIR_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_PAIR_SIZE,
                actual: bytes.len(),
            });
        }
        let secret = Curve25519SecretKey::from_bytes(&bytes[..SECRET_KEY_SIZE])?;
        let public = Curve25519PublicKey::from_bytes(&bytes[SECRET_KEY_SIZE..])?;
        if secret.public_key() != public {
            return Err(CryptoError::InconsistentKeyPair);
        }
        Ok(Self { secret, public })
    }

    /// Serialize as 64 bytes (private followed by public).
    ///
    /// # Security
    ///
    /// The returned buffer holds the private key; it zeroizes itself on
    /// drop, but anything copied out of it is the caller's responsibility.
    pub fn to_bytes(&self) -> Zeroizing<[u8; KEY_PAIR_SIZE]> {
        let mut out = Zeroizing::new([0u8; KEY_PAIR_SIZE]);
        out[..SECRET_KEY_SIZE].copy_from_slice(self.secret.as_bytes());
        out[SECRET_KEY_SIZE..].copy_from_slice(self.public.as_bytes());
        out
    }

    /// Get the public key.
    pub fn public_key(&self) -> &Curve25519PublicKey {
        &self.public
    }

    /// Get the private key.
    pub fn secret_key(&self) -> &Curve25519SecretKey {
        &self.secret
    }

    /// Perform X25519 key exchange with a peer's public key.
    pub fn diffie_hellman(&self, peer_public: &Curve25519PublicKey) -> SharedSecret {
        self.secret.diffie_hellman(peer_public)
    }
}

impl std::fmt::Debug for Curve25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Curve25519KeyPair {{ public: {:?} }}", self.public)
    }
}

/// A shared secret derived from X25519 key exchange.
///
/// This is raw Diffie-Hellman output. Derive actual keys from it with
/// [`crate::hkdf_sha256`]; never use it directly.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    /// Get the shared secret as bytes, for feeding into a KDF.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedSecret([REDACTED])")
    }
}
