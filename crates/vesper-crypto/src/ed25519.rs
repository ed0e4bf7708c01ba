//! Ed25519 digital signatures (RFC 8032).
//!
//! Deterministic signing over a 32-byte seed. Verification is strict: it
//! rejects non-canonical encodings of `R` and `S` and small-order
//! components, so a signature accepted here is accepted by every other
//! strict verifier and vice versa.
//!
//! ## Security Notes
//!
//! - Signing keys are zeroized on drop and do not implement `Clone`
//! - Public keys are validated at construction time

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::{CryptoError, Result};

/// Size of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 seed in bytes.
pub const SEED_SIZE: usize = 32;

/// Size of a serialized key pair (seed followed by public) in bytes.
pub const KEY_PAIR_SIZE: usize = SEED_SIZE + PUBLIC_KEY_SIZE;

/// Size of an Ed25519 signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// An Ed25519 public key for signature verification.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519PublicKey {
    inner: VerifyingKey,
}

impl Ed25519PublicKey {
    /// Create from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes, or is not a
    /// canonical encoding of a curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PUBLIC_KEY_SIZE];
        arr.copy_from_slice(bytes);
        let inner =
            VerifyingKey::from_bytes(&arr).map_err(|_| CryptoError::InvalidKeyEncoding)?;
        Ok(Self { inner })
    }

    /// Parse from the unpadded base64 wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not canonical base64 or does not
    /// decode to a valid public key.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Self::from_bytes(&crate::base64::decode(encoded)?)
    }

    /// Get the key as a byte array reference.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.inner.as_bytes()
    }

    /// Convert to an owned byte array.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.inner.to_bytes()
    }

    /// Encode in the unpadded base64 wire form.
    pub fn to_base64(&self) -> String {
        crate::base64::encode(self.as_bytes())
    }

    /// Verify a detached signature over a message.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::SignatureVerification`] if the signature is
    /// invalid for this key and message.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<()> {
        self.inner
            .verify_strict(message, &signature.inner)
            .map_err(|_| CryptoError::SignatureVerification)
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.as_bytes();
        write!(f, "Ed25519PublicKey({:02x}{:02x}..)", bytes[0], bytes[1])
    }
}

/// An Ed25519 key pair.
///
/// The secret half is the 32-byte seed; the signing scalar and prefix are
/// expanded from it deterministically per RFC 8032 §5.1.5.
pub struct Ed25519KeyPair {
    signing: SigningKey,
}

impl Ed25519KeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        let mut seed = [0u8; SEED_SIZE];
        OsRng.fill_bytes(&mut seed);
        let pair = Self {
            signing: SigningKey::from_bytes(&seed),
        };
        crate::mem::wipe(&mut seed);
        pair
    }

    /// Expand a key pair from a 32-byte seed supplied by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is not exactly 32 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        if seed.len() != SEED_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: SEED_SIZE,
                actual: seed.len(),
            });
        }
        let mut arr = Zeroizing::new([0u8; SEED_SIZE]);
        arr.copy_from_slice(seed);
        Ok(Self {
            signing: SigningKey::from_bytes(&arr),
        })
    }

    /// Restore a key pair from its 64-byte serialized form (seed followed
    /// by public key).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 64 bytes, or if the
    /// public half does not match the seed.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_PAIR_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_PAIR_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = Zeroizing::new([0u8; KEY_PAIR_SIZE]);
        arr.copy_from_slice(bytes);
        let signing = SigningKey::from_keypair_bytes(&arr)
            .map_err(|_| CryptoError::InconsistentKeyPair)?;
        Ok(Self { signing })
    }

    /// Serialize as 64 bytes (seed followed by public key).
    ///
    /// # Security
    ///
    /// The returned buffer holds the seed; it zeroizes itself on drop.
    pub fn to_keypair_bytes(&self) -> Zeroizing<[u8; KEY_PAIR_SIZE]> {
        Zeroizing::new(self.signing.to_keypair_bytes())
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey {
            inner: self.signing.verifying_key(),
        }
    }

    /// Sign a message.
    ///
    /// Signing is deterministic: the same key and message always produce
    /// the same signature.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature {
            inner: self.signing.sign(message),
        }
    }
}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519KeyPair {{ public: {:?} }}", self.public_key())
    }
}

/// A detached Ed25519 signature.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519Signature {
    inner: Signature,
}

impl Ed25519Signature {
    /// Create from raw bytes.
    ///
    /// Range checks on the scalar half happen at verification time, not
    /// here.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(CryptoError::InvalidSignatureLength {
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; SIGNATURE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self {
            inner: Signature::from_bytes(&arr),
        })
    }

    /// Parse from the unpadded base64 wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not canonical base64 or does not
    /// decode to 64 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        Self::from_bytes(&crate::base64::decode(encoded)?)
    }

    /// Convert to an owned byte array.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.inner.to_bytes()
    }

    /// Encode in the unpadded base64 wire form.
    pub fn to_base64(&self) -> String {
        crate::base64::encode(&self.to_bytes())
    }
}

impl std::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Ed25519Signature({:02x}{:02x}..)", bytes[0], bytes[1])
    }
}
