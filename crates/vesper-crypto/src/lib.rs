//! # vesper-crypto
//!
//! Cryptographic primitives for the Vesper messaging protocol.
//!
//! This crate provides the fixed algorithm suite that the session layer
//! composes into secure messaging:
//!
//! - **Key Agreement**: Curve25519 ECDH (X25519, RFC 7748)
//! - **Digital Signatures**: Ed25519 (RFC 8032)
//! - **Symmetric Encryption**: AES-256-CBC with PKCS#7 padding
//! - **Hashing**: SHA-256, HMAC-SHA-256, HKDF-SHA-256
//! - **Encoding**: unpadded Base64, the canonical wire form for keys
//!
//! The layer is stateless and re-entrant: every function is a pure
//! call/return over caller-owned byte buffers, safe to use from any number
//! of threads as long as no two calls alias their buffers.
//!
//! ## Security
//!
//! All secret data implements `Zeroize` for secure memory cleanup.
//! Constant-time comparisons are used for all security-sensitive operations.
//!
//! AES-CBC deliberately authenticates nothing. Callers MUST verify an HMAC
//! over the IV and ciphertext in constant time before decrypting; a bare
//! CBC decryption is a padding oracle.
//!
//! ## Backends
//!
//! The hash, MAC, KDF, and block-cipher core sits behind the
//! [`backend::Backend`] trait, selected at compile time. The portable
//! pure-Rust backend is the default; any replacement must pass the same
//! frozen vector suite.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod base64;
pub mod cipher;
pub mod curve25519;
pub mod ed25519;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod mac;
pub mod mem;

#[cfg(test)]
mod proptests;

pub use cipher::{decrypt, encrypt, encrypted_len, Aes256Iv, Aes256Key};
pub use curve25519::{Curve25519KeyPair, Curve25519PublicKey, Curve25519SecretKey, SharedSecret};
pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use error::{CryptoError, Result};
pub use hash::{sha256, Sha256Digest};
pub use kdf::hkdf_sha256;
pub use mac::{hmac_sha256, MacTag};
pub use mem::{constant_time_eq, wipe};
