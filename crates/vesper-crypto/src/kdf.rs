//! HKDF-SHA-256 key derivation (RFC 5869).
//!
//! Extract-then-expand: the input keying material is concentrated into a
//! pseudorandom key with the salt, then stretched to the requested length.
//! Used by the session layer to turn ECDH shared secrets into root, chain,
//! and message keys.

use crate::backend::{Active, Backend};

/// Maximum output a single derivation can produce: 255 * HashLen.
pub const MAX_OUTPUT_SIZE: usize = 255 * 32;

/// Derive `okm.len()` bytes of output keying material into `okm`.
///
/// `salt: None` (or an empty salt) selects the RFC 5869 default of 32 zero
/// bytes. Zero-length `ikm` is permitted.
///
/// # Panics
///
/// Panics if more than [`MAX_OUTPUT_SIZE`] bytes of output are requested.
/// That is a programming error in the caller, not a data-driven condition.
pub fn hkdf_sha256(ikm: &[u8], salt: Option<&[u8]>, info: &[u8], okm: &mut [u8]) {
    assert!(
        okm.len() <= MAX_OUTPUT_SIZE,
        "HKDF-SHA-256 output is limited to {MAX_OUTPUT_SIZE} bytes"
    );
    Active::hkdf_sha256(ikm, salt, info, okm);
}
