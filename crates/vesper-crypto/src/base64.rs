//! Unpadded Base64, the canonical wire encoding for keys and signatures.
//!
//! Standard RFC 4648 alphabet (`A-Z a-z 0-9 + /`) with no `=` padding.
//! The decoder accepts only this form: padding characters, non-alphabet
//! bytes, and inputs whose length is 1 mod 4 are all rejected. Base64 is
//! applied only to public values (keys, signatures, MACs already on the
//! wire), so the codec may be variable-time.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use crate::{CryptoError, Result};

/// Length of the unpadded encoding of `input_len` bytes: ceil(4n/3).
pub const fn encoded_len(input_len: usize) -> usize {
    match input_len % 3 {
        0 => input_len / 3 * 4,
        1 => input_len / 3 * 4 + 2,
        _ => input_len / 3 * 4 + 3,
    }
}

/// Length of the decoding of `input_len` base64 characters: floor(3n/4).
///
/// # Errors
///
/// Returns an error for lengths of 1 mod 4, which no unpadded encoding can
/// produce.
pub fn decoded_len(input_len: usize) -> Result<usize> {
    if input_len % 4 == 1 {
        return Err(CryptoError::InvalidBase64);
    }
    Ok(input_len / 4 * 3 + (input_len % 4).saturating_sub(1))
}

/// Encode bytes as unpadded base64.
pub fn encode(input: &[u8]) -> String {
    STANDARD_NO_PAD.encode(input)
}

/// Decode canonical unpadded base64.
///
/// # Errors
///
/// Returns an error if the input contains a byte outside the standard
/// alphabet (including `=`), has a length of 1 mod 4, or carries non-zero
/// trailing bits.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    STANDARD_NO_PAD
        .decode(input)
        .map_err(|_| CryptoError::InvalidBase64)
}
