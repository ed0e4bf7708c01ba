//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
///
/// Every variant is a recoverable, data-driven condition. Programmer errors
/// (such as requesting more HKDF output than RFC 5869 allows) panic instead
/// of surfacing here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Input was not canonical unpadded base64.
    #[error("invalid base64 input")]
    InvalidBase64,

    /// Ciphertext length is not a positive multiple of the AES block size.
    #[error("invalid ciphertext length: {0} is not a positive multiple of 16")]
    InvalidCiphertextLength(usize),

    /// PKCS#7 padding was malformed after decryption.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// MAC verification failed.
    #[error("MAC verification failed")]
    MacVerification,

    /// Signature verification failed.
    #[error("signature verification failed")]
    SignatureVerification,

    /// Invalid key length.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length.
        expected: usize,
        /// Actual key length.
        actual: usize,
    },

    /// Invalid IV length.
    #[error("invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength {
        /// Expected IV length.
        expected: usize,
        /// Actual IV length.
        actual: usize,
    },

    /// Invalid digest length.
    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength {
        /// Expected digest length.
        expected: usize,
        /// Actual digest length.
        actual: usize,
    },

    /// Invalid MAC tag length.
    #[error("invalid MAC tag length: expected {expected}, got {actual}")]
    InvalidTagLength {
        /// Expected tag length.
        expected: usize,
        /// Actual tag length.
        actual: usize,
    },

    /// Key bytes were the right length but did not decode to a valid key.
    #[error("invalid key encoding")]
    InvalidKeyEncoding,

    /// Invalid signature length.
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected signature length.
        expected: usize,
        /// Actual signature length.
        actual: usize,
    },

    /// A restored key pair's public half does not match its private half.
    #[error("public key does not match private key")]
    InconsistentKeyPair,
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
