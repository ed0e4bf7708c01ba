//! Secure-memory helpers.
//!
//! Scrubbing goes through `zeroize`, whose volatile writes survive
//! dead-store elimination. Comparisons of secret material go through
//! `subtle` so timing depends only on length, never on contents.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

pub use zeroize::Zeroizing;

/// Compare two byte slices in time dependent only on their lengths.
///
/// Slices of different lengths compare unequal immediately; lengths are
/// public, contents are not.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Overwrite a buffer with zeros.
///
/// Use this on any scratch buffer that held key material before its storage
/// is released. Owned secret types in this crate scrub themselves on drop.
pub fn wipe(buf: &mut [u8]) {
    buf.zeroize();
}
