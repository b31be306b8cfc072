//! Structural equality over raw bytes
//!
//! [`equal_bytes`] short-circuits on a length mismatch; for equal-length
//! inputs the element-wise comparison runs in constant time, so the result
//! leaks the length but not the position of the first differing byte.
//! [`equal_by_digest`] compares fixed-size digests instead of the inputs
//! themselves, which keeps large payloads or secrets out of the comparison.

use crate::hash::HashAlgorithm;
use subtle::ConstantTimeEq;

/// Byte-for-byte equality; `false` on length mismatch with no element access
pub fn equal_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Equality via SHA-256 digests of both inputs
pub fn equal_by_digest(a: &[u8], b: &[u8]) -> bool {
    equal_by_digest_with(a, b, HashAlgorithm::default())
}

/// Equality via digests computed with the given algorithm
///
/// Returns `false` when either digest computation fails, which includes
/// empty inputs.
pub fn equal_by_digest_with(a: &[u8], b: &[u8], algorithm: HashAlgorithm) -> bool {
    if a.len() != b.len() {
        return false;
    }
    match (algorithm.digest(a), algorithm.digest(b)) {
        (Ok(digest_a), Ok(digest_b)) => equal_bytes(&digest_a, &digest_b),
        _ => false,
    }
}
