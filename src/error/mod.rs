//! Error handling for cryptkit operations
//!
//! One crate-wide error type covers the whole API. Precondition violations
//! (empty inputs, out-of-range sizes) are reported with a dedicated variant
//! before any cryptographic work starts. Failures inside an underlying
//! primitive are collapsed into [`Error::OperationFailed`]: the variant
//! deliberately does not distinguish a wrong password from corrupted
//! ciphertext, and it never carries the primitive's own error to the caller.

use thiserror::Error;

pub mod validate;

/// Error type for all cryptkit operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was empty
    #[error("invalid argument '{0}': must not be empty")]
    InvalidArgument(&'static str),

    /// A caller-supplied IV does not match the cipher's block size
    #[error("invalid IV size for {algorithm}: needed {needed} bytes, got {got}")]
    InvalidIvSize {
        algorithm: &'static str,
        needed: usize,
        got: usize,
    },

    /// An RSA key size outside the legal domain
    #[error("invalid RSA key size {got}: legal sizes are {min}-{max} in steps of 8")]
    InvalidKeySize { got: usize, min: usize, max: usize },

    /// A parameter value outside its legal domain
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// Malformed textual input (base64, radix groups, UTF-8, PEM)
    #[error("invalid {0} input")]
    InvalidFormat(&'static str),

    /// The underlying primitive failed or produced an unusable result
    #[error("cryptographic operation failed: {0}")]
    OperationFailed(&'static str),
}

/// Result type for cryptkit operations
pub type Result<T> = std::result::Result<T, Error>;
