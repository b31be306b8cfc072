//! Validation utilities for precondition checks

use super::{Error, Result};

/// Validate that a byte input is non-empty
#[inline(always)]
pub fn not_empty(name: &'static str, data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::InvalidArgument(name));
    }
    Ok(())
}

/// Validate that a string input is non-empty
#[inline(always)]
pub fn not_empty_str(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(name));
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { name, reason });
    }
    Ok(())
}

/// Validate a caller-supplied IV against the cipher's block size
#[inline(always)]
pub fn iv_length(algorithm: &'static str, actual: usize, needed: usize) -> Result<()> {
    if actual != needed {
        return Err(Error::InvalidIvSize {
            algorithm,
            needed,
            got: actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(
            not_empty("data", &[]),
            Err(Error::InvalidArgument("data"))
        );
        assert_eq!(
            not_empty_str("password", ""),
            Err(Error::InvalidArgument("password"))
        );
        assert!(not_empty("data", &[1]).is_ok());
        assert!(not_empty_str("password", "x").is_ok());
    }

    #[test]
    fn iv_length_mismatch_reports_sizes() {
        let err = iv_length("AES", 12, 16).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIvSize {
                algorithm: "AES",
                needed: 16,
                got: 12
            }
        );
        assert!(iv_length("AES", 16, 16).is_ok());
    }
}
