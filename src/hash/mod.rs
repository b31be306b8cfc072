//! Pluggable digest algorithms
//!
//! A closed set of digest algorithms behind a single enum. MD5 and SHA-1 are
//! kept for interoperability with legacy data; new callers should default to
//! [`HashAlgorithm::Sha256`] or stronger.

use crate::encoding;
use crate::error::{validate, Result};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Digest algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest size in bytes (fixed per algorithm, independent of input length)
    pub fn output_size(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Computes the digest of a byte buffer
    pub fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        validate::not_empty("data", data)?;
        Ok(match self {
            Self::Md5 => Md5::digest(data).to_vec(),
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        })
    }

    /// Computes the digest of a string's UTF-8 bytes
    pub fn digest_str(&self, input: &str) -> Result<Vec<u8>> {
        let bytes = encoding::str_to_bytes(input)?;
        self.digest(&bytes)
    }

    /// Computes the digest of a byte buffer, base64-encoded
    pub fn digest_base64(&self, data: &[u8]) -> Result<String> {
        let digest = self.digest(data)?;
        encoding::to_base64(&digest)
    }

    /// Computes the digest of a string's UTF-8 bytes, base64-encoded
    pub fn digest_str_base64(&self, input: &str) -> Result<String> {
        let digest = self.digest_str(input)?;
        encoding::to_base64(&digest)
    }
}

#[cfg(test)]
mod tests;
