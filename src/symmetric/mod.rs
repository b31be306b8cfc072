//! Password-based block-cipher encryption
//!
//! This module defines the cipher strategy seam and its two concrete
//! algorithms, [`AesCipher`] and [`DesCipher`]. Every operation derives its
//! key from the supplied password (see [`crate::kdf`]), so callers never
//! handle raw key bytes.
//!
//! Three IV policies are available for a single call:
//!
//! - **static default**: `encrypt`/`decrypt` use a fixed per-algorithm IV
//!   constant. Output is fully deterministic for a given password, which is
//!   what key-only encrypt/decrypt ergonomics require — and it means two
//!   encryptions of the same plaintext under the same password produce the
//!   same ciphertext. Do not use this policy where that equality leak
//!   matters.
//! - **self-generated**: `encrypt_with_generated_iv` draws a fresh IV from
//!   the OS CSPRNG and returns it next to the ciphertext for later
//!   decryption.
//! - **caller-supplied**: `encrypt_with_iv`/`decrypt_with_iv` validate the
//!   IV length against the algorithm's block size and fail with
//!   `InvalidIvSize` otherwise.

use crate::encoding;
use crate::error::Result;
use rand::{rngs::OsRng, RngCore};

pub mod aes;
pub mod des;

pub use aes::AesCipher;
pub use des::DesCipher;

/// Common interface for password-based block ciphers
pub trait SymmetricCipher {
    /// Algorithm name
    fn name(&self) -> &'static str;

    /// Derived key size in bytes
    fn key_size(&self) -> usize;

    /// IV size in bytes (the cipher's block size)
    fn iv_size(&self) -> usize;

    /// Encrypts with the algorithm's static default IV
    fn encrypt(&self, data: &[u8], password: &str) -> Result<Vec<u8>>;

    /// Decrypts data produced with the static default IV
    fn decrypt(&self, data: &[u8], password: &str) -> Result<Vec<u8>>;

    /// Encrypts with a freshly generated IV, returning `(ciphertext, iv)`
    fn encrypt_with_generated_iv(&self, data: &[u8], password: &str)
        -> Result<(Vec<u8>, Vec<u8>)>;

    /// Encrypts with a caller-supplied IV
    fn encrypt_with_iv(&self, data: &[u8], password: &str, iv: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts with a caller-supplied IV
    fn decrypt_with_iv(&self, data: &[u8], password: &str, iv: &[u8]) -> Result<Vec<u8>>;

    /// Generates a random IV of the algorithm's block size
    fn generate_iv(&self) -> Vec<u8> {
        let mut iv = vec![0u8; self.iv_size()];
        OsRng.fill_bytes(&mut iv);
        iv
    }

    /// Encrypts a string to base64 ciphertext using the static default IV
    fn encrypt_text(&self, plaintext: &str, password: &str) -> Result<String> {
        let bytes = encoding::str_to_bytes(plaintext)?;
        let ciphertext = self.encrypt(&bytes, password)?;
        encoding::to_base64(&ciphertext)
    }

    /// Decrypts base64 ciphertext back to a string
    fn decrypt_text(&self, ciphertext: &str, password: &str) -> Result<String> {
        let bytes = encoding::from_base64(ciphertext)?;
        let plaintext = self.decrypt(&bytes, password)?;
        encoding::bytes_to_str(&plaintext)
    }
}

#[cfg(test)]
mod tests;
