//! Password-based key derivation
//!
//! Turns an arbitrary passphrase into fixed-length key material: the salt is
//! the digest of the passphrase itself, and the stretched output comes from
//! PBKDF2-HMAC-SHA256 over `(passphrase, salt, iterations)`.
//!
//! Because the salt is derived from the passphrase, the output is
//! deterministic: the same passphrase always yields the same bytes. That is
//! the point — it derives a *key* from a password, so two parties holding the
//! password reach the same key without exchanging a salt. It also means this
//! function is not a stored-password hashing scheme; password storage needs
//! an independently stored random salt, which this derivation does not have.

use crate::error::{validate, Result};
use crate::hash::HashAlgorithm;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

/// Iteration floor for the stretching function
pub const MIN_ITERATIONS: u32 = 5000;

/// Default iteration count used by the symmetric ciphers
pub const DEFAULT_ITERATIONS: u32 = 5000;

/// Smallest allowed output size in bytes
pub const MIN_OUTPUT_SIZE: usize = 8;

/// Digest used to derive the salt when no algorithm is selected
pub const DEFAULT_SALT_DIGEST: HashAlgorithm = HashAlgorithm::Sha512;

/// Derives key material sized by the digest algorithm's output
///
/// The salt is `algorithm.digest(passphrase)` and the result is the first
/// `algorithm.output_size()` bytes of the PBKDF2 stream.
pub fn derive_key(
    passphrase: &str,
    algorithm: HashAlgorithm,
    iterations: u32,
) -> Result<Vec<u8>> {
    validate::not_empty_str("passphrase", passphrase)?;
    validate::parameter(
        iterations >= MIN_ITERATIONS,
        "iterations",
        "below the minimum of 5000",
    )?;
    let salt = algorithm.digest_str(passphrase)?;
    Ok(stretch(passphrase, &salt, iterations, algorithm.output_size()))
}

/// Derives key material of an explicit size
///
/// The salt digest is fixed to SHA-512; only the output length varies.
pub fn derive_key_sized(passphrase: &str, output_size: usize, iterations: u32) -> Result<Vec<u8>> {
    validate::not_empty_str("passphrase", passphrase)?;
    validate::parameter(
        output_size >= MIN_OUTPUT_SIZE,
        "output_size",
        "below the minimum of 8 bytes",
    )?;
    validate::parameter(
        iterations >= MIN_ITERATIONS,
        "iterations",
        "below the minimum of 5000",
    )?;
    let salt = DEFAULT_SALT_DIGEST.digest_str(passphrase)?;
    Ok(stretch(passphrase, &salt, iterations, output_size))
}

fn stretch(passphrase: &str, salt: &[u8], iterations: u32, output_size: usize) -> Vec<u8> {
    let mut key = vec![0u8; output_size];
    // pbkdf2 0.11 returns () when successful
    let _: () = pbkdf2::<Hmac<Sha256>>(passphrase.as_bytes(), salt, iterations, &mut key);
    key
}
