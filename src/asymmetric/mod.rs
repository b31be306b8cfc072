//! RSA public-key encryption over serialized key material
//!
//! Key pairs are generated per session and exchanged as PEM text: SPKI for
//! the public half, PKCS#8 for the private half. Encryption always uses OAEP
//! padding (SHA-1 digest, the classic RSAES-OAEP parameterization), never
//! textbook RSA. The maximum payload for one encryption call is bounded by
//! the key size: `key_size/8 - 42` bytes.

use crate::error::{validate, Error, Result};
use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use std::fmt;
use zeroize::Zeroize;

/// Smallest legal RSA key size in bits
pub const MIN_KEY_SIZE: usize = 384;

/// Largest legal RSA key size in bits
pub const MAX_KEY_SIZE: usize = 16384;

/// A generated RSA key pair, serialized as PEM
///
/// The two halves are functionally paired: data encrypted with the public
/// half is only recoverable with the matching private half. The private PEM
/// is wiped from memory on drop.
pub struct SessionKeyPair {
    public_key_pem: String,
    private_key_pem: String,
}

impl SessionKeyPair {
    /// Public half, SPKI PEM
    pub fn public_key_pem(&self) -> &str {
        &self.public_key_pem
    }

    /// Private half, PKCS#8 PEM
    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }
}

impl Drop for SessionKeyPair {
    fn drop(&mut self) {
        self.private_key_pem.zeroize();
    }
}

impl fmt::Debug for SessionKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeyPair")
            .field("public_key_pem", &self.public_key_pem)
            .field("private_key_pem", &"[REDACTED]")
            .finish()
    }
}

/// Generates a fresh RSA key pair
pub fn generate_key_pair(key_size: usize) -> Result<SessionKeyPair> {
    validate_key_size(key_size)?;
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, key_size)
        .map_err(|_| Error::OperationFailed("RSA key generation"))?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_key_pem = private_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|_| Error::OperationFailed("RSA private key serialization"))?;
    let public_key_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|_| Error::OperationFailed("RSA public key serialization"))?;

    Ok(SessionKeyPair {
        public_key_pem,
        private_key_pem: private_key_pem.to_string(),
    })
}

/// Encrypts data with a public key using RSA-OAEP
pub fn encrypt(data: &[u8], public_key_pem: &str, key_size: usize) -> Result<Vec<u8>> {
    validate::not_empty("data", data)?;
    validate::not_empty_str("public_key_pem", public_key_pem)?;
    validate_key_size(key_size)?;

    let public_key = RsaPublicKey::from_public_key_pem(public_key_pem)
        .map_err(|_| Error::OperationFailed("RSA public key parsing"))?;
    let mut rng = OsRng;
    public_key
        .encrypt(&mut rng, Oaep::new::<Sha1>(), data)
        .map_err(|_| Error::OperationFailed("RSA encryption"))
}

/// Decrypts data with the matching private key
pub fn decrypt(data: &[u8], private_key_pem: &str, key_size: usize) -> Result<Vec<u8>> {
    validate::not_empty("data", data)?;
    validate::not_empty_str("private_key_pem", private_key_pem)?;
    validate_key_size(key_size)?;

    let private_key = RsaPrivateKey::from_pkcs8_pem(private_key_pem)
        .map_err(|_| Error::OperationFailed("RSA private key parsing"))?;
    private_key
        .decrypt(Oaep::new::<Sha1>(), data)
        .map_err(|_| Error::OperationFailed("RSA decryption"))
}

/// Checks a key size against the legal RSA domain
pub fn validate_key_size(key_size: usize) -> Result<()> {
    if key_size < MIN_KEY_SIZE || key_size > MAX_KEY_SIZE || key_size % 8 != 0 {
        return Err(Error::InvalidKeySize {
            got: key_size,
            min: MIN_KEY_SIZE,
            max: MAX_KEY_SIZE,
        });
    }
    Ok(())
}
