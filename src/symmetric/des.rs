//! DES-CBC cipher with password-derived keys
//!
//! DES is kept for compatibility with legacy data only; its 56-bit effective
//! key strength is inadequate for new designs. Prefer [`crate::AesCipher`].

use crate::error::{validate, Error, Result};
use crate::kdf;
use crate::symmetric::SymmetricCipher;
use des::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use des::Des;
use zeroize::Zeroizing;

type DesCbcEnc = cbc::Encryptor<Des>;
type DesCbcDec = cbc::Decryptor<Des>;

/// DES key size in bytes
pub const DES_KEY_SIZE: usize = 8;

/// DES block size in bytes
pub const DES_IV_SIZE: usize = 8;

// Fixed IV for the deterministic static-IV policy.
const STATIC_IV: [u8; DES_IV_SIZE] = [144, 121, 235, 22, 85, 91, 182, 197];

/// DES-CBC with PKCS#7 padding
#[derive(Debug, Clone, Copy, Default)]
pub struct DesCipher;

impl DesCipher {
    pub fn new() -> Self {
        Self
    }

    fn derive_key(password: &str) -> Result<Zeroizing<Vec<u8>>> {
        let key = kdf::derive_key_sized(password, DES_KEY_SIZE, kdf::DEFAULT_ITERATIONS)?;
        Ok(Zeroizing::new(key))
    }

    fn encrypt_raw(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let encryptor = DesCbcEnc::new_from_slices(key, iv)
            .map_err(|_| Error::OperationFailed("DES encryption"))?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
    }

    fn decrypt_raw(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let decryptor = DesCbcDec::new_from_slices(key, iv)
            .map_err(|_| Error::OperationFailed("DES decryption"))?;
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| Error::OperationFailed("DES decryption"))
    }
}

impl SymmetricCipher for DesCipher {
    fn name(&self) -> &'static str {
        "DES-CBC"
    }

    fn key_size(&self) -> usize {
        DES_KEY_SIZE
    }

    fn iv_size(&self) -> usize {
        DES_IV_SIZE
    }

    fn encrypt(&self, data: &[u8], password: &str) -> Result<Vec<u8>> {
        validate::not_empty("data", data)?;
        validate::not_empty_str("password", password)?;
        let key = Self::derive_key(password)?;
        Self::encrypt_raw(&key, &STATIC_IV, data)
    }

    fn decrypt(&self, data: &[u8], password: &str) -> Result<Vec<u8>> {
        validate::not_empty("data", data)?;
        validate::not_empty_str("password", password)?;
        let key = Self::derive_key(password)?;
        Self::decrypt_raw(&key, &STATIC_IV, data)
    }

    fn encrypt_with_generated_iv(
        &self,
        data: &[u8],
        password: &str,
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        validate::not_empty("data", data)?;
        validate::not_empty_str("password", password)?;
        let key = Self::derive_key(password)?;
        let iv = self.generate_iv();
        let ciphertext = Self::encrypt_raw(&key, &iv, data)?;
        Ok((ciphertext, iv))
    }

    fn encrypt_with_iv(&self, data: &[u8], password: &str, iv: &[u8]) -> Result<Vec<u8>> {
        validate::not_empty("data", data)?;
        validate::not_empty_str("password", password)?;
        validate::iv_length("DES", iv.len(), DES_IV_SIZE)?;
        let key = Self::derive_key(password)?;
        Self::encrypt_raw(&key, iv, data)
    }

    fn decrypt_with_iv(&self, data: &[u8], password: &str, iv: &[u8]) -> Result<Vec<u8>> {
        validate::not_empty("data", data)?;
        validate::not_empty_str("password", password)?;
        validate::iv_length("DES", iv.len(), DES_IV_SIZE)?;
        let key = Self::derive_key(password)?;
        Self::decrypt_raw(&key, iv, data)
    }
}
