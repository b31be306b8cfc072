//! AES-256-CBC cipher with password-derived keys

use crate::error::{validate, Error, Result};
use crate::hash::HashAlgorithm;
use crate::kdf;
use crate::symmetric::SymmetricCipher;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use zeroize::Zeroizing;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256 key size in bytes
pub const AES_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_IV_SIZE: usize = 16;

// Fixed IV for the deterministic static-IV policy. Changing these bytes
// breaks decryption of all previously produced static-IV ciphertexts.
const STATIC_IV: [u8; AES_IV_SIZE] = [
    255, 126, 242, 239, 122, 156, 180, 151, 176, 121, 145, 143, 152, 254, 125, 156,
];

/// AES-256-CBC with PKCS#7 padding
///
/// Keys are derived from the password via SHA-256-salted PBKDF2, so the same
/// password always maps to the same 32-byte key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCipher;

impl AesCipher {
    pub fn new() -> Self {
        Self
    }

    fn derive_key(password: &str) -> Result<Zeroizing<Vec<u8>>> {
        let key = kdf::derive_key(password, HashAlgorithm::Sha256, kdf::DEFAULT_ITERATIONS)?;
        Ok(Zeroizing::new(key))
    }

    fn encrypt_raw(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let encryptor = Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| Error::OperationFailed("AES encryption"))?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
    }

    fn decrypt_raw(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let decryptor = Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| Error::OperationFailed("AES decryption"))?;
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| Error::OperationFailed("AES decryption"))
    }
}

impl SymmetricCipher for AesCipher {
    fn name(&self) -> &'static str {
        "AES-256-CBC"
    }

    fn key_size(&self) -> usize {
        AES_KEY_SIZE
    }

    fn iv_size(&self) -> usize {
        AES_IV_SIZE
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
        validate::iv_length("AES", iv.len(), AES_IV_SIZE)?;
        let key = Self::derive_key(password)?;
        Self::encrypt_raw(&key, iv, data)
    }

    fn decrypt_with_iv(&self, data: &[u8], password: &str, iv: &[u8]) -> Result<Vec<u8>> {
        validate::not_empty("data", data)?;
        validate::not_empty_str("password", password)?;
        validate::iv_length("AES", iv.len(), AES_IV_SIZE)?;
        let key = Self::derive_key(password)?;
        Self::decrypt_raw(&key, iv, data)
    }
}
