//! RSA digital signatures
//!
//! Signing digests the data with the selected algorithm and signs the digest
//! under PKCS#1 v1.5. Verification recomputes the digest and checks the
//! signature against the public key; it must use the digest algorithm chosen
//! at signing time.
//!
//! Verification failure is a boolean outcome, not an error path: tampered
//! data, a mangled signature, a mismatched key, even unparsable key material
//! all come back as `Ok(false)`. Only empty-input precondition violations
//! return an error.

use crate::error::{validate, Error, Result};
use crate::hash::HashAlgorithm;
use md5::Md5;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

/// Signs data with an RSA private key
pub fn sign(data: &[u8], algorithm: HashAlgorithm, private_key_pem: &str) -> Result<Vec<u8>> {
    validate::not_empty("data", data)?;
    validate::not_empty_str("private_key_pem", private_key_pem)?;

    let digest = algorithm.digest(data)?;
    let private_key = RsaPrivateKey::from_pkcs8_pem(private_key_pem)
        .map_err(|_| Error::OperationFailed("RSA private key parsing"))?;
    private_key
        .sign(scheme(algorithm), &digest)
        .map_err(|_| Error::OperationFailed("RSA signing"))
}

/// Verifies a signature with an RSA public key
pub fn verify(
    data: &[u8],
    signature: &[u8],
    algorithm: HashAlgorithm,
    public_key_pem: &str,
) -> Result<bool> {
    validate::not_empty("data", data)?;
    validate::not_empty("signature", signature)?;
    validate::not_empty_str("public_key_pem", public_key_pem)?;

    let digest = algorithm.digest(data)?;
    let public_key = match RsaPublicKey::from_public_key_pem(public_key_pem) {
        Ok(key) => key,
        Err(_) => return Ok(false),
    };
    Ok(public_key
        .verify(scheme(algorithm), &digest, signature)
        .is_ok())
}

fn scheme(algorithm: HashAlgorithm) -> Pkcs1v15Sign {
    match algorithm {
        HashAlgorithm::Md5 => Pkcs1v15Sign::new::<Md5>(),
        HashAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}
