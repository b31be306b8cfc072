//! # cryptkit
//!
//! A helper layer of small, composable cryptographic building blocks:
//! password-based key derivation, block-cipher encryption with explicit IV
//! policies, pluggable hashing, RSA encryption and signatures, and
//! constant-time byte comparison. The primitives themselves come from
//! battle-tested RustCrypto crates; this crate supplies the key management,
//! validation, and error discipline around them.
//!
//! Every operation is synchronous, stateless, and scoped to its call: keys,
//! IVs, digests, and signatures are created by one call and returned to the
//! caller, never cached. Precondition violations (empty inputs, out-of-range
//! sizes) fail fast with a typed error before any cryptographic work;
//! failures inside a primitive surface as a single operation-failure variant
//! that deliberately does not reveal the cause.
//!
//! ## Usage
//!
//! ```
//! use cryptkit::{AesCipher, SymmetricCipher};
//!
//! fn example() -> cryptkit::Result<()> {
//!     let cipher = AesCipher::new();
//!     let (ciphertext, iv) = cipher.encrypt_with_generated_iv(b"secret data", "password")?;
//!     let plaintext = cipher.decrypt_with_iv(&ciphertext, "password", &iv)?;
//!     assert_eq!(plaintext, b"secret data");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod asymmetric;
pub mod compare;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod sign;
pub mod symmetric;

// Re-export main types for convenience
pub use asymmetric::SessionKeyPair;
pub use compare::{equal_by_digest, equal_by_digest_with, equal_bytes};
pub use error::{Error, Result};
pub use hash::HashAlgorithm;
pub use kdf::{derive_key, derive_key_sized};
pub use symmetric::{AesCipher, DesCipher, SymmetricCipher};
