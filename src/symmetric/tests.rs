use super::*;
use crate::error::Error;

fn ciphers() -> Vec<Box<dyn SymmetricCipher>> {
    vec![Box::new(AesCipher::new()), Box::new(DesCipher::new())]
}

#[test]
fn static_iv_round_trip() {
    for cipher in ciphers() {
        let data = b"block cipher round trip payload";
        let ciphertext = cipher.encrypt(data, "hunter2").unwrap();
        assert_ne!(&ciphertext, data);
        assert_eq!(cipher.decrypt(&ciphertext, "hunter2").unwrap(), data);
    }
}

#[test]
fn static_iv_is_deterministic() {
    for cipher in ciphers() {
        let a = cipher.encrypt(b"same plaintext", "pw").unwrap();
        let b = cipher.encrypt(b"same plaintext", "pw").unwrap();
        assert_eq!(a, b, "{} static-IV output must be deterministic", cipher.name());
    }
}

#[test]
fn generated_iv_round_trip() {
    for cipher in ciphers() {
        let data = b"self-generated IV payload";
        let (ciphertext, iv) = cipher.encrypt_with_generated_iv(data, "pw").unwrap();
        assert_eq!(iv.len(), cipher.iv_size());
        assert_eq!(cipher.decrypt_with_iv(&ciphertext, "pw", &iv).unwrap(), data);
    }
}

#[test]
fn generated_ivs_differ_between_calls() {
    let cipher = AesCipher::new();
    let (_, iv1) = cipher.encrypt_with_generated_iv(b"data", "pw").unwrap();
    let (_, iv2) = cipher.encrypt_with_generated_iv(b"data", "pw").unwrap();
    assert_ne!(iv1, iv2);
}

#[test]
fn caller_supplied_iv_round_trip() {
    for cipher in ciphers() {
        let iv = cipher.generate_iv();
        let ciphertext = cipher.encrypt_with_iv(b"payload", "pw", &iv).unwrap();
        assert_eq!(
            cipher.decrypt_with_iv(&ciphertext, "pw", &iv).unwrap(),
            b"payload"
        );
    }
}

#[test]
fn wrong_iv_size_is_rejected_before_any_work() {
    let aes = AesCipher::new();
    assert!(matches!(
        aes.encrypt_with_iv(b"data", "pw", &[0u8; 8]),
        Err(Error::InvalidIvSize { algorithm: "AES", needed: 16, got: 8 })
    ));
    let des = DesCipher::new();
    assert!(matches!(
        des.decrypt_with_iv(b"data", "pw", &[0u8; 16]),
        Err(Error::InvalidIvSize { algorithm: "DES", needed: 8, got: 16 })
    ));
}

#[test]
fn empty_inputs_are_rejected() {
    for cipher in ciphers() {
        assert_eq!(
            cipher.encrypt(&[], "pw"),
            Err(Error::InvalidArgument("data"))
        );
        assert_eq!(
            cipher.encrypt(b"data", ""),
            Err(Error::InvalidArgument("password"))
        );
        assert_eq!(
            cipher.decrypt(&[], "pw"),
            Err(Error::InvalidArgument("data"))
        );
    }
}

#[test]
fn wrong_password_does_not_yield_the_plaintext() {
    for cipher in ciphers() {
        let data = b"sixteen byte blk";
        let ciphertext = cipher.encrypt(data, "right password").unwrap();
        // Either an operation failure or garbage, never the original bytes.
        let outcome = cipher.decrypt(&ciphertext, "wrong password");
        assert_ne!(outcome.ok().as_deref(), Some(&data[..]));
    }
}

#[test]
fn corrupted_ciphertext_is_an_operation_failure_or_garbage() {
    let cipher = AesCipher::new();
    let mut ciphertext = cipher.encrypt(b"some payload bytes", "pw").unwrap();
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x5A;
    let outcome = cipher.decrypt(&ciphertext, "pw");
    assert_ne!(outcome.ok().as_deref(), Some(&b"some payload bytes"[..]));
}

#[test]
fn text_wrappers_round_trip_through_base64() {
    for cipher in ciphers() {
        let encrypted = cipher.encrypt_text("héllo text wrapper", "pw").unwrap();
        // wrapper output must be valid base64
        assert!(crate::encoding::from_base64(&encrypted).is_ok());
        assert_eq!(
            cipher.decrypt_text(&encrypted, "pw").unwrap(),
            "héllo text wrapper"
        );
    }
}

#[test]
fn suite_descriptors_are_fixed() {
    let aes = AesCipher::new();
    assert_eq!(aes.name(), "AES-256-CBC");
    assert_eq!(aes.key_size(), 32);
    assert_eq!(aes.iv_size(), 16);
    let des = DesCipher::new();
    assert_eq!(des.name(), "DES-CBC");
    assert_eq!(des.key_size(), 8);
    assert_eq!(des.iv_size(), 8);
}
