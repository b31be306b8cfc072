use super::*;
use crate::error::Error;

/// FIPS 180-2 test vector for SHA-256 of "abc"
#[test]
fn sha256_known_answer() {
    let digest = HashAlgorithm::Sha256.digest(b"abc").unwrap();
    assert_eq!(
        digest,
        hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
            .unwrap()
    );
}

/// RFC 1321 test vector for MD5 of "abc"
#[test]
fn md5_known_answer() {
    let digest = HashAlgorithm::Md5.digest(b"abc").unwrap();
    assert_eq!(digest, hex::decode("900150983cd24fb0d6963f7d28e17f72").unwrap());
}

#[test]
fn output_sizes_are_fixed_per_algorithm() {
    let cases = [
        (HashAlgorithm::Md5, 16),
        (HashAlgorithm::Sha1, 20),
        (HashAlgorithm::Sha256, 32),
        (HashAlgorithm::Sha384, 48),
        (HashAlgorithm::Sha512, 64),
    ];
    for (algorithm, size) in cases {
        assert_eq!(algorithm.output_size(), size);
        assert_eq!(algorithm.digest(b"x").unwrap().len(), size);
        assert_eq!(algorithm.digest(&[0u8; 4096]).unwrap().len(), size);
    }
}

#[test]
fn digest_is_deterministic() {
    let a = HashAlgorithm::Sha512.digest(b"same input").unwrap();
    let b = HashAlgorithm::Sha512.digest(b"same input").unwrap();
    assert_eq!(a, b);
}

#[test]
fn string_input_routes_through_utf8() {
    let from_str = HashAlgorithm::Sha256.digest_str("abc").unwrap();
    let from_bytes = HashAlgorithm::Sha256.digest(b"abc").unwrap();
    assert_eq!(from_str, from_bytes);
}

#[test]
fn base64_digest_matches_raw_digest() {
    let raw = HashAlgorithm::Sha1.digest(b"abc").unwrap();
    let encoded = HashAlgorithm::Sha1.digest_base64(b"abc").unwrap();
    assert_eq!(encoded, base64::encode(&raw));
    assert_eq!(
        HashAlgorithm::Sha1.digest_str_base64("abc").unwrap(),
        encoded
    );
}

#[test]
fn empty_input_is_a_precondition_failure() {
    assert_eq!(
        HashAlgorithm::Sha256.digest(&[]),
        Err(Error::InvalidArgument("data"))
    );
    assert_eq!(
        HashAlgorithm::Sha256.digest_str(""),
        Err(Error::InvalidArgument("input"))
    );
}

#[test]
fn default_algorithm_is_sha256() {
    assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
}
