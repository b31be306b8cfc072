//! Conversions between text representations and raw bytes
//!
//! UTF-8 and base64 are the general-purpose codecs used throughout the
//! crate. The binary/octal/hexadecimal forms are a display format kept for
//! compatibility: one space-separated group per character, each group the
//! character's code point rendered in the target radix with no zero padding.
//! That format has single-code-point granularity and is not a general
//! serialization format.
//!
//! Malformed reverse-conversion input always yields an error, never partial
//! output.

use crate::error::{validate, Error, Result};
use rand::{rngs::OsRng, RngCore};

/// Converts a string to its UTF-8 bytes
pub fn str_to_bytes(input: &str) -> Result<Vec<u8>> {
    validate::not_empty_str("input", input)?;
    Ok(input.as_bytes().to_vec())
}

/// Converts UTF-8 bytes back to a string
pub fn bytes_to_str(data: &[u8]) -> Result<String> {
    validate::not_empty("data", data)?;
    String::from_utf8(data.to_vec()).map_err(|_| Error::InvalidFormat("UTF-8"))
}

/// Encodes bytes as base64 (standard alphabet, padded)
pub fn to_base64(data: &[u8]) -> Result<String> {
    validate::not_empty("data", data)?;
    Ok(base64::encode(data))
}

/// Decodes a base64 string back to bytes
pub fn from_base64(encoded: &str) -> Result<Vec<u8>> {
    validate::not_empty_str("encoded", encoded)?;
    base64::decode(encoded).map_err(|_| Error::InvalidFormat("base64"))
}

/// Generates cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    validate::parameter(len > 0, "len", "must be greater than 0")?;
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    Ok(bytes)
}

/// Renders each character of `input` as a binary group
pub fn to_binary(input: &str) -> Result<String> {
    validate::not_empty_str("input", input)?;
    Ok(join_groups(input, |cp| format!("{cp:b}")))
}

/// Renders each character of `input` as an octal group
pub fn to_octal(input: &str) -> Result<String> {
    validate::not_empty_str("input", input)?;
    Ok(join_groups(input, |cp| format!("{cp:o}")))
}

/// Renders each character of `input` as a hexadecimal group
pub fn to_hexadecimal(input: &str) -> Result<String> {
    validate::not_empty_str("input", input)?;
    Ok(join_groups(input, |cp| format!("{cp:x}")))
}

/// Parses space-separated binary groups back into a string
pub fn from_binary(input: &str) -> Result<String> {
    parse_groups(input, 2, "binary")
}

/// Parses space-separated octal groups back into a string
pub fn from_octal(input: &str) -> Result<String> {
    parse_groups(input, 8, "octal")
}

/// Parses space-separated hexadecimal groups back into a string
pub fn from_hexadecimal(input: &str) -> Result<String> {
    parse_groups(input, 16, "hexadecimal")
}

/// Renders an integer in binary
pub fn int_to_binary(value: u64) -> String {
    format!("{value:b}")
}

/// Renders an integer in octal
pub fn int_to_octal(value: u64) -> String {
    format!("{value:o}")
}

/// Renders an integer in hexadecimal
pub fn int_to_hexadecimal(value: u64) -> String {
    format!("{value:x}")
}

fn join_groups(input: &str, render: impl Fn(u32) -> String) -> String {
    input
        .chars()
        .map(|c| render(c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_groups(input: &str, radix: u32, name: &'static str) -> Result<String> {
    validate::not_empty_str("input", input)?;
    let mut result = String::new();
    for group in input.split_whitespace() {
        let cp = u32::from_str_radix(group, radix).map_err(|_| Error::InvalidFormat(name))?;
        let c = char::from_u32(cp).ok_or(Error::InvalidFormat(name))?;
        result.push(c);
    }
    Ok(result)
}
