//! Signed 14-bit integer codec.
//!
//! A value `v` in `[-8192, 8191]` is translated to `t = v + 8192` and split
//! into a 7-bit low field and the remaining high bits. The high field is
//! shifted left by one so each wire byte carries at most 7 significant bits:
//!
//! ```text
//! t    = 00hh_hhhh_hlll_llll
//! wire = 0hhh_hhhh_0lll_llll
//! ```
//!
//! Neither wire byte can therefore collide with a command code (all >= 0x80).

use crate::error::ErrorKind;

pub const MIN_VALUE: i32 = -8192;
pub const MAX_VALUE: i32 = 8191;

/// Largest value a single parameter byte may carry.
pub const MAX_DATA_BYTE: u8 = 0x7F;

const TRANSLATION: i32 = 8192;
const LOW_ORDER_MASK: i32 = 0x7F;
const HIGH_ORDER_MASK: i32 = 0xFF80;

/// Encodes `value` to its 16-bit wire word.
pub fn encode_word(value: i32) -> Result<u16, ErrorKind> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(ErrorKind::Range { value, min: MIN_VALUE, max: MAX_VALUE });
    }

    let translated = value + TRANSLATION;
    let low = translated & LOW_ORDER_MASK;
    let high = translated & HIGH_ORDER_MASK;
    Ok(((high << 1) | low) as u16)
}

/// Encodes `value` as four uppercase, zero-padded hex digits.
///
/// ```
/// use penplot_wire::codec::encode;
/// assert_eq!(encode(0).unwrap(), "4000");
/// assert_eq!(encode(-8192).unwrap(), "0000");
/// assert_eq!(encode(8191).unwrap(), "7F7F");
/// ```
pub fn encode(value: i32) -> Result<String, ErrorKind> {
    encode_word(value).map(|word| format!("{word:04X}"))
}

/// Combines two already-parsed wire bytes into a signed value.
pub fn decode_bytes(hi: u8, lo: u8) -> Result<i32, ErrorKind> {
    for byte in [hi, lo] {
        if byte > MAX_DATA_BYTE {
            return Err(ErrorKind::Range {
                value: byte as i32,
                min: 0,
                max: MAX_DATA_BYTE as i32,
            });
        }
    }
    Ok(((hi as i32) << 7 | lo as i32) - TRANSLATION)
}

/// Decodes a high/low pair of hex byte tokens into a signed value.
///
/// Each token is one or two hex digits, optionally prefixed with `0x`.
///
/// ```
/// use penplot_wire::codec::decode;
/// assert_eq!(decode("40", "00").unwrap(), 0);
/// assert_eq!(decode("0x7F", "0x7F").unwrap(), 8191);
/// assert!(decode("80", "00").is_err());
/// ```
pub fn decode(hi: &str, lo: &str) -> Result<i32, ErrorKind> {
    decode_bytes(parse_hex_token(hi)?, parse_hex_token(lo)?)
}

/// Parses a single hex byte token such as `"7F"` or `"0x7f"`.
pub fn parse_hex_token(token: &str) -> Result<u8, ErrorKind> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    let malformed = || ErrorKind::MalformedHex { token: token.to_string() };
    if digits.is_empty() || digits.len() > 2 {
        return Err(malformed());
    }
    digits
        .bytes()
        .try_fold(0u8, |acc, b| hex_digit(b).map(|d| acc << 4 | d))
        .ok_or_else(malformed)
}

/// Parses exactly two hex digits as one byte. Signs and prefixes are rejected.
pub(crate) fn parse_hex_pair(pair: &[u8]) -> Option<u8> {
    match pair {
        [hi, lo] => Some(hex_digit(*hi)? << 4 | hex_digit(*lo)?),
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
