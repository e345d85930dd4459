//! Base62 integers
//!
//! Digits are `0-9`, then `A-Z`, then `a-z`, most significant first.

use crate::error::{CodecError, CodecResult};

/// Digit alphabet in value order
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Render `value` in base62
#[must_use]
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        // remainder < 62
        #[allow(clippy::cast_possible_truncation)]
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Parse a base62 string
///
/// # Errors
/// Returns [`CodecError::InvalidBase62`] for empty input, characters outside
/// the alphabet, or values that do not fit in a `u64`
pub fn decode(input: &str) -> CodecResult<u64> {
    if input.is_empty() {
        return Err(CodecError::invalid_base62(input, "empty input"));
    }
    input.bytes().try_fold(0u64, |acc, byte| {
        let digit = digit_value(byte)
            .ok_or_else(|| CodecError::invalid_base62(input, "character outside alphabet"))?;
        acc.checked_mul(BASE)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or_else(|| CodecError::invalid_base62(input, "value overflows u64"))
    })
}

fn digit_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}
