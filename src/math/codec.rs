//! Base-N digit strings <-> arbitrary-precision integers.
//!
//! Digits are `0-9` then `a-z` (case-insensitive), so bases `2..=36` are
//! supported. A single leading `+` or `-` sets the sign. Accumulation is the
//! plain positional rule `acc = acc * base + digit`; there are no grouping
//! separators and no locale handling.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::SolveError;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Validate a base before decoding.
pub fn check_base(base: i64) -> Result<u32, SolveError> {
    if (MIN_BASE as i64..=MAX_BASE as i64).contains(&base) {
        Ok(base as u32)
    } else {
        Err(SolveError::UnsupportedBase {
            base: base.to_string(),
        })
    }
}

/// Decode a signed digit string in `base`.
///
/// Surrounding whitespace is ignored. An empty string, or one holding only a
/// sign, is `InvalidInput`; any character outside the base's alphabet is
/// `InvalidDigit`.
pub fn decode(text: &str, base: u32) -> Result<BigInt, SolveError> {
    let base = check_base(base as i64)?;

    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        return Err(SolveError::invalid_input(format!(
            "empty digit string '{text}'"
        )));
    }

    let radix = BigInt::from(base);
    let mut acc = BigInt::zero();
    for ch in digits.chars() {
        let digit = digit_value(ch)
            .filter(|d| *d < base)
            .ok_or(SolveError::InvalidDigit { digit: ch, base })?;
        acc = acc * &radix + BigInt::from(digit);
    }

    Ok(if negative { -acc } else { acc })
}

/// Encode `value` in `base` using lowercase digits and a leading `-` for
/// negatives. Inverse of [`decode`] up to case and `+` normalisation.
pub fn encode(value: &BigInt, base: u32) -> Result<String, SolveError> {
    let base = check_base(base as i64)?;
    Ok(value.to_str_radix(base))
}

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn decodes_hex_with_sign() {
        assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
        assert_eq!(decode("-ff", 16).unwrap(), BigInt::from(-255));
        assert_eq!(decode("+FF", 16).unwrap(), BigInt::from(255));
    }

    #[test]
    fn rejects_digit_outside_base() {
        let err = decode("g", 16).unwrap_err();
        assert_eq!(err, SolveError::InvalidDigit { digit: 'g', base: 16 });

        let err = decode("102", 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDigit);
    }

    #[test]
    fn rejects_empty_and_bare_sign() {
        assert_eq!(decode("", 10).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(decode("  ", 10).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(decode("-", 10).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_grouping_separators() {
        assert_eq!(decode("1_000", 10).unwrap_err().kind(), ErrorKind::InvalidDigit);
        assert_eq!(decode("1,000", 10).unwrap_err().kind(), ErrorKind::InvalidDigit);
    }

    #[test]
    fn base_bounds() {
        assert!(check_base(2).is_ok());
        assert!(check_base(36).is_ok());
        assert_eq!(check_base(1).unwrap_err().kind(), ErrorKind::UnsupportedBase);
        assert_eq!(check_base(37).unwrap_err().kind(), ErrorKind::UnsupportedBase);
        assert_eq!(decode("1", 40).unwrap_err().kind(), ErrorKind::UnsupportedBase);
    }

    #[test]
    fn decodes_beyond_machine_width() {
        // 2^128 in base 2: a one followed by 128 zeros.
        let text = format!("1{}", "0".repeat(128));
        let value = decode(&text, 2).unwrap();
        assert_eq!(value, BigInt::from(1u8) << 128);
        assert_eq!(encode(&value, 2).unwrap(), text);
    }

    #[test]
    fn base36_alphabet() {
        assert_eq!(decode("z", 36).unwrap(), BigInt::from(35));
        assert_eq!(decode("10", 36).unwrap(), BigInt::from(36));
        assert_eq!(encode(&BigInt::from(-71), 36).unwrap(), "-1z");
    }
}
