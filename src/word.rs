//! Reduction of host integers to the 16-bit word the checksum covers.
//!
//! Integers wider than 16 bits are not rejected: only their low 16 bits
//! (two's complement for negative values) are used.

use crate::crc::crc8;
use crate::error::Error;

/// An integer that can be reduced to a 16-bit word.
pub trait Word {
    /// The low 16 bits of `self`.
    fn low_word(self) -> u16;
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Word for $ty {
                #[inline]
                fn low_word(self) -> u16 {
                    self as u16
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Word for bool {
    #[inline]
    fn low_word(self) -> u16 {
        u16::from(self)
    }
}

/// CRC of the low 16 bits of any integer.
///
/// ```
/// use crc8_d5::{crc8, crc8_of};
///
/// assert_eq!(crc8_of(0x1_1234u32), crc8(0x1234));
/// assert_eq!(crc8_of(-1i64), crc8(0xFFFF));
/// ```
#[inline]
#[must_use]
pub fn crc8_of<T: Word>(x: T) -> u8 {
    crc8(x.low_word())
}

/// Parse an integer literal and reduce it to its low 16 bits.
///
/// Accepts an optional sign, then decimal digits or a `0x`, `0o` or `0b`
/// prefixed literal. `_` may separate digits. Surrounding whitespace is
/// ignored.
pub fn parse_word(text: &str) -> Result<u16, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_argument(text, "empty input"));
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() {
        return Err(Error::invalid_argument(text, "missing digits"));
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(Error::invalid_argument(text, "misplaced digit separator"));
    }
    if !digits.chars().all(|c| c == '_' || c.is_digit(radix)) {
        return Err(Error::invalid_argument(text, "invalid digit"));
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    let magnitude = u128::from_str_radix(&cleaned, radix)
        .map_err(|_| Error::invalid_argument(text, "integer too large"))?;

    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    Ok(value.low_word())
}

fn split_radix(s: &str) -> (u32, &str) {
    let prefix = s.get(..2).map(str::to_ascii_lowercase);
    match prefix.as_deref() {
        Some("0x") => (16, &s[2..]),
        Some("0o") => (8, &s[2..]),
        Some("0b") => (2, &s[2..]),
        _ => (10, s),
    }
}

/// CRC of an integer given as text. Fails on anything that is not an integer.
pub fn crc8_str(text: &str) -> Result<u8, Error> {
    let word = parse_word(text)?;
    Ok(crc8(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_integers_use_low_bits() {
        assert_eq!(crc8_of(0x1_0000u32), crc8(0x0000));
        assert_eq!(crc8_of(0xDEAD_BEEFu64), crc8(0xBEEF));
        assert_eq!(crc8_of(u128::MAX), crc8(0xFFFF));
        assert_eq!(crc8_of(0x12u8), crc8(0x0012));
    }

    #[test]
    fn negative_integers_use_twos_complement() {
        assert_eq!(crc8_of(-1i32), 0xF9);
        assert_eq!(crc8_of(-2i16), crc8(0xFFFE));
        assert_eq!(crc8_of(i64::MIN), crc8(0x0000));
        assert_eq!(crc8_of(-65536isize), crc8(0x0000));
    }

    #[test]
    fn booleans_are_zero_and_one() {
        assert_eq!(crc8_of(false), crc8(0));
        assert_eq!(crc8_of(true), crc8(1));
    }

    #[test]
    fn parses_literals() {
        assert_eq!(parse_word("4660"), Ok(0x1234));
        assert_eq!(parse_word("0x1234"), Ok(0x1234));
        assert_eq!(parse_word("0XbeEF"), Ok(0xBEEF));
        assert_eq!(parse_word("0o777"), Ok(0o777));
        assert_eq!(parse_word("0b1010_0101"), Ok(0xA5));
        assert_eq!(parse_word("  +65_535 \n"), Ok(0xFFFF));
        assert_eq!(parse_word("0"), Ok(0));
    }

    #[test]
    fn parses_and_truncates_out_of_range() {
        assert_eq!(parse_word("65536"), Ok(0));
        assert_eq!(parse_word("-1"), Ok(0xFFFF));
        assert_eq!(parse_word("-0x1_0001"), Ok(0xFFFF));
        assert_eq!(parse_word("0xFFFF_FFFF_FFFF_FFFF_FFFF_FFFF_FFFF_1234"), Ok(0x1234));
    }

    #[test]
    fn rejects_non_integers() {
        for text in [
            "", "   ", "-", "+", "0x", "abc", "12.5", "1e3", "0x12G", "--1", "+-1", "_1", "1_",
            "1__0", "0x_1", "0b102", "1 2",
        ] {
            assert!(
                matches!(parse_word(text), Err(Error::InvalidArgument { .. })),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn rejects_overflow_past_128_bits() {
        let err = parse_word("0x1_0000_0000_0000_0000_0000_0000_0000_0000").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                input: "0x1_0000_0000_0000_0000_0000_0000_0000_0000".to_owned(),
                reason: "integer too large",
            }
        );
    }

    #[test]
    fn crc8_str_propagates() {
        assert_eq!(crc8_str("0xFFFF"), Ok(0xF9));
        assert_eq!(crc8_str("0"), Ok(0x78));
        assert!(crc8_str("ff").is_err());
    }
}
