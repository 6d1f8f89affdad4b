//! Ordered digit-value <-> character tables.
//!
//! Standard library notations stop at base 36; an `Alphabet` defines a
//! positional notation of any size from its character list, ASCII ordered
//! or not.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::convert::convert_base;
use crate::error::{RadixError, Result};
use crate::value::Digit;

/// Decimal notation.
pub const BASE10: &str = "0123456789";
/// Duodecimal notation with the X/E transdecimal digits.
pub const BASE12: &str = "0123456789XE";
/// Hexadecimal notation.
pub const BASE16: &str = "0123456789ABCDEF";
/// Alphanumeric notation, digits then uppercase.
pub const BASE36: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Sexagesimal notation, digits, lowercase, then uppercase through X.
pub const BASE60: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWX";
/// Full alphanumeric notation, digits, lowercase, then uppercase.
pub const BASE62: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default digit ordering for integer bases: `0-9`, `A-Z`, `a-z`.
const STANDARD: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered, de-duplicated table mapping digit values to display
/// characters. The table's length is the base. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    chars: Vec<char>,
    values: HashMap<char, u32>,
}

impl Alphabet {
    /// Build an alphabet from an explicit ordered character list.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.len() < 2 {
            return Err(RadixError::InvalidBase(format!(
                "alphabet needs at least 2 characters, got {}",
                chars.len()
            )));
        }
        let mut values = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if values.insert(c, i as u32).is_some() {
                return Err(RadixError::InvalidBase(format!(
                    "duplicate character '{}' in alphabet",
                    c
                )));
            }
        }
        Ok(Self { chars, values })
    }

    /// The default alphabet of size `n`: `0-9`, `A-Z`, `a-z` truncated.
    pub fn standard(n: u32) -> Result<Self> {
        if !(2..=62).contains(&n) {
            return Err(RadixError::InvalidBase(format!(
                "standard notation covers bases 2 through 62, got {}",
                n
            )));
        }
        Self::new(STANDARD.chars().take(n as usize))
    }

    pub fn base(&self) -> u32 {
        self.chars.len() as u32
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Digit value of `c`, or a parse error if `c` is not in the table.
    pub fn value_of(&self, c: char) -> Result<u32> {
        self.values.get(&c).copied().ok_or_else(|| {
            RadixError::Parse(format!("character '{}' is not in the alphabet", c))
        })
    }

    /// Display character for digit value `v`, or a parse error if `v` is
    /// out of range for this base.
    pub fn char_of(&self, v: u32) -> Result<char> {
        self.chars.get(v as usize).copied().ok_or_else(|| {
            RadixError::Parse(format!("digit {} out of range for base {}", v, self.base()))
        })
    }

    /// Decode text into a digit array. The `-`, `.` and `/` markers pass
    /// through; every other character must be in the table.
    pub fn decode_text(&self, text: &str) -> Result<Vec<Digit>> {
        text.chars()
            .map(|c| match c {
                '-' => Ok(Digit::Minus),
                '.' => Ok(Digit::Point),
                '/' => Ok(Digit::Slash),
                _ => self.value_of(c).map(Digit::Value),
            })
            .collect()
    }

    /// Encode a byte string in this notation (bytes are base-256 digits).
    /// Empty input encodes to the empty string; leading zero bytes are not
    /// preserved (the codec carries a value, not a byte width). Input
    /// longer than 16 bytes exceeds the conversion accumulator and is a
    /// parse error.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<String> {
        if bytes.is_empty() {
            return Ok(String::new());
        }
        let digits: Vec<u32> = bytes.iter().map(|&b| b as u32).collect();
        Ok(convert_base(&digits, 256, self.base())?
            .into_iter()
            .map(|d| self.chars[d as usize])
            .collect())
    }

    /// Decode a string previously encoded in this notation back to bytes.
    /// The empty string decodes to no bytes; see [`encode_bytes`] for the
    /// leading-zero caveat.
    ///
    /// [`encode_bytes`]: Alphabet::encode_bytes
    pub fn decode_bytes(&self, encoded: &str) -> Result<Vec<u8>> {
        if encoded.is_empty() {
            return Ok(Vec::new());
        }
        let digits: Vec<u32> = encoded
            .chars()
            .map(|c| self.value_of(c))
            .collect::<Result<_>>()?;
        Ok(convert_base(&digits, self.base(), 256)?
            .into_iter()
            .map(|d| d as u8)
            .collect())
    }

    /// Re-notate `number`, written in the `from` alphabet, into this one.
    pub fn convert_from(&self, number: &str, from: &Alphabet) -> Result<String> {
        let digits: Vec<u32> = number
            .chars()
            .map(|c| from.value_of(c))
            .collect::<Result<_>>()?;
        Ok(convert_base(&digits, from.base(), self.base())?
            .into_iter()
            .map(|d| self.chars[d as usize])
            .collect())
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = RadixError;

    fn try_from(chars: Vec<char>) -> Result<Self> {
        Alphabet::new(chars)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(a: Alphabet) -> Self {
        a.chars
    }
}

/// Convert `number` between two standard notations, up to base 62.
pub fn convert(number: &str, from_base: u32, to_base: u32) -> Result<String> {
    let from = Alphabet::standard(from_base)?;
    let to = Alphabet::standard(to_base)?;
    to.convert_from(number, &from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_truncates_default_ordering() {
        let hex = Alphabet::standard(16).unwrap();
        assert_eq!(hex.chars().iter().collect::<String>(), BASE16);
        assert_eq!(hex.base(), 16);
    }

    #[test]
    fn rejects_duplicates_and_tiny_tables() {
        assert!(Alphabet::new("ABCA".chars()).is_err());
        assert!(Alphabet::new("A".chars()).is_err());
        assert!(Alphabet::standard(1).is_err());
        assert!(Alphabet::standard(63).is_err());
    }

    #[test]
    fn lookup_both_ways() {
        let a = Alphabet::standard(16).unwrap();
        assert_eq!(a.value_of('A').unwrap(), 10);
        assert_eq!(a.char_of(15).unwrap(), 'F');
        assert!(a.value_of('G').is_err());
        assert!(a.char_of(16).is_err());
    }

    #[test]
    fn standard_conversion_to_base_62() {
        assert_eq!(convert("10", 62, 10).unwrap(), "62");
        assert_eq!(convert("FF", 16, 10).unwrap(), "255");
    }

    #[test]
    fn odd_notation_conversion() {
        let b10 = Alphabet::new("QWERTYUIOP".chars()).unwrap();
        let hex = Alphabet::standard(16).unwrap();
        assert_eq!(b10.convert_from("FF", &hex).unwrap(), "EYY");
    }
}
