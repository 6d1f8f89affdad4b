use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{RadixError, Result};
use crate::float::RadixFloat;
use crate::integer::RadixInteger;

/// One entry of a digit array: a digit value or a structural marker.
///
/// Digit arrays are most-significant first. A leading `Minus` marks a
/// negative number; `Point` separates integer and fractional digits;
/// `Slash` separates a rational's numerator and denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Digit {
    Value(u32),
    Minus,
    Point,
    Slash,
}

impl Digit {
    pub fn as_value(&self) -> Option<u32> {
        match self {
            Digit::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<u32> for Digit {
    fn from(v: u32) -> Self {
        Digit::Value(v)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digit::Value(v) => write!(f, "{}", v),
            Digit::Minus => write!(f, "-"),
            Digit::Point => write!(f, "."),
            Digit::Slash => write!(f, "/"),
        }
    }
}

/// Constructor input for the numeric wrappers, resolved by `match` at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Int(i128),
    Real(f64),
    Text(String),
    Digits(Vec<Digit>),
    Integer(RadixInteger),
    Float(RadixFloat),
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Int(v as i128)
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v as i128)
    }
}

impl From<i128> for Operand {
    fn from(v: i128) -> Self {
        Operand::Int(v)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Real(v)
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::Text(v.to_string())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Operand::Text(v)
    }
}

impl From<Vec<Digit>> for Operand {
    fn from(v: Vec<Digit>) -> Self {
        Operand::Digits(v)
    }
}

impl From<&[Digit]> for Operand {
    fn from(v: &[Digit]) -> Self {
        Operand::Digits(v.to_vec())
    }
}

impl From<Vec<u32>> for Operand {
    fn from(v: Vec<u32>) -> Self {
        Operand::Digits(v.into_iter().map(Digit::Value).collect())
    }
}

impl From<&[u32]> for Operand {
    fn from(v: &[u32]) -> Self {
        Operand::Digits(v.iter().copied().map(Digit::Value).collect())
    }
}

impl From<RadixInteger> for Operand {
    fn from(v: RadixInteger) -> Self {
        Operand::Integer(v)
    }
}

impl From<&RadixInteger> for Operand {
    fn from(v: &RadixInteger) -> Self {
        Operand::Integer(v.clone())
    }
}

impl From<RadixFloat> for Operand {
    fn from(v: RadixFloat) -> Self {
        Operand::Float(v)
    }
}

impl From<&RadixFloat> for Operand {
    fn from(v: &RadixFloat) -> Self {
        Operand::Float(v.clone())
    }
}

/// A base given either as an integer size (default alphabet) or as an
/// explicit ordered character list (the list's length is the base).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BaseSpec {
    Size(i64),
    Chars(Vec<char>),
}

impl BaseSpec {
    /// Resolve into a validated base and, for explicit character lists,
    /// the alphabet carrying them.
    pub(crate) fn resolve(self) -> Result<(u32, Option<Alphabet>)> {
        match self {
            BaseSpec::Size(n) => {
                if !(2..=u32::MAX as i64).contains(&n) {
                    return Err(RadixError::InvalidBase(format!(
                        "base must be at least 2, got {}",
                        n
                    )));
                }
                Ok((n as u32, None))
            }
            BaseSpec::Chars(chars) => {
                let alphabet = Alphabet::new(chars)?;
                Ok((alphabet.base(), Some(alphabet)))
            }
        }
    }
}

impl From<i32> for BaseSpec {
    fn from(n: i32) -> Self {
        BaseSpec::Size(n as i64)
    }
}

impl From<u32> for BaseSpec {
    fn from(n: u32) -> Self {
        BaseSpec::Size(n as i64)
    }
}

impl From<usize> for BaseSpec {
    fn from(n: usize) -> Self {
        BaseSpec::Size(n as i64)
    }
}

impl From<Vec<char>> for BaseSpec {
    fn from(chars: Vec<char>) -> Self {
        BaseSpec::Chars(chars)
    }
}

impl From<&[char]> for BaseSpec {
    fn from(chars: &[char]) -> Self {
        BaseSpec::Chars(chars.to_vec())
    }
}

impl From<&Alphabet> for BaseSpec {
    fn from(a: &Alphabet) -> Self {
        BaseSpec::Chars(a.chars().to_vec())
    }
}

/// Integer-or-float result of parsing a string whose kind is decided by
/// the presence of a fractional point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RadixNumber {
    Integer(RadixInteger),
    Float(RadixFloat),
}

impl RadixNumber {
    pub fn to_f64(&self) -> f64 {
        match self {
            RadixNumber::Integer(n) => n.to_f64(),
            RadixNumber::Float(n) => n.to_f64(),
        }
    }

    pub fn as_integer(&self) -> Option<&RadixInteger> {
        match self {
            RadixNumber::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&RadixFloat> {
        match self {
            RadixNumber::Float(n) => Some(n),
            _ => None,
        }
    }
}

/// A digit array split at its markers, every value checked against the base.
pub(crate) struct SplitDigits {
    pub negative: bool,
    pub int_part: Vec<u32>,
    pub frac_part: Vec<u32>,
}

pub(crate) fn split_digit_array(digits: &[Digit], base: u32) -> Result<SplitDigits> {
    let mut rest = digits;
    let negative = matches!(rest.first(), Some(Digit::Minus));
    if negative {
        rest = &rest[1..];
    }

    let mut int_part = Vec::new();
    let mut frac_part = Vec::new();
    let mut in_fraction = false;
    for d in rest {
        match d {
            Digit::Value(v) => {
                if *v >= base {
                    return Err(RadixError::Parse(format!(
                        "digit {} out of range for base {}",
                        v, base
                    )));
                }
                if in_fraction {
                    frac_part.push(*v);
                } else {
                    int_part.push(*v);
                }
            }
            Digit::Point => {
                if in_fraction {
                    return Err(RadixError::Parse("multiple fractional points".into()));
                }
                in_fraction = true;
            }
            Digit::Minus => {
                return Err(RadixError::Parse("sign marker not in leading position".into()));
            }
            Digit::Slash => {
                return Err(RadixError::Parse("unexpected '/' in digit array".into()));
            }
        }
    }

    Ok(SplitDigits { negative, int_part, frac_part })
}

/// Render a digit array as text. With an alphabet, digits map to its
/// characters and join bare unless a divider is given. Without one, the
/// numeric digit values join with `" "` above base 10 (bare otherwise),
/// so multi-character digits stay unambiguous.
pub(crate) fn render_digits(
    digits: &[Digit],
    base: u32,
    alphabet: Option<&Alphabet>,
    divider: Option<&str>,
) -> String {
    match alphabet {
        Some(a) => {
            let parts: Vec<String> = digits
                .iter()
                .map(|d| match d {
                    Digit::Value(v) => a.chars()[*v as usize].to_string(),
                    marker => marker.to_string(),
                })
                .collect();
            parts.join(divider.unwrap_or(""))
        }
        None => {
            let sep = divider.unwrap_or(if base > 10 { " " } else { "" });
            let parts: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
            parts.join(sep)
        }
    }
}
