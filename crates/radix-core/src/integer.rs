use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, Div, Mul, Rem, Shl, Sub};

use crate::alphabet::Alphabet;
use crate::convert::{collapse, expand};
use crate::error::{RadixError, Result};
use crate::float::RadixFloat;
use crate::value::{render_digits, split_digit_array, BaseSpec, Digit, Operand};

/// An arbitrary-base signed integer.
///
/// The value is always held canonically in decimal; the base and optional
/// alphabet only govern parsing and display. Instances are immutable:
/// every operation returns a new value.
///
/// Binary operations are asymmetric on purpose: the result always carries
/// the LEFT operand's base and alphabet, whatever the right operand's base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadixInteger {
    value: i128,
    base: u32,
    alphabet: Option<Alphabet>,
}

impl RadixInteger {
    /// Parse `value` in the given base. Accepts a native number, a digit
    /// array, a string decoded through the base's alphabet, or another
    /// wrapper reinterpreted via its canonical value (floats truncate).
    pub fn new(value: impl Into<Operand>, base: impl Into<BaseSpec>) -> Result<Self> {
        let (base, alphabet) = base.into().resolve()?;
        let value = parse_integer(value.into(), base, alphabet.as_ref())?;
        Ok(Self { value, base, alphabet })
    }

    /// Canonical decimal value.
    pub fn to_i128(&self) -> i128 {
        self.value
    }

    pub fn to_f64(&self) -> f64 {
        self.value as f64
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn alphabet(&self) -> Option<&Alphabet> {
        self.alphabet.as_ref()
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Digit array in this base, most-significant first, `Minus`-prefixed
    /// when negative. Zero is `[0]` in every base.
    pub fn digits(&self) -> Vec<Digit> {
        let mut out: Vec<Digit> = expand(self.value.unsigned_abs(), self.base)
            .into_iter()
            .map(Digit::Value)
            .collect();
        if self.value < 0 {
            out.insert(0, Digit::Minus);
        }
        out
    }

    /// Render in this base. Without an alphabet, digit values above base 10
    /// join with `" "` by default; with one, its characters join bare.
    pub fn to_text(&self, divider: Option<&str>) -> String {
        render_digits(&self.digits(), self.base, self.alphabet.as_ref(), divider)
    }

    /// Render in another base.
    pub fn to_string_in(&self, base: impl Into<BaseSpec>, divider: Option<&str>) -> Result<String> {
        Ok(self.convert(base)?.to_text(divider))
    }

    /// Digit array in another base.
    pub fn to_digits_in(&self, base: impl Into<BaseSpec>) -> Result<Vec<Digit>> {
        Ok(self.convert(base)?.digits())
    }

    /// Same canonical value, new base.
    pub fn convert(&self, base: impl Into<BaseSpec>) -> Result<Self> {
        let (base, alphabet) = base.into().resolve()?;
        Ok(Self { value: self.value, base, alphabet })
    }

    pub fn abs(&self) -> Self {
        self.wrap(self.value.abs())
    }

    pub fn pow(&self, exp: u32) -> Self {
        self.wrap(self.value.pow(exp))
    }

    /// Division that surfaces a zero divisor as an error instead of a panic.
    pub fn checked_div(&self, other: &RadixInteger) -> Result<Self> {
        if other.value == 0 {
            return Err(RadixError::DivisionByZero);
        }
        Ok(self.wrap(self.value / other.value))
    }

    pub fn checked_rem(&self, other: &RadixInteger) -> Result<Self> {
        if other.value == 0 {
            return Err(RadixError::DivisionByZero);
        }
        Ok(self.wrap(self.value % other.value))
    }

    /// Equality that also requires the same display base, unlike `==`
    /// which compares canonical values only.
    pub fn strict_eq(&self, other: &RadixInteger) -> bool {
        self.base == other.base && self.value == other.value
    }

    /// New instance with the same base and alphabet.
    pub(crate) fn wrap(&self, value: i128) -> Self {
        Self { value, base: self.base, alphabet: self.alphabet.clone() }
    }
}

fn parse_integer(operand: Operand, base: u32, alphabet: Option<&Alphabet>) -> Result<i128> {
    match operand {
        Operand::Int(i) => Ok(i),
        Operand::Real(f) => Ok(f as i128),
        Operand::Integer(n) => Ok(n.value),
        Operand::Float(f) => Ok(f.to_f64() as i128),
        Operand::Digits(digits) => digits_to_integer(&digits, base),
        Operand::Text(text) => {
            let digits = match alphabet {
                Some(a) => a.decode_text(&text)?,
                None => Alphabet::standard(base)?.decode_text(&text)?,
            };
            digits_to_integer(&digits, base)
        }
    }
}

/// Fractional digits beyond the point truncate, as integer input.
fn digits_to_integer(digits: &[Digit], base: u32) -> Result<i128> {
    let split = split_digit_array(digits, base)?;
    let magnitude = collapse(&split.int_part, base)
        .and_then(|v| i128::try_from(v).ok())
        .ok_or_else(|| RadixError::Parse("value out of range".into()))?;
    Ok(if split.negative { -magnitude } else { magnitude })
}

impl fmt::Display for RadixInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text(None))
    }
}

impl PartialEq for RadixInteger {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<RadixFloat> for RadixInteger {
    fn eq(&self, other: &RadixFloat) -> bool {
        self.value as f64 == other.to_f64()
    }
}

impl PartialOrd for RadixInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// Result base = receiver's base, never the right operand's.

impl Add for RadixInteger {
    type Output = RadixInteger;
    fn add(self, rhs: RadixInteger) -> RadixInteger {
        self.wrap(self.value + rhs.value)
    }
}

impl Sub for RadixInteger {
    type Output = RadixInteger;
    fn sub(self, rhs: RadixInteger) -> RadixInteger {
        self.wrap(self.value - rhs.value)
    }
}

impl Mul for RadixInteger {
    type Output = RadixInteger;
    fn mul(self, rhs: RadixInteger) -> RadixInteger {
        self.wrap(self.value * rhs.value)
    }
}

/// Panics on a zero divisor, as host integer division does; use
/// [`RadixInteger::checked_div`] to get an error instead.
impl Div for RadixInteger {
    type Output = RadixInteger;
    fn div(self, rhs: RadixInteger) -> RadixInteger {
        self.wrap(self.value / rhs.value)
    }
}

/// Panics on a zero divisor; see [`RadixInteger::checked_rem`].
impl Rem for RadixInteger {
    type Output = RadixInteger;
    fn rem(self, rhs: RadixInteger) -> RadixInteger {
        self.wrap(self.value % rhs.value)
    }
}

impl Shl<u32> for RadixInteger {
    type Output = RadixInteger;
    fn shl(self, rhs: u32) -> RadixInteger {
        self.wrap(self.value << rhs)
    }
}

impl BitAnd for RadixInteger {
    type Output = RadixInteger;
    fn bitand(self, rhs: RadixInteger) -> RadixInteger {
        self.wrap(self.value & rhs.value)
    }
}
