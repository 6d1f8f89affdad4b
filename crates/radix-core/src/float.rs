use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::alphabet::Alphabet;
use crate::convert::{collapse, expand};
use crate::error::{RadixError, Result};
use crate::integer::RadixInteger;
use crate::value::{render_digits, split_digit_array, BaseSpec, Digit, Operand};

/// Fractional places emitted by [`RadixFloat::digits`] before a
/// non-terminating expansion is cut off.
pub const FRACTION_PRECISION: usize = 10;

/// An arbitrary-base approximate real number backed by `f64`.
///
/// Same contract as [`RadixInteger`]: canonical decimal storage, immutable
/// value semantics, and asymmetric binary operations that keep the left
/// operand's base and alphabet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadixFloat {
    value: f64,
    base: u32,
    alphabet: Option<Alphabet>,
}

impl RadixFloat {
    /// Parse `value` in the given base. Digit arrays and strings may carry
    /// a fractional part after the point, honored positionally at negative
    /// powers of the base.
    pub fn new(value: impl Into<Operand>, base: impl Into<BaseSpec>) -> Result<Self> {
        let (base, alphabet) = base.into().resolve()?;
        let value = parse_float(value.into(), base, alphabet.as_ref())?;
        Ok(Self { value, base, alphabet })
    }

    /// Canonical decimal value.
    pub fn to_f64(&self) -> f64 {
        self.value
    }

    /// Truncates toward zero.
    pub fn to_i128(&self) -> i128 {
        self.value as i128
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn alphabet(&self) -> Option<&Alphabet> {
        self.alphabet.as_ref()
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// Digit array in this base with at most [`FRACTION_PRECISION`]
    /// fractional places.
    pub fn digits(&self) -> Result<Vec<Digit>> {
        self.digits_with_precision(FRACTION_PRECISION)
    }

    /// Digit array in this base: integer digits, the point, then fractional
    /// digits. Fractional expansion stops at exactly zero remainder or at
    /// `precision` places, whichever comes first, so non-terminating
    /// expansions (1/3 in base 10) always terminate. Either side renders a
    /// lone `0` when empty.
    ///
    /// Values outside the expandable range are a parse error, never a
    /// wrong expansion: NaN, infinities, and magnitudes whose integer part
    /// exceeds 128 bits.
    pub fn digits_with_precision(&self, precision: usize) -> Result<Vec<Digit>> {
        if !self.value.is_finite() {
            return Err(RadixError::Parse(format!(
                "cannot expand {} into digits",
                self.value
            )));
        }
        let (int_part, mut frac) = split_float(self.value.abs())?;

        let mut out = Vec::new();
        if self.value < 0.0 {
            out.push(Digit::Minus);
        }
        out.extend(expand(int_part, self.base).into_iter().map(Digit::Value));
        out.push(Digit::Point);

        let mut places = Vec::new();
        let mut left = precision;
        while frac != 0.0 && left > 0 {
            let (digit, rest) = split_float(frac * self.base as f64)?;
            places.push(digit as u32);
            frac = rest;
            left -= 1;
        }
        if places.is_empty() {
            places.push(0);
        }
        out.extend(places.into_iter().map(Digit::Value));
        Ok(out)
    }

    /// Render in this base; divider defaults as in [`RadixInteger::to_text`].
    /// Errors when the value is outside the expandable range, as
    /// [`digits`] does.
    ///
    /// [`digits`]: RadixFloat::digits
    pub fn to_text(&self, divider: Option<&str>) -> Result<String> {
        Ok(render_digits(
            &self.digits()?,
            self.base,
            self.alphabet.as_ref(),
            divider,
        ))
    }

    pub fn to_string_in(&self, base: impl Into<BaseSpec>, divider: Option<&str>) -> Result<String> {
        self.convert(base)?.to_text(divider)
    }

    pub fn to_digits_in(&self, base: impl Into<BaseSpec>) -> Result<Vec<Digit>> {
        self.convert(base)?.digits()
    }

    /// Same canonical value, new base.
    pub fn convert(&self, base: impl Into<BaseSpec>) -> Result<Self> {
        let (base, alphabet) = base.into().resolve()?;
        Ok(Self { value: self.value, base, alphabet })
    }

    pub fn abs(&self) -> Self {
        self.wrap(self.value.abs())
    }

    pub fn ceil(&self) -> Self {
        self.wrap(self.value.ceil())
    }

    pub fn floor(&self) -> Self {
        self.wrap(self.value.floor())
    }

    /// Rounds halves away from zero: `123.5` to `124`, `-123.5` to `-124`.
    /// Not the host float's half-to-even rounding.
    pub fn round(&self) -> Self {
        if self.value > 0.0 {
            self.wrap((self.value + 0.5).floor())
        } else if self.value < 0.0 {
            self.wrap((self.value - 0.5).ceil())
        } else {
            self.wrap(0.0)
        }
    }

    pub fn pow(&self, exp: f64) -> Self {
        self.wrap(self.value.powf(exp))
    }

    /// Same-base-and-value equality; `==` compares canonical values only.
    pub fn strict_eq(&self, other: &RadixFloat) -> bool {
        self.base == other.base && self.value == other.value
    }

    pub(crate) fn wrap(&self, value: f64) -> Self {
        Self { value, base: self.base, alphabet: self.alphabet.clone() }
    }
}

fn parse_float(operand: Operand, base: u32, alphabet: Option<&Alphabet>) -> Result<f64> {
    match operand {
        Operand::Int(i) => Ok(i as f64),
        Operand::Real(f) => Ok(f),
        Operand::Integer(n) => Ok(n.to_f64()),
        Operand::Float(f) => Ok(f.value),
        Operand::Digits(digits) => digits_to_float(&digits, base),
        Operand::Text(text) => {
            let digits = match alphabet {
                Some(a) => a.decode_text(&text)?,
                None => Alphabet::standard(base)?.decode_text(&text)?,
            };
            digits_to_float(&digits, base)
        }
    }
}

fn digits_to_float(digits: &[Digit], base: u32) -> Result<f64> {
    let split = split_digit_array(digits, base)?;
    let mut value = collapse(&split.int_part, base)
        .ok_or_else(|| RadixError::Parse("value out of range".into()))? as f64;
    let mut scale = 1.0 / base as f64;
    for &d in &split.frac_part {
        value += d as f64 * scale;
        scale /= base as f64;
    }
    Ok(if split.negative { -value } else { value })
}

/// Split a non-negative finite float into integer part and fractional
/// remainder through its shortest round-trip decimal form, so the remainder
/// stays the number the caller sees (`0.45`, not `0.4500000000000...11`)
/// and repeated expansion does not accrete representation noise. An integer
/// part beyond 128 bits is a parse error.
fn split_float(value: f64) -> Result<(u128, f64)> {
    let text = value.to_string();
    let (int_text, frac_text) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let int_part = int_text
        .parse()
        .map_err(|_| RadixError::Parse(format!("integer part of {} out of range", value)))?;
    let frac = match frac_text {
        Some(f) => format!("0.{}", f).parse().unwrap_or(0.0),
        None => 0.0,
    };
    Ok((int_part, frac))
}

impl fmt::Display for RadixFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // canonical decimal value when the expansion is out of range
        match self.to_text(None) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "{}", self.value),
        }
    }
}

impl PartialEq for RadixFloat {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<RadixInteger> for RadixFloat {
    fn eq(&self, other: &RadixInteger) -> bool {
        self.value == other.to_f64()
    }
}

impl PartialOrd for RadixFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// Result base = receiver's base, never the right operand's. Division by
// zero follows host float semantics (infinity or NaN).

impl Add for RadixFloat {
    type Output = RadixFloat;
    fn add(self, rhs: RadixFloat) -> RadixFloat {
        self.wrap(self.value + rhs.value)
    }
}

impl Sub for RadixFloat {
    type Output = RadixFloat;
    fn sub(self, rhs: RadixFloat) -> RadixFloat {
        self.wrap(self.value - rhs.value)
    }
}

impl Mul for RadixFloat {
    type Output = RadixFloat;
    fn mul(self, rhs: RadixFloat) -> RadixFloat {
        self.wrap(self.value * rhs.value)
    }
}

impl Div for RadixFloat {
    type Output = RadixFloat;
    fn div(self, rhs: RadixFloat) -> RadixFloat {
        self.wrap(self.value / rhs.value)
    }
}

impl Rem for RadixFloat {
    type Output = RadixFloat;
    fn rem(self, rhs: RadixFloat) -> RadixFloat {
        self.wrap(self.value % rhs.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_float_renormalizes() {
        assert_eq!(split_float(123.45).unwrap(), (123, 0.45));
        assert_eq!(split_float(4.0).unwrap(), (4, 0.0));
        assert_eq!(split_float(0.5).unwrap(), (0, 0.5));
    }

    #[test]
    fn terminating_expansion_stops_early() {
        let f = RadixFloat::new(2.25, 2).unwrap();
        let digits = f.digits().unwrap();
        // 10.01 in binary
        assert_eq!(
            digits,
            vec![
                Digit::Value(1),
                Digit::Value(0),
                Digit::Point,
                Digit::Value(0),
                Digit::Value(1)
            ]
        );
    }

    #[test]
    fn whole_value_renders_zero_fraction() {
        let f = RadixFloat::new(4.0, 10).unwrap();
        assert_eq!(f.to_text(None).unwrap(), "4.0");
    }

    #[test]
    fn out_of_range_expansion_is_an_error() {
        // integer part beyond 128 bits
        let big = RadixFloat::new(1e40, 10).unwrap();
        assert!(matches!(big.digits(), Err(RadixError::Parse(_))));
        assert!(big.to_text(None).is_err());

        // infinity from host float division by zero
        let inf = RadixFloat::new(1.0, 10).unwrap() / RadixFloat::new(0.0, 10).unwrap();
        assert!(inf.digits().is_err());
        let nan = RadixFloat::new(0.0, 10).unwrap() / RadixFloat::new(0.0, 10).unwrap();
        assert!(nan.digits().is_err());

        // the largest expandable magnitudes still render
        assert!(RadixFloat::new(1e38, 10).unwrap().digits().is_ok());
    }
}
