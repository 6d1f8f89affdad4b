use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::alphabet::Alphabet;
use crate::convert::expand;
use crate::error::{RadixError, Result};
use crate::integer::RadixInteger;
use crate::value::{render_digits, BaseSpec, Digit, Operand};

/// An arbitrary-base exact fraction.
///
/// Numerator and denominator are integer wrappers sharing the display
/// base. The pair is never reduced implicitly; call [`reduce`] for lowest
/// terms. Arithmetic is exact on the numerator/denominator pairs, not a
/// float approximation, and the result keeps the left operand's base.
///
/// [`reduce`]: RadixRational::reduce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadixRational {
    numerator: RadixInteger,
    denominator: RadixInteger,
}

impl RadixRational {
    /// Build `numerator/denominator` in the given base. Both components
    /// accept anything an integer wrapper parses. A zero denominator is an
    /// error.
    pub fn new(
        numerator: impl Into<Operand>,
        denominator: impl Into<Operand>,
        base: impl Into<BaseSpec>,
    ) -> Result<Self> {
        let base = base.into();
        let numerator = RadixInteger::new(numerator, base.clone())?;
        let denominator = RadixInteger::new(denominator, base)?;
        if denominator.to_i128() == 0 {
            return Err(RadixError::DivisionByZero);
        }
        Ok(Self { numerator, denominator })
    }

    /// Copy another rational's exact fraction into a new base.
    pub fn from_rational(other: &RadixRational, base: impl Into<BaseSpec>) -> Result<Self> {
        other.convert(base)
    }

    pub fn numerator(&self) -> &RadixInteger {
        &self.numerator
    }

    pub fn denominator(&self) -> &RadixInteger {
        &self.denominator
    }

    pub fn base(&self) -> u32 {
        self.numerator.base()
    }

    pub fn alphabet(&self) -> Option<&Alphabet> {
        self.numerator.alphabet()
    }

    /// Float approximation of the exact fraction.
    pub fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }

    /// Truncates toward zero.
    pub fn to_i128(&self) -> i128 {
        self.to_f64() as i128
    }

    /// Same exact fraction, new base.
    pub fn convert(&self, base: impl Into<BaseSpec>) -> Result<Self> {
        let base = base.into();
        Ok(Self {
            numerator: self.numerator.convert(base.clone())?,
            denominator: self.denominator.convert(base)?,
        })
    }

    /// New instance in lowest terms, sign carried by the numerator.
    pub fn reduce(&self) -> Self {
        let n = self.numerator.to_i128();
        let d = self.denominator.to_i128();
        let g = gcd(n, d);
        let (mut n, mut d) = (n / g, d / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        self.wrap(n, d)
    }

    /// Numerator digits, the `/` marker, then denominator digits,
    /// `Minus`-prefixed when the fraction is negative.
    pub fn digits(&self) -> Vec<Digit> {
        let n = self.numerator.to_i128();
        let d = self.denominator.to_i128();
        let mut out = Vec::new();
        if (n < 0) != (d < 0) {
            out.push(Digit::Minus);
        }
        out.extend(expand(n.unsigned_abs(), self.base()).into_iter().map(Digit::Value));
        out.push(Digit::Slash);
        out.extend(expand(d.unsigned_abs(), self.base()).into_iter().map(Digit::Value));
        out
    }

    pub fn to_text(&self, divider: Option<&str>) -> String {
        render_digits(&self.digits(), self.base(), self.alphabet(), divider)
    }

    /// Exact division; a zero right operand is an error.
    pub fn checked_div(&self, other: &RadixRational) -> Result<Self> {
        if other.numerator.to_i128() == 0 {
            return Err(RadixError::DivisionByZero);
        }
        Ok(self.wrap(
            self.numerator.to_i128() * other.denominator.to_i128(),
            self.denominator.to_i128() * other.numerator.to_i128(),
        ))
    }

    /// Same-base-and-value equality; `==` compares the exact fractions.
    pub fn strict_eq(&self, other: &RadixRational) -> bool {
        self.base() == other.base() && self == other
    }

    fn wrap(&self, n: i128, d: i128) -> Self {
        Self {
            numerator: self.numerator.wrap(n),
            denominator: self.denominator.wrap(d),
        }
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.abs()
}

impl fmt::Display for RadixRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text(None))
    }
}

/// Exact cross-multiplication, never a float comparison.
impl PartialEq for RadixRational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator.to_i128() * other.denominator.to_i128()
            == other.numerator.to_i128() * self.denominator.to_i128()
    }
}

// Exact pair arithmetic; the result keeps the left operand's base and is
// not reduced.

impl Add for RadixRational {
    type Output = RadixRational;
    fn add(self, rhs: RadixRational) -> RadixRational {
        let (n1, d1) = (self.numerator.to_i128(), self.denominator.to_i128());
        let (n2, d2) = (rhs.numerator.to_i128(), rhs.denominator.to_i128());
        self.wrap(n1 * d2 + n2 * d1, d1 * d2)
    }
}

impl Sub for RadixRational {
    type Output = RadixRational;
    fn sub(self, rhs: RadixRational) -> RadixRational {
        let (n1, d1) = (self.numerator.to_i128(), self.denominator.to_i128());
        let (n2, d2) = (rhs.numerator.to_i128(), rhs.denominator.to_i128());
        self.wrap(n1 * d2 - n2 * d1, d1 * d2)
    }
}

impl Mul for RadixRational {
    type Output = RadixRational;
    fn mul(self, rhs: RadixRational) -> RadixRational {
        let (n1, d1) = (self.numerator.to_i128(), self.denominator.to_i128());
        let (n2, d2) = (rhs.numerator.to_i128(), rhs.denominator.to_i128());
        self.wrap(n1 * n2, d1 * d2)
    }
}

/// Panics when the right operand is zero, as host integer division does;
/// use [`RadixRational::checked_div`] to get an error instead.
impl Div for RadixRational {
    type Output = RadixRational;
    fn div(self, rhs: RadixRational) -> RadixRational {
        let (n1, d1) = (self.numerator.to_i128(), self.denominator.to_i128());
        let (n2, d2) = (rhs.numerator.to_i128(), rhs.denominator.to_i128());
        assert!(n2 != 0, "division by zero rational");
        self.wrap(n1 * d2, d1 * n2)
    }
}
