//! Call-site conveniences: the `ToRadix` extension trait and free
//! factories. Host types are never patched globally; bring the trait into
//! scope where you want the shorthand.

use crate::error::Result;
use crate::float::RadixFloat;
use crate::integer::RadixInteger;
use crate::rational::RadixRational;
use crate::value::{BaseSpec, Operand, RadixNumber};

/// Reinterpret a host value in another base.
///
/// ```
/// use radix_core::ToRadix;
///
/// let n = 255i64.to_radix(16).unwrap();
/// assert_eq!(n.to_i128(), 255);
/// ```
pub trait ToRadix {
    type Output;

    fn to_radix(&self, base: impl Into<BaseSpec>) -> Result<Self::Output>;
}

impl ToRadix for i64 {
    type Output = RadixInteger;

    fn to_radix(&self, base: impl Into<BaseSpec>) -> Result<RadixInteger> {
        RadixInteger::new(*self, base)
    }
}

impl ToRadix for i128 {
    type Output = RadixInteger;

    fn to_radix(&self, base: impl Into<BaseSpec>) -> Result<RadixInteger> {
        RadixInteger::new(*self, base)
    }
}

impl ToRadix for f64 {
    type Output = RadixFloat;

    fn to_radix(&self, base: impl Into<BaseSpec>) -> Result<RadixFloat> {
        RadixFloat::new(*self, base)
    }
}

/// Strings dispatch on the fractional point: `"FF"` parses as an integer,
/// `"12.6"` as a float.
impl ToRadix for str {
    type Output = RadixNumber;

    fn to_radix(&self, base: impl Into<BaseSpec>) -> Result<RadixNumber> {
        if self.contains('.') {
            Ok(RadixNumber::Float(RadixFloat::new(self, base)?))
        } else {
            Ok(RadixNumber::Integer(RadixInteger::new(self, base)?))
        }
    }
}

pub fn make_integer(value: impl Into<Operand>, base: impl Into<BaseSpec>) -> Result<RadixInteger> {
    RadixInteger::new(value, base)
}

pub fn make_float(value: impl Into<Operand>, base: impl Into<BaseSpec>) -> Result<RadixFloat> {
    RadixFloat::new(value, base)
}

pub fn make_rational(
    numerator: impl Into<Operand>,
    denominator: impl Into<Operand>,
    base: impl Into<BaseSpec>,
) -> Result<RadixRational> {
    RadixRational::new(numerator, denominator, base)
}
