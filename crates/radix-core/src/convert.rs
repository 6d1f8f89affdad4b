//! Radix conversion on raw digit arrays.
//!
//! Digits are non-negative values, most-significant first. Sign is the
//! caller's concern; these routines never see one.

use crate::error::{RadixError, Result};

/// Collapse a digit array in `base` into a single accumulator value
/// (Horner's method). `None` when the value exceeds the accumulator.
pub(crate) fn collapse(digits: &[u32], base: u32) -> Option<u128> {
    let mut acc: u128 = 0;
    for &d in digits {
        acc = acc.checked_mul(base as u128)?.checked_add(d as u128)?;
    }
    Some(acc)
}

/// Expand a value into its digit array in `base`, most-significant first.
/// Zero expands to `[0]`, never to an empty array.
pub(crate) fn expand(mut value: u128, base: u32) -> Vec<u32> {
    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % base as u128) as u32);
        value /= base as u128;
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits.reverse();
    digits
}

/// Convert a digit array in `from_base` to the equivalent array in
/// `to_base`. An empty input is treated as zero. An input whose value
/// exceeds the 128-bit accumulator is a parse error, never a wrap-around.
///
/// Both bases must be at least 2; callers (Alphabet and the wrapper
/// constructors) validate that before digits reach this routine.
pub fn convert_base(digits: &[u32], from_base: u32, to_base: u32) -> Result<Vec<u32>> {
    let value = collapse(digits, from_base)
        .ok_or_else(|| RadixError::Parse("value out of range".into()))?;
    Ok(expand(value, to_base))
}
