//! Numeric types for arbitrary positional bases.
//!
//! Host notations stop at base 36; this crate converts digit arrays,
//! strings, and numbers between any bases from 2 up, with custom digit
//! alphabets (ASCII ordered or not) and integer, float, and exact rational
//! wrappers that parse in one base and render in another.
//!
//! Binary operations on the wrappers are deliberately asymmetric: the
//! result always takes the LEFT operand's base and alphabet.

pub mod alphabet;
pub mod convert;
pub mod error;
pub mod ext;
pub mod float;
pub mod integer;
pub mod rational;
pub mod value;

pub use alphabet::{Alphabet, BASE10, BASE12, BASE16, BASE36, BASE60, BASE62};
pub use convert::convert_base;
pub use error::{RadixError, Result};
pub use ext::{make_float, make_integer, make_rational, ToRadix};
pub use float::{RadixFloat, FRACTION_PRECISION};
pub use integer::RadixInteger;
pub use rational::RadixRational;
pub use value::{BaseSpec, Digit, Operand, RadixNumber};
