//! # frac-core
//!
//! Exact rational numbers that stay in lowest terms.
//!
//! Every [`Rational`] carries two numerator/denominator pairs:
//! - the canonical pair, reduced and with a positive denominator, used by
//!   arithmetic, comparison and hashing
//! - the display pair, used only by `Display`, which is reduced only when
//!   the producing operation asks for it
//!
//! `int - value` and `int / value` are the two operations that leave the
//! display pair unreduced:
//!
//! ```
//! use frac_core::Rational;
//!
//! let four = Rational::new(4i64, 1).unwrap();
//! let q = 6i64 / four;
//! assert_eq!(q, Rational::new(3i64, 2).unwrap());
//! assert_eq!(q.to_string(), "6/4");
//! assert_eq!(format!("{:?}", q), "Rational(3, 2)");
//! ```

pub mod dispatch;
pub mod error;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use dispatch::{BinaryOp, CompareOp, Operand};
pub use error::{ErrorKind, RationalError, Result};
pub use rational::Rational;

/// Arbitrary precision rational.
#[cfg(feature = "bigint")]
pub type BigRational = Rational<num_bigint::BigInt>;
