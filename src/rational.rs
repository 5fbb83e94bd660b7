// src/rational.rs
//
// Exact rational value with a canonical pair and a display pair.
//
// | input                         | canonical | display |
// |-------------------------------|-----------|---------|
// | Rational::new(10, -5)         | -2/1      | -10/5   |
// | Rational::new_reduced(10, -5) | -2/1      | -2/1    |
// | Rational::new(0, 7)           | 0/1       | 0/7     |
//
// Arithmetic, comparison and hashing only ever look at the canonical pair.
// The display pair is read by `Display` and nothing else.

mod arithmetic;
mod comparison;


use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{RationalError, Result};

/// Exact fraction over the signed integer type `T`.
///
/// The canonical numerator/denominator are always coprime with a positive
/// denominator. The display pair keeps its sign in the numerator too, but
/// is only gcd-reduced when the producing operation asked for it.
///
/// ```
/// use frac_core::Rational;
///
/// let half = Rational::new(2i64, 4).unwrap();
/// assert_eq!(format!("{:?}", half), "Rational(1, 2)");
/// assert_eq!(half.to_string(), "2/4");
/// assert_eq!(half, Rational::new(1i64, 2).unwrap());
/// ```
#[derive(Clone, Copy)]
pub struct Rational<T> {
    numer: T,
    denom: T,
    display_numer: T,
    display_denom: T,
}

impl<T: Clone + Integer + Signed> Rational<T> {
    /// Builds `numerator/denominator`, keeping the display pair unreduced.
    ///
    /// Fails with [`RationalError::ZeroDenominator`] when `denominator` is zero.
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        Self::with_normalization(numerator, denominator, false)
    }

    /// Like [`Rational::new`], but the display pair is reduced as well.
    pub fn new_reduced(numerator: T, denominator: T) -> Result<Self> {
        Self::with_normalization(numerator, denominator, true)
    }

    /// General constructor. `full_normalize` decides whether the display
    /// pair gets divided by the gcd along with the canonical pair.
    pub fn with_normalization(numerator: T, denominator: T, full_normalize: bool) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::from_nonzero(numerator, denominator, full_normalize))
    }

    /// `n/1`.
    pub fn from_integer(n: T) -> Self {
        Rational {
            numer: n.clone(),
            denom: T::one(),
            display_numer: n,
            display_denom: T::one(),
        }
    }

    // Caller guarantees `denominator != 0`.
    pub(crate) fn from_nonzero(numerator: T, denominator: T, full_normalize: bool) -> Self {
        debug_assert!(!denominator.is_zero());

        let (numer, denom) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        // gcd(0, d) == d, so zero collapses to 0/1 here.
        let g = numer.gcd(&denom);
        let reduced_numer = numer.clone() / g.clone();
        let reduced_denom = denom.clone() / g;

        let (display_numer, display_denom) = if full_normalize {
            (reduced_numer.clone(), reduced_denom.clone())
        } else {
            (numer, denom)
        };

        Rational {
            numer: reduced_numer,
            denom: reduced_denom,
            display_numer,
            display_denom,
        }
    }

    /// Canonical numerator.
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// Canonical denominator, always positive.
    pub fn denom(&self) -> &T {
        &self.denom
    }

    pub fn display_numer(&self) -> &T {
        &self.display_numer
    }

    pub fn display_denom(&self) -> &T {
        &self.display_denom
    }

    /// Canonical `(numerator, denominator)`.
    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// The numerator when the value is a whole number.
    pub fn to_integer(&self) -> Option<T> {
        if self.is_integer() {
            Some(self.numer.clone())
        } else {
            None
        }
    }

    /// `true` when rendering shows a pair that is not fully reduced.
    pub fn has_unreduced_display(&self) -> bool {
        self.display_numer != self.numer || self.display_denom != self.denom
    }
}

impl<T: fmt::Display> Rational<T> {
    /// `Rational(<numer>, <denom>)` using the canonical pair.
    pub fn to_debug_string(&self) -> String {
        format!("{:?}", self)
    }

    /// `<numer>/<denom>` using the display pair.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: Clone + Integer + Signed> From<T> for Rational<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: Clone + Integer + Signed> Default for Rational<T> {
    fn default() -> Self {
        Self::from_integer(T::zero())
    }
}

impl<T: Clone + Integer + Signed> Zero for Rational<T> {
    fn zero() -> Self {
        Self::from_integer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: Clone + Integer + Signed> One for Rational<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}

impl<T: Integer + Hash> Hash for Rational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Whole numbers hash exactly like the bare integer so that
        // `Rational::from(2)` and `2` land in the same bucket.
        if self.denom.is_one() {
            self.numer.hash(state);
        } else {
            (&self.numer, &self.denom).hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Debug for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}, {})", self.numer, self.denom)
    }
}

impl<T: fmt::Display> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.display_numer, self.display_denom)
    }
}
