// src/rational/comparison.rs
//
// Ordering by cross-multiplication on the canonical pair.
// Both denominators are positive, so a/b < c/d exactly when ad < cb.

use num_integer::Integer;
use num_traits::{One, Signed};
use std::cmp::Ordering;

use super::Rational;

impl<T: Clone + Integer + Signed> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        // Canonical pairs are unique, the display pair never takes part.
        self.numer == other.numer && self.denom == other.denom
    }
}

impl<T: Clone + Integer + Signed> Eq for Rational<T> {}

impl<T: Clone + Integer + Signed> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Clone + Integer + Signed> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Whole numbers compare without multiplying.
        if self.denom.is_one() && other.denom.is_one() {
            return self.numer.cmp(&other.numer);
        }
        let lhs = self.numer.clone() * other.denom.clone();
        let rhs = other.numer.clone() * self.denom.clone();
        lhs.cmp(&rhs)
    }
}

impl<T: Clone + Integer + Signed> Rational<T> {
    /// Orders against `n/1`.
    pub fn cmp_integer(&self, n: &T) -> Ordering {
        self.numer.cmp(&(n.clone() * self.denom.clone()))
    }
}

impl<T: Clone + Integer + Signed> PartialEq<T> for Rational<T> {
    fn eq(&self, n: &T) -> bool {
        self.denom.is_one() && self.numer == *n
    }
}

impl<T: Clone + Integer + Signed> PartialOrd<T> for Rational<T> {
    fn partial_cmp(&self, n: &T) -> Option<Ordering> {
        Some(self.cmp_integer(n))
    }
}

// `int == Rational<int>` and friends for concrete integer types.
macro_rules! reflected_comparisons {
    ($($int:ty),* $(,)?) => {$(
        impl PartialEq<Rational<$int>> for $int {
            fn eq(&self, value: &Rational<$int>) -> bool {
                value == self
            }
        }

        impl PartialOrd<Rational<$int>> for $int {
            fn partial_cmp(&self, value: &Rational<$int>) -> Option<Ordering> {
                Some(value.cmp_integer(self).reverse())
            }
        }
    )*};
}

reflected_comparisons!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "bigint")]
reflected_comparisons!(num_bigint::BigInt);
