// src/rational/arithmetic.rs
//
// Fraction arithmetic.
//
// Forward operations (`value op value`, `value op int`) always reduce the
// display pair. The reflected forms of the two non-commutative operators,
// `int - value` and `int / value`, keep the display pair exactly as the
// formula produced it.

use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Rational;
use crate::error::{RationalError, Result};

impl<T: Clone + Integer + Signed> Rational<T> {
    /// (a/b) + (c/d) = (ad + bc) / bd
    pub fn sum(&self, other: &Self) -> Self {
        Self::from_nonzero(
            self.numer.clone() * other.denom.clone() + other.numer.clone() * self.denom.clone(),
            self.denom.clone() * other.denom.clone(),
            true,
        )
    }

    /// (a/b) - (c/d) = (ad - bc) / bd
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_nonzero(
            self.numer.clone() * other.denom.clone() - other.numer.clone() * self.denom.clone(),
            self.denom.clone() * other.denom.clone(),
            true,
        )
    }

    /// (a/b) × (c/d) = ac / bd
    pub fn product(&self, other: &Self) -> Self {
        Self::from_nonzero(
            self.numer.clone() * other.numer.clone(),
            self.denom.clone() * other.denom.clone(),
            true,
        )
    }

    /// (a/b) ÷ (c/d) = ad / bc
    pub fn quotient(&self, other: &Self) -> Result<Self> {
        if other.numer.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::from_nonzero(
            self.numer.clone() * other.denom.clone(),
            self.denom.clone() * other.numer.clone(),
            true,
        ))
    }

    /// (a/b) + n = (a + nb) / b
    pub fn sum_integer(&self, n: &T) -> Self {
        Self::from_nonzero(
            self.numer.clone() + n.clone() * self.denom.clone(),
            self.denom.clone(),
            true,
        )
    }

    /// (a/b) - n = (a - nb) / b
    pub fn difference_integer(&self, n: &T) -> Self {
        Self::from_nonzero(
            self.numer.clone() - n.clone() * self.denom.clone(),
            self.denom.clone(),
            true,
        )
    }

    /// (a/b) × n = an / b
    pub fn product_integer(&self, n: &T) -> Self {
        Self::from_nonzero(self.numer.clone() * n.clone(), self.denom.clone(), true)
    }

    /// (a/b) ÷ n = a / bn
    pub fn quotient_integer(&self, n: &T) -> Result<Self> {
        if n.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::from_nonzero(
            self.numer.clone(),
            self.denom.clone() * n.clone(),
            true,
        ))
    }

    /// n + (a/b). Same result as [`Rational::sum_integer`].
    pub fn integer_plus(n: &T, value: &Self) -> Self {
        value.sum_integer(n)
    }

    /// n - (a/b) = (nb - a) / b
    ///
    /// The display pair is left unreduced.
    pub fn integer_minus(n: &T, value: &Self) -> Self {
        Self::from_nonzero(
            n.clone() * value.denom.clone() - value.numer.clone(),
            value.denom.clone(),
            false,
        )
    }

    /// n × (a/b). Same result as [`Rational::product_integer`].
    pub fn integer_times(n: &T, value: &Self) -> Self {
        value.product_integer(n)
    }

    /// n ÷ (a/b) = nb / a
    ///
    /// The display pair is left unreduced, so `6 / (4/1)` renders as `6/4`.
    pub fn integer_divided_by(n: &T, value: &Self) -> Result<Self> {
        if value.numer.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::from_nonzero(
            n.clone() * value.denom.clone(),
            value.numer.clone(),
            false,
        ))
    }
}

// Operator `/` behaves like integer division and panics on a zero divisor.
fn expect_quotient<T>(result: Result<Rational<T>>) -> Rational<T> {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! forward_binop {
    ($Trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $rat:expr, |$l:ident, $n:ident| $int:expr) => {
        impl<T: Clone + Integer + Signed> $Trait for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: Rational<T>) -> Rational<T> {
                let ($lhs, $rhs) = (&self, &other);
                $rat
            }
        }

        impl<'a, T: Clone + Integer + Signed> $Trait<&'a Rational<T>> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: &'a Rational<T>) -> Rational<T> {
                let ($lhs, $rhs) = (&self, other);
                $rat
            }
        }

        impl<'a, T: Clone + Integer + Signed> $Trait<Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: Rational<T>) -> Rational<T> {
                let ($lhs, $rhs) = (self, &other);
                $rat
            }
        }

        impl<'a, 'b, T: Clone + Integer + Signed> $Trait<&'b Rational<T>> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: &'b Rational<T>) -> Rational<T> {
                let ($lhs, $rhs) = (self, other);
                $rat
            }
        }

        impl<T: Clone + Integer + Signed> $Trait<T> for Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: T) -> Rational<T> {
                let ($l, $n) = (&self, &other);
                $int
            }
        }

        impl<'a, T: Clone + Integer + Signed> $Trait<T> for &'a Rational<T> {
            type Output = Rational<T>;

            fn $method(self, other: T) -> Rational<T> {
                let ($l, $n) = (self, &other);
                $int
            }
        }
    };
}

forward_binop!(Add, add, |a, b| a.sum(b), |a, n| a.sum_integer(n));
forward_binop!(Sub, sub, |a, b| a.difference(b), |a, n| a.difference_integer(n));
forward_binop!(Mul, mul, |a, b| a.product(b), |a, n| a.product_integer(n));
forward_binop!(Div, div, |a, b| expect_quotient(a.quotient(b)), |a, n| {
    expect_quotient(a.quotient_integer(n))
});

// `int op Rational<int>` for concrete integer types. A blanket impl over `T`
// is not allowed by the orphan rules.
macro_rules! reflected_binops {
    ($($int:ty),* $(,)?) => {$(
        impl Add<Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn add(self, value: Rational<$int>) -> Rational<$int> {
                Rational::integer_plus(&self, &value)
            }
        }

        impl<'a> Add<&'a Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn add(self, value: &'a Rational<$int>) -> Rational<$int> {
                Rational::integer_plus(&self, value)
            }
        }

        impl Sub<Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn sub(self, value: Rational<$int>) -> Rational<$int> {
                Rational::integer_minus(&self, &value)
            }
        }

        impl<'a> Sub<&'a Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn sub(self, value: &'a Rational<$int>) -> Rational<$int> {
                Rational::integer_minus(&self, value)
            }
        }

        impl Mul<Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn mul(self, value: Rational<$int>) -> Rational<$int> {
                Rational::integer_times(&self, &value)
            }
        }

        impl<'a> Mul<&'a Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn mul(self, value: &'a Rational<$int>) -> Rational<$int> {
                Rational::integer_times(&self, value)
            }
        }

        impl Div<Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn div(self, value: Rational<$int>) -> Rational<$int> {
                expect_quotient(Rational::integer_divided_by(&self, &value))
            }
        }

        impl<'a> Div<&'a Rational<$int>> for $int {
            type Output = Rational<$int>;

            fn div(self, value: &'a Rational<$int>) -> Rational<$int> {
                expect_quotient(Rational::integer_divided_by(&self, value))
            }
        }
    )*};
}

reflected_binops!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "bigint")]
reflected_binops!(num_bigint::BigInt);

impl<T: Clone + Integer + Signed> Neg for Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        Rational {
            numer: -self.numer,
            denom: self.denom,
            display_numer: -self.display_numer,
            display_denom: self.display_denom,
        }
    }
}

impl<'a, T: Clone + Integer + Signed> Neg for &'a Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Rational<T> {
        -self.clone()
    }
}
