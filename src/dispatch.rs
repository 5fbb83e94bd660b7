// src/dispatch.rs
//
// Operand resolution for type-erased values.
//
// A binary operation first asks the left operand. If that side does not
// know the right operand it answers `NotImplemented`, and the right operand
// gets a chance through its reflected implementation. Only when both sides
// decline does the operation fail for good.

use log::trace;
use num_integer::Integer;
use num_traits::Signed;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{RationalError, Result};
use crate::rational::Rational;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Mul)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// The operator to use once the operands trade places.
    pub fn swapped(self) -> CompareOp {
        match self {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            CompareOp::Eq | CompareOp::Ne => self,
        }
    }

    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The operand kinds a [`Rational`] knows how to combine with.
#[derive(Clone, Copy)]
pub enum Operand<'a, T> {
    Rational(&'a Rational<T>),
    Integer(&'a T),
}

impl<'a, T: 'static> Operand<'a, T> {
    /// `None` for anything that is neither `Rational<T>` nor `T`.
    pub fn from_any(value: &'a dyn Any) -> Option<Self> {
        if let Some(rational) = value.downcast_ref::<Rational<T>>() {
            return Some(Operand::Rational(rational));
        }
        value.downcast_ref::<T>().map(Operand::Integer)
    }
}

impl<T: Clone + Integer + Signed + 'static> Rational<T> {
    /// `self op rhs`.
    pub fn apply(&self, op: BinaryOp, rhs: &dyn Any) -> Result<Self> {
        match Operand::<T>::from_any(rhs) {
            Some(Operand::Rational(other)) => match op {
                BinaryOp::Add => Ok(self.sum(other)),
                BinaryOp::Sub => Ok(self.difference(other)),
                BinaryOp::Mul => Ok(self.product(other)),
                BinaryOp::Div => self.quotient(other),
            },
            Some(Operand::Integer(n)) => match op {
                BinaryOp::Add => Ok(self.sum_integer(n)),
                BinaryOp::Sub => Ok(self.difference_integer(n)),
                BinaryOp::Mul => Ok(self.product_integer(n)),
                BinaryOp::Div => self.quotient_integer(n),
            },
            None => Err(RationalError::NotImplemented { op }),
        }
    }

    /// `lhs op self`, reached after `lhs` declined the operation.
    pub fn apply_reflected(&self, op: BinaryOp, lhs: &dyn Any) -> Result<Self> {
        match Operand::<T>::from_any(lhs) {
            Some(Operand::Integer(n)) => match op {
                BinaryOp::Add => Ok(Self::integer_plus(n, self)),
                BinaryOp::Sub => Ok(Self::integer_minus(n, self)),
                BinaryOp::Mul => Ok(Self::integer_times(n, self)),
                BinaryOp::Div => Self::integer_divided_by(n, self),
            },
            Some(Operand::Rational(other)) if op.is_commutative() => self.apply(op, other),
            _ => Err(RationalError::NotImplemented { op }),
        }
    }

    /// `None` when `other` is not comparable with a rational.
    pub fn compare(&self, op: CompareOp, other: &dyn Any) -> Option<bool> {
        let ordering = match Operand::<T>::from_any(other)? {
            Operand::Rational(value) => self.cmp(value),
            Operand::Integer(n) => self.cmp_integer(n),
        };
        Some(op.holds(ordering))
    }
}

/// Resolves `lhs op rhs`, trying the reflected side when the forward side
/// declines.
pub fn binary<T>(op: BinaryOp, lhs: &dyn Any, rhs: &dyn Any) -> Result<Rational<T>>
where
    T: Clone + Integer + Signed + 'static,
{
    let forward = match lhs.downcast_ref::<Rational<T>>() {
        Some(value) => value.apply(op, rhs),
        None => Err(RationalError::NotImplemented { op }),
    };
    match forward {
        Err(err) if err.is_not_implemented() => {
            trace!("forward '{}' declined, trying reflected", op);
        }
        other => return other,
    }

    let reflected = match rhs.downcast_ref::<Rational<T>>() {
        Some(value) => value.apply_reflected(op, lhs),
        None => Err(RationalError::NotImplemented { op }),
    };
    match reflected {
        Err(err) if err.is_not_implemented() => {
            trace!("reflected '{}' declined", op);
            Err(RationalError::UnsupportedOperands { op })
        }
        other => other,
    }
}

/// Resolves `lhs op rhs` for comparisons.
///
/// Equality between unrelated values falls back to identity, ordering
/// between them is an error.
pub fn compare<T>(op: CompareOp, lhs: &dyn Any, rhs: &dyn Any) -> Result<bool>
where
    T: Clone + Integer + Signed + 'static,
{
    if let Some(answer) = lhs
        .downcast_ref::<Rational<T>>()
        .and_then(|value| value.compare(op, rhs))
    {
        return Ok(answer);
    }
    if let Some(answer) = rhs
        .downcast_ref::<Rational<T>>()
        .and_then(|value| value.compare(op.swapped(), lhs))
    {
        return Ok(answer);
    }

    trace!("'{}' not comparable, falling back", op);
    let same = std::ptr::eq(
        lhs as *const dyn Any as *const (),
        rhs as *const dyn Any as *const (),
    );
    match op {
        CompareOp::Eq => Ok(same),
        CompareOp::Ne => Ok(!same),
        _ => Err(RationalError::NotComparable { op }),
    }
}
