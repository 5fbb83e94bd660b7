// src/error.rs
//
// Error type shared by construction, arithmetic and operand dispatch.
// Every failure is synchronous; no partially built value ever escapes.

use std::fmt;

use crate::dispatch::{BinaryOp, CompareOp};

pub type Result<T> = std::result::Result<T, RationalError>;

/// Coarse classification of a [`RationalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    DivisionByZero,
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::DivisionByZero => write!(f, "division by zero"),
            ErrorKind::Unsupported => write!(f, "unsupported operand"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("Denominator cannot be zero")]
    ZeroDenominator,
    #[error("Division by zero")]
    DivisionByZero,
    /// One side of a binary operation does not know the other operand.
    /// The caller may still try the reflected implementation.
    #[error("Operation '{op}' not implemented for this operand")]
    NotImplemented { op: BinaryOp },
    #[error("Unsupported operand types for '{op}'")]
    UnsupportedOperands { op: BinaryOp },
    #[error("'{op}' not supported between these operands")]
    NotComparable { op: CompareOp },
}

impl RationalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RationalError::ZeroDenominator => ErrorKind::InvalidArgument,
            RationalError::DivisionByZero => ErrorKind::DivisionByZero,
            RationalError::NotImplemented { .. }
            | RationalError::UnsupportedOperands { .. }
            | RationalError::NotComparable { .. } => ErrorKind::Unsupported,
        }
    }

    /// `true` when a reflected implementation may still handle the operation.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, RationalError::NotImplemented { .. })
    }
}
