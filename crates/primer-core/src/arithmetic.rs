//! Binary arithmetic on numeric values.
//!
//! [`add`] and [`multiply`] follow the native operator semantics of the
//! operand type, including its overflow behavior. The `checked_*` variants
//! and [`evaluate`] report overflow as an [`ArithmeticError`] instead.

use std::fmt;
use std::ops::{Add, Mul};

use num_traits::{CheckedAdd, CheckedMul};

use crate::error::ArithmeticError;

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (`+`).
    Add,
    /// Multiplication (`*`).
    Multiply,
}

impl Operation {
    /// Returns the infix symbol for this operation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns `a + b`.
#[must_use]
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Returns `a * b`.
#[must_use]
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Returns `a + b`, or an error if the sum does not fit in `T`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the addition overflows.
pub fn checked_add<T>(a: T, b: T) -> Result<T, ArithmeticError>
where
    T: CheckedAdd + fmt::Display,
{
    CheckedAdd::checked_add(&a, &b)
        .ok_or_else(|| ArithmeticError::overflow(Operation::Add, &a, &b))
}

/// Returns `a * b`, or an error if the product does not fit in `T`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the multiplication overflows.
pub fn checked_multiply<T>(a: T, b: T) -> Result<T, ArithmeticError>
where
    T: CheckedMul + fmt::Display,
{
    CheckedMul::checked_mul(&a, &b)
        .ok_or_else(|| ArithmeticError::overflow(Operation::Multiply, &a, &b))
}

/// Applies `op` to `a` and `b` with overflow checking.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the result does not fit in `T`.
pub fn evaluate<T>(op: Operation, a: T, b: T) -> Result<T, ArithmeticError>
where
    T: CheckedAdd + CheckedMul + fmt::Display,
{
    match op {
        Operation::Add => checked_add(a, b),
        Operation::Multiply => checked_multiply(a, b),
    }
}
