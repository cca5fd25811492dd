//! Error types for primer-core.

use std::fmt::Display;

use crate::arithmetic::Operation;

/// Errors returned by the checked arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The result does not fit in the operand type.
    #[error("overflow evaluating {lhs} {op} {rhs}")]
    Overflow {
        /// The operation that overflowed.
        op: Operation,
        /// Left operand, as displayed.
        lhs: String,
        /// Right operand, as displayed.
        rhs: String,
    },
}

impl ArithmeticError {
    pub(crate) fn overflow(op: Operation, lhs: &impl Display, rhs: &impl Display) -> Self {
        Self::Overflow {
            op,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}
