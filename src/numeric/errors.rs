// ============================================================================
// Fraction Errors
// Error types for bounded rational arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while constructing or operating on a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionError {
    /// Zero denominator, or a malformed mixed number / fraction literal
    InvalidFraction,
    /// A value left the i32 domain
    Overflow,
    /// Inverting or dividing by zero
    UndefinedOperation,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::InvalidFraction => {
                write!(f, "invalid fraction: denominator must be non-zero")
            },
            FractionError::Overflow => {
                write!(f, "arithmetic overflow: value outside the i32 range")
            },
            FractionError::UndefinedOperation => {
                write!(f, "undefined operation: division by zero")
            },
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type alias for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;
