// ============================================================================
// Numeric Module
// Exact rational arithmetic over a bounded 32-bit integer domain
// ============================================================================
//
// This module provides:
// - Fraction: immutable numerator/denominator value type
// - FractionError: Error types for fraction operations
// - checked: i32 add/sub/mul evaluated in i64 with range checks
// - gcd: binary GCD that tolerates i32::MIN
//
// Design principles:
// - All fallible arithmetic returns Result (no panics, no wraparound)
// - Fixed-width i32 storage; wider intermediates only where a value may
//   temporarily need more bits
// - Structural equality; reduction is always explicit

pub mod checked;
mod errors;
mod fraction;
pub mod gcd;

pub use errors::{FractionError, FractionResult};
pub use fraction::Fraction;
