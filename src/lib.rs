// ============================================================================
// Util Kit Library
// Exact fractions, seeded randomness and text helpers
// ============================================================================

//! # Util Kit
//!
//! Small, dependable building blocks for numeric and text work.
//!
//! ## Features
//!
//! - **Exact fractions** over `i32` with checked arithmetic that reports
//!   overflow instead of wrapping
//! - **Binary GCD** that handles `i32::MIN` without overflowing
//! - **Seeded random source** (ChaCha20) for floats, bounded integers and bytes
//! - **String and word helpers** that index by char, never by byte
//!
//! ## Example
//!
//! ```rust
//! use util_kit::prelude::*;
//!
//! let a = Fraction::new(1, 2).unwrap();
//! let b = Fraction::new(1, 3).unwrap();
//! assert_eq!(a.add(&b).unwrap(), Fraction::new(5, 6).unwrap());
//!
//! // Overflow is an error, not a wrapped value
//! let huge = Fraction::new(i32::MAX, 1).unwrap();
//! assert_eq!(huge.add(&Fraction::ONE), Err(FractionError::Overflow));
//!
//! let mut rng = RandomConfig::deterministic(7).build();
//! let die = rng.next_int_bounded(1, 7).unwrap();
//! assert!((1..7).contains(&die));
//!
//! assert_eq!(words::initials("Ben John Lee"), "BJL");
//! assert_eq!(strings::abbreviate("abcdefg", 6), "abc...");
//! ```

pub mod numeric;
pub mod random;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Fraction, FractionError, FractionResult};
    pub use crate::random::{RandomConfig, RandomSource, SharedRandomSource};
    pub use crate::text::{strings, words};
}

/// Install a `tracing` subscriber that honours `RUST_LOG`.
///
/// Overflow paths log at `debug`/`trace`; nothing is printed unless a
/// subscriber is installed. Returns false if one was already set.
#[cfg(feature = "logging")]
pub fn init_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
