// ============================================================================
// Random Module
// Seeded pseudo-random floats, integers and bytes
// ============================================================================
//
// There is no process-wide generator: callers own a RandomSource (or share
// one explicitly through SharedRandomSource), so tests can pin seeds without
// interfering with each other.

mod config;
mod source;

pub use config::RandomConfig;
pub use source::{RandomSource, SharedRandomSource};
