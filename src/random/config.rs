// ============================================================================
// Random Configuration
// Builder for RandomSource seeding
// ============================================================================

use super::source::{RandomSource, SharedRandomSource};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a [`RandomSource`] should be seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomConfig {
    /// Fixed seed for reproducible streams.
    /// None means seed from the wall clock at build time
    pub seed: Option<u64>,

    /// ChaCha stream id; distinct streams under one seed are independent
    pub stream: u64,
}

impl RandomConfig {
    /// Clock-seeded configuration on stream 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: Set the stream id
    pub fn with_stream(mut self, stream: u64) -> Self {
        self.stream = stream;
        self
    }

    /// Whether sources built from this configuration repeat across runs
    pub fn is_deterministic(&self) -> bool {
        self.seed.is_some()
    }

    /// Build an owned generator.
    pub fn build(&self) -> RandomSource {
        let base = match self.seed {
            Some(seed) => seed,
            None => RandomSource::from_clock().seed(),
        };
        RandomSource::from_seed_and_stream(base, self.stream)
    }

    /// Build a thread-safe shared generator.
    pub fn build_shared(&self) -> SharedRandomSource {
        SharedRandomSource::new(self.build())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RandomConfig {
    /// Fixed seed, stream 0. Intended for tests.
    pub fn deterministic(seed: u64) -> Self {
        Self::new().with_seed(seed)
    }

    /// One independent stream per worker under a shared seed.
    pub fn per_worker(seed: u64, worker: u64) -> Self {
        Self::new().with_seed(seed).with_stream(worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = RandomConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.stream, 0);
        assert!(!config.is_deterministic());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RandomConfig::new().with_seed(11).with_stream(3);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.stream, 3);
        assert!(config.is_deterministic());
    }

    #[test]
    fn test_deterministic_build() {
        let config = RandomConfig::deterministic(99);
        let mut a = config.build();
        let mut b = config.build();
        assert_eq!(a.seed(), 99);
        assert_eq!(a.next_bytes(16), b.next_bytes(16));

        let mut direct = RandomSource::from_seed_u64(99);
        assert_eq!(config.build().next_int(), direct.next_int());
    }

    #[test]
    fn test_per_worker_streams_differ() {
        let mut w0 = RandomConfig::per_worker(5, 0).build();
        let mut w1 = RandomConfig::per_worker(5, 1).build();
        assert_ne!(w0.next_bytes(16), w1.next_bytes(16));
    }

    #[test]
    fn test_build_shared() {
        let shared = RandomConfig::deterministic(1).build_shared();
        let mut direct = RandomSource::from_seed_u64(1);
        assert_eq!(shared.next_f64(), direct.next_f64());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = RandomConfig::per_worker(7, 2);
        let json = serde_json::to_string(&config).unwrap();
        let back: RandomConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
