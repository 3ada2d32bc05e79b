// ============================================================================
// Random Source
// Owned, seedable generator for floats, integers and bytes
// ============================================================================

use chrono::Utc;
use parking_lot::Mutex;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::sync::Arc;

/// 2^-53, the spacing of f64 values in [0, 1)
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24, the spacing of f32 values in [0, 1)
const F32_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Deterministic pseudo-random generator owned by its caller.
///
/// Internally uses ChaCha20 with a 32-byte seed derived from a 64-bit seed
/// (little-endian bytes in the first 8 positions, the rest zero), so a given
/// seed produces the same stream on every platform.
///
/// # Example
/// ```ignore
/// use util_kit::random::RandomSource;
///
/// let mut rng = RandomSource::from_seed_u64(7);
/// let roll = rng.next_int_bounded(1, 7).unwrap(); // 1..=6
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha20Rng,
    seed: u64,
}

impl RandomSource {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Construct from a 64-bit seed.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(seed32),
            seed,
        }
    }

    /// Construct from a seed and a ChaCha stream id.
    ///
    /// Sources sharing a seed but using different streams produce
    /// independent sequences.
    pub fn from_seed_and_stream(seed: u64, stream: u64) -> Self {
        let mut source = Self::from_seed_u64(seed);
        source.rng.set_stream(stream);
        source
    }

    /// Construct from the current UTC time in nanoseconds.
    pub fn from_clock() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        tracing::debug!(seed, "seeding random source from wall clock");
        Self::from_seed_u64(seed)
    }

    /// The seed this source was built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ========================================================================
    // Floats
    // ========================================================================

    /// Uniform f64 in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// Uniform f64 between `start` and `end`. The draw is from [0, 1), but
    /// rounding in the scaling step can return `end` itself.
    #[inline]
    pub fn next_f64_bounded(&mut self, start: f64, end: f64) -> f64 {
        self.next_f64() * (end - start) + start
    }

    /// Uniform f32 in [0, 1).
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.rng.next_u32() >> 8) as f32 * F32_UNIT
    }

    /// Uniform f32 between `start` and `end`; `end` is reachable through
    /// rounding, as with [`RandomSource::next_f64_bounded`].
    #[inline]
    pub fn next_f32_bounded(&mut self, start: f32, end: f32) -> f32 {
        self.next_f32() * (end - start) + start
    }

    // ========================================================================
    // Integers
    // ========================================================================

    /// Non-negative i64 over the full `[0, i64::MAX]` range.
    #[inline]
    pub fn next_int(&mut self) -> i64 {
        (self.rng.next_u64() >> 1) as i64
    }

    /// Unbiased integer in [0, n) using rejection sampling. Returns `None`
    /// if `n == 0`.
    ///
    /// Let `threshold = 2^64 mod n`. Accepting only draws `x >= threshold`
    /// leaves a multiple of `n` outcomes, so `x % n` is uniform.
    pub fn gen_range(&mut self, n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.rng.next_u64();
            if x >= threshold {
                return Some(x % n);
            }
        }
    }

    /// Integer in [0, end). Returns `None` if `end <= 0`.
    #[inline]
    pub fn next_int_upper_bounded(&mut self, end: i64) -> Option<i64> {
        if end <= 0 {
            return None;
        }
        self.gen_range(end as u64).map(|v| v as i64)
    }

    /// Integer in [start, end). Returns `None` if the range is empty.
    pub fn next_int_bounded(&mut self, start: i64, end: i64) -> Option<i64> {
        if end <= start {
            return None;
        }
        // end > start, so the two's-complement difference is the exact span
        let span = end.wrapping_sub(start) as u64;
        self.gen_range(span)
            .map(|offset| start.wrapping_add(offset as i64))
    }

    // ========================================================================
    // Bytes
    // ========================================================================

    /// `count` random bytes.
    pub fn next_bytes(&mut self, count: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; count];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}

// ============================================================================
// Shared Handle
// ============================================================================

/// Cloneable, thread-safe handle over a single [`RandomSource`].
///
/// Every clone draws from the same stream. Prefer one `RandomSource` per
/// thread (see [`RandomSource::from_seed_and_stream`]) when reproducibility
/// across runs matters, since interleaving between threads is not
/// deterministic.
#[derive(Debug, Clone)]
pub struct SharedRandomSource {
    inner: Arc<Mutex<RandomSource>>,
}

impl SharedRandomSource {
    pub fn new(source: RandomSource) -> Self {
        Self {
            inner: Arc::new(Mutex::new(source)),
        }
    }

    /// Run `f` with exclusive access to the underlying source.
    pub fn with<R>(&self, f: impl FnOnce(&mut RandomSource) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn next_f64(&self) -> f64 {
        self.with(RandomSource::next_f64)
    }

    pub fn next_int_upper_bounded(&self, end: i64) -> Option<i64> {
        self.with(|rng| rng.next_int_upper_bounded(end))
    }
}

impl From<RandomSource> for SharedRandomSource {
    fn from(source: RandomSource) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RandomSource::from_seed_u64(42);
        let mut b = RandomSource::from_seed_u64(42);
        for _ in 0..16 {
            assert_eq!(a.next_int(), b.next_int());
        }
        assert_eq!(a.next_bytes(32), b.next_bytes(32));
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomSource::from_seed_u64(1);
        let mut b = RandomSource::from_seed_u64(2);
        let xs: Vec<i64> = (0..8).map(|_| a.next_int()).collect();
        let ys: Vec<i64> = (0..8).map(|_| b.next_int()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_streams_are_independent() {
        let mut a = RandomSource::from_seed_and_stream(9, 0);
        let mut b = RandomSource::from_seed_and_stream(9, 1);
        let xs: Vec<u8> = a.next_bytes(16);
        let ys: Vec<u8> = b.next_bytes(16);
        assert_ne!(xs, ys);

        // Stream 0 is the default stream
        let mut c = RandomSource::from_seed_u64(9);
        assert_eq!(c.next_bytes(16), xs);
    }

    #[test]
    fn test_unit_floats_in_range() {
        let mut rng = RandomSource::from_seed_u64(3);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
            let y = rng.next_f32();
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_bounded_floats() {
        let mut rng = RandomSource::from_seed_u64(4);
        for _ in 0..1000 {
            let x = rng.next_f64_bounded(-2.5, 7.5);
            assert!((-2.5..=7.5).contains(&x));
            let y = rng.next_f32_bounded(10.0, 11.0);
            assert!((10.0..=11.0).contains(&y));
        }
    }

    #[test]
    fn test_bounded_float_upper_bound_reachable() {
        // f32 spacing at 1e8 is 8, so every draw rounds to one of the bounds
        let mut rng = RandomSource::from_seed_u64(12);
        let (start, end) = (1.0e8f32, 1.0e8f32 + 8.0);
        let draws: Vec<f32> = (0..100).map(|_| rng.next_f32_bounded(start, end)).collect();
        assert!(draws.iter().all(|&x| x == start || x == end));
        assert!(draws.iter().any(|&x| x == end));
    }

    #[test]
    fn test_next_int_non_negative() {
        let mut rng = RandomSource::from_seed_u64(5);
        for _ in 0..1000 {
            assert!(rng.next_int() >= 0);
        }
    }

    #[test]
    fn test_gen_range() {
        let mut rng = RandomSource::from_seed_u64(6);
        assert_eq!(rng.gen_range(0), None);
        assert_eq!(rng.gen_range(1), Some(0));

        let mut seen = [false; 6];
        for _ in 0..600 {
            let v = rng.gen_range(6).unwrap();
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_int_bounds() {
        let mut rng = RandomSource::from_seed_u64(7);
        for _ in 0..1000 {
            let v = rng.next_int_bounded(-3, 4).unwrap();
            assert!((-3..4).contains(&v));
            let w = rng.next_int_upper_bounded(10).unwrap();
            assert!((0..10).contains(&w));
        }
        assert_eq!(rng.next_int_bounded(5, 5), None);
        assert_eq!(rng.next_int_bounded(5, 1), None);
        assert_eq!(rng.next_int_upper_bounded(0), None);
        assert_eq!(rng.next_int_upper_bounded(-1), None);

        // Full-width span does not overflow
        let v = rng.next_int_bounded(i64::MIN, i64::MAX).unwrap();
        assert!(v < i64::MAX);
    }

    #[test]
    fn test_next_bytes() {
        let mut rng = RandomSource::from_seed_u64(8);
        assert!(rng.next_bytes(0).is_empty());
        let bytes = rng.next_bytes(64);
        assert_eq!(bytes.len(), 64);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_from_clock() {
        let mut rng = RandomSource::from_clock();
        let x = rng.next_f64();
        assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn test_shared_source_across_threads() {
        let shared = SharedRandomSource::new(RandomSource::from_seed_u64(10));
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let handle = shared.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        let v = handle.next_int_upper_bounded(100).unwrap();
                        assert!((0..100).contains(&v));
                    }
                });
            }
        });

        // 400 draws were consumed from the single shared stream
        let mut reference = RandomSource::from_seed_u64(10);
        for _ in 0..400 {
            reference.next_int_upper_bounded(100);
        }
        assert_eq!(
            shared.with(|rng| rng.next_int()),
            reference.next_int()
        );
    }
}
