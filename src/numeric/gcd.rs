// ============================================================================
// Binary GCD
// Stein's algorithm (Knuth 4.5.2, Algorithm B) over the i32 domain
// ============================================================================

use super::errors::{FractionError, FractionResult};

/// Greatest common divisor of `|u|` and `|v|`, using only shifts,
/// subtraction and parity tests.
///
/// Both working values are kept negative: `i32::MIN` has no positive
/// counterpart, so negating toward zero is the only direction that cannot
/// overflow.
///
/// # Errors
/// Returns `Overflow` when the result would be `2^31`, i.e. when either input
/// is `i32::MIN` and the other is zero, or both are `i32::MIN`.
pub fn gcd(mut u: i32, mut v: i32) -> FractionResult<i32> {
    if u == 0 || v == 0 {
        if u == i32::MIN || v == i32::MIN {
            tracing::trace!(u, v, "gcd overflow: |i32::MIN| is not representable");
            return Err(FractionError::Overflow);
        }
        return Ok(u.abs() + v.abs());
    }

    if u.unsigned_abs() == 1 || v.unsigned_abs() == 1 {
        return Ok(1);
    }

    if u > 0 {
        u = -u;
    }
    if v > 0 {
        v = -v;
    }

    // B1. Find the common power of two
    let mut k = 0u32;
    while u & 1 == 0 && v & 1 == 0 && k < 31 {
        u /= 2;
        v /= 2;
        k += 1;
    }
    if k == 31 {
        tracing::trace!("gcd overflow: result is 2^31");
        return Err(FractionError::Overflow);
    }

    // B2. At least one of u, v is odd now.
    // t negative: u odd, t replaces v. t positive: u even, t replaces u.
    let mut t = if u & 1 == 1 { v } else { -(u / 2) };

    loop {
        // B3/B4. Cast out twos from t
        while t & 1 == 0 {
            t /= 2;
        }
        // B5. Reset max(u, v)
        if t > 0 {
            u = -t;
        } else {
            v = t;
        }
        // B6. Both odd here, so the difference is even
        t = (v - u) / 2;
        if t == 0 {
            break;
        }
    }

    Ok((-u) << k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euclid(a: i64, b: i64) -> i64 {
        let (mut a, mut b) = (a.abs(), b.abs());
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    #[test]
    fn test_zero_operand() {
        assert_eq!(gcd(0, 0), Ok(0));
        assert_eq!(gcd(0, 12), Ok(12));
        assert_eq!(gcd(-12, 0), Ok(12));
        assert_eq!(gcd(0, i32::MAX), Ok(i32::MAX));
        assert_eq!(gcd(0, i32::MIN), Err(FractionError::Overflow));
        assert_eq!(gcd(i32::MIN, 0), Err(FractionError::Overflow));
    }

    #[test]
    fn test_unit_short_circuit() {
        assert_eq!(gcd(1, i32::MIN), Ok(1));
        assert_eq!(gcd(-1, 99), Ok(1));
        assert_eq!(gcd(i32::MAX, 1), Ok(1));
    }

    #[test]
    fn test_common_cases() {
        assert_eq!(gcd(12, 18), Ok(6));
        assert_eq!(gcd(-12, 18), Ok(6));
        assert_eq!(gcd(12, -18), Ok(6));
        assert_eq!(gcd(-48, -180), Ok(12));
        assert_eq!(gcd(17, 5), Ok(1));
        assert_eq!(gcd(7, 7), Ok(7));
        assert_eq!(gcd(1024, 96), Ok(32));
    }

    #[test]
    fn test_domain_minimum() {
        assert_eq!(gcd(i32::MIN, i32::MIN), Err(FractionError::Overflow));
        assert_eq!(gcd(i32::MIN, 1 << 30), Ok(1 << 30));
        assert_eq!(gcd(i32::MIN, 6), Ok(2));
        assert_eq!(gcd(i32::MIN, i32::MAX), Ok(1));
        assert_eq!(gcd(i32::MIN, -(1 << 30)), Ok(1 << 30));
    }

    #[test]
    fn test_agrees_with_euclid() {
        let samples = [
            (2_147_483_646, 1_073_741_823),
            (123_456, 7_890),
            (-987_654_321, 123_456_789),
            (3 * 5 * 7 * 11 * 13, 7 * 11 * 17),
            (1 << 20, 3 << 18),
            (i32::MAX, i32::MAX - 1),
        ];
        for (u, v) in samples {
            assert_eq!(
                gcd(u, v).unwrap() as i64,
                euclid(u as i64, v as i64),
                "gcd({}, {})",
                u,
                v
            );
        }
    }
}
