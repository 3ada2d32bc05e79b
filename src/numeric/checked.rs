// ============================================================================
// Checked Arithmetic
// i32 operations evaluated in i64 and narrowed back with a range check
// ============================================================================

use super::errors::{FractionError, FractionResult};

/// Narrow an i64 intermediate back into the i32 domain.
#[inline]
fn narrow(value: i64) -> FractionResult<i32> {
    i32::try_from(value).map_err(|_| FractionError::Overflow)
}

/// Multiply two integers, checking for overflow.
#[inline]
pub fn mul_and_check(x: i32, y: i32) -> FractionResult<i32> {
    narrow(i64::from(x) * i64::from(y))
}

/// Multiply two denominators, checking for overflow.
///
/// Operands are normally positive, but a raw negative denominator still gets
/// the full range check rather than a truncated product.
#[inline]
pub fn mul_pos_and_check(x: i32, y: i32) -> FractionResult<i32> {
    narrow(i64::from(x) * i64::from(y))
}

/// Add two integers, checking for overflow.
#[inline]
pub fn add_and_check(x: i32, y: i32) -> FractionResult<i32> {
    narrow(i64::from(x) + i64::from(y))
}

/// Subtract two integers, checking for overflow.
#[inline]
pub fn sub_and_check(x: i32, y: i32) -> FractionResult<i32> {
    narrow(i64::from(x) - i64::from(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_and_check() {
        assert_eq!(mul_and_check(6, -7), Ok(-42));
        assert_eq!(mul_and_check(i32::MIN, 1), Ok(i32::MIN));
        assert_eq!(mul_and_check(i32::MIN, -1), Err(FractionError::Overflow));
        assert_eq!(mul_and_check(65_536, 65_536), Err(FractionError::Overflow));
        assert_eq!(mul_and_check(-65_536, 32_768), Ok(i32::MIN));
    }

    #[test]
    fn test_mul_pos_and_check() {
        assert_eq!(mul_pos_and_check(46_340, 46_340), Ok(2_147_395_600));
        assert_eq!(mul_pos_and_check(46_341, 46_341), Err(FractionError::Overflow));
        assert_eq!(mul_pos_and_check(0, i32::MAX), Ok(0));
        // -2^32 must not truncate to 0
        assert_eq!(mul_pos_and_check(-65_536, 65_536), Err(FractionError::Overflow));
        assert_eq!(mul_pos_and_check(-2, 2), Ok(-4));
    }

    #[test]
    fn test_add_and_check() {
        assert_eq!(add_and_check(i32::MAX - 1, 1), Ok(i32::MAX));
        assert_eq!(add_and_check(i32::MAX, 1), Err(FractionError::Overflow));
        assert_eq!(add_and_check(i32::MIN, -1), Err(FractionError::Overflow));
    }

    #[test]
    fn test_sub_and_check() {
        assert_eq!(sub_and_check(-5, 10), Ok(-15));
        assert_eq!(sub_and_check(i32::MIN + 1, 1), Ok(i32::MIN));
        assert_eq!(sub_and_check(i32::MIN, 1), Err(FractionError::Overflow));
        assert_eq!(sub_and_check(0, i32::MIN), Err(FractionError::Overflow));
    }
}
