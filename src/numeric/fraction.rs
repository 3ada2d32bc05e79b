// ============================================================================
// Fraction
// Exact rational arithmetic over the i32 domain
// ============================================================================

use super::checked::{add_and_check, mul_and_check, mul_pos_and_check, sub_and_check};
use super::errors::{FractionError, FractionResult};
use super::gcd::gcd;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact rational number `numerator / denominator` with both parts in the
/// i32 range.
///
/// Fractions are not kept in lowest terms automatically. Equality is
/// structural, so `2/4` and `1/2` compare unequal until one of them is
/// reduced; use [`Fraction::cmp_value`] to compare by value.
///
/// # Example
/// ```ignore
/// use util_kit::numeric::Fraction;
///
/// let a = Fraction::new(3, 4)?;
/// let b = Fraction::new(1, 4)?;
/// assert_eq!(a.add(&b)?, Fraction::ONE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFraction"))]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

// ============================================================================
// Constants
// ============================================================================

impl Fraction {
    /// 0/1
    pub const ZERO: Self = Self::new_raw(0, 1);
    /// 1/1
    pub const ONE: Self = Self::new_raw(1, 1);
    /// 1/2
    pub const ONE_HALF: Self = Self::new_raw(1, 2);
    /// 1/3
    pub const ONE_THIRD: Self = Self::new_raw(1, 3);
    /// 2/3
    pub const TWO_THIRDS: Self = Self::new_raw(2, 3);
    /// 1/4
    pub const ONE_QUARTER: Self = Self::new_raw(1, 4);
    /// 2/4, intentionally unreduced
    pub const TWO_QUARTERS: Self = Self::new_raw(2, 4);
    /// 3/4
    pub const THREE_QUARTERS: Self = Self::new_raw(3, 4);
    /// 1/5
    pub const ONE_FIFTH: Self = Self::new_raw(1, 5);
    /// 2/5
    pub const TWO_FIFTHS: Self = Self::new_raw(2, 5);
    /// 3/5
    pub const THREE_FIFTHS: Self = Self::new_raw(3, 5);
    /// 4/5
    pub const FOUR_FIFTHS: Self = Self::new_raw(4, 5);
}

impl Fraction {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Store numerator and denominator verbatim, without validation.
    ///
    /// Use this only for values already known to be valid (e.g. literals).
    #[inline]
    pub const fn new_raw(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create the whole number `value/1`.
    #[inline]
    pub const fn from_integer(value: i32) -> Self {
        Self::new_raw(value, 1)
    }

    /// Create a fraction, normalizing the sign onto the numerator.
    ///
    /// # Errors
    /// - `InvalidFraction` if `denominator` is zero
    /// - `Overflow` if the denominator is negative and either part is
    ///   `i32::MIN`
    pub fn new(mut numerator: i32, mut denominator: i32) -> FractionResult<Self> {
        if denominator == 0 {
            return Err(FractionError::InvalidFraction);
        }
        if denominator < 0 {
            if numerator == i32::MIN || denominator == i32::MIN {
                return Err(FractionError::Overflow);
            }
            numerator = -numerator;
            denominator = -denominator;
        }
        Ok(Self::new_raw(numerator, denominator))
    }

    /// Create a fraction from a mixed number `whole numerator/denominator`.
    ///
    /// The sign lives on `whole`; `-1 3/4` is `-7/4`. A zero numerator is
    /// accepted and yields the whole number itself.
    ///
    /// # Errors
    /// - `InvalidFraction` if `denominator <= 0` or `numerator < 0`
    /// - `Overflow` if the combined numerator leaves the i32 range
    pub fn from_mixed(whole: i32, numerator: i32, denominator: i32) -> FractionResult<Self> {
        if denominator <= 0 || numerator < 0 {
            return Err(FractionError::InvalidFraction);
        }
        let scaled = i64::from(whole) * i64::from(denominator);
        let combined = if whole < 0 {
            scaled - i64::from(numerator)
        } else {
            scaled + i64::from(numerator)
        };
        let numerator = i32::try_from(combined).map_err(|_| FractionError::Overflow)?;
        Ok(Self::new_raw(numerator, denominator))
    }

    /// Create a fraction in lowest terms. `2/4` becomes `1/2`.
    ///
    /// # Errors
    /// - `InvalidFraction` if `denominator` is zero
    /// - `Overflow` if sign normalization would negate `i32::MIN`
    pub fn new_reduced(mut numerator: i32, mut denominator: i32) -> FractionResult<Self> {
        if denominator == 0 {
            return Err(FractionError::InvalidFraction);
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }
        // gcd(_, i32::MIN) cannot be negated; halve first when possible
        if denominator == i32::MIN && numerator & 1 == 0 {
            numerator /= 2;
            denominator /= 2;
        }
        if denominator < 0 {
            if numerator == i32::MIN || denominator == i32::MIN {
                return Err(FractionError::Overflow);
            }
            numerator = -numerator;
            denominator = -denominator;
        }
        let divisor = gcd(numerator, denominator)?;
        Ok(Self::new_raw(numerator / divisor, denominator / divisor))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The numerator; may exceed the denominator (the 7 in 7/4).
    #[inline]
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }

    /// The numerator of the proper form, always non-negative.
    ///
    /// `7/4` is `1 3/4` and `-7/4` is `-1 3/4`; both return 3.
    ///
    /// # Panics
    /// Panics if the fraction was built with [`Fraction::new_raw`] and a zero
    /// denominator.
    #[inline]
    pub fn proper_numerator(&self) -> i32 {
        self.numerator.wrapping_rem(self.denominator).wrapping_abs()
    }

    /// The whole part of the proper form, truncated toward zero.
    ///
    /// `7/4` returns 1 and `-7/4` returns -1.
    ///
    /// # Panics
    /// Panics on a raw zero denominator, like [`Fraction::proper_numerator`].
    #[inline]
    pub fn proper_whole(&self) -> i32 {
        self.numerator.wrapping_div(self.denominator)
    }

    /// The fraction as an integer, discarding the fractional part.
    #[inline]
    pub fn int_value(&self) -> i32 {
        self.proper_whole()
    }

    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if the value is strictly negative (sign-aware on both parts).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        (self.numerator < 0 && self.denominator > 0) || (self.numerator > 0 && self.denominator < 0)
    }

    /// Check if the value is strictly positive (sign-aware on both parts).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        (self.numerator > 0 && self.denominator > 0) || (self.numerator < 0 && self.denominator < 0)
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// Reduce to lowest terms. `2/4` becomes `1/2`.
    ///
    /// Returns `self` unchanged when it is already reduced.
    pub fn reduce(&self) -> FractionResult<Self> {
        if self.numerator == 0 {
            return Ok(Self::ZERO);
        }
        // gcd works on magnitudes, so the sign of the numerator is irrelevant
        let divisor = gcd(self.numerator, self.denominator)?;
        if divisor == 1 {
            return Ok(*self);
        }
        Self::new(self.numerator / divisor, self.denominator / divisor)
    }

    /// The reciprocal `denominator/numerator`. The result is not reduced.
    ///
    /// # Errors
    /// - `UndefinedOperation` if the numerator is zero
    /// - `Overflow` if the numerator is `i32::MIN`
    pub fn invert(&self) -> FractionResult<Self> {
        if self.numerator == 0 {
            return Err(FractionError::UndefinedOperation);
        }
        if self.numerator == i32::MIN {
            return Err(FractionError::Overflow);
        }
        if self.numerator < 0 {
            let numerator = self
                .denominator
                .checked_neg()
                .ok_or(FractionError::Overflow)?;
            return Ok(Self::new_raw(numerator, -self.numerator));
        }
        Ok(Self::new_raw(self.denominator, self.numerator))
    }

    /// The additive inverse. The result is not reduced.
    ///
    /// # Errors
    /// Returns `Overflow` if the numerator is `i32::MIN`.
    pub fn negate(&self) -> FractionResult<Self> {
        if self.numerator == i32::MIN {
            return Err(FractionError::Overflow);
        }
        Ok(Self::new_raw(-self.numerator, self.denominator))
    }

    /// `self` if the numerator is non-negative, otherwise its negation.
    pub fn abs(&self) -> FractionResult<Self> {
        if self.numerator >= 0 {
            Ok(*self)
        } else {
            self.negate()
        }
    }

    /// Raise to an integer power by repeated squaring.
    ///
    /// A negative power inverts first. Any power other than 0 and 1 yields a
    /// reduced result.
    pub fn pow(&self, power: i32) -> FractionResult<Self> {
        match power {
            1 => Ok(*self),
            0 => Ok(Self::ONE),
            // -i32::MIN overflows; split off one squaring first
            i32::MIN => self.invert()?.pow(2)?.pow(-(power / 2)),
            p if p < 0 => self.invert()?.pow(-p),
            p => {
                let squared = self.multiply_by(self)?;
                let half = squared.pow(p / 2)?;
                if p % 2 == 0 {
                    Ok(half)
                } else {
                    half.multiply_by(self)
                }
            },
        }
    }

    // ========================================================================
    // Binary Operations
    // ========================================================================

    /// Multiply, returning the product in lowest terms.
    ///
    /// Common factors are cancelled across the operands before multiplying
    /// (Knuth 4.5.1), so this only overflows when the reduced result must.
    pub fn multiply_by(&self, other: &Self) -> FractionResult<Self> {
        if self.numerator == 0 || other.numerator == 0 {
            return Ok(Self::ZERO);
        }
        let d1 = gcd(self.numerator, other.denominator)?;
        let d2 = gcd(other.numerator, self.denominator)?;
        let numerator = mul_and_check(self.numerator / d1, other.numerator / d2)?;
        let denominator = mul_pos_and_check(self.denominator / d2, other.denominator / d1)?;
        Self::new_reduced(numerator, denominator)
    }

    /// Divide, returning the quotient in lowest terms.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` if `other` is zero.
    pub fn divide_by(&self, other: &Self) -> FractionResult<Self> {
        if other.numerator == 0 {
            return Err(FractionError::UndefinedOperation);
        }
        self.multiply_by(&other.invert()?)
    }

    /// Add. When both operands are reduced and non-zero, so is the sum.
    pub fn add(&self, other: &Self) -> FractionResult<Self> {
        self.add_sub(other, true)
    }

    /// Subtract. When both operands are reduced and non-zero, so is the
    /// difference.
    pub fn subtract(&self, other: &Self) -> FractionResult<Self> {
        self.add_sub(other, false)
    }

    /// Shared engine for addition and subtraction (Knuth 4.5.1).
    fn add_sub(&self, other: &Self, is_add: bool) -> FractionResult<Self> {
        // Zero is the additive identity
        if self.numerator == 0 {
            return if is_add { Ok(*other) } else { other.negate() };
        }
        if other.numerator == 0 {
            return Ok(*self);
        }
        if self.denominator == 0 || other.denominator == 0 {
            return Err(FractionError::InvalidFraction);
        }

        // With random denominators d1 is 1 about 61% of the time
        let d1 = gcd(self.denominator, other.denominator)?;
        if d1 == 1 {
            let uvp = mul_and_check(self.numerator, other.denominator)?;
            let upv = mul_and_check(other.numerator, self.denominator)?;
            let numerator = if is_add {
                add_and_check(uvp, upv)?
            } else {
                sub_and_check(uvp, upv)?
            };
            let denominator = mul_pos_and_check(self.denominator, other.denominator)?;
            return Ok(Self::new_raw(numerator, denominator));
        }

        // t = u(v'/d1) +/- v(u'/d1) can need 65 bits (Knuth 4.5.1 ex. 7)
        let uvp = BigInt::from(self.numerator) * BigInt::from(other.denominator / d1);
        let upv = BigInt::from(other.numerator) * BigInt::from(self.denominator / d1);
        let t = if is_add { uvp + upv } else { uvp - upv };

        // gcd(t, d1) == gcd(t mod d1, d1), and t mod d1 fits in an i32
        let big_d1 = BigInt::from(d1);
        let mut t_mod_d1 = &t % &big_d1;
        if t_mod_d1.is_negative() {
            t_mod_d1 += &big_d1;
        }
        let t_mod_d1 = t_mod_d1.to_i32().ok_or(FractionError::Overflow)?;
        let d2 = if t_mod_d1 == 0 { d1 } else { gcd(t_mod_d1, d1)? };

        let w = t / BigInt::from(d2);
        let numerator = match w.to_i32() {
            Some(n) => n,
            None => {
                tracing::debug!(numerator = %w, "reduced numerator does not fit in i32");
                return Err(FractionError::Overflow);
            },
        };
        let denominator = mul_pos_and_check(self.denominator / d1, other.denominator / d2)?;
        Ok(Self::new_raw(numerator, denominator))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare by value rather than by structure. `1/2` and `2/4` are
    /// `Ordering::Equal` here even though they are not `==`.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs = i64::from(self.numerator) * i64::from(other.denominator);
        let rhs = i64::from(other.numerator) * i64::from(self.denominator);
        if (self.denominator < 0) != (other.denominator < 0) {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Conversion to rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Convert to `rust_decimal::Decimal`, rounding to the decimal's
    /// precision.
    ///
    /// # Errors
    /// Returns `UndefinedOperation` for a raw zero denominator.
    pub fn to_decimal(&self) -> FractionResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from(self.numerator)
            .checked_div(rust_decimal::Decimal::from(self.denominator))
            .ok_or(FractionError::UndefinedOperation)
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Wire form of a fraction. Deserialized input goes through
/// [`Fraction::new`], so a zero denominator is rejected and a negative one
/// is normalized.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFraction {
    numerator: i32,
    denominator: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFraction> for Fraction {
    type Error = FractionError;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn parse_part(s: &str) -> FractionResult<i32> {
    s.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FractionError::Overflow,
        _ => FractionError::InvalidFraction,
    })
}

impl std::str::FromStr for Fraction {
    type Err = FractionError;

    /// Parse integer fraction text.
    ///
    /// # Examples
    /// - "3/4" -> 3/4
    /// - "-6/-8" -> 6/8
    /// - "1 3/4" -> 7/4
    /// - "5" -> 5/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FractionError::InvalidFraction);
        }

        let (head, denominator) = match s.split_once('/') {
            Some(parts) => parts,
            None => return parse_part(s).map(Self::from_integer),
        };
        let denominator = parse_part(denominator)?;
        match head.trim().split_once(char::is_whitespace) {
            Some((whole, numerator)) => {
                Self::from_mixed(parse_part(whole)?, parse_part(numerator)?, denominator)
            },
            None => Self::new(parse_part(head)?, denominator),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
