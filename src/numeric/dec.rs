// ============================================================================
// Dec
// Arbitrary-precision decimal value with a process-wide precision context
// ============================================================================

use super::context::{digit_count, pow10, MathContext, DECIMAL64};
use super::convert::DecOperand;
use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Decimal number stored as `coefficient × 10^-scale`.
///
/// Addition, subtraction and multiplication are exact. Division, integer
/// powers, square roots and binary float expansion round through
/// [`Dec::CONTEXT`] (16 significant digits, round-half-even), so results
/// stay bounded and compare reproducibly.
///
/// Equality and ordering are by numeric value: `2.0` and `2.00` are equal even
/// though their stored scales differ.
///
/// # Example
/// ```
/// use dec64::numeric::Dec;
///
/// let price: Dec = "125".parse().unwrap();
/// let ratio = price / 100;
/// assert_eq!(ratio.to_string(), "1.25");
/// assert!(ratio == "1.2500".parse::<Dec>().unwrap());
/// ```
#[derive(Clone)]
pub struct Dec {
    coefficient: BigInt,
    scale: i64,
}

impl Dec {
    /// Precision context applied wherever an exact result could need
    /// unbounded digits.
    pub const CONTEXT: MathContext = DECIMAL64;

    /// Zero
    pub const ZERO: Self = Self {
        coefficient: BigInt::ZERO,
        scale: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled coefficient and a scale.
    ///
    /// The value is `coefficient × 10^-scale`; a negative scale appends zeros.
    #[inline]
    pub fn new(coefficient: impl Into<BigInt>, scale: i64) -> Self {
        Self {
            coefficient: coefficient.into(),
            scale,
        }
    }

    /// One (1)
    #[inline]
    pub fn one() -> Self {
        Self::new(1, 0)
    }

    /// Exact conversion from a 32-bit integer.
    #[inline]
    pub fn from_i32(value: i32) -> Self {
        Self::new(value, 0)
    }

    /// Exact conversion from a 64-bit integer.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self::new(value, 0)
    }

    /// Convert a float through its shortest round-tripping decimal literal.
    ///
    /// `Dec::from_f64(f)?.to_f64() == f` holds for every finite `f`. The digits
    /// are the ones the float prints as, so `0.1` becomes exactly `0.1` rather
    /// than the binary approximation behind it.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            tracing::debug!("rejected non-finite float {}", value);
            return Err(NumericError::NonFinite);
        }
        // Display for f64 is plain (never exponential) and round-trips
        value.to_string().parse()
    }

    /// Convert the exact binary value of a float, rounded to [`Dec::CONTEXT`].
    ///
    /// `0.1` expands to `0.1000000000000000055511151231257827…` and rounds to
    /// `0.1000000000000000`, which absorbs the binary error at 16 digits.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and infinities.
    pub fn from_f64_binary(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            tracing::debug!("rejected non-finite float {}", value);
            return Err(NumericError::NonFinite);
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }

        let bits = value.to_bits();
        let negative = (bits >> 63) != 0;
        let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
        let fraction_bits = bits & ((1u64 << 52) - 1);

        // value = mantissa × 2^exponent
        let (mut mantissa, exponent) = if exponent_bits == 0 {
            (BigInt::from(fraction_bits), -1022 - 52)
        } else {
            (
                BigInt::from(fraction_bits | (1u64 << 52)),
                exponent_bits - 1023 - 52,
            )
        };

        // m / 2^k == m × 5^k / 10^k
        let scale = if exponent >= 0 {
            mantissa <<= exponent as usize;
            0
        } else {
            mantissa *= num_traits::pow(BigInt::from(5u8), exponent.unsigned_abs() as usize);
            -exponent
        };
        if negative {
            mantissa = -mantissa;
        }

        Ok(Self::CONTEXT.round(&Self::new(mantissa, scale)))
    }

    /// Parse decimal text; see the [`FromStr`](std::str::FromStr) impl.
    ///
    /// # Errors
    /// Returns `Parse` when `text` is not a decimal literal.
    #[inline]
    pub fn from_text(text: &str) -> NumericResult<Self> {
        text.parse()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Unscaled coefficient.
    #[inline]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// Number of digits after the decimal point in the stored representation
    /// (negative when the coefficient carries implied trailing zeros).
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.coefficient.is_positive()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// -1, 0 or 1 according to the sign. Zero has no sign, so a value built
    /// from `-0.0` reports 0.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_positive() {
            1
        } else {
            0
        }
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.scale)
    }

    /// Same value with every trailing zero of the coefficient removed.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        self.strip_trailing_zeros(i64::MIN)
    }

    /// Drop trailing coefficient zeros while the scale stays above `min_scale`.
    fn strip_trailing_zeros(&self, min_scale: i64) -> Self {
        let ten = BigInt::from(10u8);
        let mut coefficient = self.coefficient.clone();
        let mut scale = self.scale;
        while scale > min_scale && !coefficient.is_zero() {
            let (quotient, remainder) = coefficient.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            coefficient = quotient;
            scale -= 1;
        }
        Self::new(coefficient, scale)
    }

    /// Nearest `f64` (correctly rounded).
    pub fn to_f64(&self) -> f64 {
        // the literal is always well-formed, so parsing cannot fail
        format!("{}e{}", self.coefficient, -self.scale)
            .parse()
            .unwrap_or(f64::NAN)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Coefficients of both operands brought to the larger scale.
    fn aligned(&self, rhs: &Self) -> (BigInt, BigInt, i64) {
        match self.scale.cmp(&rhs.scale) {
            Ordering::Equal => (self.coefficient.clone(), rhs.coefficient.clone(), self.scale),
            Ordering::Less => {
                let factor = pow10(rhs.scale.abs_diff(self.scale));
                (&self.coefficient * factor, rhs.coefficient.clone(), rhs.scale)
            },
            Ordering::Greater => {
                let factor = pow10(self.scale.abs_diff(rhs.scale));
                (self.coefficient.clone(), &rhs.coefficient * factor, self.scale)
            },
        }
    }

    /// Exact sum.
    pub(crate) fn add_exact(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Self::new(lhs + rhs, scale)
    }

    /// Exact difference.
    pub(crate) fn sub_exact(&self, rhs: &Self) -> Self {
        let (lhs, rhs, scale) = self.aligned(rhs);
        Self::new(lhs - rhs, scale)
    }

    /// Exact product.
    pub(crate) fn mul_exact(&self, rhs: &Self) -> Self {
        Self::new(&self.coefficient * &rhs.coefficient, self.scale + rhs.scale)
    }

    /// Division rounded to [`Dec::CONTEXT`].
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_div_with(rhs, &Self::CONTEXT)
    }

    /// Division correctly rounded to `context`.
    ///
    /// Trailing zeros are trimmed back toward the natural scale
    /// `self.scale - rhs.scale`, so `125 / 100` is `1.25`, not
    /// `1.250000000000000`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div_with(&self, rhs: &Self, context: &MathContext) -> NumericResult<Self> {
        if rhs.is_zero() {
            tracing::debug!("division of {} by zero", self);
            return Err(NumericError::DivisionByZero);
        }

        let preferred_scale = self.scale - rhs.scale;
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, preferred_scale));
        }

        // Shift the dividend so the integer quotient has at least precision + 1 digits
        let precision = i64::from(context.precision());
        let shift = (precision + 1 + digit_count(&rhs.coefficient) as i64
            - digit_count(&self.coefficient) as i64)
            .max(0);
        let dividend = &self.coefficient * pow10(shift as u64);
        let (quotient, remainder) = dividend.div_rem(&rhs.coefficient);

        let (coefficient, scale) =
            context.round_parts(quotient, preferred_scale + shift, !remainder.is_zero());
        Ok(Self::new(coefficient, scale).strip_trailing_zeros(preferred_scale))
    }

    /// Integer power rounded to [`Dec::CONTEXT`].
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a negative exponent on zero.
    #[inline]
    pub fn powi(&self, exponent: i32) -> NumericResult<Self> {
        self.powi_with(exponent, &Self::CONTEXT)
    }

    /// Integer power rounded to `context`.
    ///
    /// Square-and-multiply keeps intermediates at `precision + len(exponent) + 1`
    /// digits before the final rounding; a negative exponent is the reciprocal
    /// of the positive power.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a negative exponent on zero.
    pub fn powi_with(&self, exponent: i32, context: &MathContext) -> NumericResult<Self> {
        if exponent == 0 {
            return Ok(Self::one());
        }

        let magnitude = exponent.unsigned_abs();
        let guard_digits = magnitude.to_string().len() as u32 + 1;
        let working = MathContext::new(context.precision() + guard_digits, context.rounding());

        let mut result = Self::one();
        let mut base = self.clone();
        let mut remaining = magnitude;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = working.round(&result.mul_exact(&base));
            }
            remaining >>= 1;
            if remaining > 0 {
                base = working.round(&base.mul_exact(&base));
            }
        }

        if exponent < 0 {
            Self::one().checked_div_with(&result, context)
        } else {
            Ok(context.round(&result))
        }
    }

    /// Float power computed in `f64` and converted back with [`Dec::from_f64`].
    ///
    /// This is approximate: it carries float precision, not [`Dec::CONTEXT`].
    ///
    /// # Errors
    /// Returns `NonFinite` when the float result is NaN or infinite
    /// (for example a negative base with a fractional exponent).
    pub fn powf(&self, exponent: f64) -> NumericResult<Self> {
        Self::from_f64(self.to_f64().powf(exponent))
    }

    /// Square root rounded to [`Dec::CONTEXT`].
    ///
    /// # Errors
    /// Returns `NegativeRoot` for negative values.
    #[inline]
    pub fn sqrt(&self) -> NumericResult<Self> {
        self.sqrt_with(&Self::CONTEXT)
    }

    /// Square root correctly rounded to `context`.
    ///
    /// # Errors
    /// Returns `NegativeRoot` for negative values.
    pub fn sqrt_with(&self, context: &MathContext) -> NumericResult<Self> {
        if self.is_negative() {
            tracing::debug!("square root of negative value {}", self);
            return Err(NumericError::NegativeRoot);
        }

        let preferred_scale = self.scale.div_euclid(2);
        if self.is_zero() {
            return Ok(Self::new(BigInt::ZERO, preferred_scale));
        }

        // Radicand needs 2 × (precision + 1) digits and an even scale
        let precision = i64::from(context.precision());
        let mut shift = (2 * (precision + 1) - digit_count(&self.coefficient) as i64).max(0);
        if (self.scale + shift).rem_euclid(2) != 0 {
            shift += 1;
        }
        let radicand = &self.coefficient * pow10(shift as u64);
        let root = radicand.sqrt();
        let inexact = &root * &root != radicand;

        let (coefficient, scale) =
            context.round_parts(root, (self.scale + shift) / 2, inexact);
        Ok(Self::new(coefficient, scale).strip_trailing_zeros(preferred_scale))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric comparison against any supported operand.
    ///
    /// Returns `None` when the operand has no decimal value (NaN, infinity).
    #[inline]
    pub fn compare_to<T: DecOperand>(&self, other: T) -> Option<Ordering> {
        other.to_dec().ok().map(|other| self.cmp(&other))
    }

    /// Value equality: `2.0` equals `2.00`.
    #[inline]
    pub fn equals_to<T: DecOperand>(&self, other: T) -> bool {
        self.compare_to(other) == Some(Ordering::Equal)
    }

    /// Larger of `self` and `other`; on a tie the result equals both.
    ///
    /// # Panics
    /// Panics if `other` is a non-finite float.
    pub fn max<T: DecOperand>(self, other: T) -> Self {
        let other = super::convert::operand(&other).into_owned();
        max(self, other)
    }

    /// Smaller of `self` and `other`; on a tie the result equals both.
    ///
    /// # Panics
    /// Panics if `other` is a non-finite float.
    pub fn min<T: DecOperand>(self, other: T) -> Self {
        let other = super::convert::operand(&other).into_owned();
        min(self, other)
    }

    /// Inclusive range `self..=end`.
    #[inline]
    pub fn range_to(self, end: Self) -> RangeInclusive<Self> {
        self..=end
    }

    /// Exponent of the most significant digit: `digits - 1 - scale`.
    fn adjusted_exponent(&self) -> i64 {
        digit_count(&self.coefficient) as i64 - 1 - self.scale
    }
}

/// Larger of two values; returns `b` when they are equal.
pub fn max(a: Dec, b: Dec) -> Dec {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two values; returns `b` when they are equal.
pub fn min(a: Dec, b: Dec) -> Dec {
    if a < b {
        a
    } else {
        b
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Dec {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: DecOperand> PartialEq<T> for Dec {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.equals_to(other)
    }
}

impl Eq for Dec {}

impl<T: DecOperand> PartialOrd<T> for Dec {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.compare_to(other)
    }
}

impl Ord for Dec {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.signum().cmp(&other.signum());
        if sign != Ordering::Equal || self.is_zero() {
            return sign;
        }

        // Same sign: a larger leading exponent means a larger magnitude
        let magnitude = self.adjusted_exponent().cmp(&other.adjusted_exponent());
        let magnitude = if magnitude == Ordering::Equal {
            let (lhs, rhs, _) = self.aligned(other);
            lhs.abs().cmp(&rhs.abs())
        } else {
            magnitude
        };

        if self.is_negative() {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl Hash for Dec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.coefficient.hash(state);
        normalized.scale.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl Dec {
    /// Plain digits with no exponent and no trailing-zero cleanup.
    fn plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.coefficient.magnitude().to_string();

        if self.scale <= 0 {
            if self.is_zero() {
                return "0".to_string();
            }
            let zeros = "0".repeat(self.scale.unsigned_abs() as usize);
            return format!("{}{}{}", sign, digits, zeros);
        }

        let scale = self.scale as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

impl fmt::Display for Dec {
    /// Canonical form: plain digits with at least one fractional digit and
    /// no trailing fractional zeros beyond that one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.plain_string();
        if self.scale <= 0 {
            return write!(f, "{}.0", plain);
        }

        let trimmed = plain.trim_end_matches('0');
        if trimmed.ends_with('.') {
            write!(f, "{}0", trimmed)
        } else {
            f.write_str(trimmed)
        }
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dec({}, coefficient={}, scale={})",
            self, self.coefficient, self.scale
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Dec {
    type Err = NumericError;

    /// Parse a decimal literal, keeping its scale.
    ///
    /// Accepted: optional sign, digits with an optional point, optional
    /// exponent. No whitespace.
    ///
    /// # Examples
    /// - "123" -> coefficient 123, scale 0
    /// - "000123.345000" -> coefficient 123345000, scale 6
    /// - "-1.5e3" -> coefficient -15, scale -2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            tracing::debug!("rejected decimal literal {:?}", s);
            NumericError::Parse {
                input: s.to_string(),
            }
        };

        // Check for sign
        let (is_negative, rest) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        // Split off exponent
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(pos) => {
                let exponent: i32 = rest[pos + 1..].parse().map_err(|_| invalid())?;
                (&rest[..pos], i64::from(exponent))
            },
            None => (rest, 0),
        };

        // Split on decimal point
        let (int_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_str.is_empty() && frac_str.is_empty()) || !all_digits(int_str) || !all_digits(frac_str)
        {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_str, frac_str);
        let coefficient = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let coefficient = if is_negative { -coefficient } else { coefficient };

        Ok(Self::new(coefficient, frac_str.len() as i64 - exponent))
    }
}

// ============================================================================
// Tests
// ============================================================================
