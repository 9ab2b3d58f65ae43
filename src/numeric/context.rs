// ============================================================================
// Precision Context
// Significant-digit limit and rounding rule shared by every Dec operation
// ============================================================================

use super::dec::Dec;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// How discarded digits affect the last kept digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Truncate toward zero
    Down,
}

impl RoundingMode {
    /// Whether the truncated `quotient` must be bumped one unit away from zero.
    ///
    /// `remainder` is what was cut off by dividing by `divisor`; `inexact` marks
    /// non-zero digits that were already lost below the remainder.
    fn rounds_away(
        self,
        quotient: &BigInt,
        remainder: &BigInt,
        divisor: &BigInt,
        inexact: bool,
    ) -> bool {
        if remainder.is_zero() && !inexact {
            return false;
        }

        let doubled = remainder.abs() * 2;
        match self {
            RoundingMode::Down => false,
            RoundingMode::HalfUp => doubled >= *divisor,
            RoundingMode::HalfEven => {
                if doubled > *divisor {
                    true
                } else if doubled == *divisor {
                    inexact || quotient.is_odd()
                } else {
                    false
                }
            },
        }
    }
}

/// Precision context: a significant-digit count paired with a rounding rule.
///
/// Operations whose exact result can need unbounded digits (division, powers,
/// square roots, binary float expansion) round through a context so results
/// stay bounded and reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: u32,
    rounding: RoundingMode,
}

/// IEEE 754 decimal64 parameters: 16 significant digits, round-half-even.
pub const DECIMAL64: MathContext = MathContext::new(16, RoundingMode::HalfEven);

impl MathContext {
    /// Create a context.
    ///
    /// # Panics
    /// Panics if `precision` is zero.
    pub const fn new(precision: u32, rounding: RoundingMode) -> Self {
        assert!(precision > 0, "MathContext precision must be positive");
        Self {
            precision,
            rounding,
        }
    }

    /// Number of significant digits kept.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding rule applied to discarded digits.
    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Round `value` to at most `precision` significant digits.
    pub fn round(&self, value: &Dec) -> Dec {
        let (coefficient, scale) =
            self.round_parts(value.coefficient().clone(), value.scale(), false);
        Dec::new(coefficient, scale)
    }

    /// Round a raw `(coefficient, scale)` pair.
    ///
    /// `inexact` reports that non-zero digits below the coefficient were already
    /// discarded by the caller; callers setting it must pass more than
    /// `precision` digits so that the flag takes part in the rounding decision.
    pub(crate) fn round_parts(
        &self,
        coefficient: BigInt,
        scale: i64,
        inexact: bool,
    ) -> (BigInt, i64) {
        let precision = u64::from(self.precision);
        let digits = digit_count(&coefficient);
        if digits <= precision {
            return (coefficient, scale);
        }

        let dropped = digits - precision;
        let divisor = pow10(dropped);
        let (quotient, remainder) = coefficient.div_rem(&divisor);

        let mut quotient = if self
            .rounding
            .rounds_away(&quotient, &remainder, &divisor, inexact)
        {
            if coefficient.is_negative() {
                quotient - 1
            } else {
                quotient + 1
            }
        } else {
            quotient
        };
        let mut scale = scale - dropped as i64;

        // 999.5 -> 1000 gains a digit; the extra one is a trailing zero
        if digit_count(&quotient) > precision {
            quotient /= BigInt::from(10u8);
            scale -= 1;
        }

        (quotient, scale)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        DECIMAL64
    }
}

// ============================================================================
// Digit Helpers
// ============================================================================

/// Number of decimal digits in the magnitude of `value` (zero has one digit).
pub(crate) fn digit_count(value: &BigInt) -> u64 {
    if value.is_zero() {
        1
    } else {
        value.magnitude().to_string().len() as u64
    }
}

/// 10^exponent
pub(crate) fn pow10(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}
