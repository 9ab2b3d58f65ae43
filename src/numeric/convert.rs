// ============================================================================
// Conversions
// Foreign numeric types accepted wherever a Dec operand is expected
// ============================================================================

use super::dec::Dec;
use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// A value usable as the right-hand side of `Dec` arithmetic and comparison.
///
/// Every mixed operation converts its operand through this trait and then
/// runs the one `Dec`-by-`Dec` implementation, so `x + 2.0` means
/// `x + Dec::from_f64(2.0)`.
pub trait DecOperand {
    /// Convert to a `Dec`, borrowing when the operand already is one.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and infinite floats.
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>>;
}

impl DecOperand for Dec {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: DecOperand + ?Sized> DecOperand for &T {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        (**self).to_dec()
    }
}

impl DecOperand for i32 {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        Ok(Cow::Owned(Dec::from_i32(*self)))
    }
}

impl DecOperand for i64 {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        Ok(Cow::Owned(Dec::from_i64(*self)))
    }
}

impl DecOperand for u64 {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        Ok(Cow::Owned(Dec::from(*self)))
    }
}

impl DecOperand for f64 {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        Dec::from_f64(*self).map(Cow::Owned)
    }
}

impl DecOperand for Decimal {
    #[inline]
    fn to_dec(&self) -> NumericResult<Cow<'_, Dec>> {
        Ok(Cow::Owned(Dec::from(*self)))
    }
}

/// Convert an operand for an infallible operator.
///
/// # Panics
/// Panics if the operand is a non-finite float.
pub(crate) fn operand<T: DecOperand + ?Sized>(value: &T) -> Cow<'_, Dec> {
    value
        .to_dec()
        .expect("Dec operand must be a finite number")
}

// ============================================================================
// From / TryFrom
// ============================================================================

impl From<i32> for Dec {
    #[inline]
    fn from(value: i32) -> Self {
        Dec::from_i32(value)
    }
}

impl From<i64> for Dec {
    #[inline]
    fn from(value: i64) -> Self {
        Dec::from_i64(value)
    }
}

impl From<u64> for Dec {
    #[inline]
    fn from(value: u64) -> Self {
        Dec::new(value, 0)
    }
}

impl From<BigInt> for Dec {
    #[inline]
    fn from(value: BigInt) -> Self {
        Dec::new(value, 0)
    }
}

impl From<Decimal> for Dec {
    /// Exact: a `Decimal` is a 96-bit mantissa with a scale of at most 28.
    fn from(value: Decimal) -> Self {
        Dec::new(value.mantissa(), i64::from(value.scale()))
    }
}

impl TryFrom<f64> for Dec {
    type Error = NumericError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Dec::from_f64(value)
    }
}

impl TryFrom<&Dec> for Decimal {
    type Error = NumericError;

    /// Exact conversion into a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `OutOfRange` when the value needs more than 28 fractional
    /// digits or a mantissa wider than 96 bits.
    fn try_from(value: &Dec) -> Result<Self, Self::Error> {
        let normalized = value.normalized();
        let (mantissa, scale) = if normalized.scale() < 0 {
            let widened = normalized.coefficient()
                * super::context::pow10(normalized.scale().unsigned_abs());
            (widened, 0)
        } else {
            (normalized.coefficient().clone(), normalized.scale())
        };

        let mantissa = mantissa.to_i128().ok_or(NumericError::OutOfRange)?;
        let scale = u32::try_from(scale).map_err(|_| NumericError::OutOfRange)?;
        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| NumericError::OutOfRange)
    }
}

impl TryFrom<Dec> for Decimal {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Dec) -> Result<Self, Self::Error> {
        Decimal::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_operands() {
        assert_eq!(17i32.to_dec().unwrap().to_string(), "17.0");
        assert_eq!(17i64.to_dec().unwrap().to_string(), "17.0");
        assert_eq!(u64::MAX.to_dec().unwrap().to_string(), "18446744073709551615.0");
    }

    #[test]
    fn test_float_operand() {
        assert_eq!(17.0f64.to_dec().unwrap().to_string(), "17.0");
        assert_eq!(f64::NAN.to_dec(), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_dec_operand_borrows() {
        let x: Dec = "17.000".parse().unwrap();
        assert!(matches!(x.to_dec().unwrap(), Cow::Borrowed(_)));
        assert!(matches!((&x).to_dec().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_from_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = Dec::from(d);
        assert_eq!(x.coefficient(), &BigInt::from(12345));
        assert_eq!(x.scale(), 2);
        assert_eq!(x.to_string(), "123.45");

        let negative = Dec::from(Decimal::new(-7, 0));
        assert_eq!(negative, -7);
    }

    #[test]
    fn test_to_decimal() {
        let x: Dec = "123.456".parse().unwrap();
        let d = Decimal::try_from(&x).unwrap();
        assert_eq!(d.to_string(), "123.456");

        let wide: Dec = "1.5e3".parse().unwrap();
        assert_eq!(Decimal::try_from(wide).unwrap(), Decimal::new(1500, 0));
    }

    #[test]
    fn test_to_decimal_out_of_range() {
        let tiny: Dec = "1e-40".parse().unwrap();
        assert_eq!(Decimal::try_from(&tiny), Err(NumericError::OutOfRange));

        let huge: Dec = "1e40".parse().unwrap();
        assert_eq!(Decimal::try_from(&huge), Err(NumericError::OutOfRange));
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Dec::try_from(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Dec::try_from(f64::INFINITY), Err(NumericError::NonFinite));
    }

    #[test]
    #[should_panic(expected = "finite number")]
    fn test_operand_panics_on_nan() {
        let _ = operand(&f64::NAN);
    }
}
