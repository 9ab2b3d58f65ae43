// ============================================================================
// Tolerance Helpers
// Exact and relative-tolerance assertions for validation and test code
// ============================================================================

use super::convert::DecOperand;
use super::dec::Dec;
use std::fmt;

/// Default relative tolerance for [`Dec::is_almost_equals`].
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// A value check made by [`Dec::require_equals`] or
/// [`Dec::require_almost_equals`] did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementFailed {
    message: String,
}

impl RequirementFailed {
    fn new(message: String) -> Self {
        tracing::debug!("requirement failed: {}", message);
        Self { message }
    }

    /// Human-readable description naming both values.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RequirementFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequirementFailed {}

/// Canonical text of an operand, or a marker for non-finite floats.
fn describe<T: DecOperand>(value: &T) -> String {
    value
        .to_dec()
        .map(|value| value.to_string())
        .unwrap_or_else(|_| "a non-finite number".to_string())
}

impl Dec {
    /// Fail unless `self` equals `other` by value.
    ///
    /// # Errors
    /// Returns `RequirementFailed("<self> is not equal to <other>")`.
    pub fn require_equals<T: DecOperand>(&self, other: T) -> Result<(), RequirementFailed> {
        if self.equals_to(&other) {
            Ok(())
        } else {
            Err(RequirementFailed::new(format!(
                "{} is not equal to {}",
                self,
                describe(&other)
            )))
        }
    }

    /// `|self / other - 1| <= DEFAULT_TOLERANCE`
    #[inline]
    pub fn is_almost_equals<T: DecOperand>(&self, other: T) -> bool {
        self.is_almost_equals_within(other, DEFAULT_TOLERANCE)
    }

    /// Relative comparison: `|self / other - 1| <= tolerance`.
    ///
    /// A zero `other` has no relative scale, so it is only close to zero.
    /// Non-finite operands or tolerances are never close to anything.
    pub fn is_almost_equals_within<T: DecOperand>(&self, other: T, tolerance: f64) -> bool {
        let (Ok(other), Ok(tolerance)) = (other.to_dec(), Dec::from_f64(tolerance)) else {
            return false;
        };
        if other.is_zero() {
            return self.is_zero();
        }

        match self.checked_div(&other) {
            Ok(ratio) => (ratio - 1).abs() <= tolerance,
            Err(_) => false,
        }
    }

    /// Fail unless `self` is within [`DEFAULT_TOLERANCE`] of `other`.
    ///
    /// # Errors
    /// Returns `RequirementFailed("<self> is not close to <other>")`.
    #[inline]
    pub fn require_almost_equals<T: DecOperand>(&self, other: T) -> Result<(), RequirementFailed> {
        self.require_almost_equals_within(other, DEFAULT_TOLERANCE)
    }

    /// Fail unless `self` is within `tolerance` of `other`.
    ///
    /// # Errors
    /// Returns `RequirementFailed("<self> is not close to <other>")`.
    pub fn require_almost_equals_within<T: DecOperand>(
        &self,
        other: T,
        tolerance: f64,
    ) -> Result<(), RequirementFailed> {
        if self.is_almost_equals_within(&other, tolerance) {
            Ok(())
        } else {
            Err(RequirementFailed::new(format!(
                "{} is not close to {}",
                self,
                describe(&other)
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(f: f64) -> Dec {
        Dec::from_f64(f).unwrap()
    }

    #[test]
    fn test_require_equals() {
        float(3.141592653589793).require_equals(3.141592653589793).unwrap();
        "17.000".parse::<Dec>().unwrap().require_equals(17).unwrap();
        Dec::from(17i64).require_equals(17.0).unwrap();
        float(2.0).require_equals("2.00".parse::<Dec>().unwrap()).unwrap();
    }

    #[test]
    fn test_require_equals_message() {
        let err = float(1.5).require_equals(2).unwrap_err();
        assert_eq!(err.message(), "1.5 is not equal to 2.0");
        assert_eq!(err.to_string(), "1.5 is not equal to 2.0");

        let err = float(1.5).require_equals(f64::NAN).unwrap_err();
        assert_eq!(err.message(), "1.5 is not equal to a non-finite number");
    }

    #[test]
    fn test_is_almost_equals() {
        assert!(float(1.0).is_almost_equals(1.0));
        assert!(float(1.0).is_almost_equals("1.0000000000000001".parse::<Dec>().unwrap()));
        assert!(!float(1.0).is_almost_equals(1.00001));
        assert!(float(1.0).is_almost_equals_within(1.00001, 1e-4));
        assert!(!float(1.0).is_almost_equals_within(1.0, f64::NAN));
    }

    #[test]
    fn test_almost_equals_zero_other() {
        assert!(Dec::ZERO.is_almost_equals(0));
        assert!(!float(1e-20).is_almost_equals(0));
        assert!(!Dec::ZERO.is_almost_equals(1e-20));
    }

    #[test]
    fn test_require_almost_equals() {
        float(3.0).powf(1.5).unwrap().require_almost_equals(5.196152422706632).unwrap();

        let num = Dec::from(5);
        num.sqrt()
            .unwrap()
            .require_almost_equals(num.powf(0.5).unwrap())
            .unwrap();

        let err = float(1.0).require_almost_equals(1.1).unwrap_err();
        assert_eq!(err.message(), "1.0 is not close to 1.1");
    }
}
