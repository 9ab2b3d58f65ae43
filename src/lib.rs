// ============================================================================
// dec64 Library
// Arbitrary-precision decimal value with a fixed decimal64 precision context
// ============================================================================

//! # dec64
//!
//! A decimal number type for quantities where base-10 rounding and a
//! reproducible text form matter more than raw speed (prices, balances,
//! rates).
//!
//! ## Features
//!
//! - **Exact add, subtract and multiply** on a big-integer coefficient
//! - **One precision context** (16 significant digits, round-half-even) for
//!   division, powers and square roots
//! - **Lossless float conversion**: `Dec::from_f64(f)?.to_f64() == f`
//! - **Value equality**: `2.0 == 2.00`, with a scale-independent total order
//! - **Canonical text**: plain digits, always at least one fractional digit
//! - **JSON codec** (`serde` feature): written as a string, read from a string
//!   or a number
//!
//! ## Example
//!
//! ```rust
//! use dec64::prelude::*;
//!
//! let price = Dec::from_f64(19.99).unwrap();
//! let total = &price * 3 + 0.03;
//! assert_eq!(total.to_string(), "60.0");
//!
//! let third = Dec::from(1) / 3;
//! assert_eq!(third.to_string(), "0.3333333333333333");
//!
//! assert!("2.0".parse::<Dec>().unwrap() == 2);
//! third.require_almost_equals(1.0 / 3.0).unwrap();
//! ```

#[cfg(feature = "serde")]
pub mod codec;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::codec::{decode, encode, DecodeError};
    pub use crate::numeric::{
        max, min, Dec, DecOperand, MathContext, NumericError, NumericResult, RequirementFailed,
        RoundingMode, DECIMAL64, DEFAULT_TOLERANCE,
    };
}
