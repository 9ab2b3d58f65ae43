//! Property-based tests for Dec conversions, formatting, ordering and the
//! JSON codec.

use dec64::prelude::*;
use proptest::prelude::*;
use quickcheck::{QuickCheck, TestResult};

// ============================================================================
// Test Generators
// ============================================================================

/// Any finite f64 except negative zero (a Dec zero carries no sign)
fn arb_finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite, not -0.0", |f| {
        f.is_finite() && !(*f == 0.0 && f.is_sign_negative())
    })
}

/// Decimal literals with optional sign, leading zeros and trailing zeros
fn arb_literal() -> impl Strategy<Value = String> {
    "-?[0-9]{1,20}(\\.[0-9]{1,20})?"
}

fn arb_dec() -> impl Strategy<Value = Dec> {
    arb_literal().prop_map(|s| s.parse::<Dec>().expect("generated literal should parse"))
}

// ============================================================================
// Float Round Trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// *For any* finite float, Dec::from_f64 followed by to_f64 is bit-exact.
    #[test]
    fn prop_f64_round_trip(f in arb_finite_f64()) {
        let value = Dec::from_f64(f).unwrap();
        prop_assert_eq!(value.to_f64().to_bits(), f.to_bits());
    }

    /// *For any* float in the trading range, the binary expansion agrees with
    /// the shortest-digit conversion within the context precision.
    #[test]
    fn prop_f64_binary_close(f in -1_000_000.0f64..1_000_000.0) {
        let shortest = Dec::from_f64(f).unwrap();
        let binary = Dec::from_f64_binary(f).unwrap();
        prop_assert!(binary.is_almost_equals_within(&shortest, 1e-14));
    }
}

// ============================================================================
// Canonical String
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// *For any* literal, the canonical string parses back to an equal value,
    /// has a fractional part, and never ends with a redundant zero.
    #[test]
    fn prop_canonical_string(literal in arb_literal()) {
        let value: Dec = literal.parse().unwrap();
        let text = value.to_string();

        let reparsed: Dec = text.parse().unwrap();
        prop_assert_eq!(&reparsed, &value);

        let (int_part, frac_part) = text.split_once('.').expect("canonical text has a point");
        prop_assert!(!frac_part.is_empty());
        prop_assert!(frac_part == "0" || !frac_part.ends_with('0'));

        let digits = int_part.trim_start_matches('-');
        prop_assert!(digits == "0" || !digits.starts_with('0'));
    }
}

// ============================================================================
// Ordering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// *For any* pair, ordering agrees with the sign of the difference.
    #[test]
    fn prop_order_matches_difference(a in arb_dec(), b in arb_dec()) {
        let difference = &a - &b;
        prop_assert_eq!(a.cmp(&b), difference.signum().cmp(&0));
        prop_assert_eq!(a == b, difference.is_zero());
    }

    /// *For any* value, trailing zeros never change equality or ordering.
    #[test]
    fn prop_scale_independent(a in arb_dec(), zeros in 1usize..10) {
        let text = a.to_string();
        let padded: Dec = format!("{}{}", text, "0".repeat(zeros)).parse().unwrap();
        prop_assert_eq!(&padded, &a);
        prop_assert_eq!(padded.to_string(), text);
    }

    /// *For any* pair, min and max return values equal to one of the inputs.
    #[test]
    fn prop_min_max(a in arb_dec(), b in arb_dec()) {
        let high = max(a.clone(), b.clone());
        let low = min(a.clone(), b.clone());
        prop_assert!(high >= low);
        prop_assert!(high == a || high == b);
        prop_assert!(low == a || low == b);
    }
}

// ============================================================================
// Division
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// *For any* quotient, the result never exceeds the context precision.
    #[test]
    fn prop_division_bounded(a in arb_dec(), b in arb_dec()) {
        prop_assume!(!b.is_zero());
        let quotient = a.checked_div(&b).unwrap();
        let digits = quotient.normalized().coefficient().magnitude().to_string().len();
        prop_assert!(digits <= Dec::CONTEXT.precision() as usize);
    }
}

// ============================================================================
// JSON Codec
// ============================================================================

#[cfg(feature = "serde")]
mod json_codec {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// *For any* value, decode(encode(x)) equals x and the wire form is a string.
        #[test]
        fn prop_json_round_trip(value in arb_dec()) {
            let json = encode(&value).unwrap();
            prop_assert!(json.starts_with('"') && json.ends_with('"'));
            let decoded = decode(&json).unwrap();
            prop_assert_eq!(decoded, value);
        }

        /// *For any* float written as a bare JSON number, decoding matches
        /// from_f64 of the float that JSON number parses to.
        #[test]
        fn prop_json_number_matches_float(f in -1e12f64..1e12) {
            let json = serde_json::to_string(&f).unwrap();
            let parsed: f64 = serde_json::from_str(&json).unwrap();
            let decoded = decode(&json).unwrap();
            prop_assert_eq!(decoded, Dec::from_f64(parsed).unwrap());
        }

        /// *For any* starting float, repeated division keeps the wire form exact.
        #[test]
        fn prop_json_exact_after_division(start in 1.0f64..1_000_000.0, divisor in 1.01f64..10.0) {
            let mut r = Dec::from_f64(start).unwrap();
            for _ in 0..50 {
                let decoded = decode(&encode(&r).unwrap()).unwrap();
                decoded.require_equals(&r).unwrap();
                r /= divisor;
            }
        }
    }
}

// ============================================================================
// Integer Agreement
// ============================================================================

#[test]
fn quickcheck_integer_arithmetic_agrees() {
    fn prop(a: i32, b: i32) -> TestResult {
        let (x, y) = (Dec::from(a), Dec::from(b));
        let (wa, wb) = (i64::from(a), i64::from(b));

        if &x + &y != wa + wb || &x - &y != wa - wb || &x * &y != wa * wb {
            return TestResult::failed();
        }
        if b != 0 && wa % wb == 0 && &x / &y != wa / wb {
            return TestResult::failed();
        }
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(i32, i32) -> TestResult);
}
