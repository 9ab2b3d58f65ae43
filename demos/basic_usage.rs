// ============================================================================
// Basic Usage Example
// ============================================================================

use dec64::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== dec64 Example ===\n");

    // Float-sourced prices keep their shortest decimal digits
    let price = Dec::from_f64(19.99).unwrap();
    let fee = Dec::from_f64(0.03).unwrap();
    let total = &price * 3 + &fee;
    println!("3 x {} + {} = {}", price, fee, total);
    println!("  as f64 the same sum is {}\n", 19.99 * 3.0 + 0.03);

    // Repeated small additions stay exact
    let mut accumulated = Dec::ZERO;
    for _ in 0..2000 {
        accumulated += 0.001;
    }
    println!("0.001 added 2000 times = {}\n", accumulated);

    // Division, powers and roots round to 16 significant digits
    println!("Precision context: {} digits, {:?}", Dec::CONTEXT.precision(), Dec::CONTEXT.rounding());
    println!("1 / 3       = {}", Dec::from(1) / 3);
    println!("2 ^ 64      = {}", Dec::from(2).powi(64).unwrap());
    println!("sqrt(2)     = {}", Dec::from(2).sqrt().unwrap());

    match Dec::from(1).checked_div(&Dec::ZERO) {
        Ok(value) => println!("1 / 0       = {}", value),
        Err(e) => println!("1 / 0       -> {}", e),
    }
    println!();

    // Value equality ignores trailing zeros
    let a: Dec = "2.0".parse().unwrap();
    let b: Dec = "2.000".parse().unwrap();
    println!("{} == {} : {}", a, b, a == b);
    println!("max(1.5, 2) = {}", max(Dec::from_f64(1.5).unwrap(), Dec::from(2)));

    let third = Dec::from(1) / 3;
    match third.require_almost_equals(1.0 / 3.0) {
        Ok(()) => println!("1/3 is close to the f64 1/3"),
        Err(e) => println!("check failed: {}", e),
    }
    if let Err(e) = third.require_equals(0.3) {
        println!("check failed: {}", e);
    }
    println!();

    // JSON always carries the canonical text as a string
    let json = encode(&total).unwrap();
    println!("Encoded: {}", json);
    println!("Decoded from string: {}", decode(&json).unwrap());
    println!("Decoded from number: {}", decode("59.999999").unwrap());

    println!("\n=== Example Complete ===");
}
