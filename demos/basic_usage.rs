// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_point_decimal::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Fixed-Point Decimal Example ===\n");

    // Decimal-scaled values: exact to the declared number of digits
    let price = Fp2::from_f64(1.23);
    let qty = Fp2::from_f64(4.56);
    println!("price = {}, qty = {}", price, qty);

    let total = price.checked_mul(qty).unwrap();
    println!("price * qty = {}", total);

    // Accumulation stays on the grid with no drift
    let mut balance = Fp2::from_f64(3.57);
    println!("\nbalance = {}", balance);
    balance += Fp2::ONE;
    println!("after += 1    -> {}", balance);
    balance += Fp2::from_f64(1.8);
    println!("after += 1.8  -> {}", balance);
    balance += Fp2::from_f64(55.01);
    println!("after += 55.01 -> {}", balance);

    // Rescaling is always explicit
    let wide: Fp8 = balance.rescale();
    println!("\nrescaled to eight digits: {}", wide);
    let narrow: Fp2 = wide.rescale();
    println!("and back: {}", narrow);

    // The binary-scaled variant trades decimal exactness for shift-speed
    // multiply/divide
    let fast = Fb2::from_f64(96.45);
    println!("\nbinary variant: {} (raw {})", fast, fast.raw_value());
    println!("binary bounds: {} .. {}", Fb2::MIN, Fb2::MAX);

    // Transcendentals go through the generic facade and re-quantize
    println!("\nsqrt(2) at four digits: {}", math::sqrt(Fp4::from_f64(2.0)));
    println!("2^10 at two digits:     {}", math::pow(Fp2::from_f64(2.0), Fp2::from_f64(10.0)));
    println!("sqrt(-4) re-quantizes NaN: {}", math::sqrt(Fp2::from_f64(-4.0)));

    // Division by zero is an error, not an infinity
    match price.checked_div(Fp2::ZERO) {
        Ok(_) => unreachable!(),
        Err(e) => println!("\ndividing by zero: {}", e),
    }
}
