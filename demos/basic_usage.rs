// ============================================================================
// Basic Usage Example
// ============================================================================

use util_kit::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    util_kit::init_logging();

    println!("=== Fractions ===\n");

    let half = Fraction::ONE_HALF;
    let third: Fraction = "1/3".parse().unwrap();
    let mixed: Fraction = "-1 3/4".parse().unwrap();

    println!("{} + {} = {}", half, third, half.add(&third).unwrap());
    println!("{} - {} = {}", half, third, half.subtract(&third).unwrap());
    println!("{} * {} = {}", half, mixed, half.multiply_by(&mixed).unwrap());
    println!("{} / {} = {}", half, mixed, half.divide_by(&mixed).unwrap());
    println!("({})^3 = {}", mixed, mixed.pow(3).unwrap());
    println!(
        "{} as mixed number: {} {}/{}",
        mixed,
        mixed.proper_whole(),
        mixed.proper_numerator(),
        mixed.denominator()
    );
    println!("{} as decimal: {}", third, third.to_decimal().unwrap());

    // Errors are values, never wrapped results
    let big = Fraction::from(i32::MAX);
    println!("\n{} + 1 -> {:?}", big, big.add(&Fraction::ONE));
    println!("{} / 0 -> {:?}", half, half.divide_by(&Fraction::ZERO));
    println!("\"3/0\" -> {:?}", "3/0".parse::<Fraction>());

    println!("\n=== Random ===\n");

    let mut rng = RandomConfig::deterministic(2024).build();
    let rolls: Vec<i64> = (0..10)
        .map(|_| rng.next_int_bounded(1, 7).unwrap())
        .collect();
    println!("Ten dice (seed {}): {:?}", rng.seed(), rolls);
    println!("Unit float: {:.6}", rng.next_f64());
    println!("Bytes: {:02x?}", rng.next_bytes(8));

    let random_fraction = Fraction::new_reduced(
        rng.next_int_bounded(-100, 100).unwrap() as i32,
        rng.next_int_bounded(1, 100).unwrap() as i32,
    )
    .unwrap();
    println!("Random fraction: {}", random_fraction);

    println!("\n=== Text ===\n");

    let title = "the quick brown fox";
    println!("words::capitalize    -> {}", words::capitalize(title));
    println!("words::initials      -> {}", words::initials(title));
    println!("strings::abbreviate  -> {}", strings::abbreviate(title, 10));
    println!("strings::swap_case   -> {}", strings::swap_case("Hello World"));
    println!("strings::reverse_delimited -> {}", strings::reverse_delimited("a.b.c", "."));
    println!(
        "strings::join_f64    -> {}",
        strings::join_f64(&[half.to_f64(), third.to_f64()], ", ")
    );
}
