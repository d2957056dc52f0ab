// ============================================================================
// Amount To Rational Example
// ============================================================================
//
// Usage:
//   cargo run --example amount_to_rational --features logging -- 201.43 -7.5 1.5E+3
//
// Prints each amount as an exact rational, and as cents with half-up rounding.

use decimal_rational::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut amounts: Vec<String> = std::env::args().skip(1).collect();
    if amounts.is_empty() {
        amounts = vec!["201.43".to_string(), "-7.5".to_string(), "19.999".to_string()];
    }

    println!("=== Amount To Rational Example ===\n");

    let exact = RationalConverter::default();
    let cents = match RationalConverter::from_config(ConverterConfig::currency(100)) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("invalid converter config: {}", e);
            std::process::exit(1);
        },
    };

    for amount in &amounts {
        match (exact.convert_str(amount), cents.convert_str(amount)) {
            (Ok(exact_value), Ok(cents_value)) => {
                println!(
                    "{:>16}  exact {:>24}  reduced {:>20}  cents {:>16}",
                    amount,
                    exact_value.to_string(),
                    exact_value.reduce().to_string(),
                    cents_value.to_string()
                );
            },
            (Err(e), _) | (_, Err(e)) => {
                println!("{:>16}  error: {}", amount, e);
            },
        }
    }
}
