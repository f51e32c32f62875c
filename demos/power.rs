//! Example: fast exponentiation.
//!
//! Run with:
//! `cargo run --example power`

use dp_lab::problems::power::power;

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let x = 2.0;
    let n = 10;
    println!("{}", power(x, n));
}
