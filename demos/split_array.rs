//! Example: split an array into k parts minimising the largest part sum.
//!
//! Run with:
//! `cargo run --example split_array`

use dp_lab::problems::split_array::minimize_largest_sum;

fn main() -> dp_lab::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let nums = [7, 2, 5, 10, 8];
    let k = 2;
    println!("{}", minimize_largest_sum(&nums, k)?);
    Ok(())
}
