//! Example: subset-sum decision via tabulation.
//!
//! Run with:
//! `cargo run --example subset_sum`

use dp_lab::{SolverBuilder, Strategy};

fn main() -> dp_lab::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let set = [3, 2, 7, 1];
    let target = 6;

    let solver = SolverBuilder::new().strategy(Strategy::Tabulated).build();
    if solver.solve(&set, target)? {
        println!("True");
    } else {
        println!("False");
    }
    Ok(())
}
