#![cfg(feature = "heavy")]
use dp_lab::{
    problems::subset_sum::{memoized, tabulated, witness},
    SolverBuilder, Strategy,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_set(rng: &mut StdRng, len: usize, max: usize) -> Vec<usize> {
    (0..len).map(|_| rng.gen_range(1..=max)).collect()
}

#[test]
fn heavy_stress_tabulated_large() {
    let mut rng = StdRng::seed_from_u64(123);
    let set = random_set(&mut rng, 1_000, 100);
    let total: usize = set.iter().sum();
    let target = total / 2;
    let picked = witness(&set, target).unwrap();
    if let Some(picked) = picked {
        assert_eq!(picked.iter().map(|&i| set[i]).sum::<usize>(), target);
    }
    assert!(!tabulated(&set, total + 1).unwrap());
}

#[test]
fn heavy_stress_memoized_matches_tabulated() {
    let mut rng = StdRng::seed_from_u64(7);
    let set = random_set(&mut rng, 300, 50);
    let solver = SolverBuilder::new().strategy(Strategy::Tabulated).build();
    for target in (0..2_000).step_by(97) {
        assert_eq!(
            memoized(&set, target).unwrap(),
            solver.solve(&set, target).unwrap(),
            "target {target}"
        );
    }
}
