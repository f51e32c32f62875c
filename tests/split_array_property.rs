use dp_lab::problems::split_array::{minimize_largest_sum, split_array};
use proptest::prelude::*;

/// Exhaustive DP over split positions: best[j][p] = min over the last cut.
fn full_dp(nums: &[u64], k: usize) -> u64 {
    let n = nums.len();
    let mut prefix = vec![0u64; n + 1];
    for i in 0..n {
        prefix[i + 1] = prefix[i] + nums[i];
    }
    let parts = k.min(n);
    let mut best = vec![vec![u64::MAX; parts + 1]; n + 1];
    best[0][0] = 0;
    for j in 1..=n {
        for p in 1..=parts {
            for i in 0..j {
                if best[i][p - 1] == u64::MAX {
                    continue;
                }
                let cand = best[i][p - 1].max(prefix[j] - prefix[i]);
                if cand < best[j][p] {
                    best[j][p] = cand;
                }
            }
        }
    }
    (1..=parts).map(|p| best[n][p]).min().unwrap()
}

#[test]
fn reference_case() {
    assert_eq!(minimize_largest_sum(&[7, 2, 5, 10, 8], 2).unwrap(), 18);
}

proptest! {
    #[test]
    fn matches_exhaustive_dp(
        nums in prop::collection::vec(0u64..30, 1..9),
        k in 1usize..10,
    ) {
        prop_assert_eq!(minimize_largest_sum(&nums, k).unwrap(), full_dp(&nums, k));
    }

    #[test]
    fn extreme_part_counts(nums in prop::collection::vec(0u64..100, 1..20)) {
        let total: u64 = nums.iter().sum();
        let max = *nums.iter().max().unwrap();
        prop_assert_eq!(minimize_largest_sum(&nums, 1).unwrap(), total);
        prop_assert_eq!(minimize_largest_sum(&nums, nums.len()).unwrap(), max);
    }

    #[test]
    fn layout_respects_answer(
        nums in prop::collection::vec(0u64..50, 1..15),
        k in 1usize..6,
    ) {
        let (best, parts) = split_array(&nums, k).unwrap();
        prop_assert!(parts.len() <= k);
        prop_assert_eq!(parts.first().map(|r| r.start), Some(0));
        prop_assert_eq!(parts.last().map(|r| r.end), Some(nums.len()));
        for pair in parts.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        let largest = parts.iter().map(|r| nums[r.clone()].iter().sum::<u64>()).max().unwrap();
        prop_assert!(largest <= best);
    }
}
