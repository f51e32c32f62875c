use dp_lab::problems::power::power;
use proptest::prelude::*;

#[test]
fn reference_values() {
    assert_eq!(power(2.0, 10), 1024.0);
    assert_eq!(power(2.0, -2), 0.25);
    assert_eq!(power(123.456, 0), 1.0);
}

proptest! {
    #[test]
    fn integer_bases_are_exact(base in -12i64..12, exp in 0i32..12) {
        let expected = base.pow(exp as u32) as f64;
        prop_assert_eq!(power(base as f64, exp), expected);
    }

    #[test]
    fn close_to_powi(base in 0.5f64..2.0, exp in -40i32..40) {
        let expected = base.powi(exp);
        let got = power(base, exp);
        prop_assert!(((got - expected) / expected).abs() < 1e-12, "{got} vs {expected}");
    }

    #[test]
    fn negative_is_reciprocal(base in 1.0f64..3.0, exp in 1i32..30) {
        let pos = power(base, exp);
        let neg = power(base, -exp);
        prop_assert!((pos * neg - 1.0).abs() < 1e-12);
    }
}
