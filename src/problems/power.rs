//! Fast exponentiation by repeated halving.
//!
//! `power(base, n)` computes `half = power(base, n / 2)` and squares it,
//! multiplying by `base` once more when `n` is odd, so only O(log |n|)
//! multiplications are performed. Negative exponents return the reciprocal of
//! the positive power; zero bases follow IEEE-754 (`power(0.0, -1)` is `inf`).

/// Raise `base` to an integer `exponent`.
///
/// ```
/// use dp_lab::problems::power::power;
///
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert_eq!(power(2.0, -2), 0.25);
/// assert_eq!(power(7.5, 0), 1.0);
/// ```
pub fn power(base: f64, exponent: i32) -> f64 {
    // unsigned_abs keeps i32::MIN representable.
    let magnitude = power_unsigned(base, exponent.unsigned_abs());
    if exponent < 0 {
        1.0 / magnitude
    } else {
        magnitude
    }
}

fn power_unsigned(base: f64, exponent: u32) -> f64 {
    match exponent {
        0 => 1.0,
        1 => base,
        _ => {
            let half = power_unsigned(base, exponent / 2);
            if exponent % 2 == 1 {
                half * half * base
            } else {
                half * half
            }
        }
    }
}
