//! Powerful digit counts (Problem 63).
//!
//! Only bases 1..=9 can qualify: 10^n already has n + 1 digits. The scan over
//! exponents stops once 9^n has fewer than n digits, since every smaller base
//! falls short as well from there on.

use crate::digits::digit_count;

/// All `(base, exponent)` pairs where `base^exponent` has exactly `exponent` digits.
pub fn powerful_digit_counts() -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for exp in 1u32.. {
        if digit_count(9u128.pow(exp)) < exp {
            break;
        }
        for base in 1..=9u32 {
            if digit_count(u128::from(base).pow(exp)) == exp {
                out.push((base, exp));
            }
        }
    }
    out
}

pub fn count_powerful_digit_counts() -> u32 {
    powerful_digit_counts().len() as u32
}
