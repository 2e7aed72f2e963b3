//! Decimal digit helpers shared by the solvers.

use num_bigint::BigUint;

/// Number of decimal digits of `x` (`0` has one digit).
#[inline]
pub fn digit_count(x: u128) -> u32 {
    x.checked_ilog10().map_or(1, |l| l + 1)
}

/// Digits of `x` sorted ascending; equal keys mean one is a permutation of the other.
pub fn sorted_digits(x: u64) -> Vec<u8> {
    let mut ds: Vec<u8> = x.to_string().bytes().map(|b| b - b'0').collect();
    ds.sort_unstable();
    ds
}

/// Sum of the decimal digits of an arbitrary-precision integer.
pub fn digit_sum(x: &BigUint) -> u32 {
    x.to_radix_le(10).iter().map(|&d| u32::from(d)).sum()
}
