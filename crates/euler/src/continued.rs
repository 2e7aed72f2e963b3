//! Continued fractions: square-root periods (Problem 64) and convergents of e (Problem 65).
//!
//! Square roots use the exact integer recurrence
//! `m' = d a - m`, `d' = (n - m'^2) / d`, `a' = (a0 + m') / d'`.
//! The expansion of a non-square root is `[a0; (a1, ..., a_p)]` with
//! `a_p = 2 a0`, so the first term equal to `2 a0` closes the period.

use num_bigint::BigUint;

use crate::digits::digit_sum;

fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    // The float estimate can be off by one either way; near u64::MAX the
    // squares themselves overflow, which counts as "too big".
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// `(a0, period)` for sqrt(n); `None` for perfect squares.
pub fn sqrt_continued_fraction(n: u64) -> Option<(u64, Vec<u64>)> {
    let a0 = isqrt(n);
    if a0 * a0 == n {
        return None;
    }
    let (mut m, mut d, mut a) = (0u64, 1u64, a0);
    let mut period = Vec::new();
    while a != 2 * a0 {
        m = d * a - m;
        d = (n - m * m) / d;
        a = (a0 + m) / d;
        period.push(a);
    }
    Some((a0, period))
}

/// Period length of the continued fraction of sqrt(n).
pub fn sqrt_period(n: u64) -> Option<u32> {
    sqrt_continued_fraction(n).map(|(_, p)| p.len() as u32)
}

/// How many `n <= limit` have a square root with odd period.
pub fn count_odd_periods(limit: u64) -> u32 {
    (2..=limit)
        .filter_map(sqrt_period)
        .filter(|p| p % 2 == 1)
        .count() as u32
}

/// k-th partial quotient of e = [2; 1, 2, 1, 1, 4, 1, 1, 6, ...].
pub fn e_partial_quotient(k: u32) -> u32 {
    match k {
        0 => 2,
        k if k % 3 == 2 => 2 * (k / 3 + 1),
        _ => 1,
    }
}

/// Numerator of the n-th convergent of e (n = 1 is `2/1`).
///
/// `n = 0` yields the seed numerator `h_{-1} = 1` of the recurrence
/// `h_k = a_k h_{k-1} + h_{k-2}`.
pub fn e_convergent_numerator(n: u32) -> BigUint {
    let mut prev = BigUint::from(1u32);
    if n == 0 {
        return prev;
    }
    let mut cur = BigUint::from(e_partial_quotient(0));
    for k in 1..n {
        let next = &cur * e_partial_quotient(k) + &prev;
        prev = std::mem::replace(&mut cur, next);
    }
    cur
}

/// Digit sum of the numerator of the n-th convergent of e.
pub fn e_convergent_digit_sum(n: u32) -> u32 {
    digit_sum(&e_convergent_numerator(n))
}
