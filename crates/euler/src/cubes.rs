//! Cubic permutations (Problem 62).
//!
//! Cubes are scanned one digit-length block at a time and grouped by their
//! sorted digits. A class can only grow while its cubes share a length, so a
//! block is complete once the next cube gains a digit; only then is the
//! "exactly k" count final.

use std::collections::HashMap;

use crate::digits::{digit_count, sorted_digits};
use crate::SolveError;

/// Smallest cube for which exactly `k` permutations of its digits (itself
/// included) are cubes.
pub fn smallest_cube_with_permutations(k: usize) -> Result<u64, SolveError> {
    if k == 0 {
        return Err(SolveError::NotFound {
            what: "cube permutation class of size 0",
        });
    }
    let mut base: u64 = 1;
    let mut digits = 1;
    loop {
        let mut classes: HashMap<Vec<u8>, Vec<u64>> = HashMap::new();
        loop {
            let cube = base
                .checked_pow(3)
                .ok_or(SolveError::Overflow { what: "cube" })?;
            if digit_count(u128::from(cube)) != digits {
                break;
            }
            classes.entry(sorted_digits(cube)).or_default().push(cube);
            base += 1;
        }
        // Classes are filled in ascending order, so c[0] is the class minimum.
        let best = classes
            .values()
            .filter(|c| c.len() == k)
            .map(|c| c[0])
            .min();
        if let Some(best) = best {
            return Ok(best);
        }
        digits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_permutations() {
        // 41063625 (345^3), 56623104 (384^3), 66430125 (405^3)
        assert_eq!(smallest_cube_with_permutations(3), Ok(41_063_625));
    }

    #[test]
    fn five_permutations() {
        assert_eq!(smallest_cube_with_permutations(5), Ok(127_035_954_683));
    }

    #[test]
    fn small_classes() {
        assert_eq!(smallest_cube_with_permutations(1), Ok(1));
        // 125 and 512
        assert_eq!(smallest_cube_with_permutations(2), Ok(125));
        assert_eq!(smallest_cube_with_permutations(4), Ok(1_006_012_008));
    }

    #[test]
    fn empty_class_is_not_found() {
        assert!(matches!(
            smallest_cube_with_permutations(0),
            Err(SolveError::NotFound { .. })
        ));
    }
}
