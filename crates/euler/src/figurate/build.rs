//! Table construction (family members and prefix index) for the cycle search.

use std::collections::BTreeMap;

use super::types::{Figurate, FigurateTables, PrefixIndex, Side, TableCfg, CYCLE_LEN};

const MIN_VALUE: u64 = 1000;
const MAX_VALUE: u64 = 9999;

/// Build the prefix index and per-family member lists for all six families.
///
/// Insertion order is ascending side-count, then ascending `n`, so every
/// candidate list in the index is in generation order.
pub fn build_tables(cfg: TableCfg) -> FigurateTables {
    let mut by_prefix: BTreeMap<u8, BTreeMap<Side, Vec<Figurate>>> = BTreeMap::new();
    let mut members: [Vec<Figurate>; CYCLE_LEN] = Default::default();
    for side in Side::ALL {
        for f in four_digit_members(side, cfg) {
            members[side.index()].push(f);
            by_prefix
                .entry(f.prefix())
                .or_default()
                .entry(side)
                .or_default()
                .push(f);
        }
    }
    FigurateTables {
        index: PrefixIndex::from_map(by_prefix),
        members,
    }
}

/// 4-digit members of one family in ascending `n`, after the zero-suffix filter.
pub(super) fn four_digit_members(side: Side, cfg: TableCfg) -> Vec<Figurate> {
    let start = if cfg.start_hints {
        side.first_four_digit_index()
    } else {
        1
    };
    let mut out = Vec::new();
    for n in start.. {
        let value = side.value(n);
        // P_s is increasing in n, so the first value past the range ends the family.
        if value > MAX_VALUE {
            break;
        }
        if value < MIN_VALUE {
            continue;
        }
        let f = Figurate {
            value: value as u16,
            side,
            n,
        };
        // "ab0c" can never be followed: no 4-digit number starts with 0.
        if cfg.prune_zero_suffix && f.suffix() < 10 {
            continue;
        }
        out.push(f);
    }
    out
}
