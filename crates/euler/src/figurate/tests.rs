//! Tests for table construction and the cycle search.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::build::four_digit_members;
use super::*;
use crate::digits::digit_count;
use crate::SolveError;

fn default_tables() -> FigurateTables {
    build_tables(TableCfg::default())
}

#[test]
fn formulas_match_listed_terms() {
    let first = |side: Side| (1..=5).map(|n| side.value(n)).collect::<Vec<_>>();
    assert_eq!(first(Side::Triangle), [1, 3, 6, 10, 15]);
    assert_eq!(first(Side::Square), [1, 4, 9, 16, 25]);
    assert_eq!(first(Side::Pentagonal), [1, 5, 12, 22, 35]);
    assert_eq!(first(Side::Hexagonal), [1, 6, 15, 28, 45]);
    assert_eq!(first(Side::Heptagonal), [1, 7, 18, 34, 55]);
    assert_eq!(first(Side::Octagonal), [1, 8, 21, 40, 65]);
    // P3,127 = 8128, P4,91 = 8281, P5,44 = 2882
    assert_eq!(Side::Triangle.value(127), 8128);
    assert_eq!(Side::Square.value(91), 8281);
    assert_eq!(Side::Pentagonal.value(44), 2882);
}

#[test]
fn sides_round_trip_through_side_count() {
    for side in Side::ALL {
        assert_eq!(Side::from_sides(side.sides()), Some(side));
    }
    assert_eq!(Side::from_sides(2), None);
    assert_eq!(Side::from_sides(9), None);
}

proptest! {
    #[test]
    fn values_strictly_increase(k in 0usize..CYCLE_LEN, n in 1u32..500) {
        let side = Side::ALL[k];
        prop_assert!(side.value(n + 1) > side.value(n));
    }

    #[test]
    fn in_range_values_have_four_digits(k in 0usize..CYCLE_LEN, n in 1u32..200) {
        let v = Side::ALL[k].value(n);
        if (1000..=9999).contains(&v) {
            prop_assert_eq!(digit_count(u128::from(v)), 4);
        }
    }

    #[test]
    fn start_hint_is_first_four_digit_index(k in 0usize..CYCLE_LEN) {
        let side = Side::ALL[k];
        let n0 = side.first_four_digit_index();
        prop_assert!(side.value(n0) >= 1000);
        prop_assert!(side.value(n0 - 1) < 1000);
    }
}

#[test]
fn index_has_no_zero_led_suffix() {
    let t = default_tables();
    assert!(!t.index().is_empty());
    assert!(t.index().iter().all(|f| f.suffix() >= 10));
    for side in Side::ALL {
        assert!(t.seeds(side).iter().all(|f| f.suffix() >= 10));
    }
}

#[test]
fn unpruned_index_keeps_zero_led_suffixes() {
    let t = build_tables(TableCfg {
        prune_zero_suffix: false,
        ..TableCfg::default()
    });
    assert!(t.index().iter().any(|f| f.suffix() < 10));
    // 2701 is both triangle (n=73) and hexagonal (n=37)
    assert!(t.contains(Side::Triangle, 2701));
    assert!(t.contains(Side::Hexagonal, 2701));
    let pruned = default_tables();
    assert!(!pruned.contains(Side::Triangle, 2701));
    assert!(pruned.contains(Side::Triangle, 1035));
    assert!(pruned.contains(Side::Hexagonal, 1035));
}

#[test]
fn member_counts_per_family() {
    let t = default_tables();
    let counts: Vec<usize> = Side::ALL.iter().map(|&s| t.seeds(s).len()).collect();
    assert_eq!(counts, [88, 53, 47, 44, 40, 30]);
    assert_eq!(t.index().len(), 90);
}

#[test]
fn candidate_lists_are_keyed_and_in_generation_order() {
    let t = default_tables();
    for prefix in 10u8..=99 {
        for side in Side::ALL {
            let cands = t.index().candidates(prefix, side);
            assert!(cands.iter().all(|f| f.prefix() == prefix && f.side == side));
            assert!(cands.windows(2).all(|w| w[0].n < w[1].n && w[0].value < w[1].value));
            assert!(cands.iter().all(|f| side.value(f.n) == u64::from(f.value)));
        }
    }
    assert!(t.index().get(5).is_none());
}

#[test]
fn start_hints_do_not_change_members() {
    let no_hints = TableCfg {
        start_hints: false,
        ..TableCfg::default()
    };
    for side in Side::ALL {
        assert_eq!(
            four_digit_members(side, no_hints),
            four_digit_members(side, TableCfg::default())
        );
    }
}

#[test]
fn canonical_sum() {
    assert_eq!(find_cyclic_figurate_sum(), Ok(28684));
}

#[test]
fn canonical_cycle_links_and_covers_all_sides() {
    let t = default_tables();
    let (cycle, stats) = find_cycle_with_stats(&t, SearchCfg::default());
    let cycle = cycle.expect("cycle exists");
    assert_eq!(cycle.values(), [1281, 8128, 2882, 8256, 5625, 2512]);
    let sides: Vec<Side> = cycle.members().iter().map(|f| f.side).collect();
    assert_eq!(
        sides,
        [
            Side::Octagonal,
            Side::Hexagonal,
            Side::Pentagonal,
            Side::Triangle,
            Side::Square,
            Side::Heptagonal,
        ]
    );
    assert!(cycle.is_closed());
    assert!(cycle.covers_all_sides());
    assert!(cycle.has_distinct_values());
    assert_eq!(cycle.sum(), 28684);
    assert_eq!(
        stats,
        SearchStats {
            visits: 117,
            seeds_tried: 3
        }
    );
}

#[test]
fn pruning_is_only_an_optimization() {
    let unpruned = build_tables(TableCfg {
        prune_zero_suffix: false,
        ..TableCfg::default()
    });
    let (cycle, stats) = find_cycle_with_stats(&unpruned, SearchCfg::default());
    let cycle = cycle.expect("cycle exists without pruning");
    assert_eq!(cycle.values(), [1281, 8128, 2882, 8256, 5625, 2512]);
    assert!(cycle.members().iter().all(|f| f.suffix() >= 10));
    assert!(cycle.has_distinct_values());
    // Extra zero-suffix octagonal seeds are entered and fail immediately.
    assert_eq!(stats.visits, 130);
}

#[test]
fn search_is_deterministic() {
    let t = default_tables();
    let a = find_cycle_with_stats(&t, SearchCfg::default());
    let b = find_cycle_with_stats(&t, SearchCfg::default());
    assert_eq!(a, b);
}

#[test]
fn every_seed_family_finds_a_rotation_of_the_same_cycle() {
    let t = default_tables();
    let mut canonical = find_cycle(&t, SearchCfg::default())
        .expect("cycle exists")
        .values();
    canonical.sort_unstable();
    for seed in Side::ALL {
        let (cycle, stats) = find_cycle_with_stats(&t, SearchCfg { seed });
        let cycle = cycle.expect("cycle exists from every family");
        assert_eq!(cycle.members()[0].side, seed);
        assert!(cycle.is_closed() && cycle.covers_all_sides());
        assert!(cycle.has_distinct_values());
        let mut vals = cycle.values();
        vals.sort_unstable();
        assert_eq!(vals, canonical);
        assert!(stats.seeds_tried <= t.seeds(seed).len());
    }
}

#[test]
fn repeated_value_fills_one_slot_only() {
    // 1212 in every family links to itself, so only reuse could close a cycle.
    let all: Vec<Figurate> = Side::ALL
        .iter()
        .map(|&side| Figurate {
            value: 1212,
            side,
            n: 0,
        })
        .collect();
    let mut members: [Vec<Figurate>; CYCLE_LEN] = Default::default();
    let mut by_prefix: BTreeMap<u8, BTreeMap<Side, Vec<Figurate>>> = BTreeMap::new();
    for f in &all {
        members[f.side.index()].push(*f);
        by_prefix.entry(f.prefix()).or_default().insert(f.side, vec![*f]);
    }
    let t = FigurateTables {
        index: PrefixIndex::from_map(by_prefix),
        members,
    };
    let (cycle, stats) = find_cycle_with_stats(&t, SearchCfg::default());
    assert!(cycle.is_none());
    assert_eq!(
        stats,
        SearchStats {
            visits: 1,
            seeds_tried: 1
        }
    );

    let reused = Cycle::from_path(&all).expect("six members");
    assert!(reused.is_closed() && reused.covers_all_sides());
    assert!(!reused.has_distinct_values());
}

#[test]
fn shuffled_tables_find_the_same_sum() {
    let t = default_tables();
    let mut rng = StdRng::seed_from_u64(61);
    for _ in 0..8 {
        let mut by_prefix: BTreeMap<u8, BTreeMap<Side, Vec<Figurate>>> = BTreeMap::new();
        for f in t.index().iter() {
            by_prefix
                .entry(f.prefix())
                .or_default()
                .entry(f.side)
                .or_default()
                .push(*f);
        }
        for v in by_prefix.values_mut().flat_map(|m| m.values_mut()) {
            v.shuffle(&mut rng);
        }
        let mut members = t.members.clone();
        for m in members.iter_mut() {
            m.shuffle(&mut rng);
        }
        let shuffled = FigurateTables {
            index: PrefixIndex::from_map(by_prefix),
            members,
        };
        let cycle = find_cycle(&shuffled, SearchCfg::default()).expect("cycle exists");
        assert_eq!(cycle.sum(), 28684);
    }
}

#[test]
fn empty_tables_report_not_found() {
    let t = FigurateTables {
        index: PrefixIndex::default(),
        members: Default::default(),
    };
    let (cycle, stats) = find_cycle_with_stats(&t, SearchCfg::default());
    assert!(cycle.is_none());
    assert_eq!(stats, SearchStats::default());
}

#[test]
fn dead_end_seed_is_rejected() {
    // A lone octagonal number whose suffix has no continuation.
    let seed = Figurate {
        value: 1045,
        side: Side::Octagonal,
        n: 19,
    };
    let mut members: [Vec<Figurate>; CYCLE_LEN] = Default::default();
    members[Side::Octagonal.index()].push(seed);
    let mut by_prefix: BTreeMap<u8, BTreeMap<Side, Vec<Figurate>>> = BTreeMap::new();
    by_prefix
        .entry(seed.prefix())
        .or_default()
        .insert(Side::Octagonal, vec![seed]);
    let t = FigurateTables {
        index: PrefixIndex::from_map(by_prefix),
        members,
    };
    let (cycle, stats) = find_cycle_with_stats(&t, SearchCfg::default());
    assert!(cycle.is_none());
    assert_eq!(
        stats,
        SearchStats {
            visits: 1,
            seeds_tried: 1
        }
    );
    let err = find_cycle(&t, SearchCfg::default()).ok_or(SolveError::NoCycle);
    assert_eq!(err, Err(SolveError::NoCycle));
}
