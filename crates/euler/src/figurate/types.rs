//! Data types for the figurate tables and search state.
//!
//! Kept small and explicit to make `build` and `dfs` modules easy to read.

use std::collections::BTreeMap;

/// Number of families, and therefore the length of a complete cycle.
pub const CYCLE_LEN: usize = 6;

/// Polygonal family, ordered by side-count (3..=8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Triangle,
    Square,
    Pentagonal,
    Hexagonal,
    Heptagonal,
    Octagonal,
}

impl Side {
    /// All families in ascending side-count; this is the DFS family order.
    pub const ALL: [Side; CYCLE_LEN] = [
        Side::Triangle,
        Side::Square,
        Side::Pentagonal,
        Side::Hexagonal,
        Side::Heptagonal,
        Side::Octagonal,
    ];

    #[inline]
    pub fn sides(self) -> u32 {
        self.index() as u32 + 3
    }

    pub fn from_sides(sides: u32) -> Option<Side> {
        let k = usize::try_from(sides.checked_sub(3)?).ok()?;
        Side::ALL.get(k).copied()
    }

    /// P_s(n). Written as `(a n^2 - b n) / 2` forms so `n = 0` cannot underflow.
    #[inline]
    pub fn value(self, n: u32) -> u64 {
        let n = u64::from(n);
        match self {
            Side::Triangle => n * (n + 1) / 2,
            Side::Square => n * n,
            Side::Pentagonal => (3 * n * n - n) / 2,
            Side::Hexagonal => 2 * n * n - n,
            Side::Heptagonal => (5 * n * n - 3 * n) / 2,
            Side::Octagonal => 3 * n * n - 2 * n,
        }
    }

    /// Smallest `n` with `value(n) >= 1000`.
    pub fn first_four_digit_index(self) -> u32 {
        match self {
            Side::Triangle => 45,
            Side::Square => 32,
            Side::Pentagonal => 26,
            Side::Hexagonal => 23,
            Side::Heptagonal => 21,
            Side::Octagonal => 19,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Triangle => "triangle",
            Side::Square => "square",
            Side::Pentagonal => "pentagonal",
            Side::Hexagonal => "hexagonal",
            Side::Heptagonal => "heptagonal",
            Side::Octagonal => "octagonal",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub(crate) fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// A 4-digit member of one family: `value = P_side(n)`.
///
/// The same value may appear under two families (8128 is both triangle and
/// hexagonal); each appearance is a separate candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Figurate {
    pub value: u16,
    pub side: Side,
    pub n: u32,
}

impl Figurate {
    /// First two digits (10..=99).
    #[inline]
    pub fn prefix(&self) -> u8 {
        (self.value / 100) as u8
    }

    /// Last two digits; values below 10 have a leading zero.
    #[inline]
    pub fn suffix(&self) -> u8 {
        (self.value % 100) as u8
    }

    #[inline]
    pub fn links_to(&self, next: &Figurate) -> bool {
        self.suffix() == next.prefix()
    }
}

/// prefix → side → candidates in generation order.
///
/// Frozen once `build_tables` returns; only read accessors are public.
#[derive(Clone, Debug, Default)]
pub struct PrefixIndex {
    by_prefix: BTreeMap<u8, BTreeMap<Side, Vec<Figurate>>>,
}

impl PrefixIndex {
    pub(super) fn from_map(by_prefix: BTreeMap<u8, BTreeMap<Side, Vec<Figurate>>>) -> Self {
        Self { by_prefix }
    }

    /// All candidates starting with `prefix`, grouped by family; `None` prunes.
    #[inline]
    pub fn get(&self, prefix: u8) -> Option<&BTreeMap<Side, Vec<Figurate>>> {
        self.by_prefix.get(&prefix)
    }

    pub fn candidates(&self, prefix: u8, side: Side) -> &[Figurate] {
        self.get(prefix)
            .and_then(|m| m.get(&side))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Figurate> + '_ {
        self.by_prefix
            .values()
            .flat_map(|m| m.values())
            .flat_map(|v| v.iter())
    }
}

/// Output of `build_tables`: the prefix index plus per-family members.
#[derive(Clone, Debug)]
pub struct FigurateTables {
    pub(super) index: PrefixIndex,
    pub(super) members: [Vec<Figurate>; CYCLE_LEN],
}

impl FigurateTables {
    #[inline]
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Members of one family, ascending by value.
    #[inline]
    pub fn seeds(&self, side: Side) -> &[Figurate] {
        &self.members[side.index()]
    }

    pub fn contains(&self, side: Side, value: u16) -> bool {
        self.seeds(side)
            .binary_search_by_key(&value, |f| f.value)
            .is_ok()
    }
}

/// A closed path of six candidates, one per family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    members: [Figurate; CYCLE_LEN],
}

impl Cycle {
    pub(super) fn from_path(path: &[Figurate]) -> Option<Self> {
        let members: [Figurate; CYCLE_LEN] = path.try_into().ok()?;
        Some(Self { members })
    }

    /// Members in search order; the first one is the seed.
    #[inline]
    pub fn members(&self) -> &[Figurate; CYCLE_LEN] {
        &self.members
    }

    pub fn values(&self) -> [u16; CYCLE_LEN] {
        self.members.map(|f| f.value)
    }

    pub fn sum(&self) -> u32 {
        self.members.iter().map(|f| u32::from(f.value)).sum()
    }

    /// Every adjacent pair links, including last → first.
    pub fn is_closed(&self) -> bool {
        (0..CYCLE_LEN).all(|i| self.members[i].links_to(&self.members[(i + 1) % CYCLE_LEN]))
    }

    /// Each family appears exactly once.
    pub fn covers_all_sides(&self) -> bool {
        let mask = self.members.iter().fold(0u8, |acc, f| acc | f.side.bit());
        mask.count_ones() as usize == CYCLE_LEN
    }

    /// No value appears twice, even under different families.
    pub fn has_distinct_values(&self) -> bool {
        let mut vals = self.values();
        vals.sort_unstable();
        vals.windows(2).all(|w| w[0] != w[1])
    }
}

/// Table construction options.
#[derive(Clone, Copy, Debug)]
pub struct TableCfg {
    /// Drop candidates whose suffix starts with 0; they can never be followed.
    pub prune_zero_suffix: bool,
    /// Start each family at `first_four_digit_index` instead of `n = 1`.
    pub start_hints: bool,
}

impl Default for TableCfg {
    fn default() -> Self {
        Self {
            prune_zero_suffix: true,
            start_hints: true,
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Family whose members seed the DFS. Octagonal has the fewest members.
    pub seed: Side,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            seed: Side::Octagonal,
        }
    }
}

/// Work counters for one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Path nodes entered, seeds included.
    pub visits: u64,
    pub seeds_tried: usize,
}
