//! Depth-first cycle search over the prefix index with push/pop backtracking.

use crate::SolveError;

use super::build::build_tables;
use super::types::{
    Cycle, Figurate, FigurateTables, SearchCfg, SearchStats, Side, TableCfg, CYCLE_LEN,
};

/// Search for a closed six-family cycle seeded from `cfg.seed`.
///
/// Returns `None` when every seed is exhausted.
pub fn find_cycle(tables: &FigurateTables, cfg: SearchCfg) -> Option<Cycle> {
    find_cycle_with_stats(tables, cfg).0
}

/// Same as `find_cycle`, also returning visit counters.
pub fn find_cycle_with_stats(
    tables: &FigurateTables,
    cfg: SearchCfg,
) -> (Option<Cycle>, SearchStats) {
    let mut runner = DfsRunner::new(tables);
    let found = runner.solve(cfg.seed);
    (found, runner.stats)
}

/// Convenience: build default tables and return the sum of the cycle.
pub fn find_cyclic_figurate_sum() -> Result<u32, SolveError> {
    let tables = build_tables(TableCfg::default());
    find_cycle(&tables, SearchCfg::default())
        .map(|c| c.sum())
        .ok_or(SolveError::NoCycle)
}

/// DFS runner carrying the read-only tables and the current path.
struct DfsRunner<'a> {
    t: &'a FigurateTables,
    stack: Vec<Figurate>,
    filled: u8,
    stats: SearchStats,
}

impl<'a> DfsRunner<'a> {
    fn new(t: &'a FigurateTables) -> Self {
        Self {
            t,
            stack: Vec::with_capacity(CYCLE_LEN),
            filled: 0,
            stats: SearchStats::default(),
        }
    }

    fn solve(&mut self, seed: Side) -> Option<Cycle> {
        let t = self.t;
        for &s in t.seeds(seed) {
            self.stats.seeds_tried += 1;
            self.stack.push(s);
            self.filled = seed.bit();
            let found = self.recur();
            self.stack.clear();
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn recur(&mut self) -> Option<Cycle> {
        self.stats.visits += 1;
        let last = *self.stack.last()?;
        if self.stack.len() == CYCLE_LEN {
            // Closing: accept iff the last suffix wraps around to the seed prefix.
            return if last.links_to(&self.stack[0]) {
                Cycle::from_path(&self.stack)
            } else {
                None
            };
        }
        let t = self.t;
        let next = t.index().get(last.suffix())?;
        for side in Side::ALL {
            if self.filled & side.bit() != 0 {
                continue;
            }
            let Some(cands) = next.get(&side) else {
                continue;
            };
            for &c in cands {
                // 8128 is triangle and hexagonal; it may fill only one slot.
                if self.stack.iter().any(|f| f.value == c.value) {
                    continue;
                }
                self.stack.push(c);
                self.filled |= side.bit();
                let found = self.recur();
                self.stack.pop();
                self.filled &= !side.bit();
                if found.is_some() {
                    return found;
                }
            }
        }
        None
    }
}
