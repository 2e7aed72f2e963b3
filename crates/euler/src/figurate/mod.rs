//! Cyclic figurate numbers (Problem 61): prefix tables and DFS.
//!
//! Purpose
//! - Find the only ordered set of six cyclic 4-digit numbers in which each
//!   polygonal family (triangle, square, pentagonal, hexagonal, heptagonal,
//!   octagonal) is represented by a different number, and return its sum.
//!
//! Why this design
//! - Tables are built once and frozen: `PrefixIndex` has no mutating API after
//!   `build_tables` returns, so the search only ever reads it.
//! - The search keeps one explicit path stack with push/pop backtracking and a
//!   bitmask of filled families. Recursion depth is bounded by six.
//! - Ordering is fixed (ascending seeds, ascending side-count, generation order
//!   within a family) so visit counts are reproducible.
//!
//! Layout
//! - `types.rs` (families, candidates, index, cycle, configs),
//!   `build.rs` (table construction), `dfs.rs` (search and entry point).
//!
//! References
//! - <https://projecteuler.net/problem=61>

mod build;
mod dfs;
mod types;

pub use build::build_tables;
pub use dfs::{find_cycle, find_cycle_with_stats, find_cyclic_figurate_sum};
pub use types::{
    Cycle, Figurate, FigurateTables, PrefixIndex, SearchCfg, SearchStats, Side, TableCfg,
    CYCLE_LEN,
};

#[cfg(test)]
mod tests;
