//! Project Euler solvers (problems 61–65) and the solutions menu.
//!
//! Every solver is a pure function that computes its answer from closed-form
//! arithmetic; nothing here performs I/O or logging. The `euler` binary in
//! `crates/cli` dispatches on a problem id and prints results.
//!
//! Layout
//! - `figurate`: cyclic polygonal-number search (Problem 61), split into
//!   table building and DFS like the other search modules.
//! - `cubes`, `powers`, `continued`: the remaining one-off numeric routines.
//! - `problems`: static catalog and timed dispatch.
//! - `menu`: markdown table renderer over solved problems.

pub mod continued;
pub mod cubes;
pub mod digits;
mod error;
pub mod figurate;
pub mod menu;
pub mod powers;
pub mod problems;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SolveError;
pub use problems::{problem, run, Problem, Solved, PROBLEMS};

/// Common exports for callers that only need the entry points.
pub mod prelude {
    pub use crate::figurate::{
        build_tables, find_cycle, find_cycle_with_stats, find_cyclic_figurate_sum, Cycle,
        Figurate, SearchCfg, Side, TableCfg,
    };
    pub use crate::menu::{render_menu, MenuRow};
    pub use crate::problems::{problem, run, Problem, Solved, PROBLEMS};
    pub use crate::SolveError;
}
