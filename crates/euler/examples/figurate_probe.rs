//! Timing probe for the cyclic figurate search.
//!
//! Prints the cycle, its sum, the visit counters and the time spent building
//! tables versus searching, for every seed family. Run with
//! `cargo run -p euler --example figurate_probe --release`.

use std::time::Instant;

use euler::figurate::{build_tables, find_cycle_with_stats, SearchCfg, Side, TableCfg};

fn main() {
    let build_start = Instant::now();
    let tables = build_tables(TableCfg::default());
    let build_ms = build_start.elapsed().as_secs_f64() * 1e3;
    println!(
        "prefixes={} candidates={} build_time_ms={build_ms:.3}",
        tables.index().len(),
        tables.index().iter().count()
    );

    for seed in Side::ALL {
        let start = Instant::now();
        let (cycle, stats) = find_cycle_with_stats(&tables, SearchCfg { seed });
        let search_ms = start.elapsed().as_secs_f64() * 1e3;
        let cycle = cycle.expect("a cycle exists from every family");
        let path: Vec<String> = cycle
            .members()
            .iter()
            .map(|f| format!("{}({})", f.value, f.side.sides()))
            .collect();
        println!(
            "seed={} cycle=[{}] sum={} visits={} seeds_tried={} search_time_ms={search_ms:.3}",
            seed.name(),
            path.join(" "),
            cycle.sum(),
            stats.visits,
            stats.seeds_tried
        );
    }
}
