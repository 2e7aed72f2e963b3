use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use euler::figurate::{build_tables, find_cycle_with_stats, SearchCfg, TableCfg};
use euler::menu::{render_menu, MenuRow};
use euler::PROBLEMS;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{solve_all, Report, SolvedRecord};

#[derive(Parser)]
#[command(name = "euler", version)]
#[command(about = "Project Euler solver runner")]
struct Cmd {
    /// Log at debug level (search counters, per-problem timings)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one problem and print its answer
    Run {
        id: u32,
        /// Print a JSON object instead of the bare answer
        #[arg(long)]
        json: bool,
    },
    /// List the catalogued problems
    List,
    /// Solve every problem and print the markdown solutions menu
    Menu,
    /// Solve every problem and print a JSON report with the code revision
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run { id, json } => run(id, json),
        Action::List => list(),
        Action::Menu => menu(),
        Action::Report => report(),
    }
}

fn run(id: u32, json: bool) -> Result<()> {
    let problem = euler::problem(id)
        .with_context(|| format!("unknown problem {id} (available: {})", available_ids()))?;
    tracing::info!(id, title = problem.title, "run");
    let solved = problem
        .run()
        .with_context(|| format!("solving problem {id}"))?;
    tracing::info!(
        id,
        answer = %solved.answer,
        elapsed_ms = solved.elapsed.as_secs_f64() * 1e3,
        "solved"
    );
    if id == 61 && tracing::enabled!(Level::DEBUG) {
        log_figurate_counters();
    }
    if json {
        let rec = SolvedRecord::new(problem, &solved);
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        println!("{}", solved.answer);
    }
    Ok(())
}

fn list() -> Result<()> {
    for p in PROBLEMS {
        println!("{:>3}  {}", p.id, p.title);
    }
    Ok(())
}

fn menu() -> Result<()> {
    let solved = solve_all().context("solving catalogued problems")?;
    let rows: Vec<MenuRow> = solved
        .iter()
        .map(|(p, s)| MenuRow::from_solved(p, s))
        .collect();
    println!("{}", render_menu(&rows));
    Ok(())
}

fn report() -> Result<()> {
    let solved = solve_all().context("solving catalogued problems")?;
    let report = Report::new(&solved);
    tracing::info!(code_rev = %report.code_rev, problems = report.results.len(), "report");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Re-run the Problem 61 search to log its work counters.
fn log_figurate_counters() {
    let tables = build_tables(TableCfg::default());
    let cfg = SearchCfg::default();
    let (cycle, stats) = find_cycle_with_stats(&tables, cfg);
    tracing::debug!(
        seed = cfg.seed.name(),
        prefixes = tables.index().len(),
        visits = stats.visits,
        seeds_tried = stats.seeds_tried,
        cycle = ?cycle.map(|c| c.values()),
        "figurate search"
    );
}

fn available_ids() -> String {
    PROBLEMS
        .iter()
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
