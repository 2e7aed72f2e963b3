use euler::{Problem, Solved, SolveError, PROBLEMS};
use serde::Serialize;
use std::process::Command;

/// One solved problem as printed by `run --json` and `report`.
#[derive(Debug, Serialize)]
pub struct SolvedRecord {
    pub id: u32,
    pub title: &'static str,
    pub answer: String,
    pub elapsed_ms: f64,
}

impl SolvedRecord {
    pub fn new(problem: &'static Problem, solved: &Solved) -> Self {
        Self {
            id: solved.id,
            title: problem.title,
            answer: solved.answer.clone(),
            elapsed_ms: solved.elapsed.as_secs_f64() * 1e3,
        }
    }
}

/// Results of a full run plus the code revision that produced them.
#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub results: Vec<SolvedRecord>,
}

impl Report {
    pub fn new(solved: &[(&'static Problem, Solved)]) -> Self {
        Self {
            code_rev: current_git_rev(),
            results: solved
                .iter()
                .map(|(p, s)| SolvedRecord::new(p, s))
                .collect(),
        }
    }
}

/// Solve every catalogued problem in id order; stops at the first failure.
pub fn solve_all() -> Result<Vec<(&'static Problem, Solved)>, SolveError> {
    PROBLEMS
        .iter()
        .map(|p| -> Result<_, SolveError> {
            let solved = p.run()?;
            tracing::info!(
                id = p.id,
                answer = %solved.answer,
                elapsed_ms = solved.elapsed.as_secs_f64() * 1e3,
                "solved"
            );
            Ok((p, solved))
        })
        .collect()
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|s| !s.is_empty())
}
