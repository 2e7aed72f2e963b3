//! Problem catalog and timed dispatch.
//!
//! Each entry carries the text shown in the solutions menu and a solver that
//! returns the answer already formatted for display.

use std::time::{Duration, Instant};

use crate::{continued, cubes, figurate, powers, SolveError};

/// One catalogued problem.
#[derive(Clone, Copy, Debug)]
pub struct Problem {
    pub id: u32,
    pub title: &'static str,
    /// Statement lines, without the question.
    pub description: &'static [&'static str],
    pub question: &'static str,
    pub solve: fn() -> Result<String, SolveError>,
}

/// Result of one timed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solved {
    pub id: u32,
    pub answer: String,
    pub elapsed: Duration,
}

/// All solvable problems, ascending by id.
pub static PROBLEMS: &[Problem] = &[
    Problem {
        id: 61,
        title: "Cyclical figurate numbers",
        description: &[
            "Triangle, square, pentagonal, hexagonal, heptagonal, and octagonal numbers are all figurate (polygonal) numbers.",
            "The ordered set of three 4-digit numbers: 8128, 2882, 8281, is cyclic: the last two digits of each number is the first two digits of the next number (including the last number with the first).",
            "Each polygonal type: triangle (P3,127=8128), square (P4,91=8281), and pentagonal (P5,44=2882), is represented by a different number in the set.",
        ],
        question: "Find the sum of the only ordered set of six cyclic 4-digit numbers for which each polygonal type: triangle, square, pentagonal, hexagonal, heptagonal, and octagonal, is represented by a different number in the set.",
        solve: solve_61,
    },
    Problem {
        id: 62,
        title: "Cubic permutations",
        description: &[
            "The cube, 41063625 (345^3), can be permuted to produce two other cubes: 56623104 (384^3) and 66430125 (405^3).",
            "In fact, 41063625 is the smallest cube which has exactly three permutations of its digits which are also cube.",
        ],
        question: "Find the smallest cube for which exactly five permutations of its digits are cube.",
        solve: solve_62,
    },
    Problem {
        id: 63,
        title: "Powerful digit counts",
        description: &[
            "The 5-digit number, 16807=7^5, is also a fifth power. Similarly, the 9-digit number, 134217728=8^9, is a ninth power.",
        ],
        question: "How many n-digit positive integers exist which are also an nth power?",
        solve: solve_63,
    },
    Problem {
        id: 64,
        title: "Odd period square roots",
        description: &[
            "Generate the leading digits of the continued fraction form of the square roots and detect repeating digits.",
        ],
        question: "How many continued fractions for N≤10000 have an odd period?",
        solve: solve_64,
    },
    Problem {
        id: 65,
        title: "Convergents of e",
        description: &[
            "Find the ith element from the sequence of partial continued fractions of e.",
        ],
        question: "Find the sum of digits in the numerator of the 100th convergent of the continued fraction for e.",
        solve: solve_65,
    },
];

fn solve_61() -> Result<String, SolveError> {
    figurate::find_cyclic_figurate_sum().map(|s| s.to_string())
}

fn solve_62() -> Result<String, SolveError> {
    cubes::smallest_cube_with_permutations(5).map(|c| c.to_string())
}

fn solve_63() -> Result<String, SolveError> {
    Ok(powers::count_powerful_digit_counts().to_string())
}

fn solve_64() -> Result<String, SolveError> {
    Ok(continued::count_odd_periods(10_000).to_string())
}

fn solve_65() -> Result<String, SolveError> {
    Ok(continued::e_convergent_digit_sum(100).to_string())
}

/// Look up a problem by id.
pub fn problem(id: u32) -> Option<&'static Problem> {
    PROBLEMS.iter().find(|p| p.id == id)
}

/// Solve one problem and time it.
pub fn run(id: u32) -> Result<Solved, SolveError> {
    let p = problem(id).ok_or(SolveError::UnknownProblem { id })?;
    p.run()
}

impl Problem {
    pub fn run(&self) -> Result<Solved, SolveError> {
        let start = Instant::now();
        let answer = (self.solve)()?;
        Ok(Solved {
            id: self.id,
            answer,
            elapsed: start.elapsed(),
        })
    }
}
