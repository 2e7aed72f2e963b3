//! Markdown solutions menu rendered from solved problems.
//!
//! Input is a list of `MenuRow` records built from the catalog and timed
//! runs; output is the full document as a `String`. Callers decide where it
//! goes.

use std::time::Duration;

use crate::problems::{Problem, Solved};

const OFFICIAL_URL: &str = "https://projecteuler.net/problem=";

/// One table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRow {
    pub id: u32,
    pub title: String,
    pub description: Vec<String>,
    pub question: String,
    pub answer: String,
    pub elapsed: Duration,
}

impl MenuRow {
    pub fn from_solved(problem: &Problem, solved: &Solved) -> Self {
        Self {
            id: problem.id,
            title: problem.title.to_string(),
            description: problem.description.iter().map(|s| s.to_string()).collect(),
            question: problem.question.to_string(),
            answer: solved.answer.clone(),
            elapsed: solved.elapsed,
        }
    }
}

/// Render the whole menu document.
pub fn render_menu(rows: &[MenuRow]) -> String {
    let mut out = String::new();
    out.push_str("## <p align=\"center\"> Project Euler Menu </p>\n\n");
    out.push_str(
        "**This repository contains solutions to the problems of Project Euler** \
         (<a href=\"https://projecteuler.net/about\" title=\"https://projecteuler.net/about\">Official website</a> / \
         <a href=\"https://en.wikipedia.org/wiki/Project_Euler\" title=\"https://en.wikipedia.org/wiki/Project_Euler\">Wikipedia</a>)\n\n",
    );
    out.push_str(
        "All solutions can be run from the **command line** (eg. `euler run 61` executes the solution for Problem 61)\n\n",
    );
    out.push_str(
        "Click the **Official Link** to go to the **official problem statement** on the Project Euler website\n\n",
    );
    out.push_str("The **answers** and **time of execution** can be found in the table below\n\n<br/><br/>\n\n");
    out.push_str("## <p align=\"center\"> Problems & Solutions </p>\n");
    out.push_str("**Problem** | **Description**| **Result** | **Time** | **Official Link**\n");
    out.push_str(" ------------|----------------|------------|----------|---------- \n");
    for row in rows {
        out.push_str(&render_row(row));
        out.push_str("<br/><br/>\n");
    }
    out.push_str("\n\n<a href=\"#\">Go to top</a>");
    out
}

/// One table row, without the trailing line break.
pub fn render_row(row: &MenuRow) -> String {
    let description = row
        .description
        .iter()
        .map(|l| escape_cell(l))
        .collect::<Vec<_>>()
        .join("<br/>");
    let separator = if description.is_empty() {
        ""
    } else {
        "<br/><br/>"
    };
    format!(
        "**{id}.** {title} | {description}{separator}<strong>Question:</strong> {question} | {answer} | {time} | [:arrow_upper_right:]({OFFICIAL_URL}{id})",
        id = row.id,
        title = escape_cell(&row.title),
        question = escape_cell(&row.question),
        answer = escape_cell(&row.answer),
        time = format_elapsed(row.elapsed),
    )
}

/// Escape characters that would break a markdown table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// µs below 1 ms, ms below 1 s, seconds otherwise.
pub fn format_elapsed(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{} µs", d.as_micros())
    } else if d < Duration::from_secs(1) {
        format!("{:.2} ms", d.as_secs_f64() * 1e3)
    } else {
        format!("{:.3} s", d.as_secs_f64())
    }
}
