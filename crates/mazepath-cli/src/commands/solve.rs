//! `solve`: build the matrix, run A*, and print the move sequence.

use anyhow::{Context, Result};

use mazepath_cli::output::{format_solve_text, render_json, OutputFormat, SolveDocument};
use mazepath_cli::terminal::ColorPalette;
use mazepath_lib::{solve_maze, SearchLimits, SolveRequest};

use super::source::{GoalArgs, MazeSourceArgs};

/// Options specific to `solve`.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    pub max_expansions: Option<usize>,
    pub show_matrix: bool,
}

/// Solve a maze. "No path" is reported on stdout and is not a failure.
pub fn handle_solve(
    source: &MazeSourceArgs,
    goal: &GoalArgs,
    options: SolveOptions,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let grid = source.load()?;
    let limits = options
        .max_expansions
        .map_or_else(SearchLimits::unlimited, SearchLimits::with_max_expansions);
    let request = SolveRequest {
        goal_marker: goal.goal_marker(),
        goal_policy: goal.policy(),
        limits,
    };
    let report = solve_maze(&grid, &request).context("failed to solve maze")?;

    match format {
        OutputFormat::Json => render_json(&SolveDocument::new(&report, options.show_matrix))?,
        OutputFormat::Text => println!(
            "{}",
            format_solve_text(&report, options.show_matrix, palette)
        ),
    }
    Ok(())
}
