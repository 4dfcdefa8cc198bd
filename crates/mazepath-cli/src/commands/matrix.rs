//! `matrix`: build and print the traversability matrix of a maze.

use anyhow::{Context, Result};

use mazepath_cli::output::{format_matrix_text, render_json, MatrixDocument, OutputFormat};
use mazepath_cli::terminal::ColorPalette;
use mazepath_lib::MatrixBuilder;

use super::source::{GoalArgs, MazeSourceArgs};

pub fn handle_matrix(
    source: &MazeSourceArgs,
    goal: &GoalArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let grid = source.load()?;
    let matrix = MatrixBuilder::new()
        .with_goal_marker(goal.goal_marker())
        .with_goal_policy(goal.policy())
        .build(&grid)
        .context("failed to build traversability matrix")?;

    match format {
        OutputFormat::Json => render_json(&MatrixDocument::from(&matrix))?,
        OutputFormat::Text => println!("{}", format_matrix_text(&matrix, palette)),
    }
    Ok(())
}
