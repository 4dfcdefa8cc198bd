//! Output formatting for matrices and solve reports.
//!
//! Text renderers build `String`s so they can be tested without capturing
//! stdout; JSON goes straight to stdout through [`render_json`].

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use mazepath_lib::{
    compact_moves, render_path_overlay, CellGrid, GeneratorAlgorithm, MazeSolveReport, Position,
    SolveOutcome, TraversabilityMatrix, PATH_MARKER,
};

use crate::terminal::ColorPalette;

/// Output format shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// JSON view of a traversability matrix.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixDocument {
    pub rows: usize,
    pub columns: usize,
    pub height: usize,
    pub width: usize,
    pub start: Position,
    pub goal: Option<Position>,
    pub lines: Vec<String>,
}

impl From<&TraversabilityMatrix> for MatrixDocument {
    fn from(matrix: &TraversabilityMatrix) -> Self {
        let (rows, columns) = matrix.maze_dimensions();
        Self {
            rows,
            columns,
            height: matrix.height(),
            width: matrix.width(),
            start: matrix.start(),
            goal: matrix.goal(),
            lines: matrix.to_lines(),
        }
    }
}

/// JSON view of a solve: the outcome plus, optionally, the matrix.
#[derive(Debug, Clone, Serialize)]
pub struct SolveDocument<'a> {
    pub rows: usize,
    pub columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<MatrixDocument>,
    pub outcome: &'a SolveOutcome,
}

impl<'a> SolveDocument<'a> {
    pub fn new(report: &'a MazeSolveReport, include_matrix: bool) -> Self {
        let (rows, columns) = report.matrix.maze_dimensions();
        Self {
            rows,
            columns,
            matrix: include_matrix.then(|| MatrixDocument::from(&report.matrix)),
            outcome: &report.outcome,
        }
    }
}

/// Summary printed after `generate` writes a grid.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    pub rows: usize,
    pub columns: usize,
    pub seed: u64,
    pub algorithm: GeneratorAlgorithm,
    pub goal_cells: Vec<(usize, usize)>,
}

impl GenerateSummary {
    pub fn new(grid: &CellGrid, algorithm: GeneratorAlgorithm, seed: u64) -> Self {
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            seed,
            algorithm,
            goal_cells: grid.goal_cells(),
        }
    }
}

/// Paint matrix characters according to `palette`.
///
/// Pillars and closed walls use the wall color; start, goal and path markers
/// get their own. Plain palettes return the text unchanged.
pub fn colorize_matrix(text: &str, palette: &ColorPalette) -> String {
    if palette.is_plain() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() * 4);
    for ch in text.chars() {
        let color = match ch {
            '#' | 'X' => palette.wall,
            'B' => palette.start,
            'G' => palette.goal,
            c if c == PATH_MARKER => palette.path,
            _ => "",
        };
        if color.is_empty() {
            out.push(ch);
        } else {
            out.push_str(color);
            out.push(ch);
            out.push_str(palette.reset);
        }
    }
    out
}

/// Text rendering of a bare matrix with a one-line heading.
pub fn format_matrix_text(matrix: &TraversabilityMatrix, palette: &ColorPalette) -> String {
    let (rows, columns) = matrix.maze_dimensions();
    let goal = matrix
        .goal()
        .map_or_else(|| "none".to_string(), |goal| goal.to_string());
    format!(
        "{}Maze {rows}x{columns}{} (start {}, goal {goal})\n{}",
        palette.emphasis,
        palette.reset,
        matrix.start(),
        colorize_matrix(&matrix.to_string(), palette)
    )
}

/// Text rendering of a solve report.
///
/// A solved maze lists the compacted and the raw move sequence; an
/// unsolved one states why. `show_matrix` appends the matrix, with the path
/// drawn over it when there is one.
pub fn format_solve_text(
    report: &MazeSolveReport,
    show_matrix: bool,
    palette: &ColorPalette,
) -> String {
    let (rows, columns) = report.matrix.maze_dimensions();
    let mut lines = Vec::new();
    match &report.outcome {
        SolveOutcome::Solved(solution) => {
            lines.push(format!(
                "{}Solved {rows}x{columns} maze{} from {} to {} in {} moves",
                palette.emphasis,
                palette.reset,
                solution.start,
                solution.goal,
                solution.hop_count()
            ));
            if !solution.moves.is_empty() {
                lines.push(format!("Summary: {}", compact_moves(&solution.moves)));
                let tokens: Vec<&str> = solution.moves.iter().map(|m| m.as_str()).collect();
                lines.push(format!("Moves: {}", tokens.join(" ")));
            }
            if show_matrix {
                let overlay = render_path_overlay(&report.matrix, &solution.steps);
                lines.push(colorize_matrix(&overlay, palette));
            }
        }
        SolveOutcome::NoPath { reason } => {
            lines.push(format!(
                "{}No path through {rows}x{columns} maze{}: {reason}",
                palette.emphasis, palette.reset
            ));
            if show_matrix {
                lines.push(colorize_matrix(&report.matrix.to_string(), palette));
            }
        }
    }
    lines.join("\n")
}

/// Text line describing a generated grid.
pub fn format_generate_text(summary: &GenerateSummary) -> String {
    let goals = if summary.goal_cells.is_empty() {
        "no goal cells".to_string()
    } else {
        let cells: Vec<String> = summary
            .goal_cells
            .iter()
            .map(|(row, col)| format!("({row}, {col})"))
            .collect();
        format!("goal cells {}", cells.join(", "))
    };
    format!(
        "Generated {}x{} maze with {} (seed {}); {goals}",
        summary.rows, summary.columns, summary.algorithm, summary.seed
    )
}

/// Write `value` to stdout as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
