//! End-to-end pipeline: cell grid to matrix to path to move tokens.
//!
//! # Example
//!
//! ```
//! use mazepath_lib::{generator_for, solve_maze, GeneratorAlgorithm, SolveOutcome, SolveRequest};
//!
//! let grid = generator_for(GeneratorAlgorithm::PureRecursive).generate(6, 6, 7)?;
//! let report = solve_maze(&grid, &SolveRequest::default())?;
//! if let SolveOutcome::Solved(solution) = &report.outcome {
//!     println!("{} moves", solution.hop_count());
//! }
//! # Ok::<(), mazepath_lib::Error>(())
//! ```

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::cell::CellGrid;
use crate::directions::{to_directions, MoveToken};
use crate::error::Result;
use crate::matrix::{GoalPolicy, MatrixBuilder, Position, TraversabilityMatrix};
use crate::path::{solve_matrix_path, SearchLimits, SearchOutcome};

/// Options for a single solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveRequest {
    /// Stamp a goal into the matrix at all; without one the maze is unsolvable.
    pub goal_marker: bool,
    pub goal_policy: GoalPolicy,
    pub limits: SearchLimits,
}

impl Default for SolveRequest {
    fn default() -> Self {
        Self {
            goal_marker: true,
            goal_policy: GoalPolicy::First,
            limits: SearchLimits::unlimited(),
        }
    }
}

impl SolveRequest {
    fn builder(&self) -> MatrixBuilder {
        MatrixBuilder::new()
            .with_goal_marker(self.goal_marker)
            .with_goal_policy(self.goal_policy)
    }
}

/// A solved maze: matrix positions plus the equivalent move tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeSolution {
    pub start: Position,
    pub goal: Position,
    pub steps: Vec<Position>,
    pub moves: Vec<MoveToken>,
}

impl MazeSolution {
    /// Number of cell moves in the solution.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Why no solution was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoPathReason {
    /// The matrix carries no goal symbol.
    GoalAbsent,
    /// Walls separate the start from the goal.
    Unreachable,
    /// The search budget ran out first.
    BudgetExhausted { expanded: usize },
}

impl fmt::Display for NoPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoPathReason::GoalAbsent => f.write_str("maze has no goal"),
            NoPathReason::Unreachable => f.write_str("goal is unreachable from the start"),
            NoPathReason::BudgetExhausted { expanded } => {
                write!(f, "search budget exhausted after {expanded} expansions")
            }
        }
    }
}

/// Expected outcomes of a solve. "No path" is a normal branch, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveOutcome {
    Solved(MazeSolution),
    NoPath { reason: NoPathReason },
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&MazeSolution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::NoPath { .. } => None,
        }
    }
}

/// Matrix built for a maze together with the outcome of solving it.
#[derive(Debug, Clone)]
pub struct MazeSolveReport {
    pub matrix: TraversabilityMatrix,
    pub outcome: SolveOutcome,
}

/// Build the matrix for `grid` and solve it.
pub fn solve_maze(grid: &CellGrid, request: &SolveRequest) -> Result<MazeSolveReport> {
    let matrix = request.builder().build(grid)?;
    let outcome = solve_matrix(&matrix, &request.limits)?;
    Ok(MazeSolveReport { matrix, outcome })
}

/// Solve an already-built matrix from its start to its goal.
pub fn solve_matrix(matrix: &TraversabilityMatrix, limits: &SearchLimits) -> Result<SolveOutcome> {
    let Some(goal) = matrix.goal() else {
        info!("matrix has no goal; nothing to solve");
        return Ok(SolveOutcome::NoPath {
            reason: NoPathReason::GoalAbsent,
        });
    };

    let outcome = match solve_matrix_path(matrix, limits) {
        SearchOutcome::Found(steps) => {
            let moves = to_directions(&steps)?;
            SolveOutcome::Solved(MazeSolution {
                start: matrix.start(),
                goal,
                steps,
                moves,
            })
        }
        SearchOutcome::NoPath => SolveOutcome::NoPath {
            reason: NoPathReason::Unreachable,
        },
        SearchOutcome::BudgetExhausted { expanded } => SolveOutcome::NoPath {
            reason: NoPathReason::BudgetExhausted { expanded },
        },
    };

    match &outcome {
        SolveOutcome::Solved(solution) => {
            info!(moves = solution.hop_count(), "maze solved")
        }
        SolveOutcome::NoPath { reason } => info!(%reason, "no path found"),
    }
    Ok(outcome)
}
