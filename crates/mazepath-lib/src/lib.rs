//! Maze traversability and path solving.
//!
//! This crate converts a grid of walled cells into a double-resolution
//! traversability matrix, finds a shortest path through it with A* search,
//! and translates that path into cardinal move tokens. Higher-level consumers
//! (the CLI, motion controllers) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cell;
pub mod directions;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod output;
pub mod path;
pub mod queue;
pub mod solver;

pub use cell::{Cell, CellGrid};
pub use directions::{replay, to_directions, MoveToken};
pub use error::{Error, Result};
pub use generator::{
    generator_for, CellSelection, GeneratorAlgorithm, GrowingTree, MazeGenerator,
    RecursiveBacktracker, RecursiveDivision,
};
pub use matrix::{build_matrix, GoalPolicy, MatrixBuilder, Position, Symbol, TraversabilityMatrix};
pub use output::{compact_moves, render_path_overlay, PATH_MARKER};
pub use path::{
    find_path, find_path_with_limits, solve_matrix_path, Path, SearchLimits, SearchOutcome,
};
pub use queue::PriorityQueue;
pub use solver::{
    solve_maze, solve_matrix, MazeSolution, MazeSolveReport, NoPathReason, SolveOutcome,
    SolveRequest,
};
