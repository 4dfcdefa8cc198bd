use thiserror::Error;

use crate::matrix::Position;

/// Convenient result alias for the maze library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable or absent goal is not represented here: the solver reports
/// that as a value (see [`crate::SearchOutcome`] and [`crate::SolveOutcome`]).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a maze is requested with zero rows or columns.
    #[error("maze dimensions must be at least 1x1 (got {rows}x{columns})")]
    InvalidDimension { rows: usize, columns: usize },

    /// Raised when the dimensions are too large to address the maze's matrix.
    #[error("maze dimensions {rows}x{columns} are too large")]
    DimensionOverflow { rows: usize, columns: usize },

    /// Raised when a flat cell list does not match the declared grid shape.
    #[error("cell grid declares {rows}x{columns} but contains {actual} cells")]
    GridShapeMismatch {
        rows: usize,
        columns: usize,
        actual: usize,
    },

    /// Raised when dequeuing from an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Raised when a path contains a step that is not a single cell move.
    #[error("malformed path: step {index} moves from {from} to {to}")]
    MalformedPath {
        index: usize,
        from: Position,
        to: Position,
    },

    /// Raised by the reject goal policy when more than one cell is goal-flagged.
    #[error("maze has {count} goal-flagged cells; the reject policy allows at most one")]
    MultipleGoals { count: usize },

    /// Raised when a rendered matrix cannot be parsed back.
    #[error("invalid traversability matrix: {message}")]
    InvalidMatrix { message: String },

    /// Raised when a rendered matrix contains a character outside the symbol alphabet.
    #[error("unknown matrix symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
