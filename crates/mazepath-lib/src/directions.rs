//! Translation of a solved path into cardinal move tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::matrix::Position;

/// Single cardinal move between two neighbouring cells.
///
/// `Up` decreases the matrix row, `Right` increases the matrix column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveToken {
    Up,
    Down,
    Left,
    Right,
}

impl MoveToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveToken::Up => "up",
            MoveToken::Down => "down",
            MoveToken::Left => "left",
            MoveToken::Right => "right",
        }
    }

    /// Matrix offset `(d_row, d_col)` of one move.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            MoveToken::Up => (-2, 0),
            MoveToken::Down => (2, 0),
            MoveToken::Left => (0, -2),
            MoveToken::Right => (0, 2),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            MoveToken::Up => MoveToken::Down,
            MoveToken::Down => MoveToken::Up,
            MoveToken::Left => MoveToken::Right,
            MoveToken::Right => MoveToken::Left,
        }
    }

    fn between(from: Position, to: Position) -> Option<Self> {
        if from.row == to.row {
            if to.col == from.col + 2 {
                return Some(MoveToken::Right);
            }
            if from.col == to.col + 2 {
                return Some(MoveToken::Left);
            }
        } else if from.col == to.col {
            if to.row == from.row + 2 {
                return Some(MoveToken::Down);
            }
            if from.row == to.row + 2 {
                return Some(MoveToken::Up);
            }
        }
        None
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveToken {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(MoveToken::Up),
            "down" => Ok(MoveToken::Down),
            "left" => Ok(MoveToken::Left),
            "right" => Ok(MoveToken::Right),
            other => Err(format!("unknown move token '{other}'")),
        }
    }
}

/// Convert consecutive path positions into move tokens.
///
/// The result has `path.len() - 1` tokens (none for an empty or single-cell
/// path). A step that is not exactly two indices along one axis fails with
/// [`Error::MalformedPath`].
pub fn to_directions(path: &[Position]) -> Result<Vec<MoveToken>> {
    path.windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (from, to) = (pair[0], pair[1]);
            MoveToken::between(from, to).ok_or(Error::MalformedPath { index, from, to })
        })
        .collect()
}

/// Replay tokens from `start`, returning every visited position including `start`.
///
/// Returns `None` if a move would leave the non-negative index range.
pub fn replay(start: Position, moves: &[MoveToken]) -> Option<Vec<Position>> {
    let mut positions = Vec::with_capacity(moves.len() + 1);
    positions.push(start);
    let mut current = start;
    for token in moves {
        let (d_row, d_col) = token.offset();
        current = current.offset(d_row, d_col)?;
        positions.push(current);
    }
    Some(positions)
}
