//! Double-resolution traversability matrix built from a [`CellGrid`].
//!
//! A grid of `R x C` cells becomes a `(2R+1) x (2C+1)` matrix of [`Symbol`]s:
//!
//! - `(even, even)` positions are structural pillars,
//! - `(even, odd)` and `(odd, even)` positions are wall slots between cells,
//! - `(odd, odd)` positions are the traversable cells themselves.
//!
//! The builder writes walls, goal and start in generator row order and then
//! mirrors the rows exactly once, so that the start cell ends up on the bottom
//! row of the finished matrix and "up" means decreasing row index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cell::{ensure_dimensions, CellGrid};
use crate::error::{Error, Result};

/// One position of the traversability matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Pillar,
    OpenWallSlot,
    Blocked,
    Free,
    Start,
    Goal,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Pillar,
        Symbol::OpenWallSlot,
        Symbol::Blocked,
        Symbol::Free,
        Symbol::Start,
        Symbol::Goal,
    ];

    /// Stable single-character encoding used by the diagnostic rendering.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Pillar => '#',
            Symbol::OpenWallSlot => '-',
            Symbol::Blocked => 'X',
            Symbol::Free => 'O',
            Symbol::Start => 'B',
            Symbol::Goal => 'G',
        }
    }

    pub fn from_char(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_char() == symbol)
    }

    /// Whether this symbol marks a traversable cell.
    pub fn is_cell(self) -> bool {
        matches!(self, Symbol::Free | Symbol::Start | Symbol::Goal)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Integer `(row, col)` index into a [`TraversabilityMatrix`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Matrix position of the logical cell `(row, column)` before mirroring.
    pub const fn of_cell(row: usize, column: usize) -> Self {
        Self::new(2 * row + 1, 2 * column + 1)
    }

    /// Whether this position addresses a cell rather than a pillar or wall slot.
    pub const fn is_cell_position(&self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Manhattan distance in matrix-index units.
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Offset by a signed delta, returning `None` on underflow.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How the builder chooses among several goal-flagged cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    /// First goal-flagged cell in row-major order; the rest are ignored.
    #[default]
    First,
    /// Goal-flagged cell closest to the start cell (Manhattan, in cells).
    Nearest,
    /// Fail with [`Error::MultipleGoals`] when more than one cell is flagged.
    Reject,
}

impl fmt::Display for GoalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            GoalPolicy::First => "first",
            GoalPolicy::Nearest => "nearest",
            GoalPolicy::Reject => "reject",
        };
        f.write_str(value)
    }
}

/// Character-coded traversability grid consumed by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversabilityMatrix {
    height: usize,
    width: usize,
    symbols: Vec<Symbol>,
    start: Position,
    goal: Option<Position>,
}

impl TraversabilityMatrix {
    /// Unstamped matrix for a `rows x columns` maze: pillars, open slots, free cells.
    fn blank(rows: usize, columns: usize) -> Result<Self> {
        ensure_dimensions(rows, columns)?;
        let height = 2 * rows + 1;
        let width = 2 * columns + 1;
        let symbols = (0..height)
            .flat_map(|row| (0..width).map(move |col| blank_symbol(row, col)))
            .collect();
        Ok(Self {
            height,
            width,
            symbols,
            start: Position::of_cell(0, 0),
            goal: None,
        })
    }

    /// Number of matrix rows (`2 * maze rows + 1`).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of matrix columns (`2 * maze columns + 1`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Dimensions of the logical maze this matrix encodes.
    pub fn maze_dimensions(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Goal position, if a goal was stamped.
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    pub fn get(&self, position: Position) -> Option<Symbol> {
        self.contains(position)
            .then(|| self.symbols[position.row * self.width + position.col])
    }

    /// Whether the position is outside the matrix or holds an impassable symbol.
    pub fn is_blocked(&self, position: Position) -> bool {
        !matches!(
            self.get(position),
            Some(Symbol::OpenWallSlot | Symbol::Free | Symbol::Start | Symbol::Goal)
        )
    }

    /// Iterate rows of symbols from row 0 downwards.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> + '_ {
        self.symbols.chunks(self.width)
    }

    /// Render each row as a string of symbol characters.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|symbol| symbol.as_char()).collect())
            .collect()
    }

    /// Reverse the row order, carrying start and goal along.
    ///
    /// Applying this twice restores the original matrix.
    pub fn mirror_vertically(&mut self) {
        let width = self.width;
        let mut mirrored = Vec::with_capacity(self.symbols.len());
        for row in self.symbols.chunks(width).rev() {
            mirrored.extend_from_slice(row);
        }
        self.symbols = mirrored;
        self.start = self.mirrored_position(self.start);
        self.goal = self.goal.map(|goal| self.mirrored_position(goal));
    }

    fn mirrored_position(&self, position: Position) -> Position {
        Position::new(self.height - 1 - position.row, position.col)
    }

    fn set(&mut self, position: Position, symbol: Symbol) {
        let idx = position.row * self.width + position.col;
        self.symbols[idx] = symbol;
    }
}

fn blank_symbol(row: usize, col: usize) -> Symbol {
    match (row % 2 == 0, col % 2 == 0) {
        (true, true) => Symbol::Pillar,
        (false, false) => Symbol::Free,
        _ => Symbol::OpenWallSlot,
    }
}

impl fmt::Display for TraversabilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.to_lines().iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl FromStr for TraversabilityMatrix {
    type Err = Error;

    /// Parse the [`fmt::Display`] form back into a matrix. Whitespace between
    /// symbols is ignored, blank lines are skipped.
    ///
    /// The goal is recovered from its `G` symbol only. A goal stamped on the
    /// start cell renders as `B`, so such a matrix parses back without a goal.
    fn from_str(text: &str) -> Result<Self> {
        let mut symbols = Vec::new();
        let mut width = None;
        let mut height = 0;
        for line in text.lines() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.is_empty() {
                continue;
            }
            match width {
                None => width = Some(chars.len()),
                Some(expected) if expected != chars.len() => {
                    return Err(Error::InvalidMatrix {
                        message: format!(
                            "row {height} has {} symbols, expected {expected}",
                            chars.len()
                        ),
                    });
                }
                Some(_) => {}
            }
            for (col, symbol) in chars.into_iter().enumerate() {
                let parsed = Symbol::from_char(symbol).ok_or(Error::UnknownSymbol {
                    symbol,
                    row: height,
                    col,
                })?;
                symbols.push(parsed);
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if height < 3 || width < 3 || height % 2 == 0 || width % 2 == 0 {
            return Err(Error::InvalidMatrix {
                message: format!("dimensions {height}x{width} must be odd and at least 3x3"),
            });
        }

        let mut start = None;
        let mut goal = None;
        for (idx, symbol) in symbols.iter().enumerate() {
            let position = Position::new(idx / width, idx % width);
            let expected_cell = position.is_cell_position();
            let is_pillar_slot = position.row % 2 == 0 && position.col % 2 == 0;
            if expected_cell != symbol.is_cell()
                || is_pillar_slot != (*symbol == Symbol::Pillar)
            {
                return Err(Error::InvalidMatrix {
                    message: format!("symbol '{symbol}' is not allowed at {position}"),
                });
            }
            let slot = match symbol {
                Symbol::Start => &mut start,
                Symbol::Goal => &mut goal,
                _ => continue,
            };
            if slot.replace(position).is_some() {
                return Err(Error::InvalidMatrix {
                    message: format!("duplicate '{symbol}' symbol at {position}"),
                });
            }
        }

        let start = start.ok_or_else(|| Error::InvalidMatrix {
            message: "missing start symbol".to_string(),
        })?;

        Ok(Self {
            height,
            width,
            symbols,
            start,
            goal,
        })
    }
}

/// Converts a [`CellGrid`] into a [`TraversabilityMatrix`].
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder {
    goal_marker: bool,
    goal_policy: GoalPolicy,
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self {
            goal_marker: true,
            goal_policy: GoalPolicy::First,
        }
    }
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable goal stamping when `false`; the matrix is then unsolvable.
    pub fn with_goal_marker(mut self, goal_marker: bool) -> Self {
        self.goal_marker = goal_marker;
        self
    }

    pub fn with_goal_policy(mut self, goal_policy: GoalPolicy) -> Self {
        self.goal_policy = goal_policy;
        self
    }

    /// Build the matrix: walls, then goal, then start, then one vertical mirror.
    pub fn build(&self, grid: &CellGrid) -> Result<TraversabilityMatrix> {
        let mut matrix = TraversabilityMatrix::blank(grid.rows(), grid.columns())?;

        for (row, column, cell) in grid.iter() {
            let center = Position::of_cell(row, column);
            let slots = [
                (cell.wall_right, Position::new(center.row, center.col + 1)),
                (cell.wall_front, Position::new(center.row + 1, center.col)),
                (cell.wall_left, Position::new(center.row, center.col - 1)),
                (cell.wall_back, Position::new(center.row - 1, center.col)),
            ];
            for (present, slot) in slots {
                if present {
                    matrix.set(slot, Symbol::Blocked);
                }
            }
        }

        if self.goal_marker {
            if let Some((row, column)) = self.select_goal(grid)? {
                let goal = Position::of_cell(row, column);
                matrix.set(goal, Symbol::Goal);
                matrix.goal = Some(goal);
            }
        }

        // The start symbol wins if the goal shares its cell.
        let start = Position::of_cell(0, 0);
        matrix.set(start, Symbol::Start);
        matrix.start = start;

        matrix.mirror_vertically();

        debug!(
            height = matrix.height(),
            width = matrix.width(),
            start = %matrix.start(),
            goal = ?matrix.goal(),
            "built traversability matrix"
        );
        Ok(matrix)
    }

    fn select_goal(&self, grid: &CellGrid) -> Result<Option<(usize, usize)>> {
        let goals = grid.goal_cells();
        match self.goal_policy {
            GoalPolicy::First => {
                if goals.len() > 1 {
                    warn!(
                        ignored = goals.len() - 1,
                        "multiple goal cells found; keeping the first in row-major order"
                    );
                }
                Ok(goals.first().copied())
            }
            GoalPolicy::Nearest => Ok(goals
                .iter()
                .copied()
                .min_by_key(|(row, column)| row + column)),
            GoalPolicy::Reject => {
                if goals.len() > 1 {
                    return Err(Error::MultipleGoals { count: goals.len() });
                }
                Ok(goals.first().copied())
            }
        }
    }
}

/// Build a matrix with the default (first-goal) policy.
///
/// `has_goal_marker = false` leaves the matrix without a goal symbol.
pub fn build_matrix(grid: &CellGrid, has_goal_marker: bool) -> Result<TraversabilityMatrix> {
    MatrixBuilder::new()
        .with_goal_marker(has_goal_marker)
        .build(grid)
}
