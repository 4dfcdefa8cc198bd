//! Logical maze cells and the grid handed over by a generator.
//!
//! A [`CellGrid`] is row-major with `(0, 0)` as the fixed reference corner.
//! Moving "front" increases the row index and moving "right" increases the
//! column index; the matrix builder relies on this convention when projecting
//! walls.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One logical maze unit with four independent wall flags and a goal marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub wall_left: bool,
    #[serde(default)]
    pub wall_right: bool,
    #[serde(default)]
    pub wall_front: bool,
    #[serde(default)]
    pub wall_back: bool,
    #[serde(default)]
    pub is_goal: bool,
}

impl Cell {
    /// A cell with every wall present and no goal marker.
    pub const fn walled() -> Self {
        Self {
            wall_left: true,
            wall_right: true,
            wall_front: true,
            wall_back: true,
            is_goal: false,
        }
    }

    /// A cell with no walls and no goal marker.
    pub const fn open() -> Self {
        Self {
            wall_left: false,
            wall_right: false,
            wall_front: false,
            wall_back: false,
            is_goal: false,
        }
    }

    /// Number of walls currently set on this cell.
    pub fn wall_count(&self) -> usize {
        [self.wall_left, self.wall_right, self.wall_front, self.wall_back]
            .into_iter()
            .filter(|wall| *wall)
            .count()
    }
}

/// Row-major grid of [`Cell`]s, at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a grid where every cell is a copy of `cell`.
    pub fn filled(rows: usize, columns: usize, cell: Cell) -> Result<Self> {
        let count = ensure_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![cell; count],
        })
    }

    /// Create a grid with every wall open.
    pub fn open(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, Cell::open())
    }

    /// Create a grid with every wall closed.
    pub fn walled(rows: usize, columns: usize) -> Result<Self> {
        Self::filled(rows, columns, Cell::walled())
    }

    /// Wrap a row-major cell vector, validating its length.
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self> {
        let count = ensure_dimensions(rows, columns)?;
        if cells.len() != count {
            return Err(Error::GridShapeMismatch {
                rows,
                columns,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.index(row, column).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.index(row, column).map(move |idx| &mut self.cells[idx])
    }

    /// Iterate `(row, column, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / columns, idx % columns, cell))
    }

    /// Goal-flagged cells as `(row, column)` in row-major order.
    pub fn goal_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, cell)| cell.is_goal)
            .map(|(row, column, _)| (row, column))
            .collect()
    }

    /// Parse a grid from its JSON interchange form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: GridDocument = serde_json::from_str(json)?;
        document.into_grid()
    }

    /// Serialize the grid to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&GridDocument::from_grid(self))?)
    }

    /// Load a grid from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Write the grid to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }
}

/// Validate maze dimensions and return the number of cells.
///
/// Besides rejecting empty mazes, this guarantees that the `(2R+1) x (2C+1)`
/// matrix for the maze is addressable, so callers may use unchecked
/// arithmetic on dimensions that passed here.
pub(crate) fn ensure_dimensions(rows: usize, columns: usize) -> Result<usize> {
    if rows < 1 || columns < 1 {
        return Err(Error::InvalidDimension { rows, columns });
    }
    let overflow = || Error::DimensionOverflow { rows, columns };
    let height = rows
        .checked_mul(2)
        .and_then(|h| h.checked_add(1))
        .ok_or_else(overflow)?;
    let width = columns
        .checked_mul(2)
        .and_then(|w| w.checked_add(1))
        .ok_or_else(overflow)?;
    let symbols = height.checked_mul(width).ok_or_else(overflow)?;
    if symbols > isize::MAX as usize / std::mem::size_of::<Cell>() {
        return Err(overflow());
    }
    Ok(rows * columns)
}

/// On-disk shape of a grid: nested rows rather than a flat vector.
#[derive(Debug, Serialize, Deserialize)]
struct GridDocument {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl GridDocument {
    fn from_grid(grid: &CellGrid) -> Self {
        Self {
            rows: grid.rows,
            columns: grid.columns,
            cells: grid
                .cells
                .chunks(grid.columns)
                .map(<[Cell]>::to_vec)
                .collect(),
        }
    }

    fn into_grid(self) -> Result<CellGrid> {
        let actual = self.cells.iter().map(Vec::len).sum();
        let ragged = self.cells.len() != self.rows
            || self.cells.iter().any(|row| row.len() != self.columns);
        if ragged && self.rows >= 1 && self.columns >= 1 {
            return Err(Error::GridShapeMismatch {
                rows: self.rows,
                columns: self.columns,
                actual,
            });
        }
        let cells = self.cells.into_iter().flatten().collect();
        CellGrid::from_cells(self.rows, self.columns, cells)
    }
}
