//! Maze generation strategies producing a [`CellGrid`].
//!
//! The matrix builder and solver only depend on the [`MazeGenerator`] trait.
//! Every strategy here is deterministic for a given seed, closes the outer
//! boundary, reports each interior wall from both adjoining cells, and marks
//! dead ends (other than the start cell) as goals.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::{Cell, CellGrid};
use crate::error::Result;

/// Available generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorAlgorithm {
    /// Depth-first backtracker.
    #[default]
    PureRecursive,
    /// Growing tree that always extends the newest active cell.
    RecursiveTree,
    /// Growing tree that extends a random active cell.
    RandomTree,
    /// Growing tree that always extends the oldest active cell.
    OldestTree,
    /// Recursive division of an open chamber.
    RecursiveDivision,
}

impl fmt::Display for GeneratorAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            GeneratorAlgorithm::PureRecursive => "pure-recursive",
            GeneratorAlgorithm::RecursiveTree => "recursive-tree",
            GeneratorAlgorithm::RandomTree => "random-tree",
            GeneratorAlgorithm::OldestTree => "oldest-tree",
            GeneratorAlgorithm::RecursiveDivision => "recursive-division",
        };
        f.write_str(value)
    }
}

/// Capability interface for anything that can produce a cell grid.
pub trait MazeGenerator: Send + Sync {
    /// The strategy implemented by this generator.
    fn algorithm(&self) -> GeneratorAlgorithm;

    /// Produce a `rows x columns` grid. Fails with
    /// [`crate::Error::InvalidDimension`] for empty dimensions.
    fn generate(&self, rows: usize, columns: usize, seed: u64) -> Result<CellGrid>;
}

/// Select the generator for `algorithm`.
pub fn generator_for(algorithm: GeneratorAlgorithm) -> Box<dyn MazeGenerator> {
    match algorithm {
        GeneratorAlgorithm::PureRecursive => Box::new(RecursiveBacktracker),
        GeneratorAlgorithm::RecursiveTree => Box::new(GrowingTree::new(CellSelection::Newest)),
        GeneratorAlgorithm::RandomTree => Box::new(GrowingTree::new(CellSelection::Random)),
        GeneratorAlgorithm::OldestTree => Box::new(GrowingTree::new(CellSelection::Oldest)),
        GeneratorAlgorithm::RecursiveDivision => Box::new(RecursiveDivision),
    }
}

/// Depth-first backtracker carving from the start cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveBacktracker;

impl MazeGenerator for RecursiveBacktracker {
    fn algorithm(&self) -> GeneratorAlgorithm {
        GeneratorAlgorithm::PureRecursive
    }

    fn generate(&self, rows: usize, columns: usize, seed: u64) -> Result<CellGrid> {
        let mut grid = CellGrid::walled(rows, columns)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut visited = vec![false; rows * columns];
        let mut stack = vec![(0, 0)];
        visited[0] = true;

        while let Some(&(row, column)) = stack.last() {
            let candidates = unvisited_neighbours(&grid, &visited, row, column);
            match candidates.choose(&mut rng) {
                Some(&(side, next_row, next_column)) => {
                    carve(&mut grid, row, column, side);
                    visited[next_row * columns + next_column] = true;
                    stack.push((next_row, next_column));
                }
                None => {
                    stack.pop();
                }
            }
        }

        finish(grid, self.algorithm(), seed)
    }
}

/// Which active cell the growing tree extends next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSelection {
    Newest,
    Random,
    Oldest,
}

/// Growing-tree generator parameterised by its cell selection rule.
#[derive(Debug, Clone, Copy)]
pub struct GrowingTree {
    selection: CellSelection,
}

impl GrowingTree {
    pub fn new(selection: CellSelection) -> Self {
        Self { selection }
    }
}

impl MazeGenerator for GrowingTree {
    fn algorithm(&self) -> GeneratorAlgorithm {
        match self.selection {
            CellSelection::Newest => GeneratorAlgorithm::RecursiveTree,
            CellSelection::Random => GeneratorAlgorithm::RandomTree,
            CellSelection::Oldest => GeneratorAlgorithm::OldestTree,
        }
    }

    fn generate(&self, rows: usize, columns: usize, seed: u64) -> Result<CellGrid> {
        let mut grid = CellGrid::walled(rows, columns)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut visited = vec![false; rows * columns];
        let mut active = vec![(0, 0)];
        visited[0] = true;

        while !active.is_empty() {
            let idx = match self.selection {
                CellSelection::Newest => active.len() - 1,
                CellSelection::Oldest => 0,
                CellSelection::Random => rng.gen_range(0..active.len()),
            };
            let (row, column) = active[idx];
            let candidates = unvisited_neighbours(&grid, &visited, row, column);
            match candidates.choose(&mut rng) {
                Some(&(side, next_row, next_column)) => {
                    carve(&mut grid, row, column, side);
                    visited[next_row * columns + next_column] = true;
                    active.push((next_row, next_column));
                }
                None => {
                    active.remove(idx);
                }
            }
        }

        finish(grid, self.algorithm(), seed)
    }
}

/// Splits an open chamber with walls that each keep a single gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDivision;

/// Rectangular region of cells still to be divided.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    row: usize,
    column: usize,
    height: usize,
    width: usize,
}

impl MazeGenerator for RecursiveDivision {
    fn algorithm(&self) -> GeneratorAlgorithm {
        GeneratorAlgorithm::RecursiveDivision
    }

    fn generate(&self, rows: usize, columns: usize, seed: u64) -> Result<CellGrid> {
        let mut grid = CellGrid::open(rows, columns)?;
        close_boundary(&mut grid);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut chambers = vec![Chamber {
            row: 0,
            column: 0,
            height: rows,
            width: columns,
        }];

        while let Some(chamber) = chambers.pop() {
            if chamber.height < 2 && chamber.width < 2 {
                continue;
            }
            let split_rows = match chamber.height.cmp(&chamber.width) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => rng.gen_bool(0.5),
            };

            if split_rows {
                // Wall runs between row `split` and `split + 1`.
                let split = chamber.row + rng.gen_range(0..chamber.height - 1);
                let gap = chamber.column + rng.gen_range(0..chamber.width);
                for column in chamber.column..chamber.column + chamber.width {
                    if column != gap {
                        build_wall(&mut grid, split, column, Side::Front);
                    }
                }
                let upper = split + 1 - chamber.row;
                chambers.push(Chamber {
                    height: upper,
                    ..chamber
                });
                chambers.push(Chamber {
                    row: split + 1,
                    height: chamber.height - upper,
                    ..chamber
                });
            } else {
                let split = chamber.column + rng.gen_range(0..chamber.width - 1);
                let gap = chamber.row + rng.gen_range(0..chamber.height);
                for row in chamber.row..chamber.row + chamber.height {
                    if row != gap {
                        build_wall(&mut grid, row, split, Side::Right);
                    }
                }
                let left = split + 1 - chamber.column;
                chambers.push(Chamber {
                    width: left,
                    ..chamber
                });
                chambers.push(Chamber {
                    column: split + 1,
                    width: chamber.width - left,
                    ..chamber
                });
            }
        }

        finish(grid, self.algorithm(), seed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Front,
    Back,
    Left,
    Right,
}

impl Side {
    const ALL: [Side; 4] = [Side::Front, Side::Back, Side::Left, Side::Right];

    fn opposite(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn neighbour(self, grid: &CellGrid, row: usize, column: usize) -> Option<(usize, usize)> {
        let (next_row, next_column) = match self {
            Side::Front => (row + 1, column),
            Side::Back => (row.checked_sub(1)?, column),
            Side::Right => (row, column + 1),
            Side::Left => (row, column.checked_sub(1)?),
        };
        (next_row < grid.rows() && next_column < grid.columns()).then_some((next_row, next_column))
    }

    fn wall(self, cell: &mut Cell) -> &mut bool {
        match self {
            Side::Front => &mut cell.wall_front,
            Side::Back => &mut cell.wall_back,
            Side::Left => &mut cell.wall_left,
            Side::Right => &mut cell.wall_right,
        }
    }
}

fn unvisited_neighbours(
    grid: &CellGrid,
    visited: &[bool],
    row: usize,
    column: usize,
) -> Vec<(Side, usize, usize)> {
    Side::ALL
        .into_iter()
        .filter_map(|side| {
            let (next_row, next_column) = side.neighbour(grid, row, column)?;
            (!visited[next_row * grid.columns() + next_column]).then_some((
                side,
                next_row,
                next_column,
            ))
        })
        .collect()
}

fn set_wall(grid: &mut CellGrid, row: usize, column: usize, side: Side, present: bool) {
    let Some((next_row, next_column)) = side.neighbour(grid, row, column) else {
        return;
    };
    if let Some(cell) = grid.get_mut(row, column) {
        *side.wall(cell) = present;
    }
    if let Some(cell) = grid.get_mut(next_row, next_column) {
        *side.opposite().wall(cell) = present;
    }
}

/// Remove the wall on `side` of a cell, from both adjoining cells.
fn carve(grid: &mut CellGrid, row: usize, column: usize, side: Side) {
    set_wall(grid, row, column, side, false);
}

/// Add the wall on `side` of a cell, from both adjoining cells.
fn build_wall(grid: &mut CellGrid, row: usize, column: usize, side: Side) {
    set_wall(grid, row, column, side, true);
}

fn close_boundary(grid: &mut CellGrid) {
    let (rows, columns) = (grid.rows(), grid.columns());
    for row in 0..rows {
        for column in 0..columns {
            if let Some(cell) = grid.get_mut(row, column) {
                cell.wall_back |= row == 0;
                cell.wall_front |= row + 1 == rows;
                cell.wall_left |= column == 0;
                cell.wall_right |= column + 1 == columns;
            }
        }
    }
}

/// Flag every dead end except the start cell as a goal.
fn mark_dead_end_goals(grid: &mut CellGrid) -> usize {
    let dead_ends: Vec<(usize, usize)> = grid
        .iter()
        .filter(|&(row, column, cell)| (row, column) != (0, 0) && cell.wall_count() == 3)
        .map(|(row, column, _)| (row, column))
        .collect();
    for &(row, column) in &dead_ends {
        if let Some(cell) = grid.get_mut(row, column) {
            cell.is_goal = true;
        }
    }
    dead_ends.len()
}

fn finish(mut grid: CellGrid, algorithm: GeneratorAlgorithm, seed: u64) -> Result<CellGrid> {
    let goals = mark_dead_end_goals(&mut grid);
    debug!(
        %algorithm,
        seed,
        rows = grid.rows(),
        columns = grid.columns(),
        goals,
        "generated maze"
    );
    Ok(grid)
}
