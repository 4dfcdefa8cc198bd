#![allow(dead_code)]

use mazepath_lib::{Cell, CellGrid};

/// Fully walled grid with the listed passages opened from both sides and the
/// listed cells flagged as goals.
pub fn grid_with_passages(
    rows: usize,
    columns: usize,
    passages: &[((usize, usize), (usize, usize))],
    goals: &[(usize, usize)],
) -> CellGrid {
    let mut grid = CellGrid::walled(rows, columns).expect("valid dimensions");
    for &(a, b) in passages {
        open_between(&mut grid, a, b);
    }
    for &(row, column) in goals {
        grid.get_mut(row, column).expect("goal in bounds").is_goal = true;
    }
    grid
}

/// Grid with every wall absent and the listed goal cells.
pub fn open_grid(rows: usize, columns: usize, goals: &[(usize, usize)]) -> CellGrid {
    let mut grid = CellGrid::open(rows, columns).expect("valid dimensions");
    for &(row, column) in goals {
        grid.get_mut(row, column).expect("goal in bounds").is_goal = true;
    }
    grid
}

/// Add the wall between two neighbouring cells on both sides.
pub fn wall_between(grid: &mut CellGrid, a: (usize, usize), b: (usize, usize)) {
    set_between(grid, a, b, true);
}

pub fn open_between(grid: &mut CellGrid, a: (usize, usize), b: (usize, usize)) {
    set_between(grid, a, b, false);
}

fn set_between(grid: &mut CellGrid, a: (usize, usize), b: (usize, usize), present: bool) {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let vertical = first.0 + 1 == second.0 && first.1 == second.1;
    let horizontal = first.0 == second.0 && first.1 + 1 == second.1;
    assert!(vertical || horizontal, "{a:?} and {b:?} are not neighbours");

    let lower: &mut Cell = grid.get_mut(first.0, first.1).expect("cell in bounds");
    if vertical {
        lower.wall_front = present;
    } else {
        lower.wall_right = present;
    }
    let upper: &mut Cell = grid.get_mut(second.0, second.1).expect("cell in bounds");
    if vertical {
        upper.wall_back = present;
    } else {
        upper.wall_left = present;
    }
}

/// Matrix position of logical cell `(row, column)` in a finished matrix for a
/// maze with `rows` rows (after the builder's vertical mirror).
pub fn final_position(rows: usize, row: usize, column: usize) -> mazepath_lib::Position {
    mazepath_lib::Position::new(2 * (rows - 1 - row) + 1, 2 * column + 1)
}
