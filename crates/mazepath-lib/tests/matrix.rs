mod common;

use mazepath_lib::{
    build_matrix, Cell, CellGrid, Error, GoalPolicy, MatrixBuilder, Position, Symbol,
    TraversabilityMatrix,
};

use common::{final_position, open_grid};

fn count(matrix: &TraversabilityMatrix, symbol: Symbol) -> usize {
    matrix
        .rows()
        .flat_map(|row| row.iter())
        .filter(|s| **s == symbol)
        .count()
}

#[test]
fn shape_and_pillars_hold_for_many_dimensions() {
    for rows in 1..=5 {
        for columns in 1..=5 {
            let grid = CellGrid::walled(rows, columns).expect("valid grid");
            let matrix = build_matrix(&grid, true).expect("matrix builds");
            assert_eq!(matrix.height(), 2 * rows + 1);
            assert_eq!(matrix.width(), 2 * columns + 1);
            assert_eq!(matrix.maze_dimensions(), (rows, columns));
            for i in 0..=rows {
                for j in 0..=columns {
                    assert_eq!(
                        matrix.get(Position::new(2 * i, 2 * j)),
                        Some(Symbol::Pillar),
                        "pillar expected at ({}, {}) for {rows}x{columns}",
                        2 * i,
                        2 * j
                    );
                }
            }
            for i in 0..rows {
                for j in 0..columns {
                    let symbol = matrix
                        .get(Position::new(2 * i + 1, 2 * j + 1))
                        .expect("cell in bounds");
                    assert!(symbol.is_cell(), "cell position holds {symbol:?}");
                }
            }
        }
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    let err = CellGrid::open(0, 4).expect_err("zero rows");
    assert!(matches!(
        err,
        Error::InvalidDimension {
            rows: 0,
            columns: 4
        }
    ));
    let err = CellGrid::walled(2, 0).expect_err("zero columns");
    assert!(matches!(err, Error::InvalidDimension { columns: 0, .. }));
}

#[test]
fn oversized_dimensions_are_rejected_without_overflow() {
    let err = CellGrid::open(1usize << 63, 2).expect_err("cell count overflows");
    assert!(matches!(
        err,
        Error::DimensionOverflow {
            rows,
            columns: 2
        } if rows == 1usize << 63
    ));

    // Cell count fits, but the doubled matrix does not.
    let err = CellGrid::walled(1usize << 62, 4).expect_err("matrix overflows");
    assert!(matches!(err, Error::DimensionOverflow { columns: 4, .. }));

    let err = CellGrid::from_cells(usize::MAX, usize::MAX, Vec::new())
        .expect_err("declared shape overflows");
    assert!(matches!(err, Error::DimensionOverflow { .. }));
}

#[test]
fn single_right_wall_is_projected_alone() {
    let grid = CellGrid::from_cells(
        1,
        1,
        vec![Cell {
            wall_right: true,
            ..Cell::default()
        }],
    )
    .expect("valid grid");
    let matrix = build_matrix(&grid, true).expect("matrix builds");

    assert_eq!(matrix.get(Position::new(1, 2)), Some(Symbol::Blocked));
    assert_eq!(matrix.get(Position::new(1, 0)), Some(Symbol::OpenWallSlot));
    assert_eq!(matrix.get(Position::new(0, 1)), Some(Symbol::OpenWallSlot));
    assert_eq!(matrix.get(Position::new(2, 1)), Some(Symbol::OpenWallSlot));
    assert_eq!(matrix.to_string(), "#-#\n-BX\n#-#");
}

#[test]
fn back_wall_of_first_row_lands_on_bottom_edge() {
    let mut grid = CellGrid::open(2, 1).expect("valid grid");
    grid.get_mut(0, 0).unwrap().wall_back = true;
    let matrix = build_matrix(&grid, true).expect("matrix builds");

    assert_eq!(matrix.get(Position::new(4, 1)), Some(Symbol::Blocked));
    assert_eq!(matrix.get(Position::new(0, 1)), Some(Symbol::OpenWallSlot));
}

#[test]
fn front_wall_separates_first_and_second_row() {
    let mut grid = CellGrid::open(3, 1).expect("valid grid");
    grid.get_mut(0, 0).unwrap().wall_front = true;
    let matrix = build_matrix(&grid, true).expect("matrix builds");

    // Cell (0, 0) sits at matrix row 5, cell (1, 0) at row 3.
    assert_eq!(matrix.get(Position::new(4, 1)), Some(Symbol::Blocked));
    assert_eq!(matrix.get(Position::new(2, 1)), Some(Symbol::OpenWallSlot));
}

#[test]
fn start_is_bottom_left_cell() {
    let grid = CellGrid::open(3, 4).expect("valid grid");
    let matrix = build_matrix(&grid, true).expect("matrix builds");

    assert_eq!(matrix.start(), Position::new(5, 1));
    assert_eq!(matrix.get(Position::new(5, 1)), Some(Symbol::Start));
    assert_eq!(count(&matrix, Symbol::Start), 1);
}

#[test]
fn only_first_goal_is_stamped() {
    let grid = open_grid(2, 2, &[(0, 1), (1, 0)]);
    let matrix = build_matrix(&grid, true).expect("matrix builds");

    let expected = final_position(2, 0, 1);
    assert_eq!(expected, Position::new(3, 3));
    assert_eq!(count(&matrix, Symbol::Goal), 1);
    assert_eq!(matrix.goal(), Some(expected));
    assert_eq!(matrix.get(expected), Some(Symbol::Goal));
    assert_eq!(
        matrix.get(final_position(2, 1, 0)),
        Some(Symbol::Free),
        "second goal must be ignored"
    );
}

#[test]
fn nearest_policy_prefers_goal_closest_to_start() {
    let grid = open_grid(2, 3, &[(0, 2), (1, 0)]);

    let first = MatrixBuilder::new().build(&grid).expect("matrix builds");
    assert_eq!(first.goal(), Some(final_position(2, 0, 2)));

    let nearest = MatrixBuilder::new()
        .with_goal_policy(GoalPolicy::Nearest)
        .build(&grid)
        .expect("matrix builds");
    assert_eq!(nearest.goal(), Some(final_position(2, 1, 0)));
    assert_eq!(count(&nearest, Symbol::Goal), 1);
}

#[test]
fn nearest_policy_breaks_ties_in_row_major_order() {
    // (0, 1) and (1, 0) are both one cell from the start.
    let grid = open_grid(2, 2, &[(1, 0), (0, 1)]);
    let matrix = MatrixBuilder::new()
        .with_goal_policy(GoalPolicy::Nearest)
        .build(&grid)
        .expect("matrix builds");
    assert_eq!(matrix.goal(), Some(final_position(2, 0, 1)));
    assert_eq!(matrix.get(final_position(2, 1, 0)), Some(Symbol::Free));
}

#[test]
fn reject_policy_fails_on_multiple_goals() {
    let grid = open_grid(2, 3, &[(0, 2), (1, 0), (1, 2)]);
    let err = MatrixBuilder::new()
        .with_goal_policy(GoalPolicy::Reject)
        .build(&grid)
        .expect_err("ambiguous goals");
    assert!(matches!(err, Error::MultipleGoals { count: 3 }));

    let single = open_grid(2, 3, &[(1, 2)]);
    let matrix = MatrixBuilder::new()
        .with_goal_policy(GoalPolicy::Reject)
        .build(&single)
        .expect("one goal is fine");
    assert_eq!(matrix.goal(), Some(Position::new(1, 5)));
}

#[test]
fn missing_goal_marker_leaves_matrix_without_goal() {
    let grid = open_grid(2, 2, &[(1, 1)]);
    let matrix = build_matrix(&grid, false).expect("matrix builds");
    assert_eq!(matrix.goal(), None);
    assert_eq!(count(&matrix, Symbol::Goal), 0);

    let unflagged = open_grid(2, 2, &[]);
    let matrix = build_matrix(&unflagged, true).expect("matrix builds");
    assert_eq!(matrix.goal(), None);
}

#[test]
fn goal_on_start_cell_keeps_start_symbol() {
    let grid = open_grid(1, 1, &[(0, 0)]);
    let matrix = build_matrix(&grid, true).expect("matrix builds");
    assert_eq!(matrix.get(matrix.start()), Some(Symbol::Start));
    assert_eq!(matrix.goal(), Some(matrix.start()));
}

#[test]
fn goal_on_start_cell_is_lost_when_reparsed() {
    let grid = open_grid(1, 1, &[(0, 0)]);
    let matrix = build_matrix(&grid, true).expect("matrix builds");
    assert_eq!(matrix.goal(), Some(matrix.start()));

    let parsed: TraversabilityMatrix = matrix.to_string().parse().expect("rendering parses");
    assert_eq!(parsed.to_string(), matrix.to_string());
    assert_eq!(parsed.start(), matrix.start());
    assert_eq!(parsed.goal(), None);
}

#[test]
fn mirroring_twice_restores_matrix() {
    let mut grid = open_grid(3, 2, &[(2, 1)]);
    grid.get_mut(1, 0).unwrap().wall_right = true;
    grid.get_mut(1, 1).unwrap().wall_left = true;
    let built = build_matrix(&grid, true).expect("matrix builds");

    let mut mirrored = built.clone();
    mirrored.mirror_vertically();
    assert_ne!(mirrored, built);
    assert_eq!(mirrored.start(), Position::new(1, 1));
    assert_eq!(mirrored.get(Position::new(1, 1)), Some(Symbol::Start));

    mirrored.mirror_vertically();
    assert_eq!(mirrored, built);
}

#[test]
fn rendering_parses_back_to_same_matrix() {
    let mut grid = open_grid(2, 3, &[(1, 2)]);
    grid.get_mut(0, 1).unwrap().wall_front = true;
    grid.get_mut(1, 1).unwrap().wall_back = true;
    let matrix = build_matrix(&grid, true).expect("matrix builds");

    let text = matrix.to_string();
    let parsed: TraversabilityMatrix = text.parse().expect("rendering parses");
    assert_eq!(parsed, matrix);

    let spaced: String = text
        .lines()
        .map(|line| {
            line.chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");
    let parsed_spaced: TraversabilityMatrix = spaced.parse().expect("spaced rendering parses");
    assert_eq!(parsed_spaced, matrix);
}

#[test]
fn parsing_rejects_broken_matrices() {
    let cases = [
        ("#-#\n-O-\n#-#", "missing start"),
        ("#-#-#\n-B-\n#-#-#", "ragged"),
        ("#-#\n-B-", "even height"),
        ("#-#\n-BG\n#-#", "goal on wall slot"),
        ("#-#-#\n-B-B-\n#-#-#", "duplicate start"),
        ("O-#\n-B-\n#-#", "cell on pillar"),
    ];
    for (text, label) in cases {
        let err = text
            .parse::<TraversabilityMatrix>()
            .expect_err(label);
        assert!(
            matches!(err, Error::InvalidMatrix { .. }),
            "{label}: unexpected error {err}"
        );
    }

    let err = "#-#\n-B?\n#-#"
        .parse::<TraversabilityMatrix>()
        .expect_err("unknown symbol");
    assert!(matches!(
        err,
        Error::UnknownSymbol {
            symbol: '?',
            row: 1,
            col: 2
        }
    ));
}
