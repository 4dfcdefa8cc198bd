use mazepath_lib::{
    build_matrix, find_path, generator_for, CellGrid, Error, GeneratorAlgorithm, Position,
};

const ALGORITHMS: [GeneratorAlgorithm; 5] = [
    GeneratorAlgorithm::PureRecursive,
    GeneratorAlgorithm::RecursiveTree,
    GeneratorAlgorithm::RandomTree,
    GeneratorAlgorithm::OldestTree,
    GeneratorAlgorithm::RecursiveDivision,
];

fn open_passages(grid: &CellGrid) -> usize {
    grid.iter()
        .map(|(_, _, cell)| usize::from(!cell.wall_right) + usize::from(!cell.wall_front))
        .sum()
}

#[test]
fn generators_report_their_algorithm() {
    for algorithm in ALGORITHMS {
        assert_eq!(generator_for(algorithm).algorithm(), algorithm);
    }
}

#[test]
fn same_seed_produces_same_maze() {
    for algorithm in ALGORITHMS {
        let generator = generator_for(algorithm);
        let first = generator.generate(9, 7, 1234).expect("generates");
        let second = generator.generate(9, 7, 1234).expect("generates");
        assert_eq!(first, second, "{algorithm} is not deterministic");
    }
}

#[test]
fn walls_are_consistent_and_boundary_closed() {
    for algorithm in ALGORITHMS {
        let grid = generator_for(algorithm).generate(6, 8, 99).expect("generates");
        for (row, column, cell) in grid.iter() {
            if row == 0 {
                assert!(cell.wall_back, "{algorithm}: open back edge at {row},{column}");
            }
            if column == 0 {
                assert!(cell.wall_left, "{algorithm}: open left edge at {row},{column}");
            }
            match grid.get(row + 1, column) {
                Some(front) => assert_eq!(cell.wall_front, front.wall_back, "{algorithm}"),
                None => assert!(cell.wall_front, "{algorithm}: open front edge"),
            }
            match grid.get(row, column + 1) {
                Some(right) => assert_eq!(cell.wall_right, right.wall_left, "{algorithm}"),
                None => assert!(cell.wall_right, "{algorithm}: open right edge"),
            }
        }
    }
}

#[test]
fn generated_mazes_are_perfect() {
    let (rows, columns) = (7, 5);
    for algorithm in ALGORITHMS {
        let grid = generator_for(algorithm).generate(rows, columns, 7).expect("generates");
        assert_eq!(
            open_passages(&grid),
            rows * columns - 1,
            "{algorithm} must carve a spanning tree"
        );

        let matrix = build_matrix(&grid, false).expect("matrix builds");
        for row in 0..rows {
            for column in 0..columns {
                let target = Position::new(2 * row + 1, 2 * column + 1);
                assert!(
                    find_path(&matrix, matrix.start(), target).is_some(),
                    "{algorithm}: {target} unreachable"
                );
            }
        }
    }
}

#[test]
fn dead_ends_are_flagged_as_goals() {
    for algorithm in ALGORITHMS {
        let grid = generator_for(algorithm).generate(5, 5, 21).expect("generates");
        let goals = grid.goal_cells();
        assert!(!goals.is_empty(), "{algorithm} flagged no goals");
        assert!(!goals.contains(&(0, 0)), "{algorithm} flagged the start cell");
        for (row, column, cell) in grid.iter() {
            let dead_end = (row, column) != (0, 0) && cell.wall_count() == 3;
            assert_eq!(cell.is_goal, dead_end, "{algorithm} at {row},{column}");
        }
    }
}

#[test]
fn empty_dimensions_are_rejected() {
    for algorithm in ALGORITHMS {
        let err = generator_for(algorithm)
            .generate(0, 5, 1)
            .expect_err("zero rows");
        assert!(matches!(err, Error::InvalidDimension { rows: 0, .. }));
    }
}

#[test]
fn oversized_dimensions_fail_before_allocating() {
    for algorithm in ALGORITHMS {
        let err = generator_for(algorithm)
            .generate(1usize << 62, 4, 1)
            .expect_err("too large");
        assert!(
            matches!(err, Error::DimensionOverflow { columns: 4, .. }),
            "{algorithm}: unexpected error {err}"
        );
    }
}

#[test]
fn single_cell_maze_has_no_goal() {
    for algorithm in ALGORITHMS {
        let grid = generator_for(algorithm).generate(1, 1, 5).expect("generates");
        assert_eq!(grid.get(0, 0).map(|cell| cell.wall_count()), Some(4));
        assert!(grid.goal_cells().is_empty());
    }
}
