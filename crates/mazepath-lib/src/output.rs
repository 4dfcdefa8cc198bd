use std::collections::HashSet;
use std::fmt::Write;

use crate::matrix::{Position, Symbol, TraversabilityMatrix};

/// Character drawn over cells and wall slots the path passes through.
pub const PATH_MARKER: char = '*';

/// Render `matrix` with the path drawn on top.
///
/// Start and goal keep their own symbols; every other cell on the path and
/// every wall slot crossed between consecutive cells is drawn as
/// [`PATH_MARKER`]. Positions outside the matrix are ignored.
pub fn render_path_overlay(matrix: &TraversabilityMatrix, path: &[Position]) -> String {
    let mut marked: HashSet<Position> = path.iter().copied().collect();
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        marked.insert(Position::new(
            (from.row + to.row) / 2,
            (from.col + to.col) / 2,
        ));
    }

    let mut rendered = String::with_capacity(matrix.height() * (matrix.width() + 1));
    for (row, symbols) in matrix.rows().enumerate() {
        if row > 0 {
            rendered.push('\n');
        }
        for (col, symbol) in symbols.iter().enumerate() {
            let keep = matches!(symbol, Symbol::Start | Symbol::Goal);
            if !keep && marked.contains(&Position::new(row, col)) {
                rendered.push(PATH_MARKER);
            } else {
                rendered.push(symbol.as_char());
            }
        }
    }
    rendered
}

/// One-line summary of a move sequence, e.g. `right x2, down`.
pub fn compact_moves(moves: &[crate::MoveToken]) -> String {
    let mut out = String::new();
    let mut iter = moves.iter().peekable();
    while let Some(token) = iter.next() {
        let mut run = 1;
        while iter.peek() == Some(&token) {
            iter.next();
            run += 1;
        }
        if !out.is_empty() {
            out.push_str(", ");
        }
        if run > 1 {
            let _ = write!(out, "{token} x{run}");
        } else {
            let _ = write!(out, "{token}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveToken;

    #[test]
    fn compact_moves_groups_runs() {
        let moves = [
            MoveToken::Right,
            MoveToken::Right,
            MoveToken::Down,
            MoveToken::Right,
        ];
        assert_eq!(compact_moves(&moves), "right x2, down, right");
        assert_eq!(compact_moves(&[]), "");
    }

    #[test]
    fn overlay_marks_cells_and_slots() {
        let matrix: TraversabilityMatrix = "#-#-#-#\n-B-O-G-\n#-#-#-#".parse().unwrap();
        let path = [
            Position::new(1, 1),
            Position::new(1, 3),
            Position::new(1, 5),
        ];
        assert_eq!(
            render_path_overlay(&matrix, &path),
            "#-#-#-#\n-B***G-\n#-#-#-#"
        );
    }
}
