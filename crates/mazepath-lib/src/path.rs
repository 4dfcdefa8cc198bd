use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::matrix::{Position, TraversabilityMatrix};
use crate::queue::PriorityQueue;

/// Ordered cell positions from start to goal, one cell move apart.
pub type Path = Vec<Position>;

/// Cardinal neighbour offsets in matrix-index units of one wall slot.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// One cell move crosses a wall slot and lands two indices away. Keeping the
/// cost in index units matches the Manhattan heuristic's units.
const STEP_COST: f64 = 2.0;

/// Optional bounds on a single search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after this many nodes have been expanded.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Result of a bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path from start to goal, both included.
    Found(Path),
    /// The open set emptied without reaching the goal.
    NoPath,
    /// The expansion budget ran out before the search finished.
    BudgetExhausted { expanded: usize },
}

impl SearchOutcome {
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NoPath | SearchOutcome::BudgetExhausted { .. } => None,
        }
    }
}

/// Find a shortest path between `start` and `goal` using A* search.
///
/// Returns `None` when the goal cannot be reached.
pub fn find_path(matrix: &TraversabilityMatrix, start: Position, goal: Position) -> Option<Path> {
    find_path_with_limits(matrix, start, goal, &SearchLimits::unlimited()).into_path()
}

/// Run A* between `start` and `goal` under optional limits.
///
/// Only cell positions are expanded. Moving between two neighbouring cells is
/// allowed when the wall slot between them is passable and the destination is
/// inside the matrix. Closed nodes are never reopened; with uniform step costs
/// and a consistent heuristic this still yields a shortest path.
///
/// Costs are in matrix-index units: a cell move costs 2, so `g / 2` is the
/// number of moves taken.
pub fn find_path_with_limits(
    matrix: &TraversabilityMatrix,
    start: Position,
    goal: Position,
    limits: &SearchLimits,
) -> SearchOutcome {
    if !is_cell(matrix, start) || !is_cell(matrix, goal) {
        debug!(%start, %goal, "start or goal is not a traversable cell");
        return SearchOutcome::NoPath;
    }

    let mut open = PriorityQueue::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut g_score: HashMap<Position, f64> = HashMap::new();
    let mut parents: HashMap<Position, Position> = HashMap::new();
    let mut expanded = 0usize;

    g_score.insert(start, 0.0);
    open.enqueue(start, heuristic(start, goal));

    while let Some(current) = open.pop_min() {
        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            debug!(expanded, steps = path.len(), "path found");
            return SearchOutcome::Found(path);
        }

        if let Some(limit) = limits.max_expansions {
            if expanded >= limit {
                debug!(expanded, "search budget exhausted");
                return SearchOutcome::BudgetExhausted { expanded };
            }
        }
        expanded += 1;
        closed.insert(current);

        let current_score = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        for (d_row, d_col) in NEIGHBOUR_OFFSETS {
            let Some(next) = step(matrix, current, d_row, d_col) else {
                continue;
            };
            if closed.contains(&next) {
                continue;
            }

            let tentative = current_score + STEP_COST;
            let queued = open.contains(&next);
            let known = g_score.get(&next).copied().unwrap_or(f64::INFINITY);
            if queued && tentative >= known {
                continue;
            }

            g_score.insert(next, tentative);
            parents.insert(next, current);
            let estimate = tentative + heuristic(next, goal);
            if queued {
                open.update_priority(&next, estimate);
            } else {
                open.enqueue(next, estimate);
            }
        }
    }

    debug!(expanded, "open set exhausted without reaching goal");
    SearchOutcome::NoPath
}

/// Solve from the matrix's own start to its own goal.
pub fn solve_matrix_path(matrix: &TraversabilityMatrix, limits: &SearchLimits) -> SearchOutcome {
    match matrix.goal() {
        Some(goal) => find_path_with_limits(matrix, matrix.start(), goal, limits),
        None => SearchOutcome::NoPath,
    }
}

/// Manhattan distance in matrix-index units.
fn heuristic(from: Position, to: Position) -> f64 {
    from.manhattan(&to) as f64
}

fn is_cell(matrix: &TraversabilityMatrix, position: Position) -> bool {
    position.is_cell_position() && matrix.get(position).is_some_and(|s| s.is_cell())
}

/// Neighbouring cell reachable through the wall slot in direction `(d_row, d_col)`.
fn step(
    matrix: &TraversabilityMatrix,
    from: Position,
    d_row: isize,
    d_col: isize,
) -> Option<Position> {
    let slot = from.offset(d_row, d_col)?;
    if matrix.is_blocked(slot) {
        return None;
    }
    let next = from.offset(2 * d_row, 2 * d_col)?;
    is_cell(matrix, next).then_some(next)
}

fn reconstruct_path(parents: &HashMap<Position, Position>, start: Position, goal: Position) -> Path {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(parent) => {
                current = *parent;
                path.push(current);
            }
            None => break,
        }
    }
    path.reverse();
    path
}
