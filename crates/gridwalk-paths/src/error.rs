use std::fmt;

use gridwalk_core::Cell;

/// Errors raised while building a grid, binding a search to it, or
/// reconstructing a path.
///
/// An exhausted frontier is not an error: search methods report it by
/// returning `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The cost matrix has no rows or no columns.
    EmptyGrid,
    /// A cost-matrix row differs in length from the first row.
    RaggedCosts {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell was given a negative cost.
    NegativeCost { cell: Cell, cost: i32 },
    /// The start cell lies outside the grid.
    StartOutOfBounds(Cell),
    /// The start cell is an obstacle.
    StartBlocked(Cell),
    /// The goal cell is an obstacle.
    GoalBlocked(Cell),
    /// `trace_path` was called without a preceding successful search.
    NoPath,
    /// The predecessor chain ended at this cell before reaching the start.
    BrokenChain(Cell),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid: cost matrix is empty"),
            Self::RaggedCosts {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: cost row {row} has {found} columns, expected {expected}"
            ),
            Self::NegativeCost { cell, cost } => {
                write!(f, "grid: negative cost {cost} at {cell}")
            }
            Self::StartOutOfBounds(c) => write!(f, "search: start {c} is outside the grid"),
            Self::StartBlocked(c) => write!(f, "search: start {c} is an obstacle"),
            Self::GoalBlocked(c) => write!(f, "search: goal {c} is an obstacle"),
            Self::NoPath => write!(f, "search: no path available"),
            Self::BrokenChain(c) => write!(f, "search: predecessor chain broken at {c}"),
        }
    }
}

impl std::error::Error for SearchError {}
