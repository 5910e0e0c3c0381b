//! The traversal surface searched by [`SearchEngine`](crate::SearchEngine).

use std::collections::HashSet;

use gridwalk_core::{Cell, Range};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::traits::{AstarPather, EnergyPather, Pather, WeightedPather};

/// A rectangular grid with obstacles, energy refill cells and a per-cell
/// entry cost.
///
/// The grid is immutable once built. Obstacle and refill sets are allowed to
/// overlap, and may name cells outside the grid (those entries are inert).
#[derive(Debug, Clone)]
pub struct Grid {
    range: Range,
    costs: Vec<i32>,
    walls: HashSet<Cell>,
    refills: HashSet<Cell>,
}

impl Grid {
    /// Build a grid from a row-major cost matrix. Dimensions are taken from
    /// the number of rows and the length of the first row.
    pub fn new(
        costs: Vec<Vec<i32>>,
        walls: impl IntoIterator<Item = Cell>,
        refills: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, SearchError> {
        let rows = costs.len();
        let cols = costs.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(SearchError::EmptyGrid);
        }

        let mut flat = Vec::with_capacity(rows * cols);
        for (r, line) in costs.into_iter().enumerate() {
            if line.len() != cols {
                return Err(SearchError::RaggedCosts {
                    row: r,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (k, cost) in line.into_iter().enumerate() {
                if cost < 0 {
                    return Err(SearchError::NegativeCost {
                        cell: Cell::new(r as i32, k as i32),
                        cost,
                    });
                }
                flat.push(cost);
            }
        }

        Ok(Self {
            range: Range::with_size(rows as i32, cols as i32),
            costs: flat,
            walls: walls.into_iter().collect(),
            refills: refills.into_iter().collect(),
        })
    }

    /// Build a `rows` × `cols` grid whose cost matrix is all zeros.
    pub fn uniform(
        rows: i32,
        cols: i32,
        walls: impl IntoIterator<Item = Cell>,
        refills: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, SearchError> {
        if rows <= 0 || cols <= 0 {
            return Err(SearchError::EmptyGrid);
        }
        Self::new(
            vec![vec![0; cols as usize]; rows as usize],
            walls,
            refills,
        )
    }

    /// The rectangle covered by the grid, anchored at (0, 0).
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.range.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.range.cols()
    }

    /// The bottom-right cell, which every search targets.
    #[inline]
    pub fn goal(&self) -> Cell {
        Cell::new(self.rows() - 1, self.cols() - 1)
    }

    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        self.range.contains(c)
    }

    /// Whether `c` is not an obstacle. Bounds are not checked.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        !self.walls.contains(&c)
    }

    #[inline]
    pub fn is_refill(&self, c: Cell) -> bool {
        self.refills.contains(&c)
    }

    /// Entry cost of `c`, or `None` outside the grid.
    #[inline]
    pub fn cost_at(&self, c: Cell) -> Option<i32> {
        self.range.index(c).map(|i| self.costs[i])
    }

    /// In-bounds, passable axis-aligned neighbors of `c`, in the order
    /// +row, -row, +col, -col.
    pub fn neighbors(&self, c: Cell) -> Vec<Cell> {
        let mut buf = Vec::with_capacity(4);
        Pather::neighbors(self, c, &mut buf);
        buf
    }

    /// Obstacles inside the grid, in row-major order.
    pub fn walls(&self) -> Vec<Cell> {
        let mut v: Vec<Cell> = self.walls.iter().copied().filter(|&c| self.in_bounds(c)).collect();
        v.sort();
        v
    }

    /// Refill cells inside the grid, in row-major order.
    pub fn refill_cells(&self) -> Vec<Cell> {
        let mut v: Vec<Cell> = self
            .refills
            .iter()
            .copied()
            .filter(|&c| self.in_bounds(c))
            .collect();
        v.sort();
        v
    }
}

impl Pather for Grid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for n in c.neighbors_4() {
            if self.in_bounds(n) && self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Grid {
    fn cost(&self, _from: Cell, to: Cell) -> i32 {
        self.cost_at(to).unwrap_or(0)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

impl EnergyPather for Grid {
    fn refills(&self, c: Cell) -> bool {
        self.is_refill(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn dimensions_from_cost_matrix() {
        let g = Grid::new(vec![vec![0, 1, 2], vec![3, 4, 5]], [], []).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.goal(), c(1, 2));
        assert_eq!(g.cost_at(c(1, 1)), Some(4));
        assert_eq!(g.cost_at(c(2, 0)), None);
    }

    #[test]
    fn rejects_bad_cost_matrices() {
        assert_eq!(Grid::new(vec![], [], []).unwrap_err(), SearchError::EmptyGrid);
        assert_eq!(
            Grid::new(vec![vec![]], [], []).unwrap_err(),
            SearchError::EmptyGrid
        );
        assert_eq!(
            Grid::new(vec![vec![0, 0], vec![0]], [], []).unwrap_err(),
            SearchError::RaggedCosts {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            Grid::new(vec![vec![0, -3]], [], []).unwrap_err(),
            SearchError::NegativeCost {
                cell: c(0, 1),
                cost: -3
            }
        );
        assert_eq!(Grid::uniform(0, 4, [], []).unwrap_err(), SearchError::EmptyGrid);
    }

    #[test]
    fn bounds_and_passability() {
        let g = Grid::uniform(3, 4, [c(1, 1)], [c(0, 3)]).unwrap();
        assert!(g.in_bounds(c(0, 0)));
        assert!(g.in_bounds(c(2, 3)));
        assert!(!g.in_bounds(c(3, 0)));
        assert!(!g.in_bounds(c(0, 4)));
        assert!(!g.in_bounds(c(-1, 2)));
        assert!(!g.passable(c(1, 1)));
        assert!(g.passable(c(1, 2)));
        assert!(g.is_refill(c(0, 3)));
        assert!(!g.is_refill(c(0, 2)));
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let g = Grid::uniform(3, 3, [c(1, 2)], []).unwrap();
        // +row, -row, +col, -col; (1, 2) is blocked.
        assert_eq!(g.neighbors(c(1, 1)), vec![c(2, 1), c(0, 1), c(1, 0)]);
        // Corner cell: only in-bounds neighbors.
        assert_eq!(g.neighbors(c(0, 0)), vec![c(1, 0), c(0, 1)]);
    }

    #[test]
    fn neighbors_is_idempotent() {
        let g = Grid::uniform(5, 5, [c(2, 3), c(3, 2)], [c(1, 2)]).unwrap();
        for cell in g.range() {
            assert_eq!(g.neighbors(cell), g.neighbors(cell));
        }
    }

    #[test]
    fn wall_and_refill_listing_skips_out_of_range() {
        let g = Grid::uniform(2, 2, [c(1, 0), c(5, 5), c(0, 1)], [c(1, 1), c(-1, 0)]).unwrap();
        assert_eq!(g.walls(), vec![c(0, 1), c(1, 0)]);
        assert_eq!(g.refill_cells(), vec![c(1, 1)]);
    }

    #[test]
    fn pather_traits() {
        let g = Grid::new(vec![vec![0, 7], vec![2, 0]], [], [c(1, 0)]).unwrap();
        assert_eq!(g.cost(c(0, 0), c(0, 1)), 7);
        assert_eq!(g.estimate(c(0, 0), c(1, 1)), 2);
        assert!(EnergyPather::refills(&g, c(1, 0)));
    }
}
