use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Cell, Range};
use log::debug;

use crate::error::SearchError;
use crate::grid::Grid;
use crate::traits::{AstarPather, EnergyPather};

/// A search state: a cell, plus the remaining energy for energy-aware
/// strategies. BFS and A* leave `energy` as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateKey {
    pub cell: Cell,
    pub energy: Option<u32>,
}

impl StateKey {
    /// A state that ignores energy.
    #[inline]
    pub const fn plain(cell: Cell) -> Self {
        Self { cell, energy: None }
    }

    /// A state carrying `energy` units of remaining energy.
    #[inline]
    pub const fn charged(cell: Cell, energy: u32) -> Self {
        Self {
            cell,
            energy: Some(energy),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// The search strategies a [`SearchEngine`] can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    AStar,
    Bfs,
    Dfs,
    Ucs,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Strategy::AStar, Strategy::Bfs, Strategy::Dfs, Strategy::Ucs];

    /// Whether the strategy tracks remaining energy.
    pub const fn uses_energy(self) -> bool {
        matches!(self, Strategy::Dfs | Strategy::Ucs)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::AStar => "A*",
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Ucs => "UCS",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected astar, bfs, dfs or ucs)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "ucs" => Ok(Strategy::Ucs),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs searches from a fixed start cell to the bottom-right cell of a range.
///
/// Each search method clears the state left by the previous one, returns
/// whether the goal was reached, and leaves the predecessor map in place for
/// [`trace_path`](Self::trace_path).
pub struct SearchEngine<'a, P> {
    pub(crate) pather: &'a P,
    pub(crate) range: Range,
    pub(crate) start: Cell,
    pub(crate) goal: Cell,
    pub(crate) energy: u32,
    pub(crate) came_from: HashMap<StateKey, StateKey>,
    /// State the last successful search finished on.
    pub(crate) terminal: Option<StateKey>,
    pub(crate) expanded: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl<'a> SearchEngine<'a, Grid> {
    /// Bind a search to `grid`, starting at `start` with an energy budget.
    ///
    /// Fails if the start lies outside the grid or either endpoint is an
    /// obstacle.
    pub fn new(grid: &'a Grid, start: Cell, energy: u32) -> Result<Self, SearchError> {
        let engine = Self::with_pather(grid, grid.range(), start, energy)?;
        if !grid.passable(start) {
            return Err(SearchError::StartBlocked(start));
        }
        if !grid.passable(engine.goal) {
            return Err(SearchError::GoalBlocked(engine.goal));
        }
        Ok(engine)
    }
}

impl<'a, P> SearchEngine<'a, P> {
    /// Bind a search to an arbitrary pather covering `range`. The goal is the
    /// bottom-right cell of `range`.
    pub fn with_pather(
        pather: &'a P,
        range: Range,
        start: Cell,
        energy: u32,
    ) -> Result<Self, SearchError> {
        let goal = range.last().ok_or(SearchError::EmptyGrid)?;
        if !range.contains(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        Ok(Self {
            pather,
            range,
            start,
            goal,
            energy,
            came_from: HashMap::new(),
            terminal: None,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The full energy budget.
    #[inline]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Number of states popped from the frontier by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Remaining energy on arrival at the goal, for a successful
    /// energy-aware search.
    #[inline]
    pub fn goal_energy(&self) -> Option<u32> {
        self.terminal.and_then(|k| k.energy)
    }

    /// Predecessor of `state` recorded by the last search.
    pub fn predecessor(&self, state: StateKey) -> Option<StateKey> {
        self.came_from.get(&state).copied()
    }

    pub(crate) fn reset(&mut self) {
        self.came_from.clear();
        self.terminal = None;
        self.expanded = 0;
    }

    pub(crate) fn finish(&self, strategy: Strategy, found: bool) -> bool {
        debug!(
            "{strategy}: {} -> {} {} after {} expansions",
            self.start,
            self.goal,
            if found { "reached" } else { "unreachable" },
            self.expanded
        );
        found
    }

    /// Reconstruct the path found by the last successful search, start to
    /// goal inclusive.
    pub fn trace_path(&self) -> Result<Vec<Cell>, SearchError> {
        let mut key = self.terminal.ok_or(SearchError::NoPath)?;
        let mut path = Vec::new();
        while key.cell != self.start {
            path.push(key.cell);
            // A chain longer than the map can only be a cycle.
            if path.len() > self.came_from.len() {
                return Err(SearchError::BrokenChain(key.cell));
            }
            key = self
                .came_from
                .get(&key)
                .copied()
                .ok_or(SearchError::BrokenChain(key.cell))?;
        }
        path.push(self.start);
        path.reverse();
        Ok(path)
    }
}

impl<P: AstarPather + EnergyPather> SearchEngine<'_, P> {
    /// Run the given strategy.
    pub fn run(&mut self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::AStar => self.astar(),
            Strategy::Bfs => self.bfs(),
            Strategy::Dfs => self.dfs(),
            Strategy::Ucs => self.ucs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn construction_validates_endpoints() {
        let g = Grid::uniform(3, 3, [c(0, 1), c(2, 2)], []).unwrap();
        assert_eq!(
            SearchEngine::new(&g, c(3, 0), 5).err(),
            Some(SearchError::StartOutOfBounds(c(3, 0)))
        );
        assert_eq!(
            SearchEngine::new(&g, c(0, 1), 5).err(),
            Some(SearchError::StartBlocked(c(0, 1)))
        );
        assert_eq!(
            SearchEngine::new(&g, c(0, 0), 5).err(),
            Some(SearchError::GoalBlocked(c(2, 2)))
        );
    }

    #[test]
    fn goal_is_bottom_right() {
        let g = Grid::uniform(4, 7, [], []).unwrap();
        let engine = SearchEngine::new(&g, c(1, 1), 3).unwrap();
        assert_eq!(engine.goal(), c(3, 6));
        assert_eq!(engine.start(), c(1, 1));
        assert_eq!(engine.energy(), 3);
    }

    #[test]
    fn trace_without_search_is_no_path() {
        let g = Grid::uniform(2, 2, [], []).unwrap();
        let engine = SearchEngine::new(&g, c(0, 0), 1).unwrap();
        assert_eq!(engine.trace_path(), Err(SearchError::NoPath));
        assert_eq!(engine.goal_energy(), None);
    }

    #[test]
    fn failed_search_clears_previous_path() {
        let g = Grid::uniform(3, 3, [], []).unwrap();
        let mut engine = SearchEngine::new(&g, c(0, 0), 1).unwrap();
        assert!(engine.bfs());
        assert!(engine.trace_path().is_ok());
        // One unit of energy cannot cover four steps.
        assert!(!engine.dfs());
        assert_eq!(engine.trace_path(), Err(SearchError::NoPath));
    }

    #[test]
    fn strategy_parse_and_display() {
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("BFS".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("dfs".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert_eq!("Ucs".parse::<Strategy>().unwrap(), Strategy::Ucs);
        assert!("greedy".parse::<Strategy>().is_err());
        assert_eq!(Strategy::AStar.to_string(), "A*");
        assert_eq!(Strategy::Ucs.to_string(), "UCS");
        assert!(Strategy::Dfs.uses_energy());
        assert!(!Strategy::Bfs.uses_energy());
    }

    #[test]
    fn state_keys_order_by_cell_then_energy() {
        assert!(StateKey::charged(c(0, 1), 9) < StateKey::charged(c(1, 0), 0));
        assert!(StateKey::charged(c(1, 1), 2) < StateKey::charged(c(1, 1), 3));
        assert_ne!(StateKey::plain(c(1, 1)), StateKey::charged(c(1, 1), 0));
    }
}
