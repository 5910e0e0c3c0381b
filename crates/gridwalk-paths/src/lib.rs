//! Energy-aware search on 2D grids.
//!
//! A [`SearchEngine`] runs one of four strategies from a start cell to the
//! bottom-right cell of a grid:
//!
//! - **A\*** with a Manhattan heuristic over per-cell entry costs
//!   ([`SearchEngine::astar`])
//! - **BFS**, fewest steps ([`SearchEngine::bfs`])
//! - **DFS** with a limited energy budget ([`SearchEngine::dfs`])
//! - **Uniform-cost search** with a limited energy budget
//!   ([`SearchEngine::ucs`])
//!
//! Energy-aware strategies spend one unit per step and restore the full
//! budget when entering a refill cell. After a successful search,
//! [`SearchEngine::trace_path`] returns the route from start to goal.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | (base of A*) |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//! | [`EnergyPather`] : [`Pather`] | DFS, UCS |
//!
//! [`Grid`] implements all of them.

mod astar;
mod bfs;
pub mod check;
mod dfs;
mod distance;
mod engine;
mod error;
mod grid;
mod queue;
mod render;
mod traits;
mod ucs;

pub use distance::manhattan;
pub use engine::{SearchEngine, StateKey, Strategy, UnknownStrategy};
pub use error::SearchError;
pub use grid::Grid;
pub use queue::PriorityQueue;
pub use render::Glyph;
pub use traits::{AstarPather, EnergyPather, Pather, WeightedPather};

pub use gridwalk_core::{Cell, Range};
