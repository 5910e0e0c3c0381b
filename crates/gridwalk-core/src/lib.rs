//! **gridwalk-core**: geometry types shared across the *gridwalk* crates.
//!
//! A [`Cell`] is a `(row, col)` coordinate and a [`Range`] is a half-open
//! rectangle of cells. Both are plain `Copy` values.

pub mod geom;

pub use geom::{Cell, Range, RangeIter};
