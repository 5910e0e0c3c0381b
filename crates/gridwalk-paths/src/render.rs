//! Text rendering of a [`Grid`] with an optional path overlay.

use std::collections::HashSet;

use gridwalk_core::Cell;

use crate::grid::Grid;

/// What a single cell looks like when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Passable, not on the path.
    Floor,
    /// Obstacle.
    Wall,
    /// Refill cell, not on the path.
    Refill,
    /// Path crossing a refill cell.
    PathRefill,
    /// Path crossing a plain cell.
    Path,
}

impl Glyph {
    /// The character printed for this glyph.
    pub const fn ch(self) -> char {
        match self {
            Glyph::Floor => '_',
            Glyph::Wall => '#',
            Glyph::Refill => '!',
            Glyph::PathRefill => '$',
            Glyph::Path => '+',
        }
    }
}

impl Grid {
    /// Classify `c` for drawing. Path membership wins over refill, which wins
    /// over passability.
    pub fn glyph(&self, c: Cell, on_path: bool) -> Glyph {
        match (on_path, self.is_refill(c)) {
            (true, true) => Glyph::PathRefill,
            (true, false) => Glyph::Path,
            (false, true) => Glyph::Refill,
            (false, false) if self.passable(c) => Glyph::Floor,
            (false, false) => Glyph::Wall,
        }
    }

    /// Glyphs for every row, top to bottom.
    pub fn glyph_rows(&self, path: Option<&[Cell]>) -> Vec<Vec<Glyph>> {
        let on_path: HashSet<Cell> = path.unwrap_or_default().iter().copied().collect();
        (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|k| {
                        let c = Cell::new(r, k);
                        self.glyph(c, on_path.contains(&c))
                    })
                    .collect()
            })
            .collect()
    }

    /// Text for one cell. With `show_weights` the text is tab-terminated and
    /// plain floor cells show their entry cost instead of `_`.
    pub fn cell_text(&self, c: Cell, glyph: Glyph, show_weights: bool) -> String {
        match (show_weights, glyph, self.cost_at(c)) {
            (true, Glyph::Floor, Some(cost)) => format!("{cost}\t"),
            (true, _, _) => format!("{}\t", glyph.ch()),
            (false, _, _) => glyph.ch().to_string(),
        }
    }

    /// Render the grid as text, one newline-terminated line per row, using
    /// [`cell_text`](Self::cell_text) for every cell.
    pub fn draw(&self, show_weights: bool, path: Option<&[Cell]>) -> String {
        let mut out = String::new();
        for (r, line) in self.glyph_rows(path).into_iter().enumerate() {
            for (k, glyph) in line.into_iter().enumerate() {
                let c = Cell::new(r as i32, k as i32);
                out.push_str(&self.cell_text(c, glyph, show_weights));
            }
            out.push('\n');
        }
        out
    }
}
