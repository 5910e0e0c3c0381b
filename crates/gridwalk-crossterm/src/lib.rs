//! Crossterm output for gridwalk.
//!
//! Provides a [`TermPrinter`] that writes a [`Grid`] with an optional path
//! overlay, colouring each [`Glyph`], plus a one-line search verdict.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
};

use gridwalk_core::Cell;
use gridwalk_paths::{Glyph, Grid};

/// Maps a [`Glyph`] to the terminal colour it is printed in.
pub fn glyph_color(glyph: Glyph) -> CtColor {
    match glyph {
        Glyph::Floor => CtColor::DarkGrey,
        Glyph::Wall => CtColor::White,
        Glyph::Refill => CtColor::Yellow,
        Glyph::PathRefill => CtColor::Magenta,
        Glyph::Path => CtColor::Green,
    }
}

/// Writes grids and verdicts to a terminal or any other [`Write`] sink.
pub struct TermPrinter {
    color: bool,
}

impl TermPrinter {
    /// Create a printer that colours output only when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_tty(),
        }
    }

    /// Force colour on or off.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    fn paint<W: Write>(&self, out: &mut W, color: CtColor, text: &str) -> io::Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            queue!(out, Print(text))
        }
    }

    /// Write `grid` with `path` overlaid. With `show_weights` columns are
    /// tab-terminated and floor cells show their entry cost.
    pub fn print_grid<W: Write>(
        &self,
        out: &mut W,
        grid: &Grid,
        path: Option<&[Cell]>,
        show_weights: bool,
    ) -> io::Result<()> {
        for (r, line) in grid.glyph_rows(path).into_iter().enumerate() {
            for (k, glyph) in line.into_iter().enumerate() {
                let text = grid.cell_text(Cell::new(r as i32, k as i32), glyph, show_weights);
                self.paint(out, glyph_color(glyph), &text)?;
            }
            queue!(out, Print("\n"))?;
        }
        out.flush()
    }

    /// Write the outcome of a search on its own line.
    pub fn print_verdict<W: Write>(&self, out: &mut W, found: bool) -> io::Result<()> {
        if found {
            self.paint(out, CtColor::Green, "Found path!")?;
        } else {
            self.paint(out, CtColor::Red, "Can not find path.")?;
        }
        queue!(out, Print("\n"))?;
        out.flush()
    }
}

impl Default for TermPrinter {
    fn default() -> Self {
        Self::new()
    }
}
