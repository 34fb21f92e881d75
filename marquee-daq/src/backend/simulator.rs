//! Terminal simulator
//!
//! Draws the bank as seven-segment art, three text rows per frame, leftmost
//! display (highest position) first. Each frame is redrawn over the previous
//! one.

use std::io::Write;

use colored::Colorize;
use log::warn;
use marquee_core::glyph::{Glyph, Segment};
use marquee_hal::segment::BANK_SIZE;
use marquee_hal::SegmentBank;

/// Text rows per frame
pub const ROWS: usize = 3;

/// Seven-segment art renderer
pub struct Simulator<W: Write> {
    out: W,
    cells: [u8; BANK_SIZE],
    color: bool,
    drawn: bool,
    failed: bool,
}

impl<W: Write> Simulator<W> {
    /// Create a simulator writing to `out`
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            cells: [0; BANK_SIZE],
            color,
            drawn: false,
            failed: false,
        }
    }

    /// Render the current cells as text rows
    pub fn rows(&self) -> [String; ROWS] {
        let mut rows: [String; ROWS] = Default::default();
        for &bits in self.cells.iter().rev() {
            let glyph = Glyph(bits);
            let lit = |segment, mark: &str| self.mark(glyph.is_lit(segment), mark);

            rows[0] += &format!(" {}  ", lit(Segment::A, "_"));
            rows[1] += &format!(
                "{}{}{} ",
                lit(Segment::F, "|"),
                lit(Segment::G, "_"),
                lit(Segment::B, "|")
            );
            rows[2] += &format!(
                "{}{}{}{}",
                lit(Segment::E, "|"),
                lit(Segment::D, "_"),
                lit(Segment::C, "|"),
                lit(Segment::Dp, ".")
            );
        }
        rows
    }

    /// Release the output
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn mark(&self, lit: bool, mark: &str) -> String {
        match (lit, self.color) {
            (false, _) => " ".to_string(),
            (true, true) => mark.red().bold().to_string(),
            (true, false) => mark.to_string(),
        }
    }

    fn draw(&mut self) -> std::io::Result<()> {
        if self.drawn {
            // Back to the first row of the previous frame
            write!(self.out, "\x1b[{}A\r", ROWS)?;
        }
        for row in self.rows() {
            writeln!(self.out, "{}", row)?;
        }
        self.out.flush()?;
        self.drawn = true;
        Ok(())
    }
}

impl<W: Write> SegmentBank for Simulator<W> {
    fn write(&mut self, position: usize, segments: u8) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = segments;
        }
    }

    fn present(&mut self) {
        if let Err(e) = self.draw() {
            if !self.failed {
                warn!("Simulator output failed: {}", e);
                self.failed = true;
            }
        }
    }
}
