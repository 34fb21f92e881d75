//! Display primitive writer
//!
//! Maps a bank position and a semantic value onto a [`SegmentBank`] write.
//! Positions are signed because the scroll engine computes them from offsets
//! that run off either end of the bank; anything outside the bank is dropped.

use marquee_hal::SegmentBank;

use crate::counter;
use crate::glyph::{Glyph, DIGITS};

/// Signed display position, 0 is the rightmost display
pub type Position = i16;

/// Semantic value written to one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Decimal digit; values above 9 are ignored
    Digit(u8),
    /// All segments off
    Blank,
    /// All segments on
    AllOn,
    /// Message glyph
    Glyph(Glyph),
}

impl Symbol {
    /// Segment pattern for this symbol, `None` when nothing should be written
    pub fn glyph(self) -> Option<Glyph> {
        match self {
            Symbol::Digit(d @ 0..=9) => Some(DIGITS[d as usize]),
            // Out-of-range digit: no write
            Symbol::Digit(_) => None,
            Symbol::Blank => Some(Glyph::BLANK),
            Symbol::AllOn => Some(Glyph::ALL_ON),
            Symbol::Glyph(g) => Some(g),
        }
    }
}

/// Drawing primitives on top of any segment bank
pub trait BankExt: SegmentBank {
    /// One past the last valid position
    fn end(&self) -> Position {
        self.len() as Position
    }

    /// Write a symbol, ignoring positions off the bank
    fn write_symbol(&mut self, symbol: Symbol, position: Position) {
        if position < 0 || position >= self.end() {
            return;
        }
        if let Some(glyph) = symbol.glyph() {
            self.write(position as usize, glyph.bits());
        }
    }

    /// Write a message glyph
    fn write_glyph(&mut self, glyph: Glyph, position: Position) {
        self.write_symbol(Symbol::Glyph(glyph), position);
    }

    /// Write a decimal digit
    fn write_digit(&mut self, digit: u8, position: Position) {
        self.write_symbol(Symbol::Digit(digit), position);
    }

    /// Blank or light every display in `[start, end)`
    ///
    /// An empty or inverted range writes nothing.
    fn refresh_range(&mut self, start: Position, end: Position, turn_on: bool) {
        let symbol = if turn_on { Symbol::AllOn } else { Symbol::Blank };
        let start = start.max(0);
        let end = end.min(self.end());
        for position in start..end {
            self.write_symbol(symbol, position);
        }
    }

    /// Blank the whole bank
    fn clear(&mut self) {
        let end = self.end();
        self.refresh_range(0, end, false);
    }

    /// Light every segment of every display
    fn light_all(&mut self) {
        let end = self.end();
        self.refresh_range(0, end, true);
    }

    /// Render a counter starting at `start`, see [`counter::render_counter`]
    fn write_counter(&mut self, value: u8, start: Position) {
        counter::render_counter(self, value, start);
    }
}

// Blanket implementation for all SegmentBank types
impl<T: SegmentBank + ?Sized> BankExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBank;

    #[test]
    fn test_digit_symbols() {
        assert_eq!(Symbol::Digit(3).glyph(), Some(DIGITS[3]));
        assert_eq!(Symbol::Digit(10).glyph(), None);
        assert_eq!(Symbol::Blank.glyph(), Some(Glyph::BLANK));
        assert_eq!(Symbol::AllOn.glyph(), Some(Glyph::ALL_ON));
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut bank = RecordingBank::new();
        bank.write_digit(12, 0);
        assert!(bank.writes().is_empty());
    }

    #[test]
    fn test_positions_off_bank_are_ignored() {
        let mut bank = RecordingBank::new();
        bank.write_glyph(Glyph::H, -1);
        bank.write_glyph(Glyph::H, 8);
        assert!(bank.writes().is_empty());

        bank.write_glyph(Glyph::H, 7);
        assert_eq!(bank.writes(), &[(7, Glyph::H.bits())]);
    }

    #[test]
    fn test_refresh_range() {
        let mut bank = RecordingBank::new();
        bank.refresh_range(2, 5, true);
        assert_eq!(
            bank.writes(),
            &[(2, 0xFF), (3, 0xFF), (4, 0xFF)]
        );

        bank.reset_log();
        bank.refresh_range(5, 5, false);
        bank.refresh_range(6, 2, false);
        assert!(bank.writes().is_empty());
    }

    #[test]
    fn test_clear_and_light_all() {
        let mut bank = RecordingBank::new();
        bank.light_all();
        assert!(bank.cells().iter().all(|g| *g == Glyph::ALL_ON));
        bank.clear();
        assert!(bank.cells().iter().all(|g| *g == Glyph::BLANK));
        assert_eq!(bank.writes().len(), 16);
    }
}
