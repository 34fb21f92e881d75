//! Seven-segment display bank
//!
//! The bank is a row of displays addressed by position. Position 0 is the
//! rightmost display. Each write commits one segment pattern (active high,
//! `a b c d e f g dp` from MSB to LSB) to one position.

/// Number of displays on the standard DAQ board
pub const BANK_SIZE: usize = 8;

/// Seven-segment display bank
///
/// Implementations handle the actual output, either to DAQ hardware or to
/// a simulator window/terminal.
pub trait SegmentBank {
    /// Commit a segment pattern to one display position
    ///
    /// Callers only pass positions in `0..self.len()`.
    fn write(&mut self, position: usize, segments: u8);

    /// Number of displays in the bank
    fn len(&self) -> usize {
        BANK_SIZE
    }

    /// Whether the bank has no displays
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hook called once a full frame has been written
    ///
    /// Backends that redraw a whole view (terminal simulators) render here.
    fn present(&mut self) {}
}

impl<T: SegmentBank + ?Sized> SegmentBank for &mut T {
    fn write(&mut self, position: usize, segments: u8) {
        (**self).write(position, segments)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn present(&mut self) {
        (**self).present()
    }
}
