//! Test doubles shared by the unit tests

use embedded_hal::delay::DelayNs;
use marquee_hal::segment::BANK_SIZE;
use marquee_hal::{InputPin, SegmentBank};

use crate::glyph::Glyph;
use crate::message::Message;

/// Bank that records every write and every presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingBank {
    cells: [Glyph; BANK_SIZE],
    writes: Vec<(usize, u8)>,
    frames: Vec<[Glyph; BANK_SIZE]>,
}

impl RecordingBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Glyph; BANK_SIZE] {
        &self.cells
    }

    pub fn writes(&self) -> &[(usize, u8)] {
        &self.writes
    }

    pub fn frames(&self) -> &[[Glyph; BANK_SIZE]] {
        &self.frames
    }

    pub fn reset_log(&mut self) {
        self.writes.clear();
        self.frames.clear();
    }
}

impl SegmentBank for RecordingBank {
    fn write(&mut self, position: usize, segments: u8) {
        assert!(position < BANK_SIZE, "write past bank end: {}", position);
        self.cells[position] = Glyph(segments);
        self.writes.push((position, segments));
    }

    fn present(&mut self) {
        self.frames.push(self.cells);
    }
}

/// Expected bank contents with `message` laid out at `offset`
///
/// Position `offset + r` holds `message[len - 1 - r]`, everything else is
/// blank unless overridden.
pub fn laid_out(message: &Message, offset: i16) -> [Glyph; BANK_SIZE] {
    let mut cells = [Glyph::BLANK; BANK_SIZE];
    let len = message.len() as i16;
    for r in 0..len {
        let position = offset + r;
        if (0..BANK_SIZE as i16).contains(&position) {
            cells[position as usize] = message.glyphs()[(len - 1 - r) as usize];
        }
    }
    cells
}

/// Delay that only counts the time it was asked to wait
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ms: u64,
    pub calls: usize,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
        self.calls += 1;
    }
}

/// Input channel replaying a fixed sequence of levels, then holding the last
#[derive(Debug, Clone)]
pub struct ScriptedPin {
    levels: Vec<bool>,
    index: usize,
    pub polls: usize,
}

impl ScriptedPin {
    pub fn new(levels: &[bool]) -> Self {
        Self {
            levels: levels.to_vec(),
            index: 0,
            polls: 0,
        }
    }

    pub fn constant(level: bool) -> Self {
        Self::new(&[level])
    }
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> bool {
        self.polls += 1;
        let level = self.levels[self.index.min(self.levels.len() - 1)];
        self.index += 1;
        level
    }
}
