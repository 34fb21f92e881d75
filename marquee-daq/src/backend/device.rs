//! Device register trace
//!
//! Prints the segment byte held by each display after every frame, one line
//! per frame, leftmost display first. This is exactly what a DAQ digital
//! output port would latch.

use std::io::Write;

use log::warn;
use marquee_hal::segment::BANK_SIZE;
use marquee_hal::SegmentBank;

/// Segment register trace
pub struct DeviceTrace<W: Write> {
    out: W,
    registers: [u8; BANK_SIZE],
    writes: usize,
    frame: u32,
    failed: bool,
}

impl<W: Write> DeviceTrace<W> {
    /// Create a trace writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            registers: [0; BANK_SIZE],
            writes: 0,
            frame: 0,
            failed: false,
        }
    }

    /// Format the current registers as one trace line
    pub fn line(&self) -> String {
        let registers: Vec<String> = self
            .registers
            .iter()
            .rev()
            .map(|bits| format!("{:02x}", bits))
            .collect();
        format!(
            "frame {:04} | {} | {} write(s)",
            self.frame,
            registers.join(" "),
            self.writes
        )
    }

    /// Release the output
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SegmentBank for DeviceTrace<W> {
    fn write(&mut self, position: usize, segments: u8) {
        if let Some(register) = self.registers.get_mut(position) {
            *register = segments;
            self.writes += 1;
        }
    }

    fn present(&mut self) {
        let line = self.line();
        let result = writeln!(self.out, "{}", line).and_then(|_| self.out.flush());
        if let Err(e) = result {
            if !self.failed {
                warn!("Device trace output failed: {}", e);
                self.failed = true;
            }
        }
        self.frame += 1;
        self.writes = 0;
    }
}
