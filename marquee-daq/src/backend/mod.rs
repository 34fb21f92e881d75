//! Display backends
//!
//! The configuration type entered at startup selects how the bank is shown.

mod device;
mod simulator;

pub use device::DeviceTrace;
pub use simulator::Simulator;

use std::io::Write;

use log::info;
use marquee_hal::{DaqConfig, SegmentBank};

/// Bank for the selected DAQ configuration
pub enum Backend<W: Write> {
    Device(DeviceTrace<W>),
    Simulator(Simulator<W>),
}

impl<W: Write> Backend<W> {
    /// Open the backend for a configuration
    pub fn open(config: DaqConfig, out: W, color: bool) -> Self {
        info!("Opening DAQ backend {:?} (code {})", config, config.as_u8());
        match config {
            DaqConfig::Device => Backend::Device(DeviceTrace::new(out)),
            DaqConfig::Simulator => Backend::Simulator(Simulator::new(out, color)),
        }
    }
}

impl<W: Write> SegmentBank for Backend<W> {
    fn write(&mut self, position: usize, segments: u8) {
        match self {
            Backend::Device(bank) => bank.write(position, segments),
            Backend::Simulator(bank) => bank.write(position, segments),
        }
    }

    fn len(&self) -> usize {
        match self {
            Backend::Device(bank) => bank.len(),
            Backend::Simulator(bank) => bank.len(),
        }
    }

    fn present(&mut self) {
        match self {
            Backend::Device(bank) => bank.present(),
            Backend::Simulator(bank) => bank.present(),
        }
    }
}
