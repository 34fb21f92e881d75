//! DAQ module setup identifiers
//!
//! The vendor DAQ library selects its backend and numbers its digital
//! channels with small integer codes; these enums give them names.

/// Backend selected when the DAQ module is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DaqConfig {
    /// Physical DAQ board
    Device = 0,
    /// DAQ simulator
    Simulator = 4,
}

impl DaqConfig {
    /// Get the configuration as its setup code
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a configuration from a setup code
    pub fn from_code(value: i64) -> Option<Self> {
        match value {
            0 => Some(DaqConfig::Device),
            4 => Some(DaqConfig::Simulator),
            _ => None,
        }
    }
}

/// Digital input channels used by the scrolling display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// Restarts the scroll session while asserted
    Reset = 0,
    /// Scrolling proceeds only while asserted
    Run = 1,
}

impl Channel {
    /// Get the channel number
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
