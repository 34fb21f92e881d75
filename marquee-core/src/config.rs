//! Scroll configuration types
//!
//! Messages and timing are built once at startup and handed to the session.

use marquee_hal::segment::BANK_SIZE;

use crate::counter::MAX_COUNTER;
use crate::message::{Message, MessageError};
use crate::scroll::COUNTER_GAP;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default wait after each animation frame (ms)
pub const DEFAULT_FRAME_DELAY_MS: u32 = 500;

/// Default hold time of the final all-on bank (ms)
pub const DEFAULT_HOLD_DELAY_MS: u32 = 1000;

/// Longest greeting that still leaves room for the gap and a two-digit counter
pub const MAX_GREETING_LEN: usize = BANK_SIZE - COUNTER_GAP as usize - 2;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Greeting cannot be built
    Greeting(MessageError),
    /// Closing message cannot be built
    Closing(MessageError),
    /// Greeting leaves no room for the counter
    GreetingTooLong,
    /// Iteration count above the counter range
    TooManyIterations,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Greeting(e) => write!(f, "greeting: {}", e),
            ConfigError::Closing(e) => write!(f, "closing message: {}", e),
            ConfigError::GreetingTooLong => {
                write!(f, "greeting must be at most {} glyphs", MAX_GREETING_LEN)
            }
            ConfigError::TooManyIterations => {
                write!(f, "iterations must be at most {}", MAX_COUNTER)
            }
        }
    }
}

/// Animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// Wait after each frame (ms)
    pub frame_delay_ms: u32,
    /// Hold time of the final all-on bank (ms)
    pub hold_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
        }
    }
}

/// Everything a scroll session needs besides the hardware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Message scrolled with the counter
    pub greeting: Message,
    /// Message scrolled once at the end
    pub closing: Message,
    /// Animation timing
    pub timing: Timing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            greeting: Message::greeting(),
            closing: Message::closing(),
            timing: Timing::default(),
        }
    }
}

impl ScrollConfig {
    /// Build a configuration from message text
    pub fn from_text(greeting: &str, closing: &str, timing: Timing) -> Result<Self, ConfigError> {
        let config = Self {
            greeting: Message::from_text(greeting).map_err(ConfigError::Greeting)?,
            closing: Message::from_text(closing).map_err(ConfigError::Closing)?,
            timing,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the messages fit the bank together with the counter
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.greeting.len() > MAX_GREETING_LEN {
            return Err(ConfigError::GreetingTooLong);
        }
        Ok(())
    }

    /// Check an iteration count against the counter range
    pub fn check_iterations(iterations: u8) -> Result<u8, ConfigError> {
        if iterations > MAX_COUNTER {
            return Err(ConfigError::TooManyIterations);
        }
        Ok(iterations)
    }
}
