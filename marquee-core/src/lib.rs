//! Board-agnostic core logic for the Marquee scrolling display
//!
//! This crate contains all application logic that does not depend on the
//! DAQ backend:
//!
//! - Seven-segment glyph table and text font
//! - Message value type
//! - Display primitives and counter rendering
//! - Message scroll engine (entry, complete, separated, finishing phases)
//! - Run/reset control gate
//! - Session driver and its stage machine
//! - Scroll configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod counter;
pub mod gate;
pub mod glyph;
pub mod message;
pub mod scroll;
pub mod session;
pub mod writer;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, ScrollConfig, Timing};
pub use gate::{ControlGate, ControlState, Restart, SwitchGate};
pub use glyph::Glyph;
pub use message::{Message, MessageError};
pub use scroll::Phase;
pub use session::{Session, SessionReport, Stage};
pub use writer::{BankExt, Position, Symbol};
