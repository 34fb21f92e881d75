//! Marquee DAQ Abstraction Layer
//!
//! This crate defines the traits a data-acquisition module has to provide
//! for the scrolling display: two digital input channels and a bank of
//! seven-segment displays. The same application code runs against the
//! physical DAQ board or the simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (marquee-core session)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  marquee-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  device trace │       │   simulator   │
//! │   (host bin)  │       │   (host bin)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital switch channels
//! - [`segment::SegmentBank`] - Seven-segment display bank
//! - [`daq::DaqConfig`] - Backend selector passed to DAQ setup

#![no_std]
#![deny(unsafe_code)]

pub mod daq;
pub mod gpio;
pub mod segment;

// Re-export key traits at crate root for convenience
pub use daq::{Channel, DaqConfig};
pub use gpio::InputPin;
pub use segment::SegmentBank;
