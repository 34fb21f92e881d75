//! Scroll session
//!
//! Sequences the scroll phases for a configured number of iterations and
//! restarts from the top whenever the reset switch is used.

pub mod driver;
pub mod machine;

pub use driver::{Session, SessionReport};
pub use machine::{Stage, StageEvent};
