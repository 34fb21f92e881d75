//! Session stage machine
//!
//! Tracks how far a scroll session has progressed. The driver feeds it one
//! event per completed step; a reset drops any active stage back to idle.

/// Session stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Waiting for the switches, bank not yet cleared
    Idle,
    /// Greeting sliding onto the bank
    Entering,
    /// Greeting scrolling with the given counter
    Cycling(u8),
    /// Greeting and final counter sliding off
    Finishing(u8),
    /// Closing message scrolling through
    Closing,
    /// Bank lit, session over
    Done,
}

/// Events that move a session forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StageEvent {
    /// Switches ready and bank cleared
    Start,
    /// Next scroll cycle begins with this counter
    Cycle(u8),
    /// Last iteration reached; slide off with this counter
    SlideOut(u8),
    /// Greeting is off the bank
    Close,
    /// Closing message is off the bank and the bank is lit
    Finish,
    /// Reset switch observed
    Reset,
}

impl Stage {
    /// Check if the session is playing an animation
    pub fn is_active(&self) -> bool {
        !matches!(self, Stage::Idle | Stage::Done)
    }

    /// Counter currently on display, if any
    pub fn counter(&self) -> Option<u8> {
        match self {
            Stage::Cycling(n) | Stage::Finishing(n) => Some(*n),
            _ => None,
        }
    }

    /// Process an event and return the next stage
    pub fn transition(self, event: StageEvent) -> Self {
        use Stage::*;
        use StageEvent::*;

        match (self, event) {
            (Idle, Start) => Entering,

            (Entering, Cycle(n)) => Cycling(n),
            (Cycling(current), Cycle(n)) if n > current => Cycling(n),

            (Entering, SlideOut(n)) => Finishing(n),
            (Cycling(_), SlideOut(n)) => Finishing(n),

            (Finishing(_), Close) => Closing,
            (Closing, Finish) => Done,

            // Any animation restarts from the top
            (stage, Reset) if stage.is_active() => Idle,

            // Default: stay in current stage
            _ => self,
        }
    }
}
