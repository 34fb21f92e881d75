//! Run/reset control gate
//!
//! Two switch channels gate the animation. Every frame asks the gate for
//! clearance first: a run switch that is off holds the frame, and a reset
//! request abandons the whole session so it can start over.

use marquee_hal::InputPin;

/// Switch state observed by one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlState {
    /// Run switch on, no reset request
    Run,
    /// Run switch off
    Pause,
    /// Reset requested (and released)
    Reset,
}

/// Signal that the current session must restart from its first frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Restart;

/// Run/reset polling capability
pub trait ControlGate {
    /// Poll the switches once
    fn poll(&mut self) -> ControlState;

    /// Whether the switches are in their start position (run on, reset off)
    fn is_ready(&mut self) -> bool;
}

impl<T: ControlGate + ?Sized> ControlGate for &mut T {
    fn poll(&mut self) -> ControlState {
        (**self).poll()
    }

    fn is_ready(&mut self) -> bool {
        (**self).is_ready()
    }
}

/// Gate over a run channel and a reset channel
#[derive(Debug)]
pub struct SwitchGate<R, S> {
    run: R,
    reset: S,
}

impl<R: InputPin, S: InputPin> SwitchGate<R, S> {
    /// Create a gate from the run and reset channels
    pub fn new(run: R, reset: S) -> Self {
        Self { run, reset }
    }

    /// Release the channels
    pub fn into_inner(self) -> (R, S) {
        (self.run, self.reset)
    }
}

impl<R: InputPin, S: InputPin> ControlGate for SwitchGate<R, S> {
    /// A held reset switch is only reported once it is released, so the
    /// restarted session does not immediately see it again.
    fn poll(&mut self) -> ControlState {
        let run = self.run.is_high();

        if self.reset.is_high() {
            while self.reset.is_high() {
                core::hint::spin_loop();
            }
            return ControlState::Reset;
        }

        if run {
            ControlState::Run
        } else {
            ControlState::Pause
        }
    }

    fn is_ready(&mut self) -> bool {
        let run = self.run.is_high();
        let reset_released = self.reset.is_low();
        run && reset_released
    }
}

/// Block until the gate allows the next frame
///
/// Returns `Err(Restart)` as soon as a reset is observed, even while paused.
pub fn clearance<G: ControlGate + ?Sized>(gate: &mut G) -> Result<(), Restart> {
    let mut paused = false;
    loop {
        match gate.poll() {
            ControlState::Run => {
                if paused {
                    log::info!("Run switch on, resuming");
                }
                return Ok(());
            }
            ControlState::Pause => {
                if !paused {
                    log::info!("Run switch off, paused");
                    paused = true;
                }
                core::hint::spin_loop();
            }
            ControlState::Reset => {
                log::warn!("Reset requested");
                return Err(Restart);
            }
        }
    }
}

/// Block until the switches are in their start position
pub fn await_ready<G: ControlGate + ?Sized>(gate: &mut G) {
    let mut waiting = false;
    while !gate.is_ready() {
        if !waiting {
            log::info!("Waiting for run on and reset off");
            waiting = true;
        }
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPin;

    fn gate(run: &[bool], reset: &[bool]) -> SwitchGate<ScriptedPin, ScriptedPin> {
        SwitchGate::new(ScriptedPin::new(run), ScriptedPin::new(reset))
    }

    #[test]
    fn test_poll_states() {
        assert_eq!(gate(&[true], &[false]).poll(), ControlState::Run);
        assert_eq!(gate(&[false], &[false]).poll(), ControlState::Pause);
        assert_eq!(gate(&[false], &[true, false]).poll(), ControlState::Reset);
        assert_eq!(gate(&[true], &[true, false]).poll(), ControlState::Reset);
    }

    #[test]
    fn test_reset_reported_after_release() {
        let mut g = gate(&[true], &[true, true, true, false]);
        assert_eq!(g.poll(), ControlState::Reset);
        let (_, reset) = g.into_inner();
        assert_eq!(reset.polls, 4);
    }

    #[test]
    fn test_clearance_waits_through_pause() {
        let mut g = gate(&[false, false, false, true], &[false]);
        assert_eq!(clearance(&mut g), Ok(()));
        let (run, _) = g.into_inner();
        assert_eq!(run.polls, 4);
    }

    #[test]
    fn test_clearance_reset_while_paused() {
        let mut g = gate(&[false], &[false, false, true, false]);
        assert_eq!(clearance(&mut g), Err(Restart));
    }

    #[test]
    fn test_await_ready() {
        let mut g = gate(&[false, true, true], &[false, true, false]);
        await_ready(&mut g);
        let (run, reset) = g.into_inner();
        assert_eq!(run.polls, 3);
        assert_eq!(reset.polls, 3);
    }
}
