//! Session driver
//!
//! Owns the bank, the control gate and the delay, and plays:
//!
//! 1. greeting entry,
//! 2. one complete + separated cycle per counter value below the total,
//! 3. a last complete slide and the finishing slide with the final counter,
//! 4. the closing message (entry, complete, finishing, no counter),
//! 5. every display lit for the hold delay.
//!
//! Every frame waits for clearance from the gate first. A reset discards
//! all progress and plays the whole sequence again with the same total.

use embedded_hal::delay::DelayNs;
use log::{debug, info, trace, warn};
use marquee_hal::SegmentBank;

use super::machine::{Stage, StageEvent};
use crate::config::{ConfigError, ScrollConfig};
use crate::gate::{self, ControlGate, Restart};
use crate::message::Message;
use crate::scroll::Phase;
use crate::writer::BankExt;

/// Statistics of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionReport {
    /// Frames rendered, including those discarded by restarts
    pub frames: u32,
    /// Number of resets observed
    pub restarts: u32,
    /// Counter shown while the greeting slid off
    pub final_counter: u8,
}

/// Scroll session over a bank, a control gate and a delay
pub struct Session<B, G, D> {
    bank: B,
    gate: G,
    delay: D,
    config: ScrollConfig,
    stage: Stage,
    report: SessionReport,
}

impl<B: SegmentBank, G: ControlGate, D: DelayNs> Session<B, G, D> {
    /// Create a new session
    pub fn new(bank: B, gate: G, delay: D, config: ScrollConfig) -> Self {
        Self {
            bank,
            gate,
            delay,
            config,
            stage: Stage::Idle,
            report: SessionReport::default(),
        }
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Access the bank
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Release the hardware
    pub fn into_parts(self) -> (B, G, D) {
        (self.bank, self.gate, self.delay)
    }

    /// Play the whole session for `iterations` counter values
    ///
    /// Returns once the bank is lit and the hold delay has passed.
    pub fn run(&mut self, iterations: u8) -> Result<SessionReport, ConfigError> {
        let iterations = ScrollConfig::check_iterations(iterations)?;
        self.config.validate()?;
        self.report = SessionReport::default();

        info!("Scroll session starting: {} iteration(s)", iterations);

        while let Err(Restart) = self.play(iterations) {
            self.report.restarts += 1;
            self.advance(StageEvent::Reset);
            warn!("Restarting scroll session ({} restart(s))", self.report.restarts);
        }

        info!(
            "Scroll session complete: {} frame(s), {} restart(s)",
            self.report.frames, self.report.restarts
        );
        Ok(self.report)
    }

    fn play(&mut self, iterations: u8) -> Result<(), Restart> {
        let greeting = self.config.greeting.clone();
        let closing = self.config.closing.clone();

        gate::await_ready(&mut self.gate);

        self.bank.clear();
        self.bank.present();
        self.advance(StageEvent::Start);

        self.play_phase(Phase::Entry, &greeting, 0)?;

        let mut counter = 1;
        while counter < iterations {
            self.advance(StageEvent::Cycle(counter));
            self.play_phase(Phase::Complete, &greeting, counter)?;
            self.play_phase(Phase::Separated, &greeting, counter)?;
            counter += 1;
        }

        // Zero iterations still slide off with counter 1
        self.advance(StageEvent::SlideOut(counter));
        self.report.final_counter = counter;
        self.play_phase(Phase::Complete, &greeting, counter)?;
        self.play_phase(Phase::Finishing, &greeting, counter)?;

        self.advance(StageEvent::Close);
        self.play_phase(Phase::Entry, &closing, 0)?;
        self.play_phase(Phase::Complete, &closing, 0)?;
        self.play_phase(Phase::Finishing, &closing, 0)?;

        self.bank.light_all();
        self.bank.present();
        self.advance(StageEvent::Finish);
        self.delay.delay_ms(self.config.timing.hold_delay_ms);

        Ok(())
    }

    fn play_phase(&mut self, phase: Phase, message: &Message, counter: u8) -> Result<(), Restart> {
        let frames = phase.frames(self.bank.len(), message.len(), counter);
        debug!(
            "Phase {} with counter {}: frames {}..={}",
            phase.name(),
            counter,
            frames.start(),
            frames.end()
        );

        for frame in frames {
            gate::clearance(&mut self.gate)?;

            trace!("{} frame {}", phase.name(), frame);
            phase.render(&mut self.bank, message, frame, counter);
            self.bank.present();
            self.report.frames += 1;

            self.delay.delay_ms(self.config.timing.frame_delay_ms);
        }
        Ok(())
    }

    fn advance(&mut self, event: StageEvent) {
        let next = self.stage.transition(event);
        if next != self.stage {
            debug!("Stage {:?} -> {:?}", self.stage, next);
            if let Some(counter) = next.counter() {
                trace!("Counter {} on display", counter);
            }
        }
        self.stage = next;
    }
}
