//! Switch sources
//!
//! Without DAQ hardware attached, the run and reset channels either hold a
//! fixed level or follow a script. Script steps are keyed by the number of
//! times the channel has been read, so a run is reproducible regardless of
//! frame timing.

use log::debug;
use marquee_hal::{Channel, InputPin};
use serde::Deserialize;

use super::SettingsError;

/// One step of a switch script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    /// Channel read count at which the step applies
    pub poll: u32,
    /// New run level, unchanged if absent
    #[serde(default)]
    pub run: Option<bool>,
    /// New reset level, unchanged if absent
    #[serde(default)]
    pub reset: Option<bool>,
}

impl ScriptStep {
    fn level(&self, channel: Channel) -> Option<bool> {
        match channel {
            Channel::Run => self.run,
            Channel::Reset => self.reset,
        }
    }
}

/// `[switches]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchSettings {
    /// Initial run level
    pub run: bool,
    /// Initial reset level
    pub reset: bool,
    /// Level changes, in increasing `poll` order
    pub script: Vec<ScriptStep>,
}

impl Default for SwitchSettings {
    fn default() -> Self {
        Self {
            run: true,
            reset: false,
            script: Vec::new(),
        }
    }
}

impl SwitchSettings {
    /// Check that script steps are strictly ordered
    pub fn validate(&self) -> Result<(), SettingsError> {
        for pair in self.script.windows(2) {
            if pair[1].poll <= pair[0].poll {
                return Err(SettingsError::ScriptOrder {
                    poll: pair[1].poll,
                });
            }
        }
        Ok(())
    }

    /// Build the input for one channel
    pub fn channel(&self, channel: Channel) -> ScriptedChannel {
        let initial = match channel {
            Channel::Run => self.run,
            Channel::Reset => self.reset,
        };
        let steps = self
            .script
            .iter()
            .filter_map(|step| step.level(channel).map(|level| (step.poll, level)))
            .collect();
        ScriptedChannel::new(channel, initial, steps)
    }
}

/// Input channel driven by a fixed level or a script
#[derive(Debug, Clone)]
pub struct ScriptedChannel {
    channel: Channel,
    level: bool,
    steps: Vec<(u32, bool)>,
    next: usize,
    reads: u32,
}

impl ScriptedChannel {
    /// Create a channel from its initial level and `(poll, level)` steps
    pub fn new(channel: Channel, initial: bool, steps: Vec<(u32, bool)>) -> Self {
        Self {
            channel,
            level: initial,
            steps,
            next: 0,
            reads: 0,
        }
    }

    /// Number of reads so far
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl InputPin for ScriptedChannel {
    fn is_high(&mut self) -> bool {
        while let Some(&(poll, level)) = self.steps.get(self.next) {
            if poll > self.reads {
                break;
            }
            if level != self.level {
                debug!(
                    "Channel {} ({:?}) -> {} at read {}",
                    self.channel.as_u8(),
                    self.channel,
                    level,
                    self.reads
                );
            }
            self.level = level;
            self.next += 1;
        }
        self.reads = self.reads.saturating_add(1);
        self.level
    }
}
