//! Settings file
//!
//! Optional TOML file with the messages, the timing and the switch sources.
//! Every table and key may be omitted.
//!
//! ```toml
//! [messages]
//! greeting = "HELLO"
//! closing = "byebye"
//!
//! [timing]
//! frame_delay_ms = 500
//! hold_delay_ms = 1000
//!
//! [switches]
//! run = true
//! reset = false
//!
//! [[switches.script]]
//! poll = 40
//! reset = true
//! ```

mod switches;

pub use switches::SwitchSettings;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use marquee_core::{ConfigError, ScrollConfig, Timing};
use serde::Deserialize;
use thiserror::Error;

/// File loaded when no `--config` is given
pub const DEFAULT_SETTINGS_FILE: &str = "marquee.toml";

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid messages: {0}")]
    Messages(ConfigError),
    #[error("switch script steps must have increasing poll numbers (step at poll {poll})")]
    ScriptOrder { poll: u32 },
}

/// `[messages]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageSettings {
    /// Text scrolled with the counter
    pub greeting: String,
    /// Text scrolled once at the end
    pub closing: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            greeting: "HELLO".into(),
            closing: "byebye".into(),
        }
    }
}

/// Whole settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub messages: MessageSettings,
    pub timing: Timing,
    pub switches: SwitchSettings,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn parse(content: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.switches.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content, path)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load the explicit file, or the default file if it exists
    ///
    /// A missing default file yields the built-in settings; a missing
    /// explicit file is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_SETTINGS_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    debug!("No {} found, using built-in settings", DEFAULT_SETTINGS_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Build the scroll configuration
    pub fn scroll_config(&self) -> Result<ScrollConfig, SettingsError> {
        ScrollConfig::from_text(&self.messages.greeting, &self.messages.closing, self.timing)
            .map_err(SettingsError::Messages)
    }
}
