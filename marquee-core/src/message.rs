//! Scroll messages
//!
//! A message is an immutable run of glyphs. Index 0 is the first character
//! as a person reads it; the scroll engine decides where each index lands.

use heapless::Vec;
use marquee_hal::segment::BANK_SIZE;

use crate::glyph::{self, Glyph};

/// Maximum glyphs in a message (one full bank)
pub const MAX_MESSAGE_LEN: usize = BANK_SIZE;

/// Errors building a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Message has no glyphs
    Empty,
    /// Message is longer than the bank
    TooLong,
    /// Character has no seven-segment shape
    UnsupportedChar(char),
}

impl core::fmt::Display for MessageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MessageError::Empty => f.write_str("message is empty"),
            MessageError::TooLong => write!(f, "message exceeds {} glyphs", MAX_MESSAGE_LEN),
            MessageError::UnsupportedChar(c) => {
                write!(f, "character {:?} cannot be shown on seven segments", c)
            }
        }
    }
}

/// Immutable sequence of glyphs to scroll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    glyphs: Vec<Glyph, MAX_MESSAGE_LEN>,
}

impl Message {
    /// Create a message from raw glyphs
    pub fn new(glyphs: &[Glyph]) -> Result<Self, MessageError> {
        if glyphs.is_empty() {
            return Err(MessageError::Empty);
        }
        let glyphs = Vec::from_slice(glyphs).map_err(|_| MessageError::TooLong)?;
        Ok(Self { glyphs })
    }

    /// Create a message from text using the seven-segment font
    pub fn from_text(text: &str) -> Result<Self, MessageError> {
        let mut glyphs: Vec<Glyph, MAX_MESSAGE_LEN> = Vec::new();
        for c in text.chars() {
            let glyph = glyph::from_char(c).ok_or(MessageError::UnsupportedChar(c))?;
            glyphs.push(glyph).map_err(|_| MessageError::TooLong)?;
        }
        if glyphs.is_empty() {
            return Err(MessageError::Empty);
        }
        Ok(Self { glyphs })
    }

    /// The default greeting, "HELLO"
    pub fn greeting() -> Self {
        Self::from_static(&[Glyph::H, Glyph::E, Glyph::L, Glyph::L, Glyph::O])
    }

    /// The default closing message, "byebye"
    pub fn closing() -> Self {
        Self::from_static(&[
            Glyph::LOWER_B,
            Glyph::LOWER_Y,
            Glyph::LOWER_E,
            Glyph::LOWER_B,
            Glyph::LOWER_Y,
            Glyph::LOWER_E,
        ])
    }

    fn from_static(glyphs: &[Glyph]) -> Self {
        let glyphs = &glyphs[..glyphs.len().min(MAX_MESSAGE_LEN)];
        Self {
            glyphs: Vec::from_slice(glyphs).unwrap_or_default(),
        }
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a constructed message
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at a message index
    pub fn get(&self, index: usize) -> Option<Glyph> {
        self.glyphs.get(index).copied()
    }

    /// All glyphs in reading order
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }
}
