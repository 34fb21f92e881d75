//! Message scroll engine
//!
//! A scroll is played as a sequence of phases. Each phase is a pure function
//! of the message, a phase-local frame index and the iteration counter: it
//! writes one frame to the bank and keeps no state between frames.
//!
//! Messages move toward higher positions (leftward on the board). Within a
//! frame, position `offset + r` shows `message[len - 1 - r]`, so the first
//! character of the message is its leftmost glyph.
//!
//! | Phase | Frames | Effect |
//! |-------|--------|--------|
//! | [`Phase::Entry`] | `-(len-1) ..= 0` | slides in from the right edge |
//! | [`Phase::Complete`] | `0 ..= bank-len` | slides across to the left edge |
//! | [`Phase::Separated`] | `0 ..= len-2` | wraps around to the right edge |
//! | [`Phase::Finishing`] | `0 ..= len+counter` | slides off the left edge |

pub mod complete;
pub mod entry;
pub mod finishing;
pub mod separated;

use core::ops::RangeInclusive;

use marquee_hal::SegmentBank;

use crate::counter::digit_count;
use crate::message::Message;
use crate::writer::{BankExt, Position};

/// Blank displays kept between the message and the counter
pub const COUNTER_GAP: Position = 1;

/// Distance from the counter's ones digit to the message edge it trails
pub fn lagging_offset(counter: u8) -> Position {
    digit_count(counter) as Position + COUNTER_GAP
}

/// Scroll animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Message slides onto an empty bank
    Entry,
    /// Whole message slides across the bank
    Complete,
    /// Message wraps from the left edge back to the right edge
    Separated,
    /// Message and counter slide off the bank
    Finishing,
}

impl Phase {
    /// Frame indices of this phase, in playing order
    pub fn frames(self, bank_len: usize, message_len: usize, counter: u8) -> RangeInclusive<Position> {
        let bank_len = bank_len as Position;
        let len = message_len as Position;
        match self {
            Phase::Entry => entry::frames(len),
            Phase::Complete => complete::frames(bank_len, len),
            Phase::Separated => separated::frames(len, counter),
            Phase::Finishing => finishing::frames(len, counter),
        }
    }

    /// Render one frame of this phase
    pub fn render<B: SegmentBank + ?Sized>(
        self,
        bank: &mut B,
        message: &Message,
        frame: Position,
        counter: u8,
    ) {
        match self {
            Phase::Entry => entry::render(bank, message, frame),
            Phase::Complete => complete::render(bank, message, frame, counter),
            Phase::Separated => separated::render(bank, message, frame, counter),
            Phase::Finishing => finishing::render(bank, message, frame, counter),
        }
    }

    /// Short name for logs
    pub fn name(self) -> &'static str {
        match self {
            Phase::Entry => "entry",
            Phase::Complete => "complete",
            Phase::Separated => "separated",
            Phase::Finishing => "finishing",
        }
    }
}

/// Write `message` whole with its last glyph at `offset`
pub(crate) fn draw_message<B: SegmentBank + ?Sized>(bank: &mut B, message: &Message, offset: Position) {
    for (r, glyph) in message.glyphs().iter().rev().enumerate() {
        bank.write_glyph(*glyph, offset + r as Position);
    }
}

/// Glyph at a computed message index, `None` when the index is off the message
pub(crate) fn glyph_at(message: &Message, index: Position) -> Option<crate::glyph::Glyph> {
    usize::try_from(index).ok().and_then(|i| message.get(i))
}
