//! Entry phase: the message slides onto a blank bank
//!
//! Frame `e` places the message's last glyph at position `e`. The first
//! frame, `-(len - 1)`, already shows the first glyph at position 0, so no
//! frame repeats the empty bank left by the preceding clear.

use core::ops::RangeInclusive;

use marquee_hal::SegmentBank;

use crate::message::Message;
use crate::writer::{BankExt, Position};

/// Frames of the entry phase
pub fn frames(len: Position) -> RangeInclusive<Position> {
    -(len - 1)..=0
}

/// Render entry frame `offset`
///
/// Only glyphs on non-negative positions are written; nothing is blanked.
pub fn render<B: SegmentBank + ?Sized>(bank: &mut B, message: &Message, offset: Position) {
    for (r, glyph) in message.glyphs().iter().rev().enumerate() {
        let position = r as Position + offset;
        if position >= 0 {
            bank.write_glyph(*glyph, position);
        }
    }
}
