//! Finishing phase: the message and its counter slide off the bank
//!
//! Starts from the message flush against the left edge with the counter
//! trailing it, and shifts both until every display they occupied is blank.

use core::ops::RangeInclusive;

use marquee_hal::SegmentBank;

use super::{glyph_at, lagging_offset};
use crate::message::Message;
use crate::writer::{BankExt, Position, Symbol};

/// Displays occupied by the message plus its trailing counter and gap
pub fn span(len: Position, counter: u8) -> Position {
    if counter == 0 {
        len
    } else {
        len + lagging_offset(counter)
    }
}

/// Frames of the finishing phase: shift distance past the left edge
pub fn frames(len: Position, counter: u8) -> RangeInclusive<Position> {
    0..=span(len, counter)
}

/// Render finishing frame `shift`
pub fn render<B: SegmentBank + ?Sized>(bank: &mut B, message: &Message, shift: Position, counter: u8) {
    let end = bank.end();
    let len = message.len() as Position;
    let span = span(len, counter);
    let first = (end - span).max(0);
    // Position the message's last glyph would occupy
    let message_end = shift + (end - len);

    for position in (first..end).rev() {
        let index = (len - 1) - (position - message_end);
        match glyph_at(message, index) {
            Some(glyph) => bank.write_glyph(glyph, position),
            None => bank.write_symbol(Symbol::Blank, position),
        }
    }

    if counter != 0 {
        bank.write_counter(counter, (end - span) + shift);
    }
}
