//! Complete phase: the whole message slides across the bank
//!
//! The counter follows the message. Near the end of the slide the current
//! counter trails behind it; before that, the previous iteration's counter
//! leads ahead of it and is pushed off the left edge.

use core::ops::RangeInclusive;

use marquee_hal::SegmentBank;

use super::{draw_message, lagging_offset, COUNTER_GAP};
use crate::message::Message;
use crate::writer::{BankExt, Position};

/// Frames of the complete phase: the message's right edge offset
pub fn frames(bank_len: Position, len: Position) -> RangeInclusive<Position> {
    0..=(bank_len - len)
}

/// Render complete frame `offset`
///
/// Every position outside the message is rewritten, either blank or counter.
pub fn render<B: SegmentBank + ?Sized>(
    bank: &mut B,
    message: &Message,
    offset: Position,
    counter: u8,
) {
    let end = bank.end();
    let len = message.len() as Position;
    let max_offset = end - len;

    draw_message(bank, message, offset);

    bank.refresh_range(0, offset, false);
    bank.refresh_range(offset + len, end, false);

    if counter != 0 && offset >= max_offset - 1 {
        bank.write_counter(counter, offset - lagging_offset(counter));
    } else if counter > 1 {
        bank.write_counter(counter - 1, offset + len + COUNTER_GAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{Glyph, DIGITS};
    use crate::testing::{laid_out, RecordingBank};

    fn frame(offset: Position, counter: u8) -> [Glyph; 8] {
        let msg = Message::greeting();
        let mut bank = RecordingBank::new();
        // Start from a lit bank so stale content would show
        bank.light_all();
        render(&mut bank, &msg, offset, counter);
        *bank.cells()
    }

    #[test]
    fn test_no_stale_glyphs_without_counter() {
        let msg = Message::greeting();
        for e in frames(8, 5) {
            assert_eq!(frame(e, 0), laid_out(&msg, e), "offset {}", e);
        }
    }

    #[test]
    fn test_closing_message_reaches_left_edge() {
        let msg = Message::closing();
        let mut bank = RecordingBank::new();
        for e in frames(8, 6) {
            render(&mut bank, &msg, e, 0);
        }
        assert_eq!(bank.cells(), &laid_out(&msg, 2));
        assert_eq!(bank.cells()[7], Glyph::LOWER_B);
    }

    #[test]
    fn test_first_iteration_has_no_leading_counter() {
        let msg = Message::greeting();
        assert_eq!(frame(0, 1), laid_out(&msg, 0));
        assert_eq!(frame(1, 1), laid_out(&msg, 1));
    }

    #[test]
    fn test_previous_counter_leads() {
        let msg = Message::greeting();
        let mut expected = laid_out(&msg, 0);
        expected[6] = DIGITS[2];
        assert_eq!(frame(0, 3), expected);

        // One more step and the leading counter is pushed off
        assert_eq!(frame(1, 3)[7], DIGITS[2]);
    }

    #[test]
    fn test_current_counter_trails() {
        let msg = Message::greeting();

        let mut expected = laid_out(&msg, 2);
        expected[0] = DIGITS[3];
        assert_eq!(frame(2, 3), expected);

        let mut expected = laid_out(&msg, 3);
        expected[1] = DIGITS[3];
        assert_eq!(frame(3, 3), expected);
    }

    #[test]
    fn test_two_digit_counter_trails_with_extra_room() {
        let msg = Message::greeting();

        // Ones digit still off the right edge
        let mut expected = laid_out(&msg, 2);
        expected[0] = DIGITS[1];
        assert_eq!(frame(2, 12), expected);

        let mut expected = laid_out(&msg, 3);
        expected[0] = DIGITS[2];
        expected[1] = DIGITS[1];
        assert_eq!(frame(3, 12), expected);
    }

    #[test]
    fn test_counter_never_covers_message() {
        let msg = Message::greeting();
        for counter in 0..=99u8 {
            for e in frames(8, 5) {
                let cells = frame(e, counter);
                let expected = laid_out(&msg, e);
                for p in e..e + 5 {
                    assert_eq!(cells[p as usize], expected[p as usize]);
                }
            }
        }
    }
}
