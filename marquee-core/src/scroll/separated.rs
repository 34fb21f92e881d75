//! Separated phase: the message wraps from the left edge to the right edge
//!
//! Frame `s` is the index of the last glyph moved over to the right edge.
//! The moved prefix sits on positions `0..=s`, the rest of the message stays
//! at the left edge, and the gap between them is blanked and carries the
//! counter. A two-digit counter needs one more display, so the wrap starts
//! one frame earlier (`s = -1`) and the left-edge part sits one position
//! further out.

use core::ops::RangeInclusive;

use marquee_hal::SegmentBank;

use super::{glyph_at, lagging_offset};
use crate::counter::digit_count;
use crate::message::Message;
use crate::writer::{BankExt, Position};

/// Extra wrap distance for wide counters
fn wide_shift(counter: u8) -> Position {
    if digit_count(counter) > 1 {
        1
    } else {
        0
    }
}

/// Frames of the separated phase
pub fn frames(len: Position, counter: u8) -> RangeInclusive<Position> {
    -wide_shift(counter)..=(len - 2)
}

/// Render separated frame `split`
pub fn render<B: SegmentBank + ?Sized>(bank: &mut B, message: &Message, split: Position, counter: u8) {
    let end = bank.end();
    let len = message.len() as Position;
    // Last position of the gap; the left-edge part starts right after it
    let gap_end = split + wide_shift(counter) + (end - len);

    for position in 0..end {
        let index = if position <= split {
            split - position
        } else if position > gap_end {
            len + gap_end - position
        } else {
            continue;
        };
        if let Some(glyph) = glyph_at(message, index) {
            bank.write_glyph(glyph, position);
        }
    }

    bank.refresh_range(split + 1, gap_end + 1, false);
    // Trails the left-edge part like the complete and finishing phases
    bank.write_counter(counter, gap_end + 1 - lagging_offset(counter));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{Glyph, DIGITS};
    use crate::scroll::complete;
    use crate::testing::RecordingBank;

    const H: Glyph = Glyph::H;
    const E: Glyph = Glyph::E;
    const L: Glyph = Glyph::L;
    const O: Glyph = Glyph::O;
    const X: Glyph = Glyph::BLANK;

    fn frame(split: Position, counter: u8) -> [Glyph; 8] {
        let mut bank = RecordingBank::new();
        bank.light_all();
        render(&mut bank, &Message::greeting(), split, counter);
        *bank.cells()
    }

    #[test]
    fn test_first_split() {
        assert_eq!(frame(0, 1), [H, X, DIGITS[1], X, O, L, L, E]);
    }

    #[test]
    fn test_last_split() {
        assert_eq!(frame(3, 4), [L, L, E, H, X, DIGITS[4], X, O]);
    }

    #[test]
    fn test_two_digit_frames() {
        assert_eq!(frames(5, 12), -1..=3);
        assert_eq!(frame(-1, 12), [X, DIGITS[2], DIGITS[1], X, O, L, L, E]);
        assert_eq!(frame(3, 12), [L, L, E, H, X, DIGITS[2], DIGITS[1], X]);
    }

    #[test]
    fn test_each_frame_moves_message_by_one() {
        let msg = Message::greeting();
        let mut bank = RecordingBank::new();

        complete::render(&mut bank, &msg, 3, 1);
        let mut previous = *bank.cells();

        for s in frames(5, 1) {
            render(&mut bank, &msg, s, 1);
            let current = *bank.cells();
            for (p, glyph) in previous.iter().enumerate() {
                if [H, E, L, O].contains(glyph) {
                    assert_eq!(current[(p + 1) % 8], *glyph, "split {} position {}", s, p);
                }
            }
            previous = current;
        }
    }

    #[test]
    fn test_last_split_rejoins_for_next_slide() {
        let msg = Message::greeting();
        let mut bank = RecordingBank::new();

        render(&mut bank, &msg, 3, 1);
        let wrapped = *bank.cells();

        complete::render(&mut bank, &msg, 0, 2);
        let next = *bank.cells();

        // Every glyph of the wrapped message moves one position on, modulo the bank
        for (p, glyph) in wrapped.iter().enumerate() {
            if [H, E, L, O].contains(glyph) {
                assert_eq!(next[(p + 1) % 8], *glyph, "position {}", p);
            }
        }
    }

    #[test]
    fn test_counter_steps_on_from_complete_slide() {
        for text in ["HI", "HEL", "HELLO"] {
            let msg = Message::from_text(text).unwrap();
            let len = msg.len() as Position;
            for counter in [1u8, 12] {
                let ones = DIGITS[(counter % 10) as usize];
                let ones_at = |cells: &[Glyph; 8]| cells.iter().position(|g| *g == ones);

                let mut bank = RecordingBank::new();
                complete::render(&mut bank, &msg, 8 - len, counter);
                let before = ones_at(bank.cells()).unwrap();

                render(&mut bank, &msg, *frames(len, counter).start(), counter);
                let after = ones_at(bank.cells()).unwrap();

                assert_eq!(after, before + 1, "{} counter {}", text, counter);
            }
        }
    }

    #[test]
    fn test_short_greeting_counter_stays_in_gap() {
        for text in ["HI", "HEL", "HELL"] {
            let msg = Message::from_text(text).unwrap();
            let len = msg.len() as Position;
            for counter in [3u8, 45] {
                for s in frames(len, counter) {
                    let mut bank = RecordingBank::new();
                    bank.light_all();
                    render(&mut bank, &msg, s, counter);
                    let cells = *bank.cells();

                    let gap_end = s + wide_shift(counter) + 8 - len;
                    let digits = digit_count(counter) as Position;
                    let count_at = gap_end + 1 - lagging_offset(counter);
                    assert!(count_at > s, "{} split {}", text, s);
                    assert_eq!(cells[gap_end as usize], X, "{} split {}", text, s);
                    for p in 0..digits {
                        assert_ne!(cells[(count_at + p) as usize], X);
                    }
                }
            }
        }
    }

    #[test]
    fn test_gap_holds_only_blank_and_counter() {
        for counter in 1..=99u8 {
            for s in frames(5, counter) {
                let cells = frame(s, counter);
                let gap_end = s + wide_shift(counter) + 3;
                let count_at = s + 2;
                for p in (s + 1).max(0)..=gap_end {
                    let digit = p - count_at;
                    if (0..digit_count(counter) as Position).contains(&digit) {
                        let value = if digit == 0 { counter % 10 } else { counter / 10 };
                        assert_eq!(cells[p as usize], DIGITS[value as usize]);
                    } else {
                        assert_eq!(cells[p as usize], X, "counter {} split {} pos {}", counter, s, p);
                    }
                }
            }
        }
    }
}
