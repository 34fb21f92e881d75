//! Iteration counter rendering
//!
//! The counter is written least-significant digit first at increasing
//! positions. Since position 0 is the rightmost display, the number reads
//! correctly from left to right.

use marquee_hal::SegmentBank;

use crate::writer::{BankExt, Position};

/// Largest counter the display shows
pub const MAX_COUNTER: u8 = 99;

/// Number of decimal digits rendered for a counter
pub fn digit_count(counter: u8) -> u8 {
    match counter {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

/// Write `counter` with its ones digit at `start`
///
/// Writes nothing when `start` is at or past the bank end. Digits landing on
/// negative positions are skipped but still consumed, so a counter partially
/// scrolled off the right edge shows its remaining digits. A zero counter
/// still renders one `0`.
pub fn render_counter<B: SegmentBank + ?Sized>(bank: &mut B, counter: u8, start: Position) {
    let end = bank.end();
    if start >= end {
        return;
    }

    let mut remaining = counter;
    let mut position = start;
    loop {
        let digit = remaining % 10;
        if position >= 0 {
            bank.write_digit(digit, position);
        }
        remaining /= 10;
        position += 1;

        if position >= end || remaining == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::DIGITS;
    use crate::testing::RecordingBank;
    use proptest::prelude::*;

    #[test]
    fn test_single_digit() {
        let mut bank = RecordingBank::new();
        render_counter(&mut bank, 7, 3);
        assert_eq!(bank.writes(), &[(3, DIGITS[7].bits())]);
    }

    #[test]
    fn test_zero_still_renders() {
        let mut bank = RecordingBank::new();
        render_counter(&mut bank, 0, 0);
        assert_eq!(bank.writes(), &[(0, DIGITS[0].bits())]);
    }

    #[test]
    fn test_two_digits_least_significant_first() {
        let mut bank = RecordingBank::new();
        render_counter(&mut bank, 42, 1);
        assert_eq!(
            bank.writes(),
            &[(1, DIGITS[2].bits()), (2, DIGITS[4].bits())]
        );
    }

    #[test]
    fn test_truncated_at_bank_end() {
        let mut bank = RecordingBank::new();
        render_counter(&mut bank, 42, 7);
        assert_eq!(bank.writes(), &[(7, DIGITS[2].bits())]);
    }

    #[test]
    fn test_negative_start_skips_low_digits() {
        let mut bank = RecordingBank::new();
        render_counter(&mut bank, 42, -1);
        assert_eq!(bank.writes(), &[(0, DIGITS[4].bits())]);

        bank.reset_log();
        render_counter(&mut bank, 42, -3);
        assert!(bank.writes().is_empty());
    }

    #[test]
    fn test_start_past_end_is_noop() {
        let mut bank = RecordingBank::new();
        render_counter(&mut bank, 5, 8);
        render_counter(&mut bank, 5, 100);
        assert!(bank.writes().is_empty());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
    }

    proptest! {
        #[test]
        fn prop_digits_in_order(counter in 0u8..=MAX_COUNTER, start in -4i16..8) {
            let mut bank = RecordingBank::new();
            render_counter(&mut bank, counter, start);

            let digits = [counter % 10, counter / 10];
            let count = digit_count(counter) as i16;
            let expected: Vec<(usize, u8)> = (0..count)
                .map(|i| (start + i, digits[i as usize]))
                .filter(|(p, _)| (0..8).contains(p))
                .map(|(p, d)| (p as usize, DIGITS[d as usize].bits()))
                .collect();

            prop_assert_eq!(bank.writes(), expected.as_slice());
        }

        #[test]
        fn prop_past_end_writes_nothing(counter in 0u8..=MAX_COUNTER, start in 8i16..200) {
            let mut bank = RecordingBank::new();
            render_counter(&mut bank, counter, start);
            prop_assert!(bank.writes().is_empty());
        }
    }
}
