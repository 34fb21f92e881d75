//! Seven-segment glyphs
//!
//! A glyph is one byte of active-high segment bits, `a` in the MSB down to
//! the decimal point in the LSB:
//!
//! ```text
//!    ─a─
//!   f   b
//!    ─g─
//!   e   c
//!    ─d─  .dp
//! ```

/// Segment pattern for one display position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(pub u8);

impl Glyph {
    /// All segments off
    pub const BLANK: Glyph = Glyph(0b0000_0000);
    /// All segments on, decimal point included
    pub const ALL_ON: Glyph = Glyph(0b1111_1111);

    pub const H: Glyph = Glyph(0b0110_1110);
    pub const E: Glyph = Glyph(0b1001_1110);
    pub const L: Glyph = Glyph(0b0001_1100);
    pub const O: Glyph = Glyph(0b1111_1100);
    pub const LOWER_B: Glyph = Glyph(0b0011_1110);
    pub const LOWER_Y: Glyph = Glyph(0b0111_0110);
    pub const LOWER_E: Glyph = Glyph(0b1101_1110);

    /// Raw segment bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether a segment bit is lit
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.mask() != 0
    }
}

/// Digit glyphs, indexed by value
pub const DIGITS: [Glyph; 10] = [
    Glyph(0b1111_1100),
    Glyph(0b0110_0000),
    Glyph(0b1101_1010),
    Glyph(0b1111_0010),
    Glyph(0b0110_0110),
    Glyph(0b1011_0110),
    Glyph(0b1011_1110),
    Glyph(0b1110_0000),
    Glyph(0b1111_1110),
    Glyph(0b1111_0110),
];

/// Individual segment of a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Dp,
}

impl Segment {
    /// Bit mask of this segment within a glyph
    pub const fn mask(self) -> u8 {
        match self {
            Segment::A => 0b1000_0000,
            Segment::B => 0b0100_0000,
            Segment::C => 0b0010_0000,
            Segment::D => 0b0001_0000,
            Segment::E => 0b0000_1000,
            Segment::F => 0b0000_0100,
            Segment::G => 0b0000_0010,
            Segment::Dp => 0b0000_0001,
        }
    }
}

/// Glyph for a decimal digit, `None` outside `0..=9`
pub fn digit(value: u8) -> Option<Glyph> {
    DIGITS.get(value as usize).copied()
}

/// Glyph for a character, if seven segments can show it
///
/// Letters with distinct upper and lower case shapes (`C c`, `E e`, `H h`,
/// `O o`, `U u`) keep their case; the others share one shape.
pub fn from_char(c: char) -> Option<Glyph> {
    let bits = match c {
        '0'..='9' => return digit(c as u8 - b'0'),
        ' ' => 0b0000_0000,
        '-' => 0b0000_0010,
        '_' => 0b0001_0000,
        'A' | 'a' => 0b1110_1110,
        'B' | 'b' => Glyph::LOWER_B.0,
        'C' => 0b1001_1100,
        'c' => 0b0001_1010,
        'D' | 'd' => 0b0111_1010,
        'E' => Glyph::E.0,
        'e' => Glyph::LOWER_E.0,
        'F' | 'f' => 0b1000_1110,
        'G' | 'g' => 0b1011_1100,
        'H' => Glyph::H.0,
        'h' => 0b0010_1110,
        'I' | 'i' => 0b0000_1100,
        'J' | 'j' => 0b0111_1000,
        'L' | 'l' => Glyph::L.0,
        'N' | 'n' => 0b0010_1010,
        'O' => Glyph::O.0,
        'o' => 0b0011_1010,
        'P' | 'p' => 0b1100_1110,
        'R' | 'r' => 0b0000_1010,
        'S' | 's' => 0b1011_0110,
        'T' | 't' => 0b0001_1110,
        'U' => 0b0111_1100,
        'u' => 0b0011_1000,
        'Y' | 'y' => Glyph::LOWER_Y.0,
        _ => return None,
    };
    Some(Glyph(bits))
}
