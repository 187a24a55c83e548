//! Palette and the digit font

use crossterm::style::Color;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const TABLE: Rgb = Rgb(200, 200, 210);
    pub const PUCK: Rgb = Rgb(50, 50, 50);
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

/// Glyph cell size in font pixels
pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;

/// Size of one font pixel in table pixels (digits are 60x100)
pub const TEXT_PIXEL: i32 = 20;

/// 3x5 digit bitmaps, one row per byte, leftmost column in bit 2
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Bitmap for a character; only digits are drawable
pub fn glyph(c: char) -> Option<&'static [u8; 5]> {
    c.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// Width in table pixels of `text` drawn with the digit font
pub fn text_width(text: &str) -> i32 {
    let count = text.chars().filter(|c| glyph(*c).is_some()).count() as i32;
    if count == 0 {
        return 0;
    }
    count * (GLYPH_WIDTH + 1) * TEXT_PIXEL - TEXT_PIXEL
}
