//! Digit glyph table for the 5x5 matrix.

/// Row bitmasks for the digits 0-9.
///
/// Each digit is five rows of five columns; bit 4 of a row mask is column 0
/// (the leftmost cell), bit 0 is column 4. A set bit means the cell is lit.
pub const GLYPHS: [[u8; 5]; 10] = [
    // 0
    [0b01110, 0b01010, 0b01010, 0b01010, 0b01110],
    // 1
    [0b01110, 0b00100, 0b00100, 0b01100, 0b00100],
    // 2
    [0b01110, 0b01000, 0b00100, 0b01010, 0b00100],
    // 3
    [0b01110, 0b00010, 0b00100, 0b00010, 0b01110],
    // 4
    [0b01000, 0b00010, 0b01110, 0b01010, 0b01010],
    // 5
    [0b01110, 0b00010, 0b01110, 0b01000, 0b01110],
    // 6
    [0b01110, 0b01010, 0b01110, 0b01000, 0b01110],
    // 7
    [0b01000, 0b00010, 0b01000, 0b00010, 0b01110],
    // 8
    [0b01110, 0b01010, 0b01110, 0b01010, 0b01110],
    // 9
    [0b01110, 0b00010, 0b01110, 0b01010, 0b01110],
];

/// Whether the glyph for `digit` lights the cell at (`row`, `col`).
///
/// Out-of-range arguments are simply unlit; callers validating digits do so
/// before indexing.
#[inline]
pub fn is_lit(digit: u8, row: usize, col: usize) -> bool {
    if digit > 9 || row >= 5 || col >= 5 {
        return false;
    }
    GLYPHS[digit as usize][row] & (1 << (4 - col)) != 0
}
