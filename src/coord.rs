//! Grid coordinates.

use core::fmt;

/// A 0-indexed (row, column) position on the board.
///
/// Carries no bounds information; validity against a particular board is
/// the board's concern. Signed components let neighbor arithmetic walk off
/// the grid edge without underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by the given row/column delta.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Coord {
    /// Console form: row letter plus 1-based column, e.g. `A1`.
    /// Rows past `Z` are not a concern at the board sizes this game uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row.clamp(0, 25) as u8) as char;
        write!(f, "{}{}", row, self.col + 1)
    }
}
