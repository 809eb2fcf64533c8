//! Ship definition: bow, length, orientation and remaining hitpoints.

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at its bow coordinate.
///
/// The occupied cells are derived from bow, length and orientation; only
/// the hitpoint counter mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: u32,
    orientation: Orientation,
    hp: u32,
}

impl Ship {
    /// Create a ship with full hitpoints. Placement validity (bounds,
    /// overlap, spacing) is checked by the board, not here.
    pub fn new(bow: Coord, length: u32, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            hp: length,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells in order, starting at the bow and stepping +1 along
    /// the orientation's axis.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.bow.offset(0, i),
            Orientation::Vertical => self.bow.offset(i, 0),
        })
    }

    /// Whether the given coordinate is one of the ship's cells.
    pub fn contains(&self, at: Coord) -> bool {
        self.cells().any(|c| c == at)
    }

    /// Record one confirmed hit. The board only calls this for a coordinate
    /// inside `cells()` on a ship that is not yet sunk.
    pub fn apply_hit(&mut self) {
        debug_assert!(self.hp > 0, "hit applied to a sunk ship");
        self.hp = self.hp.saturating_sub(1);
    }

    /// True once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hp == 0
    }
}
