//! Common types: board errors and shot results.

use core::fmt;

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that still has cells left.
    Hit,
    /// Shot depleted a ship's last cell.
    Sunk,
}

impl ShotResult {
    /// Only a non-lethal hit lets the acting side shoot again; a miss and
    /// a sinking shot both end the turn.
    pub fn grants_extra_turn(&self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

/// Errors returned by board operations. Both are recoverable: the acting
/// side picks a new target and the match continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Placement would land on or next to an existing ship.
    CellOccupied,
    /// Shot at a cell that was already targeted.
    AlreadyTargeted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "coordinate is outside the board"),
            BoardError::CellOccupied => write!(f, "cell is occupied or too close to a ship"),
            BoardError::AlreadyTargeted => write!(f, "cell was already targeted"),
        }
    }
}

impl std::error::Error for BoardError {}
