//! Game board: ship placement with spacing rules and shot resolution.

use std::collections::HashSet;

use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::ship::Ship;

/// Display marker for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Occupied by a ship segment that has not been hit.
    Ship,
    Hit,
    Miss,
}

/// An N×N board owning its fleet.
///
/// Placement and play keep separate bookkeeping: `blocked` holds ship cells
/// plus their one-cell halo and is only consulted by [`Board::place_ship`];
/// `targeted` holds shots taken and is only consulted by [`Board::shoot`].
/// Callers place all ships first, then call [`Board::reset_targeting`] once
/// before the first shot.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    hidden: bool,
    field: Vec<Vec<Cell>>,
    blocked: HashSet<Coord>,
    targeted: HashSet<Coord>,
    ships: Vec<Ship>,
    sunk: usize,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            hidden: false,
            field: vec![vec![Cell::Empty; size as usize]; size as usize],
            blocked: HashSet::new(),
            targeted: HashSet::new(),
            ships: Vec::new(),
            sunk: 0,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// A hidden board renders its ship markers as open water.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Display marker at an in-bounds coordinate.
    pub fn cell(&self, at: Coord) -> Cell {
        self.field[at.row as usize][at.col as usize]
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// True once every placed ship has been sunk.
    pub fn fleet_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Whether either axis falls outside `[0, size)`.
    pub fn out_of_bounds(&self, at: Coord) -> bool {
        at.row < 0 || at.col < 0 || at.row >= self.size || at.col >= self.size
    }

    /// Place a ship, enforcing bounds and the one-cell spacing rule.
    ///
    /// Validation happens before any mutation, so a failed placement leaves
    /// the board untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if self.out_of_bounds(cell) {
                return Err(BoardError::OutOfBounds);
            }
            if self.blocked.contains(&cell) {
                return Err(BoardError::CellOccupied);
            }
        }
        for cell in ship.cells() {
            self.field[cell.row as usize][cell.col as usize] = Cell::Ship;
            self.blocked.insert(cell);
        }
        self.mark_halo(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Block the 8-neighborhood of every ship cell so no later placement
    /// can touch this ship, even diagonally. The reserved cells keep their
    /// empty display marker; only the blocked set records them.
    fn mark_halo(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let near = cell.offset(dr, dc);
                    if !self.out_of_bounds(near) {
                        self.blocked.insert(near);
                    }
                }
            }
        }
    }

    /// Resolve a shot at `at`.
    ///
    /// Fails without mutating anything when the coordinate is out of range
    /// or already targeted. Otherwise records the shot and classifies it:
    /// a ship cell yields [`ShotResult::Hit`], or [`ShotResult::Sunk`] when
    /// it was the ship's last cell; open water yields [`ShotResult::Miss`].
    pub fn shoot(&mut self, at: Coord) -> Result<ShotResult, BoardError> {
        if self.out_of_bounds(at) {
            return Err(BoardError::OutOfBounds);
        }
        if self.targeted.contains(&at) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.targeted.insert(at);

        for ship in self.ships.iter_mut() {
            if ship.contains(at) {
                self.field[at.row as usize][at.col as usize] = Cell::Hit;
                ship.apply_hit();
                if ship.is_sunk() {
                    self.sunk += 1;
                    return Ok(ShotResult::Sunk);
                }
                return Ok(ShotResult::Hit);
            }
        }

        self.field[at.row as usize][at.col as usize] = Cell::Miss;
        Ok(ShotResult::Miss)
    }

    /// Forget all targeting state. Called once when placement finishes so
    /// nothing recorded during setup counts as a shot. Ships, markers and
    /// the blocked set stay as they are.
    pub fn reset_targeting(&mut self) {
        self.targeted.clear();
    }
}
