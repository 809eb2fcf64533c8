//! Random fleet placement.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::config::FLEET_SIZES;
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// A ship of the given length with a uniform-random bow and orientation.
pub fn random_ship<R: Rng>(rng: &mut R, size: i32, length: u32) -> Ship {
    let bow = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Try to place the full fleet on a fresh board.
///
/// `budget` caps the total number of placement attempts across all ships of
/// this one build. Returns `None` when the budget runs out, in which case
/// the partially filled board is discarded; a retry always starts from an
/// empty board. On success the board's targeting state is reset, ready for
/// play.
pub fn build_attempt<R: Rng>(rng: &mut R, size: i32, budget: u32) -> Option<Board> {
    let mut board = Board::new(size);
    let mut attempts = 0u32;
    for &length in FLEET_SIZES.iter() {
        loop {
            attempts += 1;
            if attempts > budget {
                debug!(
                    "placement budget of {} exhausted with {} ships placed, discarding board",
                    budget,
                    board.ships().len()
                );
                return None;
            }
            let ship = random_ship(rng, size, length);
            let (bow, orientation) = (ship.bow(), ship.orientation());
            if board.place_ship(ship).is_ok() {
                debug!("placed {}-cell ship at {} {:?}", length, bow, orientation);
                break;
            }
        }
    }
    debug!("fleet placed in {} attempts", attempts);
    board.reset_targeting();
    Some(board)
}

/// Generate a board with the full fleet placed, retrying from scratch until
/// a build succeeds. Budget exhaustion is a transient signal, never an
/// error surfaced to the caller.
pub fn generate_board<R: Rng>(rng: &mut R, size: i32, budget: u32) -> Board {
    loop {
        if let Some(board) = build_attempt(rng, size, budget) {
            return board;
        }
    }
}
