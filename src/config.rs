//! Fixed game parameters: board size, fleet composition, placement budget.

/// Side length of the square board.
pub const BOARD_SIZE: i32 = 6;

/// Lengths of the ships each side places, largest first.
pub const FLEET_SIZES: [u32; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships per side; sinking this many loses the match.
pub const NUM_SHIPS: usize = FLEET_SIZES.len();

const fn fleet_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET_SIZES.len() {
        total += FLEET_SIZES[i] as usize;
        i += 1;
    }
    total
}

/// Total ship cells per side (3 + 2 + 2 + 1 + 1 + 1 + 1 = 11).
pub const TOTAL_SHIP_CELLS: usize = fleet_cells();

/// Default cap on total random-placement attempts for one board build.
/// The cap is shared across all ships of the build; exceeding it abandons
/// the board and the caller starts over from an empty one.
pub const DEFAULT_PLACEMENT_BUDGET: u32 = 2000;
