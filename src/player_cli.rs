//! Interactive console player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::coord::Coord;
use crate::player::Player;

/// Parse a target token: a row letter (`A`.., case-insensitive) followed by
/// a single 1-based column digit, e.g. `A1` or `f6`. Anything else, and
/// anything off the `size`×`size` grid, is rejected.
pub fn parse_coord(input: &str, size: i32) -> Option<Coord> {
    let mut chars = input.chars();
    let row_ch = chars.next()?.to_ascii_uppercase();
    let col_ch = chars.next()?;
    if chars.next().is_some() || !row_ch.is_ascii_uppercase() {
        return None;
    }
    let row = row_ch as i32 - 'A' as i32;
    let col = col_ch.to_digit(10)? as i32 - 1;
    if row >= size || col < 0 || col >= size {
        return None;
    }
    Some(Coord::new(row, col))
}

/// Human player reading targets from stdin, re-prompting on bad input.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        "Player"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, size: i32) -> Coord {
        loop {
            print!("Enter target (e.g. A1): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_coord(line.trim(), size) {
                Some(coord) => return coord,
                None => println!("Invalid input, expected a letter and a digit like A1."),
            }
        }
    }
}
