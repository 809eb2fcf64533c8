//! Uniform-random AI player.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::coord::Coord;
use crate::player::Player;

/// AI that shoots at a uniform-random cell each time it is asked.
///
/// It keeps no memory of past shots; the opponent board rejects repeats
/// and the match loop asks again, which on a finite board always finds a
/// fresh cell before the match can end.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "Computer"
    }

    fn select_target(&mut self, rng: &mut SmallRng, size: i32) -> Coord {
        Coord::new(rng.random_range(0..size), rng.random_range(0..size))
    }
}
