//! Player trait: how a side picks its targets.

use rand::rngs::SmallRng;

use crate::coord::Coord;

/// Interface implemented by the different player types.
///
/// A player only selects targets; legality is judged by the opponent board
/// during turn resolution, and an illegal pick simply prompts another
/// selection.
pub trait Player {
    /// Short name for banners and log lines.
    fn name(&self) -> &str;

    /// Choose the next target on a `size`×`size` opponent board. May block
    /// on user input.
    fn select_target(&mut self, rng: &mut SmallRng, size: i32) -> Coord;
}
