//! Match orchestration: alternating turns, retry on illegal targets, win
//! detection.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::player::Player;

/// Which side is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Ai,
}

impl Turn {
    pub fn opponent(self) -> Turn {
        match self {
            Turn::Human => Turn::Ai,
            Turn::Ai => Turn::Human,
        }
    }
}

/// Final result of a match. There is no draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HumanWins,
    AiWins,
}

/// Receiver for match events. The match loop reports through this trait
/// and the console layer decides how to render; every method defaults to a
/// no-op so headless callers can ignore what they don't need.
pub trait MatchView {
    fn turn_started(&mut self, _side: Turn, _human_board: &Board, _ai_board: &Board) {}
    fn shot_rejected(&mut self, _side: Turn, _target: Coord, _error: BoardError) {}
    fn shot_resolved(&mut self, _side: Turn, _target: Coord, _result: ShotResult) {}
    fn finished(&mut self, _outcome: MatchOutcome, _human_board: &Board, _ai_board: &Board) {}
}

/// View that swallows every event. Used by tests and simulations.
pub struct SilentView;

impl MatchView for SilentView {}

/// A match between the human side and the AI side. Owns both boards and
/// both players for its whole lifetime; boards are only mutated by shot
/// resolution once play begins.
pub struct Match {
    human_board: Board,
    ai_board: Board,
    human: Box<dyn Player>,
    ai: Box<dyn Player>,
}

impl Match {
    /// Assemble a match. `human_board` is the human's own fleet (attacked
    /// by the AI), `ai_board` the AI's fleet (attacked by the human).
    pub fn new(
        human_board: Board,
        ai_board: Board,
        human: Box<dyn Player>,
        ai: Box<dyn Player>,
    ) -> Self {
        Self {
            human_board,
            ai_board,
            human,
            ai,
        }
    }

    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    /// One complete move for `player` against `enemy`: keep asking for
    /// targets until one is legal, report the rejections along the way,
    /// and return how the legal shot resolved. Retries are unbounded; a
    /// finite board always has an untargeted cell while play continues.
    fn play_move(
        side: Turn,
        player: &mut dyn Player,
        enemy: &mut Board,
        rng: &mut SmallRng,
        view: &mut dyn MatchView,
    ) -> ShotResult {
        loop {
            let target = player.select_target(rng, enemy.size());
            match enemy.shoot(target) {
                Ok(result) => {
                    debug!("{} shot {} -> {:?}", player.name(), target, result);
                    view.shot_resolved(side, target, result);
                    return result;
                }
                Err(error) => {
                    debug!("{} shot {} rejected: {}", player.name(), target, error);
                    view.shot_rejected(side, target, error);
                }
            }
        }
    }

    /// Run the match to completion. The acting side retains the turn after
    /// a non-lethal hit; a miss or a sinking shot passes it. The first
    /// side to have its whole fleet sunk loses.
    pub fn run(&mut self, rng: &mut SmallRng, view: &mut dyn MatchView) -> MatchOutcome {
        let mut turn = Turn::Human;
        loop {
            view.turn_started(turn, &self.human_board, &self.ai_board);
            let result = match turn {
                Turn::Human => {
                    Self::play_move(turn, self.human.as_mut(), &mut self.ai_board, rng, view)
                }
                Turn::Ai => {
                    Self::play_move(turn, self.ai.as_mut(), &mut self.human_board, rng, view)
                }
            };
            if self.ai_board.fleet_sunk() {
                view.finished(MatchOutcome::HumanWins, &self.human_board, &self.ai_board);
                return MatchOutcome::HumanWins;
            }
            if self.human_board.fleet_sunk() {
                view.finished(MatchOutcome::AiWins, &self.human_board, &self.ai_board);
                return MatchOutcome::AiWins;
            }
            if !result.grants_extra_turn() {
                turn = turn.opponent();
            }
        }
    }
}
