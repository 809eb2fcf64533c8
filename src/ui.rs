//! Console rendering: board grids, the greeting banner and a [`MatchView`]
//! implementation that narrates the match.

use crate::board::{Board, Cell};
use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::game::{MatchOutcome, MatchView, Turn};

fn marker(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Ship if hidden => ' ',
        Cell::Ship => 'S',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Empty => ' ',
    }
}

/// Render a board as lettered rows and numbered columns:
///
/// ```text
///    1 | 2 | 3 | 4 | 5 | 6 |
/// A| S | S |   |   |   |   |
/// ...
/// ```
///
/// A hidden board blanks its ship markers.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("  ");
    for c in 0..size {
        out.push_str(&format!(" {} |", c + 1));
    }
    for r in 0..size {
        out.push('\n');
        out.push((b'A' + r as u8) as char);
        out.push('|');
        for c in 0..size {
            let cell = board.cell(Coord::new(r, c));
            out.push_str(&format!(" {} |", marker(cell, board.is_hidden())));
        }
    }
    out
}

/// Greeting banner with the input format.
pub fn greet() {
    println!("-------------------");
    println!("    Sea Battle");
    println!(" input format: A1");
    println!("-------------------");
}

/// Console implementation of [`MatchView`].
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }

    fn side_name(side: Turn) -> &'static str {
        match side {
            Turn::Human => "Player",
            Turn::Ai => "Computer",
        }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchView for ConsoleUi {
    fn turn_started(&mut self, side: Turn, human_board: &Board, ai_board: &Board) {
        println!("\nYour board:");
        println!("{}", render_board(human_board));
        println!("\nComputer's board:");
        println!("{}", render_board(ai_board));
        println!("\n{} to move.", Self::side_name(side));
    }

    fn shot_rejected(&mut self, _side: Turn, target: Coord, error: BoardError) {
        println!("{}: {}", target, error);
    }

    fn shot_resolved(&mut self, side: Turn, target: Coord, result: ShotResult) {
        let verdict = match result {
            ShotResult::Miss => "miss",
            ShotResult::Hit => "hit, shoot again",
            ShotResult::Sunk => "sunk",
        };
        println!("{} shoots {} - {}!", Self::side_name(side), target, verdict);
    }

    fn finished(&mut self, outcome: MatchOutcome, human_board: &Board, ai_board: &Board) {
        println!("\nYour board:");
        println!("{}", render_board(human_board));
        println!("\nComputer's board:");
        println!("{}", render_board(ai_board));
        match outcome {
            MatchOutcome::HumanWins => println!("\nYou win! The enemy fleet is destroyed."),
            MatchOutcome::AiWins => println!("\nThe computer wins. Your fleet is destroyed."),
        }
    }
}
