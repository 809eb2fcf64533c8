mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod placement;
mod player;
mod player_ai;
mod player_cli;
mod ship;
pub mod ui;

pub use board::{Board, Cell};
pub use common::{BoardError, ShotResult};
pub use config::{
    BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET, FLEET_SIZES, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
pub use coord::Coord;
pub use game::{Match, MatchOutcome, MatchView, SilentView, Turn};
pub use logging::init_logging;
pub use placement::{build_attempt, generate_board, random_ship};
pub use player::Player;
pub use player_ai::AiPlayer;
pub use player_cli::{parse_coord, CliPlayer};
pub use ship::{Orientation, Ship};
