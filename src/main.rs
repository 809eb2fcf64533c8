use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::ui::{self, ConsoleUi};
use seabattle::{
    generate_board, init_logging, AiPlayer, CliPlayer, Match, Player, BOARD_SIZE,
    DEFAULT_PLACEMENT_BUDGET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,

    #[arg(long, default_value_t = BOARD_SIZE, help = "Board side length")]
    size: i32,

    #[arg(
        long,
        default_value_t = DEFAULT_PLACEMENT_BUDGET,
        help = "Cap on total random-placement attempts per board build"
    )]
    placement_budget: u32,

    #[arg(long, help = "Let the computer play both sides")]
    auto: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Lower bound: the fixed fleet does not fit below 6x6. Upper bound:
    // columns are entered as a single digit.
    if !(6..=9).contains(&cli.size) {
        anyhow::bail!("board size must be between 6 and 9, got {}", cli.size);
    }
    if cli.placement_budget == 0 {
        anyhow::bail!("placement budget must be at least 1");
    }

    let mut rng = match cli.seed {
        Some(s) => {
            info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    ui::greet();

    let human_board = generate_board(&mut rng, cli.size, cli.placement_budget);
    let mut ai_board = generate_board(&mut rng, cli.size, cli.placement_budget);
    ai_board.set_hidden(true);

    let human: Box<dyn Player> = if cli.auto {
        Box::new(AiPlayer::new())
    } else {
        Box::new(CliPlayer::new())
    };
    let mut game = Match::new(human_board, ai_board, human, Box::new(AiPlayer::new()));
    game.run(&mut rng, &mut ConsoleUi::new());
    Ok(())
}
