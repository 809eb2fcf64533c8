use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    generate_board, Board, BoardError, Cell, Coord, BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET,
    TOTAL_SHIP_CELLS,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_board(&mut rng, BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET)
}

fn snapshot(board: &Board) -> (usize, Vec<Cell>) {
    let mut cells = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            cells.push(board.cell(Coord::new(r, c)));
        }
    }
    (board.sunk_count(), cells)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_keeps_fleet_in_bounds_and_apart(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        let total: usize = ships.iter().map(|s| s.length() as usize).sum();
        prop_assert_eq!(total, TOTAL_SHIP_CELLS);
        for ship in ships {
            for cell in ship.cells() {
                prop_assert!(!board.out_of_bounds(cell));
            }
        }
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        let gap = (ca.row - cb.row).abs().max((ca.col - cb.col).abs());
                        prop_assert!(gap >= 2);
                    }
                }
            }
        }
    }

    #[test]
    fn rejected_shots_never_mutate(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed);
        board.shoot(Coord::new(row, col)).unwrap();
        let after_first = snapshot(&board);

        let err = board.shoot(Coord::new(row, col)).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyTargeted);
        prop_assert_eq!(&snapshot(&board), &after_first);

        let err = board.shoot(Coord::new(-1, col)).unwrap_err();
        prop_assert_eq!(err, BoardError::OutOfBounds);
        let err = board.shoot(Coord::new(row, BOARD_SIZE)).unwrap_err();
        prop_assert_eq!(err, BoardError::OutOfBounds);
        prop_assert_eq!(&snapshot(&board), &after_first);
    }

    #[test]
    fn sinking_everything_counts_every_ship(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let targets: Vec<Coord> = board.ships().iter().flat_map(|s| s.cells()).collect();
        for t in targets {
            board.shoot(t).unwrap();
        }
        prop_assert!(board.fleet_sunk());
        prop_assert_eq!(board.sunk_count(), board.ships().len());
    }
}
