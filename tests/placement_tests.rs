use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    build_attempt, generate_board, Cell, Coord, ShotResult, BOARD_SIZE,
    DEFAULT_PLACEMENT_BUDGET, FLEET_SIZES, NUM_SHIPS, TOTAL_SHIP_CELLS,
};

#[test]
fn fleet_cell_total_matches_composition() {
    let sum: usize = FLEET_SIZES.iter().map(|&l| l as usize).sum();
    assert_eq!(sum, TOTAL_SHIP_CELLS);
}

#[test]
fn generated_board_carries_the_full_fleet() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = generate_board(&mut rng, BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET);
    assert_eq!(board.ships().len(), NUM_SHIPS);
    let cells: usize = board.ships().iter().map(|s| s.length() as usize).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);

    // the marker grid agrees with the fleet
    let mut marked = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.cell(Coord::new(r, c)) == Cell::Ship {
                marked += 1;
            }
        }
    }
    assert_eq!(marked, TOTAL_SHIP_CELLS);
}

#[test]
fn generated_ships_never_touch() {
    for seed in 0..50u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generate_board(&mut rng, BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        let gap = (ca.row - cb.row).abs().max((ca.col - cb.col).abs());
                        assert!(gap >= 2, "seed {}: {} touches {}", seed, ca, cb);
                    }
                }
            }
        }
    }
}

#[test]
fn every_ship_cell_is_shootable_after_generation() {
    // reset_targeting must leave placement bookkeeping out of play
    let mut rng = SmallRng::seed_from_u64(99);
    let mut board = generate_board(&mut rng, BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET);
    let targets: Vec<Coord> = board.ships().iter().flat_map(|s| s.cells()).collect();
    for t in targets {
        let res = board.shoot(t).unwrap();
        assert!(matches!(res, ShotResult::Hit | ShotResult::Sunk));
    }
    assert_eq!(board.sunk_count(), NUM_SHIPS);
    assert!(board.fleet_sunk());
}

#[test]
fn too_small_budget_abandons_the_board() {
    // seven ships need at least seven attempts
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(build_attempt(&mut rng, BOARD_SIZE, 3).is_none());
}

#[test]
fn generation_succeeds_across_many_seeds() {
    for seed in 0..100u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generate_board(&mut rng, BOARD_SIZE, DEFAULT_PLACEMENT_BUDGET);
        assert_eq!(board.ships().len(), NUM_SHIPS);
    }
}
