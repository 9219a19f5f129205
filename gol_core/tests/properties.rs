// properties.rs - Property tests for the simulation core

use std::collections::HashSet;

use gol_core::{Grid, Simulation};
use proptest::prelude::*;

/// Reference step: full-grid scan with per-cell neighbor counting, the
/// oracle the incremental relevant-set engine must agree with.
fn full_scan_step(board: &HashSet<(usize, usize)>, size: usize) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for row in 0..size {
        for col in 0..size {
            let mut count = 0;
            for dr in [-1i64, 0, 1] {
                for dc in [-1i64, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let nr = (row as i64 + dr).rem_euclid(size as i64) as usize;
                    let nc = (col as i64 + dc).rem_euclid(size as i64) as usize;
                    if board.contains(&(nr, nc)) {
                        count += 1;
                    }
                }
            }
            let alive = board.contains(&(row, col));
            if (alive && count == 2) || count == 3 {
                next.insert((row, col));
            }
        }
    }
    next
}

fn board_of(sim: &Simulation) -> HashSet<(usize, usize)> {
    let mut live = HashSet::new();
    for row in 0..sim.size() {
        for col in 0..sim.size() {
            if sim.is_alive(row, col) {
                live.insert((row, col));
            }
        }
    }
    live
}

proptest! {
    #[test]
    fn relevant_set_step_matches_full_scan(
        size in 4usize..12,
        toggles in prop::collection::vec((0usize..12, 0usize..12), 0..48),
    ) {
        let mut sim = Simulation::new(size).unwrap();
        for (row, col) in toggles {
            sim.toggle(row % size, col % size);
        }

        sim.start();
        let mut expected = board_of(&sim);
        for _ in 0..3 {
            expected = full_scan_step(&expected, size);
            let still_running = sim.step();
            prop_assert_eq!(board_of(&sim), expected.clone());
            if !still_running {
                // Terminal states only come from an unchanged board.
                prop_assert_eq!(full_scan_step(&expected, size), expected.clone());
                break;
            }
        }
    }

    #[test]
    fn alive_set_tracks_cell_status(
        size in 3usize..10,
        toggles in prop::collection::vec((0usize..10, 0usize..10), 0..60),
    ) {
        let mut sim = Simulation::new(size).unwrap();
        for (row, col) in toggles {
            sim.toggle(row % size, col % size);
        }
        prop_assert_eq!(sim.population(), board_of(&sim).len());
    }

    #[test]
    fn neighbors_are_eight_distinct_and_symmetric(size in 3usize..12) {
        let grid = Grid::new(size).unwrap();
        for (row, col) in grid.coords() {
            let neighbors = grid.neighbors(row, col);
            let unique: HashSet<_> = neighbors.iter().copied().collect();
            prop_assert_eq!(unique.len(), 8);
            prop_assert!(!unique.contains(&(row, col)));
            for (nr, nc) in neighbors {
                prop_assert!(grid.neighbors(nr, nc).contains(&(row, col)));
            }
        }
    }
}
