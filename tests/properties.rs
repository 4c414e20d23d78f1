use bounded_life::domain::generate_random_with;
use bounded_life::{Cell, Density, Grid, LifeError, advance, advance_parallel, advance_rows, clear, toggle};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Square boolean matrices of edge 1..=12
prop_compose! {
    fn arb_grid()(size in 1usize..=12)(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), size), size)
    ) -> Grid {
        Grid::from_rows(&rows).unwrap()
    }
}

/// Reference count straight from the definition, for cross-checking
fn neighbors(rows: &[Vec<bool>], x: usize, y: usize) -> u8 {
    let n = rows.len() as i64;
    let mut count = 0;
    for dx in -1i64..=1 {
        for dy in -1i64..=1 {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if (dx, dy) != (0, 0) && (0..n).contains(&nx) && (0..n).contains(&ny) && rows[nx as usize][ny as usize] {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn advance_is_deterministic(grid in arb_grid()) {
        prop_assert_eq!(advance(&grid), advance(&grid.clone()));
    }

    #[test]
    fn advance_leaves_input_untouched(grid in arb_grid()) {
        let snapshot = grid.clone();
        let mut next = advance(&grid);
        next.set(0, 0, Cell::Alive);
        prop_assert_eq!(&grid, &snapshot);
    }

    #[test]
    fn advance_keeps_size(grid in arb_grid()) {
        prop_assert_eq!(advance(&grid).size(), grid.size());
    }

    #[test]
    fn advance_matches_definition(grid in arb_grid()) {
        let rows = grid.to_rows();
        let next = advance(&grid).to_rows();
        for x in 0..rows.len() {
            for y in 0..rows.len() {
                let expected = matches!((rows[x][y], neighbors(&rows, x, y)), (true, 2 | 3) | (false, 3));
                prop_assert_eq!(next[x][y], expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn parallel_matches_serial(grid in arb_grid()) {
        prop_assert_eq!(advance_parallel(&grid), advance(&grid));
    }

    #[test]
    fn clear_is_idempotent(grid in arb_grid()) {
        let once = clear(&grid);
        prop_assert_eq!(once.population(), 0);
        prop_assert_eq!(clear(&once), once);
    }

    #[test]
    fn toggle_out_of_range_is_noop(grid in arb_grid(), offset in 0i64..5, y in -3i64..15) {
        let n = grid.size() as i64;
        prop_assert_eq!(&toggle(&grid, -1 - offset, y), &grid);
        prop_assert_eq!(&toggle(&grid, n + offset, y), &grid);
        prop_assert_eq!(&toggle(&grid, y, n + offset), &grid);
    }

    #[test]
    fn toggle_twice_restores(grid in arb_grid(), x in 0i64..12, y in 0i64..12) {
        let n = grid.size() as i64;
        let (x, y) = (x % n, y % n);
        let once = toggle(&grid, x, y);
        prop_assert_ne!(once.is_alive(x, y), grid.is_alive(x, y));
        prop_assert_eq!(toggle(&once, x, y), grid);
    }

    #[test]
    fn jagged_rows_rejected(size in 2usize..10, short in 0usize..10) {
        let short = short % size;
        let mut rows = vec![vec![false; size]; size];
        rows[short].pop();
        prop_assert!(matches!(advance_rows(&rows), Err(LifeError::InvalidArgument(_))));
    }
}

#[test]
fn blinker_round_trip_on_default_grid() {
    let mut grid = Grid::default();
    for y in 0..3 {
        grid.set(1, y, Cell::Alive);
    }

    let vertical = advance(&grid);
    assert!(vertical.is_alive(0, 1) && vertical.is_alive(1, 1) && vertical.is_alive(2, 1));
    assert_eq!(vertical.population(), 3);
    assert_eq!(advance(&vertical), grid);
}

#[test]
fn seeded_random_grid_density() {
    let mut rng = StdRng::seed_from_u64(2024);
    let density = Density::new(1, 3).unwrap();
    let grid = generate_random_with(&mut rng, 64, density).unwrap();

    let ratio = grid.population() as f64 / (64.0 * 64.0);
    assert!((0.28..0.39).contains(&ratio), "ratio was {ratio}");
}
