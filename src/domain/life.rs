//! The operations the driver calls on a grid.
//!
//! Every function takes the grid by reference and returns a new grid; the
//! caller's grid is never modified and nothing is retained between calls.

use rand::Rng;
use tracing::trace;

use super::{Cell, Density, Grid};
use crate::error::Result;

/// Random `size × size` grid, each cell alive with probability `density`
pub fn generate_random(size: usize, density: Density) -> Result<Grid> {
    generate_random_with(&mut rand::rng(), size, density)
}

/// Same as `generate_random` but drawing from the given RNG
pub fn generate_random_with<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    density: Density,
) -> Result<Grid> {
    density.validate()?;
    let mut grid = Grid::new(size)?;

    for x in 0..size as i64 {
        for y in 0..size as i64 {
            if rng.random_ratio(density.numerator(), density.denominator()) {
                grid.set(x, y, Cell::Alive);
            }
        }
    }
    Ok(grid)
}

/// All-dead grid with the same dimensions
pub fn clear(grid: &Grid) -> Grid {
    grid.clone().clear()
}

/// Flip the cell at `(x, y)`. Out-of-range coordinates return an unchanged copy.
pub fn toggle(grid: &Grid, x: i64, y: i64) -> Grid {
    let mut next = grid.clone();
    if !next.toggle(x, y) {
        trace!(x, y, size = grid.size(), "ignoring toggle outside grid");
    }
    next
}

/// Next generation under B3/S23 with off-board neighbors counted as dead
pub fn advance(grid: &Grid) -> Grid {
    grid.evolve()
}

/// `advance` computed on the rayon pool
pub fn advance_parallel(grid: &Grid) -> Grid {
    grid.evolve_parallel()
}

/// `advance` over a raw boolean matrix indexed `rows[x][y]`.
/// Jagged or non-square input fails with `InvalidArgument`.
pub fn advance_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Vec<Vec<bool>>> {
    let grid = Grid::from_rows(rows)?;
    Ok(advance(&grid).to_rows())
}
