use std::fmt;

use rayon::prelude::*;

use super::Cell;
use crate::error::{LifeError, Result};

/// Default edge length of a grid
pub const DEFAULT_GRID_SIZE: usize = 64;

/// Grid is a square `size × size` board on a bounded plane.
/// Cells outside `[0, size)` do not exist and read as dead; there is no wraparound.
/// Updates are functional: evolution always builds a fresh grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size,
            cells: vec![Cell::Dead; cell_count(size)?],
        })
    }

    /// Build a grid from a boolean matrix indexed `rows[x][y]`.
    /// Rejects empty, jagged and non-square input.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::invalid_argument("grid must have at least one row"));
        }
        cell_count(size)?;
        if let Some((x, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != size)
        {
            return Err(LifeError::invalid_argument(format!(
                "row {x} has {} cells, expected {size}",
                row.as_ref().len()
            )));
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied().map(Cell::from))
            .collect();
        Ok(Self { size, cells })
    }

    /// Edge length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Row-major index; `x` selects the row, `y` the column
    const fn get_index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// Resolve signed coordinates to an in-bounds position
    fn checked(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.size)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.size)?;
        Some((x, y))
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.get_index(x, y)])
    }

    /// Whether the cell is alive; out-of-bounds reads as dead
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.checked(x, y)
            .is_some_and(|(x, y)| self.cells[self.get_index(x, y)].is_alive())
    }

    /// Set cell at position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i64, y: i64, cell: Cell) {
        if let Some((x, y)) = self.checked(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell in place. Returns false (and changes nothing) when out of bounds.
    pub fn toggle(&mut self, x: i64, y: i64) -> bool {
        match self.checked(x, y) {
            Some((x, y)) => {
                let idx = self.get_index(x, y);
                self.cells[idx] = self.cells[idx].toggle();
                true
            }
            None => false,
        }
    }

    /// Count live neighbors; positions off the board count as dead
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);

        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count() as u8
    }

    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.count_live_neighbors(x, y))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|x| (0..self.size).map(move |y| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let cells = (0..self.size)
            .into_par_iter()
            .flat_map_iter(|x| (0..self.size).map(move |y| self.next_cell(x, y)))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Export as a boolean matrix indexed `rows[x][y]`
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&cell| cell.into()).collect())
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |x| (0..self.size).map(move |y| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

/// Number of cells in a `size × size` grid.
/// The total must fit an allocation, which also keeps every coordinate inside `i64`.
fn cell_count(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(LifeError::invalid_argument("grid size must be positive"));
    }
    size.checked_mul(size)
        .filter(|&count| count <= isize::MAX as usize)
        .ok_or_else(|| LifeError::invalid_argument(format!("grid size {size} is too large")))
}

impl Default for Grid {
    fn default() -> Self {
        const CELLS: usize = DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE;
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![Cell::Dead; CELLS],
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = LifeError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

/// One line per row, `#` alive and `.` dead
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, alive: &[(i64, i64)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(matches!(Grid::new(usize::MAX), Err(LifeError::InvalidArgument(_))));
        assert!(matches!(Grid::new(1usize << 33), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_default_is_64() {
        let grid = Grid::default();
        assert_eq!(grid.size(), 64);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(10).unwrap();
        assert_eq!(grid.get(3, 4), Some(Cell::Dead));

        grid.set(3, 4, Cell::Alive);
        assert_eq!(grid.get(3, 4), Some(Cell::Alive));
        assert!(grid.is_alive(3, 4));
        assert!(!grid.is_alive(4, 3));
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(10).unwrap();
        grid.set(-1, 0, Cell::Alive);
        grid.set(10, 0, Cell::Alive);
        grid.set(0, 10, Cell::Alive);

        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(10, 0), None);
        assert!(!grid.is_alive(-1, -1));
    }

    #[test]
    fn test_toggle_reports_bounds() {
        let mut grid = Grid::new(5).unwrap();
        assert!(grid.toggle(2, 2));
        assert!(grid.is_alive(2, 2));
        assert!(grid.toggle(2, 2));
        assert!(!grid.is_alive(2, 2));
        assert!(!grid.toggle(5, 0));
        assert!(!grid.toggle(0, -1));
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        // Opposite corners would be neighbors on a torus
        let grid = grid_with(5, &[(4, 4), (0, 4), (4, 0), (1, 1)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_count_neighbors_blinker() {
        let grid = grid_with(10, &[(5, 4), (5, 5), (5, 6)]);

        assert_eq!(grid.count_live_neighbors(5, 5), 2);
        assert_eq!(grid.count_live_neighbors(4, 5), 3);
        assert_eq!(grid.count_live_neighbors(6, 5), 3);
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let rows = vec![vec![true, false], vec![false]];
        assert!(matches!(Grid::from_rows(&rows), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![true, false, true], vec![false, false, false]];
        assert!(matches!(Grid::try_from(rows), Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_rows_round_trip_keeps_orientation() {
        let rows = vec![
            vec![false, true, false],
            vec![false, false, false],
            vec![true, false, false],
        ];
        let grid = Grid::from_rows(&rows).unwrap();

        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(2, 0));
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_display() {
        let grid = grid_with(3, &[(0, 0), (1, 2)]);
        assert_eq!(grid.to_string(), "#..\n..#\n...\n");
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(50).unwrap();
        for i in 0..400i64 {
            grid.set(i % 50, (i * 7) % 50, Cell::Alive);
        }

        assert_eq!(grid.evolve(), grid.evolve_parallel());
    }

    #[test]
    fn test_iter_cells_covers_grid() {
        let grid = grid_with(4, &[(1, 3)]);
        let cells: Vec<_> = grid.iter_cells().collect();

        assert_eq!(cells.len(), 16);
        assert!(cells.contains(&(1, 3, Cell::Alive)));
        assert_eq!(cells.iter().filter(|(_, _, c)| c.is_alive()).count(), 1);
    }
}
