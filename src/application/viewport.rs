/// Viewport maps pointer positions on a square-celled board to cell coordinates.
///
/// Cell edge is `min(width, height) / grid_size` whole pixels and the board is
/// inset by the same margin on both axes. A pointer on the first pixel line of
/// a cell resolves to the previous index, so the board's leading edge yields
/// `-1`; `Simulation::touch` ignores such coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub grid_size: usize,
}

impl Viewport {
    pub fn new(width: u32, height: u32, grid_size: usize) -> Self {
        Self {
            width,
            height,
            grid_size,
        }
    }

    /// Edge of one cell in pixels; `None` when the view cannot fit one pixel per cell
    pub fn cell_size(&self) -> Option<u32> {
        let grid_size = u32::try_from(self.grid_size).ok().filter(|&n| n > 0)?;
        let cell = self.width.min(self.height) / grid_size;
        (cell > 0).then_some(cell)
    }

    /// Inset of the board from the top-left corner
    pub fn margin(&self) -> Option<u32> {
        let cell = self.cell_size()?;
        let board = cell * self.grid_size as u32;
        Some((self.width.min(self.height) - board) / 2)
    }

    /// Convert screen coordinates to grid coordinates
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> Option<(i64, i64)> {
        let cell = self.cell_size()? as f32;
        let margin = self.margin()? as f32;

        let to_index = |p: f32| ((p - margin) / cell).ceil() as i64 - 1;
        Some((to_index(screen_x), to_index(screen_y)))
    }

    /// Top-left pixel of a cell; `None` for cells off the board
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> Option<(u32, u32)> {
        if grid_x >= self.grid_size || grid_y >= self.grid_size {
            return None;
        }
        let cell = self.cell_size()?;
        let margin = self.margin()?;
        Some((margin + grid_x as u32 * cell, margin + grid_y as u32 * cell))
    }
}
