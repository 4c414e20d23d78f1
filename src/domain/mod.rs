mod cell;
mod grid;
mod density;
mod patterns;
mod algorithm;
pub mod life;

pub use cell::Cell;
pub use grid::{Grid, DEFAULT_GRID_SIZE};
pub use density::Density;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use life::{advance, advance_parallel, advance_rows, clear, generate_random, generate_random_with, toggle};
