// Domain layer - the pure grid operations
pub mod domain;

// Application layer - the driver that owns a grid and paces generations
pub mod application;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Density, Grid, Pattern, presets};
pub use domain::{advance, advance_parallel, advance_rows, clear, generate_random, toggle};
pub use application::{RunState, Simulation, Viewport};
pub use config::LifeConfig;
pub use error::{LifeError, Result};
