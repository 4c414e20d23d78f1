mod simulation;
mod viewport;

pub use simulation::{RunState, Simulation};
pub use viewport::Viewport;
