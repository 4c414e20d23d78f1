use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::LifeConfig;
use crate::domain::{Algorithm, Density, Grid, life};
use crate::error::Result;

/// Whether the periodic tick advances the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Simulation is the driver around the pure grid operations.
/// It owns the single grid value and decides when a generation happens.
pub struct Simulation {
    grid: Grid,
    state: RunState,
    generation: u64,
    algorithm: Algorithm,
    density: Density,
    tick_interval: Duration,
    update_timer: Duration,
    rng: StdRng,
}

impl Simulation {
    /// Start stopped, on a random grid described by `config`
    pub fn new(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = life::generate_random_with(&mut rng, config.grid_size, config.density)?;
        info!(
            size = config.grid_size,
            population = grid.population(),
            "simulation created"
        );

        Ok(Self {
            grid,
            state: RunState::Stopped,
            generation: 0,
            algorithm: config.algorithm,
            density: config.density,
            tick_interval: config.tick_interval(),
            update_timer: Duration::ZERO,
            rng,
        })
    }

    /// Replace the grid, e.g. with a placed pattern (builder pattern)
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self.generation = 0;
        self
    }

    /// Set run state (builder pattern)
    pub fn with_state(mut self, state: RunState) -> Self {
        self.state = state;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Running => RunState::Stopped,
            RunState::Stopped => RunState::Running,
        };
        self.update_timer = Duration::ZERO;
        info!(state = ?self.state, "run state changed");
        self.state
    }

    /// Feed elapsed wall time. Advances at most one generation, and only while running.
    /// Returns whether a generation happened.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.update_timer += elapsed;
        if self.update_timer < self.tick_interval {
            return false;
        }
        self.update_timer = Duration::ZERO;
        self.advance();
        true
    }

    /// Stop and advance exactly one generation
    pub fn step(&mut self) {
        if self.is_running() {
            self.toggle_running();
        }
        self.advance();
    }

    fn advance(&mut self) {
        self.grid = self.algorithm.advance(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced"
        );
    }

    /// Fresh random grid of the same size; generation counter restarts
    pub fn reset(&mut self) -> Result<()> {
        self.grid = life::generate_random_with(&mut self.rng, self.grid.size(), self.density)?;
        self.generation = 0;
        info!(population = self.grid.population(), "grid reset");
        Ok(())
    }

    /// Kill every cell; generation counter restarts
    pub fn clear(&mut self) {
        self.grid = life::clear(&self.grid);
        self.generation = 0;
        info!("grid cleared");
    }

    /// Toggle the touched cell; coordinates off the board are ignored
    pub fn touch(&mut self, x: i64, y: i64) {
        self.grid = life::toggle(&self.grid, x, y);
    }
}
