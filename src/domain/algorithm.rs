//! Algorithm enum for selecting evolution implementation.

use serde::{Deserialize, Serialize};

use super::{Grid, life};

/// Available evolution strategies. Both produce identical grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Rows spread over the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Advance one generation with this strategy
    pub fn advance(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => life::advance(grid),
            Algorithm::Parallel => life::advance_parallel(grid),
        }
    }
}
