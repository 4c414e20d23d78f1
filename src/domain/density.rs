use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

/// Probability that a freshly generated cell is alive, as `numerator / denominator`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Density {
    numerator: u32,
    denominator: u32,
}

impl Density {
    /// One cell in three starts alive
    pub const ONE_THIRD: Self = Self {
        numerator: 1,
        denominator: 3,
    };

    /// Create a density, rejecting a zero denominator or a ratio above one
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        let density = Self {
            numerator,
            denominator,
        };
        density.validate()?;
        Ok(density)
    }

    /// Check the invariant; needed for values that arrive through serde
    pub fn validate(&self) -> Result<()> {
        if self.denominator == 0 {
            return Err(LifeError::invalid_argument("density denominator must be positive"));
        }
        if self.numerator > self.denominator {
            return Err(LifeError::invalid_argument(format!(
                "density {}/{} exceeds 1",
                self.numerator, self.denominator
            )));
        }
        Ok(())
    }

    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Approximate probability as a float
    pub fn as_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE_THIRD
    }
}
