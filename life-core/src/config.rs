use serde::{Deserialize, Serialize};

use crate::{
    constants::{MAX_GRID_SIDE, MAX_TICK_MILLIS, MIN_TICK_MILLIS},
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Delay between generations while auto-running.
    pub tick_millis: u32,
    /// Quiet period after the last window resize before the canvas is resized.
    pub resize_debounce_millis: u32,
    /// Probability of a cell being alive after randomizing.
    pub seed_density: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            tick_millis: 100,
            resize_debounce_millis: 1500,
            seed_density: 0.3,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(Error::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(Error::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.tick_millis == 0 {
            return Err(Error::ZeroInterval {
                name: "tick_millis",
            });
        }
        if self.resize_debounce_millis == 0 {
            return Err(Error::ZeroInterval {
                name: "resize_debounce_millis",
            });
        }
        if !(0.0..=1.0).contains(&self.seed_density) {
            return Err(Error::InvalidDensity(self.seed_density));
        }
        Ok(())
    }

    pub fn faster(&mut self) {
        self.tick_millis = (self.tick_millis / 2).max(MIN_TICK_MILLIS);
    }

    pub fn slower(&mut self) {
        self.tick_millis = self.tick_millis.saturating_mul(2).min(MAX_TICK_MILLIS);
    }
}
