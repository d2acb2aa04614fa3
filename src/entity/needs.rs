//! The two bounded needs every pet carries

use crate::core::config::CareConfig;

/// Hunger and happiness, each kept inside the configured bounds
///
/// Outside this crate the fields are read through accessors only, so
/// every change goes through the clamping constructors and adjusters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Needs {
    /// 0.0 = full, 100.0 = starving
    pub(crate) hunger: f64,
    /// 0.0 = miserable, 100.0 = delighted
    pub(crate) happiness: f64,
}

impl Needs {
    /// Create needs, clamping both values into bounds
    pub fn new(hunger: f64, happiness: f64, config: &CareConfig) -> Self {
        Self {
            hunger: config.clamp_level(hunger),
            happiness: config.clamp_level(happiness),
        }
    }

    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    pub fn happiness(&self) -> f64 {
        self.happiness
    }

    pub fn adjust_hunger(&mut self, delta: f64, config: &CareConfig) {
        self.hunger = config.clamp_level(self.hunger + delta);
    }

    pub fn adjust_happiness(&mut self, delta: f64, config: &CareConfig) {
        self.happiness = config.clamp_level(self.happiness + delta);
    }
}
