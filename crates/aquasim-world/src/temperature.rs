//! Water temperature and its per-cycle random walk.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Temperature at which a fresh tank starts
pub const DEFAULT_TEMPERATURE: f64 = 17.0;
/// Size of a single warm or cool step
pub const TEMPERATURE_STEP: f64 = 0.1;
/// Above this the walk leans cooler, at or below it leans warmer
pub const DRIFT_PIVOT: f64 = 15.0;

/// Which way one drift step went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drift {
    Cooled,
    Steady,
    Warmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
}

impl Default for Temperature {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE)
    }
}

impl Temperature {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn current(&self) -> f64 {
        self.value
    }

    pub fn warm(&mut self) {
        self.value += TEMPERATURE_STEP;
    }

    pub fn cool(&mut self) {
        self.value -= TEMPERATURE_STEP;
    }

    /// Apply one step of the biased random walk.
    ///
    /// Warm water cools with p=0.3 and warms with p=0.2; water at or below
    /// the pivot cools with p=0.2 and warms with p=0.3.
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Drift {
        let n: f64 = rng.gen();
        let (cool_below, warm_from) = if self.value > DRIFT_PIVOT {
            (0.3, 0.8)
        } else {
            (0.2, 0.7)
        };

        if n < cool_below {
            self.cool();
            Drift::Cooled
        } else if n >= warm_from {
            self.warm();
            Drift::Warmed
        } else {
            Drift::Steady
        }
    }
}
