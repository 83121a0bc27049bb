use super::{Training, checked_duration};
use crate::{M_IN_KM, Result};

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming
///
/// Mean speed is taken from pool geometry rather than from strokes:
///
/// ```notrust
/// speed = pool_length * pool_count / M_IN_KM / duration
/// calories = (speed + 1.1) * 2 * weight
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Swimming {
    action: u64,
    duration: f64,
    weight: f64,
    pool_length: f64,
    pool_count: u64,
}

impl Swimming {
    /// # Params
    /// - `action` - number of strokes
    /// - `duration` - hours
    /// - `weight` - kilograms
    /// - `pool_length` - meters
    /// - `pool_count` - number of swum pool lengths
    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_count: u64,
    ) -> Result<Self> {
        Ok(Self {
            action,
            duration: checked_duration(duration)?,
            weight,
            pool_length,
            pool_count,
        })
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub const fn pool_count(&self) -> u64 {
        self.pool_count
    }
}

impl Training for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length * self.pool_count as f64 / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.weight
    }
}
