use super::{Training, checked_duration};
use crate::{M_IN_KM, MIN_IN_H, Result};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running
///
/// ```notrust
/// calories = (18 * speed - 20) * weight / M_IN_KM * (duration * MIN_IN_H)
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Running {
    action: u64,
    duration: f64,
    weight: f64,
}

impl Running {
    /// # Params
    /// - `action` - number of steps
    /// - `duration` - hours
    /// - `weight` - kilograms
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: checked_duration(duration)?,
            weight,
        })
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl Training for Running {
    const NAME: &'static str = "Running";

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * (self.duration * MIN_IN_H)
    }
}
