use std::fmt;

/// Summary of a finished training.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityRecord {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Kilometers per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl ActivityRecord {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ActivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;

        write!(
            f,
            "Activity type: {training_type}; \
             Duration: {duration:.3} h.; \
             Distance: {distance:.3} km; \
             Avg. speed: {speed:.3} km/h; \
             Calories burned: {calories:.3}."
        )
    }
}
