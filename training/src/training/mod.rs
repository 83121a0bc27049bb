mod race_walking;
mod running;
mod swimming;

pub use self::race_walking::*;
pub use self::running::*;
pub use self::swimming::*;

use crate::{ActivityCode, ActivityRecord, Error, M_IN_KM, Result};

/// Common contract of all trainings.
///
/// Distance and mean speed have default formulas, calories must be provided by every kind.
pub trait Training {
    /// Activity type shown in the summary
    const NAME: &'static str;
    /// Meters covered by one step or stroke
    const LEN_STEP: f64 = 0.65;

    /// Number of steps or strokes
    fn action(&self) -> u64;

    /// Duration in hours, always greater than zero
    fn duration(&self) -> f64;

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Burnt kilocalories
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> ActivityRecord {
        ActivityRecord {
            training_type: Self::NAME.to_owned(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Any of known trainings.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Workout {
    Running(Running),
    RaceWalking(RaceWalking),
    Swimming(Swimming),
}

impl Workout {
    pub const fn code(&self) -> ActivityCode {
        match self {
            Self::Running(_) => ActivityCode::Run,
            Self::RaceWalking(_) => ActivityCode::Walk,
            Self::Swimming(_) => ActivityCode::Swim,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running(_) => Running::NAME,
            Self::RaceWalking(_) => RaceWalking::NAME,
            Self::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn show_training_info(&self) -> ActivityRecord {
        match self {
            Self::Running(this) => this.show_training_info(),
            Self::RaceWalking(this) => this.show_training_info(),
            Self::Swimming(this) => this.show_training_info(),
        }
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<RaceWalking> for Workout {
    fn from(value: RaceWalking) -> Self {
        Self::RaceWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

/// Zero, negative and NaN durations are rejected.
fn checked_duration(duration: f64) -> Result<f64> {
    match duration > 0.0 {
        true => Ok(duration),
        false => Err(Error::InvalidDuration(duration)),
    }
}

#[cfg(test)]
pub(crate) fn assert_close(expected: f64, actual: f64) {
    assert!(
        (expected - actual).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_must_be_positive() {
        assert!(matches!(checked_duration(0.0), Err(Error::InvalidDuration(_))));
        assert!(matches!(checked_duration(-1.5), Err(Error::InvalidDuration(_))));
        assert!(matches!(
            checked_duration(f64::NAN),
            Err(Error::InvalidDuration(_))
        ));
        assert_eq!(checked_duration(0.5).ok(), Some(0.5));
    }

    #[test]
    fn test_workout_delegates_to_kind() -> Result<()> {
        let workouts: [Workout; 3] = [
            Running::new(15000, 1.0, 75.0)?.into(),
            RaceWalking::new(9000, 1.0, 75.0, 180.0)?.into(),
            Swimming::new(720, 1.0, 80.0, 25.0, 40)?.into(),
        ];

        let names = workouts.iter().map(Workout::name).collect::<Vec<_>>();
        assert_eq!(names, ["Running", "SportsWalking", "Swimming"]);

        let codes = workouts.iter().map(Workout::code).collect::<Vec<_>>();
        assert_eq!(codes, ActivityCode::ALL);

        for workout in &workouts {
            assert_eq!(workout.show_training_info().training_type, workout.name());
        }

        Ok(())
    }

    #[test]
    fn test_summary_is_repeatable() -> Result<()> {
        let workout = Workout::from(RaceWalking::new(9000, 1.0, 75.0, 180.0)?);

        assert_eq!(workout.show_training_info(), workout.show_training_info());

        Ok(())
    }
}
