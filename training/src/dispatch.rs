use std::{fmt, str::FromStr};

use crate::{Error, RaceWalking, Result, Running, Swimming, Workout};

/// Activity code sent by sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityCode {
    #[cfg_attr(feature = "serde", serde(rename = "RUN"))]
    Run,
    #[cfg_attr(feature = "serde", serde(rename = "WLK"))]
    Walk,
    #[cfg_attr(feature = "serde", serde(rename = "SWM"))]
    Swim,
}

impl ActivityCode {
    pub const ALL: [Self; 3] = [Self::Run, Self::Walk, Self::Swim];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Walk => "WLK",
            Self::Swim => "SWM",
        }
    }

    /// Number of values expected in a package
    pub const fn arity(self) -> usize {
        match self {
            Self::Run => 3,
            Self::Walk => 4,
            Self::Swim => 5,
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|this| this.as_str() == s)
            .ok_or_else(|| Error::UnknownActivity(s.to_owned()))
    }
}

/// Build a training from sensor readings.
///
/// `values` are bound in order:
/// - `RUN` - steps, duration, weight
/// - `WLK` - steps, duration, weight, height
/// - `SWM` - strokes, duration, weight, pool length, pool count
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout> {
    let code = code.parse::<ActivityCode>()?;

    tracing::debug!(%code, ?values, "Reading package");

    let workout: Workout = match (code, values) {
        (ActivityCode::Run, &[action, duration, weight]) => {
            Running::new(count("action", action)?, duration, weight)?.into()
        }
        (ActivityCode::Walk, &[action, duration, weight, height]) => {
            RaceWalking::new(count("action", action)?, duration, weight, height)?.into()
        }
        (ActivityCode::Swim, &[action, duration, weight, pool_length, pool_count]) => {
            Swimming::new(
                count("action", action)?,
                duration,
                weight,
                pool_length,
                count("pool_count", pool_count)?,
            )?
            .into()
        }
        (code, values) => {
            return Err(Error::InvalidArguments {
                code,
                expected: code.arity(),
                actual: values.len(),
            });
        }
    };

    Ok(workout)
}

/// Whole numbers in `0..2^64`.
fn count(field: &'static str, value: f64) -> Result<u64> {
    match value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        true => Ok(value as u64),
        false => Err(Error::InvalidCount { field, value }),
    }
}
