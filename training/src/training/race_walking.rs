use super::{Training, checked_duration};
use crate::{MIN_IN_H, Result};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports (race) walking
///
/// ```notrust
/// calories = (0.035 * weight + (speed^2 // height) * 0.029 * weight) * (duration * MIN_IN_H)
/// ```
///
/// _Note_: `speed^2 // height` is a floored division. The widespread formula divides normally,
/// so results for usual speeds reduce to the weight term only. Kept as is until
/// the intended formula is confirmed.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct RaceWalking {
    action: u64,
    duration: f64,
    weight: f64,
    height: f64,
}

impl RaceWalking {
    /// # Params
    /// - `action` - number of steps
    /// - `duration` - hours
    /// - `weight` - kilograms
    /// - `height` - centimeters
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: checked_duration(duration)?,
            weight,
            height,
        })
    }

    pub const fn weight(&self) -> f64 {
        self.weight
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for RaceWalking {
    const NAME: &'static str = "SportsWalking";

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn spent_calories(&self) -> f64 {
        let speed_by_height = floor_div(self.mean_speed().powi(2), self.height);

        (CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_by_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * (self.duration * MIN_IN_H)
    }
}

/// Floored quotient derived from the remainder, not from the rounded `a / b`.
///
/// `(a / b).floor()` is one too big whenever `a / b` rounds up to a whole number
/// e.g. `169.0 / 0.1` gives `1690.0` while the floored quotient is `1689.0`.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = div.floor();
    match div - floor > 0.5 {
        true => floor + 1.0,
        false => floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, training::assert_close};

    #[test]
    fn test_hour_walk() -> Result<()> {
        let walk = RaceWalking::new(9000, 1.0, 75.0, 180.0)?;

        assert_close(5.85, walk.distance());
        assert_close(5.85, walk.mean_speed());
        // 5.85^2 / 180 floors to zero
        assert_close(157.5, walk.spent_calories());

        Ok(())
    }

    #[test]
    fn test_floor_division_of_speed() -> Result<()> {
        // About 20 km/h, 400 / 150 floors to 2
        let walk = RaceWalking::new(15385, 0.5, 70.0, 150.0)?;
        let speed = walk.mean_speed();
        assert!((speed.powi(2) / 150.0).floor() == 2.0);

        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 30.0;
        assert_close(expected, walk.spent_calories());

        Ok(())
    }

    #[test]
    fn test_floor_div_uses_remainder() {
        assert_eq!(floor_div(169.0, 0.1), 1689.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(400.0, 150.0), 2.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
    }

    #[test]
    fn test_quotient_rounding_up_to_whole() -> Result<()> {
        // 13 km/h, 169 / 0.1 floors to 1689
        let walk = RaceWalking::new(20000, 1.0, 75.0, 0.1)?;
        assert_close(13.0, walk.mean_speed());

        let expected = (0.035 * 75.0 + 1689.0 * 0.029 * 75.0) * 60.0;
        assert_close(expected, walk.spent_calories());
        assert!((walk.spent_calories() - 220572.0).abs() < 1e-6);

        Ok(())
    }

    #[test]
    fn test_negative_duration() {
        assert!(matches!(
            RaceWalking::new(9000, -1.0, 75.0, 180.0),
            Err(Error::InvalidDuration(_))
        ));
    }
}
