//! # Training
//!
//! Workout statistics computed from raw sensor packages.
//!
//! Every package is a pair of activity code and readings:
//!
//! - `RUN` - running: steps, duration (h), weight (kg)
//! - `WLK` - sports walking: steps, duration (h), weight (kg), height (cm)
//! - `SWM` - swimming: strokes, duration (h), weight (kg), pool length (m), pool count
//!
//! Distance is counted from steps or strokes:
//!
//! ```notrust
//! distance = action * LEN_STEP / M_IN_KM
//! ```
//!
//! Where `LEN_STEP` is `0.65` m for a step and `1.38` m for a stroke.
//! Mean speed is `distance / duration` except for swimming, which uses pool geometry.
//! Calories are specific to every activity, see [`Running`], [`RaceWalking`] and [`Swimming`].

mod dispatch;
mod error;
mod package;
mod record;
mod runner;
mod training;

pub use self::dispatch::*;
pub use self::error::*;
pub use self::package::*;
pub use self::record::*;
pub use self::runner::*;
pub use self::training::*;

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour
pub const MIN_IN_H: f64 = 60.0;
