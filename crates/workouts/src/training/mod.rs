//! Workout records.
//!
//! Each workout kind lives in its own module and implements [`Training`]. The
//! closed [`Workout`] enum is what the dispatcher hands out; it forwards every
//! call to the variant it wraps.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::message::InfoMessage;

/// Step length in meters for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const SWM_STEP: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Capabilities shared by every workout kind.
///
/// Implementations provide the raw fields and a calorie formula; distance,
/// mean speed and the summary message have default implementations that
/// variants may override.
pub trait Training {
    /// Display name used in the summary message.
    fn training_type(&self) -> &'static str;

    /// Number of steps or strokes.
    fn action(&self) -> i64;

    /// Workout duration in hours.
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Length of one step or stroke in meters.
    fn step_len(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered in kilometers.
    fn distance_km(&self) -> f64 {
        self.action() as f64 * self.step_len() / M_IN_KM
    }

    /// Mean speed in kilometers per hour.
    ///
    /// Zero duration is not guarded and yields infinity or NaN.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Calories spent in kilocalories.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.duration_h(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

/// A validated workout record of one of the three supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn action(&self) -> i64 {
        self.as_training().action()
    }

    fn duration_h(&self) -> f64 {
        self.as_training().duration_h()
    }

    fn weight_kg(&self) -> f64 {
        self.as_training().weight_kg()
    }

    fn step_len(&self) -> f64 {
        self.as_training().step_len()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Floor division with the rounding behaviour of Python's float `//`.
///
/// Computed from the remainder rather than as `(a / b).floor()`, so inexact
/// quotients round the same way: `floor_div(1.0, 0.1)` is `9.0`, not `10.0`.
/// A zero divisor yields NaN.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
