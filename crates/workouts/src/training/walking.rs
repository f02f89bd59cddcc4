//! Sports (race) walking workout.

use super::{MIN_IN_H, Training, floor_div};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: i64,
    duration: f64,
    weight: f64,
    /// Centimeters.
    height: f64,
}

impl SportsWalking {
    pub fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> i64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration
    }

    fn weight_kg(&self) -> f64 {
        self.weight
    }

    /// Speed squared is floor-divided by height, so the second term only
    /// contributes once the quotient reaches a whole number.
    fn spent_calories(&self) -> f64 {
        let speed_term = floor_div(self.mean_speed_kmh().powi(2), self.height);
        (CALORIES_WEIGHT_MULTIPLIER * self.weight_kg()
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight_kg())
            * self.duration
            * MIN_IN_H
    }
}
