//! Pool swimming workout.

use super::{M_IN_KM, SWM_STEP, Training};

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming record.
///
/// Distance is still derived from the stroke count, while mean speed comes
/// from the pool length and the number of laps.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: i64,
    duration: f64,
    weight: f64,
    /// Meters.
    length_pool: f64,
    count_pool: i64,
}

impl Swimming {
    pub fn new(action: i64, duration: f64, weight: f64, length_pool: f64, count_pool: i64) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool_m(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> i64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
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

    fn step_len(&self) -> f64 {
        SWM_STEP
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg()
    }
}
