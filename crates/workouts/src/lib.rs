//! Workout summaries from raw sensor packages.
//!
//! A sensor package is a short workout code (`RUN`, `WLK`, `SWM`) plus the raw
//! readings for one session. Packages are validated and turned into typed
//! workout records, which report distance, mean speed and calories and render
//! a one-line summary.
//!
//! ```rust,ignore
//! use workouts::prelude::*;
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", workout.show_training_info().get_message());
//! ```

pub mod config;
pub mod driver;
pub mod errors;
pub mod message;
pub mod package;
pub mod training;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{Config, Mode, OutputFormat};
    pub use crate::driver::{BatchReport, run};
    pub use crate::errors::WorkoutError;
    pub use crate::message::InfoMessage;
    pub use crate::package::{SensorPackage, WorkoutCode, default_packages, read_package};
    pub use crate::training::{Running, SportsWalking, Swimming, Training, Workout};
}
