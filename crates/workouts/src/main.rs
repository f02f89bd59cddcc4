//! Reads sensor packages and prints a summary line for each workout.
//!
//! Run with:
//! ```sh
//! WORKOUT_PACKAGES=crates/workouts/data/packages.json cargo run -p workouts
//! ```

use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::config::Config;
use workouts::driver;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let packages = config.load_packages()?;
    tracing::info!("Processing {} sensor packages", packages.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = driver::run(&packages, config.mode, config.format, &mut out)?;

    tracing::info!(
        processed = report.processed,
        rejected = report.rejected,
        "Batch finished"
    );

    Ok(())
}
