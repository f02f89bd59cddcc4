//! Batch driver: sensor packages in, summary lines out.

use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::config::{Mode, OutputFormat};
use crate::errors::WorkoutError;
use crate::package::SensorPackage;
use crate::training::Training;

/// Counts of what happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub rejected: usize,
}

/// Processes packages in order, writing one summary per accepted package.
///
/// In [`Mode::Batch`] a rejected package is logged and skipped. In
/// [`Mode::Strict`] the first rejection is returned. Write failures always
/// abort the run.
pub fn run<'a, W: Write>(
    packages: impl IntoIterator<Item = &'a SensorPackage>,
    mode: Mode,
    format: OutputFormat,
    out: &mut W,
) -> Result<BatchReport, WorkoutError> {
    let mut report = BatchReport::default();

    for (index, package) in packages.into_iter().enumerate() {
        let workout = match package.read() {
            Ok(workout) => workout,
            Err(e) if mode == Mode::Batch && e.is_package_error() => {
                warn!(index, code = %package.code, "Skipping sensor package: {e}");
                report.rejected += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let info = workout.show_training_info();
        match format {
            OutputFormat::Text => writeln!(out, "{}", info.get_message())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &info)?;
                writeln!(out)?;
            }
        }
        report.processed += 1;
    }

    out.flush()?;

    Ok(report)
}
