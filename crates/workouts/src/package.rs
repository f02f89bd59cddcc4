//! Sensor packages and the dispatcher that turns them into workout records.
//!
//! A package is a workout code plus the raw readings, positionally ordered as
//! `(action, duration, weight, [height | length_pool, count_pool])`. The code
//! is resolved first, then the number of readings is checked against the
//! arity of the resolved kind, and only then is a record constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Short code identifying a workout kind in a sensor package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::SportsWalking,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
            WorkoutCode::Swimming => "SWM",
        }
    }

    /// Number of readings a package of this kind must carry.
    pub const fn arity(self) -> usize {
        match self {
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
            WorkoutCode::Swimming => 5,
        }
    }

    /// Display name of the record built for this code.
    pub const fn training_type(self) -> &'static str {
        match self {
            WorkoutCode::Running => "Running",
            WorkoutCode::SportsWalking => "SportsWalking",
            WorkoutCode::Swimming => "Swimming",
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownCode { code: s.to_string() })
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw readings received from a sensor, tagged with a workout code.
///
/// Deserializes from either `{"code": "RUN", "data": [15000, 1, 75]}` or the
/// tuple form `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// The batch the binary processes when no package file is configured.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Validates a package and builds the matching workout record.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let code: WorkoutCode = code.parse()?;

    if data.len() != code.arity() {
        return Err(WorkoutError::ArityMismatch {
            training_type: code.training_type(),
            given: data.len(),
            expected: code.arity(),
        });
    }

    let action = count_field("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match code {
        WorkoutCode::Running => Running::new(action, duration, weight).into(),
        WorkoutCode::SportsWalking => SportsWalking::new(action, duration, weight, data[3]).into(),
        WorkoutCode::Swimming => {
            let count_pool = count_field("count_pool", data[4])?;
            Swimming::new(action, duration, weight, data[3], count_pool).into()
        }
    };

    tracing::debug!(%code, action, duration, weight, "Built workout record");

    Ok(workout)
}

/// Binds a reading that must be a whole number. Sign is not checked.
fn count_field(field: &'static str, value: f64) -> Result<i64, WorkoutError> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Ok(value as i64)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Training;

    #[test]
    fn test_codes_round_trip() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.as_str().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_code_lookup_is_case_sensitive() {
        assert!(matches!(
            "run".parse::<WorkoutCode>(),
            Err(WorkoutError::UnknownCode { code }) if code == "run"
        ));
    }

    #[test]
    fn test_read_each_kind() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(run, Workout::Running(_)));

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        match walk {
            Workout::SportsWalking(w) => assert!((w.height_cm() - 180.0).abs() < 1e-12),
            other => panic!("expected walking, got {other:?}"),
        }

        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 4.0]).unwrap();
        match swim {
            Workout::Swimming(w) => {
                assert!((w.length_pool_m() - 25.0).abs() < 1e-12);
                assert_eq!(w.count_pool(), 4);
                assert_eq!(w.action(), 720);
            }
            other => panic!("expected swimming, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        match err {
            WorkoutError::ArityMismatch {
                training_type,
                given,
                expected,
            } => {
                assert_eq!(training_type, "SportsWalking");
                assert_eq!(given, 3);
                assert_eq!(expected, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_readings_rejected() {
        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::ArityMismatch { given: 4, expected: 3, .. }
        ));
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        let err = read_package("XYZ", &[]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownCode { code } if code == "XYZ"));
    }

    #[test]
    fn test_fractional_count_rejected() {
        let err = read_package("RUN", &[1500.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "action", .. }));

        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 4.5]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "count_pool", .. }));

        let err = read_package("RUN", &[f64::INFINITY, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "action", .. }));
    }

    #[test]
    fn test_negative_counts_are_bound() {
        let run = read_package("RUN", &[-100.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.action(), -100);
        assert!((run.distance_km() + 0.065).abs() < 1e-9);
        assert!(run.spent_calories() < 0.0);

        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -4.0]).unwrap();
        match swim {
            Workout::Swimming(w) => assert_eq!(w.count_pool(), -4),
            other => panic!("expected swimming, got {other:?}"),
        }
    }

    #[test]
    fn test_counts_above_u32_range_are_bound() {
        let run = read_package("RUN", &[5_000_000_000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.action(), 5_000_000_000);
    }

    #[test]
    fn test_package_deserializes_from_tuple_and_map() {
        let tuple: SensorPackage = serde_json::from_str(r#"["RUN", [15000, 1, 75]]"#).unwrap();
        let map: SensorPackage =
            serde_json::from_str(r#"{"code": "RUN", "data": [15000, 1, 75]}"#).unwrap();
        assert_eq!(tuple, map);
        assert_eq!(tuple.data, vec![15000.0, 1.0, 75.0]);
    }

    #[test]
    fn test_non_numeric_reading_fails_to_deserialize() {
        let result: Result<SensorPackage, _> = serde_json::from_str(r#"["RUN", [15000, "1", 75]]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_packages_are_valid() {
        for package in default_packages() {
            assert!(package.read().is_ok(), "{} should be valid", package.code);
        }
    }
}
