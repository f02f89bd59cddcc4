use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Incorrect training code: {code}")]
    UnknownCode { code: String },

    #[error(
        "Wrong number of parameters for {training_type}: given {given}, expected {expected}"
    )]
    ArityMismatch {
        training_type: &'static str,
        given: usize,
        expected: usize,
    },

    #[error("Invalid value for {field}: {value} is not a whole number")]
    InvalidField { field: &'static str, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkoutError {
    /// True for errors tied to a single sensor package, which batch mode skips.
    pub fn is_package_error(&self) -> bool {
        matches!(
            self,
            WorkoutError::UnknownCode { .. }
                | WorkoutError::ArityMismatch { .. }
                | WorkoutError::InvalidField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message() {
        let err = WorkoutError::UnknownCode {
            code: "XYZ".into(),
        };
        assert_eq!(err.to_string(), "Incorrect training code: XYZ");
        assert!(err.is_package_error());
    }

    #[test]
    fn test_arity_message_names_counts() {
        let err = WorkoutError::ArityMismatch {
            training_type: "SportsWalking",
            given: 3,
            expected: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("SportsWalking"));
        assert!(msg.contains("given 3"));
        assert!(msg.contains("expected 4"));
    }

    #[test]
    fn test_config_error_is_not_package_error() {
        let err = WorkoutError::InvalidConfig("bad mode".into());
        assert!(!err.is_package_error());
    }
}
