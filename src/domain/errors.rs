use crate::domain::fitness::types::{FitnessGroup, FitnessMetricType};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a caller hands the roster an invalid argument
#[derive(Debug, Error, PartialEq)]
pub enum AthleteError {
    #[error("Athlete name is required")]
    NameMissing,

    #[error("Athlete name cannot be blank")]
    NameBlank,

    #[error("Athlete not found: {id}")]
    AthleteNotFound { id: Uuid },

    #[error("{metric} belongs to {expected}, not {actual}")]
    GroupMismatch {
        metric: FitnessMetricType,
        expected: FitnessGroup,
        actual: FitnessGroup,
    },

    #[error("{metric} value {value} is outside the accepted range {min}..={max}")]
    ValueOutOfRange {
        metric: FitnessMetricType,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_mismatch_formatting() {
        let error = AthleteError::GroupMismatch {
            metric: FitnessMetricType::MaxPushUps,
            expected: FitnessGroup::NeuromuscularStructural,
            actual: FitnessGroup::FunctionalDynamic,
        };

        let msg = error.to_string();
        assert!(msg.contains("MaxPushUps"));
        assert!(msg.contains("NeuromuscularStructural"));
        assert!(msg.contains("FunctionalDynamic"));
    }

    #[test]
    fn test_value_out_of_range_formatting() {
        let error = AthleteError::ValueOutOfRange {
            metric: FitnessMetricType::RestingHeartRate,
            value: 150.0,
            min: 30.0,
            max: 120.0,
        };

        let msg = error.to_string();
        assert!(msg.contains("150"));
        assert!(msg.contains("30..=120"));
    }
}
