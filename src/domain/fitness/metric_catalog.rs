//! Static metadata for the benchmark protocol.
//!
//! One row per metric, in declaration order. Group membership, units and
//! direction are fixed by the protocol and are not athlete-configurable.

use super::types::{FitnessGroup, FitnessMetricType};
use crate::domain::errors::AthleteError;
use FitnessGroup::{FunctionalDynamic, MetabolicMorphological, NeuromuscularStructural};
use FitnessMetricType as M;

/// Catalog row for a single metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricInfo {
    pub metric: FitnessMetricType,
    pub display_name: &'static str,
    pub unit: &'static str,
    pub lower_is_better: bool,
    pub group: FitnessGroup,
    /// Accepted input range (inclusive) for entry surfaces
    pub min_value: f64,
    pub max_value: f64,
    /// Value is an ordinal score (0, 1 or 2) rather than a measurement
    pub ordinal: bool,
}

const fn row(
    metric: FitnessMetricType,
    display_name: &'static str,
    unit: &'static str,
    lower_is_better: bool,
    group: FitnessGroup,
    (min_value, max_value): (f64, f64),
    ordinal: bool,
) -> MetricInfo {
    MetricInfo {
        metric,
        display_name,
        unit,
        lower_is_better,
        group,
        min_value,
        max_value,
        ordinal,
    }
}

static METRIC_CATALOG: [MetricInfo; 12] = [
    row(
        M::RestingHeartRate,
        "Resting Heart Rate",
        "bpm",
        true,
        MetabolicMorphological,
        (30.0, 120.0),
        false,
    ),
    row(
        M::WaistToHeightRatio,
        "Waist:Height Ratio",
        "ratio",
        true,
        MetabolicMorphological,
        (0.3, 0.8),
        false,
    ),
    row(
        M::TwelveMinuteRun,
        "12-Minute Run",
        "miles",
        false,
        MetabolicMorphological,
        (0.5, 3.0),
        false,
    ),
    row(
        M::HeartRateRecovery,
        "HR Recovery (1 min)",
        "bpm drop",
        false,
        MetabolicMorphological,
        (0.0, 100.0),
        false,
    ),
    row(
        M::DeadliftFiveRepMax,
        "Deadlift 5RM",
        "lbs",
        false,
        NeuromuscularStructural,
        (0.0, 1000.0),
        false,
    ),
    row(
        M::NeutralPressRepMax,
        "Neutral Press 5RM",
        "lbs",
        false,
        NeuromuscularStructural,
        (0.0, 500.0),
        false,
    ),
    row(
        M::MaxPushUps,
        "Max Push-Ups",
        "reps",
        false,
        NeuromuscularStructural,
        (0.0, 200.0),
        false,
    ),
    row(
        M::DeadHangTime,
        "Dead Hang",
        "sec",
        false,
        NeuromuscularStructural,
        (0.0, 600.0),
        false,
    ),
    row(
        M::ShoeAndSockBalance,
        "Shoe & Sock Balance",
        "pass/fail",
        false,
        FunctionalDynamic,
        (0.0, 2.0),
        true,
    ),
    row(
        M::DeepSquatHold,
        "Deep Squat Hold",
        "quality",
        false,
        FunctionalDynamic,
        (0.0, 2.0),
        true,
    ),
    row(
        M::FarmerCarryDistance,
        "Farmer's Carry",
        "meters",
        false,
        FunctionalDynamic,
        (0.0, 200.0),
        false,
    ),
    row(
        M::SittingRisingTest,
        "Sitting-Rising Test",
        "points",
        false,
        FunctionalDynamic,
        (0.0, 10.0),
        false,
    ),
];

impl FitnessMetricType {
    /// Catalog row for this metric
    pub fn info(&self) -> &'static MetricInfo {
        &METRIC_CATALOG[*self as usize]
    }

    pub fn display_name(&self) -> &'static str {
        self.info().display_name
    }

    pub fn unit(&self) -> &'static str {
        self.info().unit
    }

    /// True for metrics where a smaller raw value indicates better fitness
    pub fn is_lower_better(&self) -> bool {
        self.info().lower_is_better
    }

    /// The group this metric is assessed under
    pub fn group(&self) -> FitnessGroup {
        self.info().group
    }

    /// Inclusive range accepted from input surfaces
    pub fn valid_range(&self) -> (f64, f64) {
        let info = self.info();
        (info.min_value, info.max_value)
    }

    /// Checks a raw value before it is recorded.
    ///
    /// The tier evaluator never calls this; entry surfaces do.
    pub fn validate_value(&self, value: f64) -> Result<(), AthleteError> {
        let info = self.info();
        let in_range = value.is_finite() && value >= info.min_value && value <= info.max_value;
        let well_formed = !info.ordinal || value.fract() == 0.0;

        if in_range && well_formed {
            Ok(())
        } else {
            Err(AthleteError::ValueOutOfRange {
                metric: *self,
                value,
                min: info.min_value,
                max: info.max_value,
            })
        }
    }

    pub fn all() -> Vec<FitnessMetricType> {
        METRIC_CATALOG.iter().map(|info| info.metric).collect()
    }
}

impl FitnessGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessGroup::MetabolicMorphological => "Group 1: Metabolic & Morphological",
            FitnessGroup::NeuromuscularStructural => "Group 2: Neuromuscular & Structural",
            FitnessGroup::FunctionalDynamic => "Group 3: Functional & Dynamic",
        }
    }

    /// Metrics assessed under this group, in catalog order
    pub fn metrics(&self) -> Vec<FitnessMetricType> {
        METRIC_CATALOG
            .iter()
            .filter(|info| info.group == *self)
            .map(|info| info.metric)
            .collect()
    }

    pub fn all() -> Vec<FitnessGroup> {
        FitnessGroup::ALL.to_vec()
    }
}
