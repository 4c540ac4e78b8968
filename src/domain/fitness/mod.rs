//! Assessment protocol: enums, catalog, tier rules and the athlete aggregate.

pub mod athlete;
pub mod metric_catalog;
pub mod metric_record;
pub mod progress;
pub mod thresholds;
pub mod tier_evaluator;
pub mod types;

pub use athlete::{Athlete, AthleteProfile};
pub use metric_catalog::MetricInfo;
pub use metric_record::MetricRecord;
pub use progress::{calculate_improvement, quarter_label, quarter_of};
pub use tier_evaluator::{TierThresholds, evaluate_tier, tier_thresholds};
pub use types::{FitnessGroup, FitnessMetricType, PerformanceTier};
