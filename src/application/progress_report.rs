//! Per-metric progress summary for one athlete.

use crate::domain::fitness::{
    Athlete, FitnessMetricType, MetricRecord, PerformanceTier, calculate_improvement,
};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Latest result for one metric and how it compares to the one before
#[derive(Debug, Clone, PartialEq)]
pub struct MetricProgress {
    pub metric: FitnessMetricType,
    pub latest: MetricRecord,
    pub tier: PerformanceTier,
    pub previous_value: Option<f64>,
    /// Positive means better, regardless of the metric's direction
    pub improvement_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub athlete_id: Uuid,
    pub athlete_name: String,
    /// One entry per tracked metric, in catalog order
    pub entries: Vec<MetricProgress>,
}

impl ProgressReport {
    pub fn build(athlete: &Athlete) -> Self {
        let entries = FitnessMetricType::ALL
            .iter()
            .filter_map(|&metric| {
                let history = athlete.records_for_metric(metric);
                let (latest, earlier) = history.split_last()?;
                let previous_value = earlier.last().map(|r| r.value());

                Some(MetricProgress {
                    metric,
                    tier: athlete.evaluate(latest),
                    improvement_pct: previous_value
                        .map(|old| calculate_improvement(metric, old, latest.value())),
                    previous_value,
                    latest: (*latest).clone(),
                })
            })
            .collect();

        Self {
            athlete_id: athlete.id(),
            athlete_name: athlete.name().to_string(),
            entries,
        }
    }

    /// Number of tracked metrics currently in each tier
    pub fn tier_counts(&self) -> BTreeMap<PerformanceTier, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.tier).or_insert(0) += 1;
        }
        counts
    }
}
