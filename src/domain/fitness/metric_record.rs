use super::progress::{quarter_label, quarter_of};
use super::types::{FitnessGroup, FitnessMetricType};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single measurement taken during a quarterly assessment.
///
/// Identity is by `id`, never by content: two records with the same
/// values are still distinct. Quarter and year are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    id: Uuid,
    group: FitnessGroup,
    metric_type: FitnessMetricType,
    value: f64,
    recorded_date: NaiveDate,
    quarter: u32,
    year: i32,
    notes: Option<String>,
}

impl MetricRecord {
    pub fn new(
        group: FitnessGroup,
        metric_type: FitnessMetricType,
        value: f64,
        recorded_date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), group, metric_type, value, recorded_date, notes)
    }

    fn with_id(
        id: Uuid,
        group: FitnessGroup,
        metric_type: FitnessMetricType,
        value: f64,
        recorded_date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            group,
            metric_type,
            value,
            recorded_date,
            quarter: quarter_of(recorded_date),
            year: recorded_date.year(),
            notes,
        }
    }

    /// Replacement for this record with a new value and date.
    ///
    /// Keeps the id, group and metric type; quarter and year follow the new
    /// date. Notes fall back to the current ones when `notes` is `None`.
    pub fn revised(&self, value: f64, recorded_date: NaiveDate, notes: Option<String>) -> Self {
        Self::with_id(
            self.id,
            self.group,
            self.metric_type,
            value,
            recorded_date,
            notes.or_else(|| self.notes.clone()),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn group(&self) -> FitnessGroup {
        self.group
    }

    pub fn metric_type(&self) -> FitnessMetricType {
        self.metric_type
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn recorded_date(&self) -> NaiveDate {
        self.recorded_date
    }

    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// e.g. "Q1 2024"
    pub fn quarter_label(&self) -> String {
        quarter_label(self.quarter, self.year)
    }
}
