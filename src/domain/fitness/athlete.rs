use super::metric_record::MetricRecord;
use super::tier_evaluator::evaluate_tier;
use super::types::{FitnessGroup, FitnessMetricType, PerformanceTier};
use crate::domain::errors::AthleteError;
use chrono::NaiveDate;
use uuid::Uuid;

/// Optional attributes of an athlete.
///
/// Stored exactly as known; defaults for tier lookups are applied by the
/// evaluator, never written back here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteProfile {
    pub date_of_birth: Option<NaiveDate>,
    pub bodyweight_lbs: Option<f64>,
    pub height_inches: Option<f64>,
    /// Selects sex-specific thresholds (true = male)
    pub is_male: Option<bool>,
}

/// An athlete and their assessment history.
///
/// The record collection keeps append order and can only be changed
/// through this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Athlete {
    id: Uuid,
    name: String,
    profile: AthleteProfile,
    metric_records: Vec<MetricRecord>,
}

/// Trims a name, distinguishing an empty name from a whitespace-only one
pub fn validate_name(name: &str) -> Result<String, AthleteError> {
    if name.is_empty() {
        return Err(AthleteError::NameMissing);
    }

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AthleteError::NameBlank);
    }

    Ok(trimmed.to_string())
}

impl Athlete {
    pub fn new(name: &str, profile: AthleteProfile) -> Result<Self, AthleteError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: validate_name(name)?,
            profile,
            metric_records: Vec::new(),
        })
    }

    /// Rebuilds a stored athlete with its original identity and records
    pub fn restore(
        id: Uuid,
        name: String,
        profile: AthleteProfile,
        records: Vec<MetricRecord>,
    ) -> Self {
        let mut athlete = Self {
            id,
            name,
            profile,
            metric_records: Vec::new(),
        };
        athlete.replace_records(records);
        athlete
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &AthleteProfile {
        &self.profile
    }

    /// Overwrites the name and every profile field (full replace, not a merge)
    pub fn update(&mut self, name: &str, profile: AthleteProfile) -> Result<(), AthleteError> {
        self.name = validate_name(name)?;
        self.profile = profile;
        Ok(())
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.metric_records
    }

    pub fn find_record(&self, record_id: Uuid) -> Option<&MetricRecord> {
        self.metric_records.iter().find(|r| r.id() == record_id)
    }

    /// Appends a record.
    ///
    /// # Errors
    /// `GroupMismatch` if the record's group is not its metric's group.
    pub fn add_record(&mut self, record: MetricRecord) -> Result<(), AthleteError> {
        let expected = record.metric_type().group();
        if record.group() != expected {
            return Err(AthleteError::GroupMismatch {
                metric: record.metric_type(),
                expected,
                actual: record.group(),
            });
        }
        self.push_record(record);
        Ok(())
    }

    /// Appends without the group check, for revisions of records this
    /// athlete already holds
    pub(crate) fn push_record(&mut self, record: MetricRecord) {
        self.metric_records.push(record);
    }

    pub(crate) fn remove_record(&mut self, record_id: Uuid) -> Option<MetricRecord> {
        let index = self
            .metric_records
            .iter()
            .position(|r| r.id() == record_id)?;
        Some(self.metric_records.remove(index))
    }

    /// Replaces the whole collection, used when rehydrating from storage
    fn replace_records(&mut self, records: Vec<MetricRecord>) {
        self.metric_records = records;
    }

    /// Records for one metric, ascending by year then quarter
    pub fn records_for_metric(&self, metric: FitnessMetricType) -> Vec<&MetricRecord> {
        self.sorted_by_period(|r| r.metric_type() == metric)
    }

    /// Records for one group, ascending by year then quarter
    pub fn records_for_group(&self, group: FitnessGroup) -> Vec<&MetricRecord> {
        self.sorted_by_period(|r| r.group() == group)
    }

    pub fn records_for_quarter(&self, quarter: u32, year: i32) -> Vec<&MetricRecord> {
        self.metric_records
            .iter()
            .filter(|r| r.quarter() == quarter && r.year() == year)
            .collect()
    }

    /// Distinct metrics with at least one record, in first-recorded order
    pub fn tracked_metric_types(&self) -> Vec<FitnessMetricType> {
        let mut tracked = Vec::new();
        for record in &self.metric_records {
            if !tracked.contains(&record.metric_type()) {
                tracked.push(record.metric_type());
            }
        }
        tracked
    }

    /// Tier of a record under this athlete's bodyweight and sex
    pub fn evaluate(&self, record: &MetricRecord) -> PerformanceTier {
        evaluate_tier(
            record.metric_type(),
            record.value(),
            self.profile.bodyweight_lbs,
            self.profile.is_male,
        )
    }

    fn sorted_by_period(&self, keep: impl Fn(&MetricRecord) -> bool) -> Vec<&MetricRecord> {
        let mut records: Vec<&MetricRecord> =
            self.metric_records.iter().filter(|r| keep(r)).collect();
        // Stable: same-quarter records keep append order
        records.sort_by_key(|r| (r.year(), r.quarter()));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(metric: FitnessMetricType, value: f64, on: NaiveDate) -> MetricRecord {
        MetricRecord::new(metric.group(), metric, value, on, None)
    }

    #[test]
    fn test_new_trims_name() {
        let athlete = Athlete::new("  Jane Doe ", AthleteProfile::default()).unwrap();
        assert_eq!(athlete.name(), "Jane Doe");
        assert!(athlete.records().is_empty());
    }

    #[test]
    fn test_name_validation_distinguishes_missing_from_blank() {
        assert_eq!(validate_name(""), Err(AthleteError::NameMissing));
        assert_eq!(validate_name("   "), Err(AthleteError::NameBlank));
        assert_eq!(validate_name("\t\n"), Err(AthleteError::NameBlank));
    }

    #[test]
    fn test_records_for_metric_sorted_by_period() {
        let mut athlete = Athlete::new("Sorter", AthleteProfile::default()).unwrap();
        athlete.add_record(record(FitnessMetricType::MaxPushUps, 30.0, date(2024, 10, 1))).unwrap();
        athlete.add_record(record(FitnessMetricType::MaxPushUps, 20.0, date(2023, 5, 1))).unwrap();
        athlete
            .add_record(record(FitnessMetricType::DeadHangTime, 60.0, date(2022, 1, 1)))
            .unwrap();
        athlete.add_record(record(FitnessMetricType::MaxPushUps, 25.0, date(2024, 1, 1))).unwrap();

        let values: Vec<f64> = athlete
            .records_for_metric(FitnessMetricType::MaxPushUps)
            .iter()
            .map(|r| r.value())
            .collect();
        assert_eq!(values, vec![20.0, 25.0, 30.0]);

        // Append order is untouched by the sorted view
        assert_eq!(athlete.records()[0].value(), 30.0);

        let group = athlete.records_for_group(FitnessGroup::NeuromuscularStructural);
        assert_eq!(group.len(), 4);
        assert_eq!(group[0].metric_type(), FitnessMetricType::DeadHangTime);
    }

    #[test]
    fn test_remove_record() {
        let mut athlete = Athlete::new("Remover", AthleteProfile::default()).unwrap();
        let kept = record(FitnessMetricType::DeepSquatHold, 1.0, date(2024, 3, 3));
        let dropped = record(FitnessMetricType::DeepSquatHold, 1.0, date(2024, 3, 3));
        let dropped_id = dropped.id();
        athlete.add_record(kept.clone()).unwrap();
        athlete.add_record(dropped).unwrap();

        assert!(athlete.remove_record(dropped_id).is_some());
        assert!(athlete.remove_record(dropped_id).is_none());
        assert_eq!(athlete.records(), &[kept]);
    }

    #[test]
    fn test_quarter_filter_and_tracked_types() {
        let mut athlete = Athlete::new("Tracker", AthleteProfile::default()).unwrap();
        athlete
            .add_record(record(FitnessMetricType::SittingRisingTest, 8.0, date(2024, 2, 1)))
            .unwrap();
        athlete
            .add_record(record(FitnessMetricType::RestingHeartRate, 58.0, date(2024, 3, 1)))
            .unwrap();
        athlete
            .add_record(record(FitnessMetricType::SittingRisingTest, 9.0, date(2024, 6, 1)))
            .unwrap();

        assert_eq!(athlete.records_for_quarter(1, 2024).len(), 2);
        assert_eq!(athlete.records_for_quarter(2, 2024).len(), 1);
        assert!(athlete.records_for_quarter(1, 2023).is_empty());

        assert_eq!(
            athlete.tracked_metric_types(),
            vec![
                FitnessMetricType::SittingRisingTest,
                FitnessMetricType::RestingHeartRate
            ]
        );
    }

    #[test]
    fn test_evaluate_uses_profile() {
        let profile = AthleteProfile {
            is_male: Some(false),
            ..AthleteProfile::default()
        };
        let athlete = Athlete::new("Hanger", profile).unwrap();
        let hang = record(FitnessMetricType::DeadHangTime, 50.0, date(2024, 1, 1));

        assert_eq!(athlete.evaluate(&hang), PerformanceTier::Good);
    }

    #[test]
    fn test_add_record_rejects_foreign_group() {
        let mut athlete = Athlete::new("Strict", AthleteProfile::default()).unwrap();
        let misfiled = MetricRecord::new(
            FitnessGroup::FunctionalDynamic,
            FitnessMetricType::MaxPushUps,
            30.0,
            date(2024, 1, 15),
            None,
        );

        assert_eq!(
            athlete.add_record(misfiled),
            Err(AthleteError::GroupMismatch {
                metric: FitnessMetricType::MaxPushUps,
                expected: FitnessGroup::NeuromuscularStructural,
                actual: FitnessGroup::FunctionalDynamic,
            })
        );
        assert!(athlete.records().is_empty());
    }
}
