//! Athlete Roster Service
//!
//! Owns the canonical in-memory roster and writes it through a
//! `RosterRepository`.
//!
//! # Concurrency
//!
//! Only `save` and `load` touch storage, and the JSON store serializes them.
//! Roster mutations are plain `&mut self` methods and assume a single owner.

use crate::domain::errors::AthleteError;
use crate::domain::fitness::{
    Athlete, AthleteProfile, FitnessGroup, FitnessMetricType, MetricRecord,
};
use crate::domain::repositories::RosterRepository;
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct AthleteService {
    athletes: Vec<Athlete>,
    store: Arc<dyn RosterRepository>,
}

impl AthleteService {
    /// Creates a service with an empty roster. Call [`AthleteService::load`]
    /// to pull in what the store holds.
    pub fn new(store: Arc<dyn RosterRepository>) -> Self {
        Self {
            athletes: Vec::new(),
            store,
        }
    }

    /// All athletes in insertion order
    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    pub fn athlete(&self, id: Uuid) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.id() == id)
    }

    pub fn athlete_mut(&mut self, id: Uuid) -> Option<&mut Athlete> {
        self.athletes.iter_mut().find(|a| a.id() == id)
    }

    /// Adds an athlete and returns the stored aggregate.
    ///
    /// # Errors
    /// `NameMissing` for an empty name, `NameBlank` for whitespace only.
    pub fn add_athlete(
        &mut self,
        name: &str,
        profile: AthleteProfile,
    ) -> Result<&mut Athlete, AthleteError> {
        let athlete = Athlete::new(name, profile)?;
        debug!("Adding athlete {} ({})", athlete.name(), athlete.id());

        let index = self.athletes.len();
        self.athletes.push(athlete);
        Ok(&mut self.athletes[index])
    }

    /// Returns false when no athlete has this id
    pub fn remove_athlete(&mut self, id: Uuid) -> bool {
        let before = self.athletes.len();
        self.athletes.retain(|a| a.id() != id);
        let removed = self.athletes.len() != before;
        if removed {
            debug!("Removed athlete {}", id);
        }
        removed
    }

    /// Overwrites name and every profile field; omitted fields become `None`.
    ///
    /// Returns `Ok(false)` for an unknown id.
    pub fn update_athlete(
        &mut self,
        id: Uuid,
        name: &str,
        profile: AthleteProfile,
    ) -> Result<bool, AthleteError> {
        match self.athlete_mut(id) {
            Some(athlete) => {
                athlete.update(name, profile)?;
                debug!("Updated athlete {}", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn require_athlete(&mut self, id: Uuid) -> Result<&mut Athlete, AthleteError> {
        self.athlete_mut(id).ok_or(AthleteError::AthleteNotFound { id })
    }

    fn check_group(group: FitnessGroup, metric: FitnessMetricType) -> Result<(), AthleteError> {
        if metric.group() == group {
            Ok(())
        } else {
            Err(AthleteError::GroupMismatch {
                metric,
                expected: metric.group(),
                actual: group,
            })
        }
    }

    /// Appends a measurement to an athlete's history.
    ///
    /// Quarter and year come from `recorded_date`.
    ///
    /// # Errors
    /// `AthleteNotFound` if the athlete is unknown, `GroupMismatch` if
    /// `metric` is not part of `group`.
    pub fn record_metric(
        &mut self,
        athlete_id: Uuid,
        group: FitnessGroup,
        metric: FitnessMetricType,
        value: f64,
        recorded_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<MetricRecord, AthleteError> {
        Self::check_group(group, metric)?;
        let athlete = self.require_athlete(athlete_id)?;

        let record = MetricRecord::new(group, metric, value, recorded_date, notes);
        debug!(
            "Recording {} = {} for athlete {} ({})",
            metric,
            value,
            athlete_id,
            record.quarter_label()
        );
        athlete.add_record(record.clone())?;
        Ok(record)
    }

    /// Records several metrics of one group on the same date.
    ///
    /// Every entry is checked before anything is appended, so either all
    /// records are added or none are. Entries are appended in iteration order.
    pub fn record_group_metrics(
        &mut self,
        athlete_id: Uuid,
        group: FitnessGroup,
        metrics: impl IntoIterator<Item = (FitnessMetricType, f64)>,
        recorded_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<Vec<MetricRecord>, AthleteError> {
        let entries: Vec<(FitnessMetricType, f64)> = metrics.into_iter().collect();
        for (metric, _) in &entries {
            Self::check_group(group, *metric)?;
        }
        let athlete = self.require_athlete(athlete_id)?;

        let records: Vec<MetricRecord> = entries
            .into_iter()
            .map(|(metric, value)| {
                MetricRecord::new(group, metric, value, recorded_date, notes.clone())
            })
            .collect();
        for record in &records {
            athlete.add_record(record.clone())?;
        }

        debug!(
            "Recorded {} {} metrics for athlete {}",
            records.len(),
            group,
            athlete_id
        );
        Ok(records)
    }

    /// Replaces a record's value and date, keeping its id, group and metric.
    ///
    /// The replacement moves to the end of the athlete's collection.
    /// Notes fall back to the existing ones when `notes` is `None`.
    /// Returns `None` when the athlete or record is unknown.
    pub fn update_metric_record(
        &mut self,
        athlete_id: Uuid,
        record_id: Uuid,
        new_value: f64,
        new_date: NaiveDate,
        notes: Option<String>,
    ) -> Option<MetricRecord> {
        let athlete = self.athlete_mut(athlete_id)?;
        let existing = athlete.remove_record(record_id)?;

        let updated = existing.revised(new_value, new_date, notes);
        athlete.push_record(updated.clone());

        debug!("Updated record {} for athlete {}", record_id, athlete_id);
        Some(updated)
    }

    pub fn remove_metric_record(&mut self, athlete_id: Uuid, record_id: Uuid) -> bool {
        self.athlete_mut(athlete_id)
            .and_then(|athlete| athlete.remove_record(record_id))
            .is_some()
    }

    /// Records of one metric ascending by year then quarter; empty for an unknown athlete
    pub fn metric_history(
        &self,
        athlete_id: Uuid,
        metric: FitnessMetricType,
    ) -> Vec<&MetricRecord> {
        self.athlete(athlete_id)
            .map(|a| a.records_for_metric(metric))
            .unwrap_or_default()
    }

    /// Records of one group ascending by year then quarter; empty for an unknown athlete
    pub fn group_history(&self, athlete_id: Uuid, group: FitnessGroup) -> Vec<&MetricRecord> {
        self.athlete(athlete_id)
            .map(|a| a.records_for_group(group))
            .unwrap_or_default()
    }

    /// Writes the whole roster to the store
    pub async fn save(&self) -> Result<()> {
        self.store.save(&self.athletes).await
    }

    /// Replaces the in-memory roster with the stored one.
    ///
    /// An empty or unreadable store leaves an empty roster.
    pub async fn load(&mut self) -> Result<()> {
        self.athletes = self.store.load().await?;
        info!("Roster loaded: {} athletes", self.athletes.len());
        Ok(())
    }
}
