//! On-disk shape of the roster file.
//!
//! An array of athletes with lower camel case fields. Optional fields that
//! are absent in older files deserialize as `None`.

use crate::domain::fitness::{Athlete, AthleteProfile, MetricRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, ser::Error as _};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDto {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub bodyweight_lbs: Option<f64>,
    pub height_inches: Option<f64>,
    pub is_male: Option<bool>,
    #[serde(default)]
    pub metric_records: Vec<MetricRecord>,
}

impl From<&Athlete> for AthleteDto {
    fn from(athlete: &Athlete) -> Self {
        let profile = athlete.profile();
        Self {
            id: athlete.id(),
            name: athlete.name().to_string(),
            date_of_birth: profile.date_of_birth,
            bodyweight_lbs: profile.bodyweight_lbs,
            height_inches: profile.height_inches,
            is_male: profile.is_male,
            metric_records: athlete.records().to_vec(),
        }
    }
}

impl From<AthleteDto> for Athlete {
    fn from(dto: AthleteDto) -> Self {
        let profile = AthleteProfile {
            date_of_birth: dto.date_of_birth,
            bodyweight_lbs: dto.bodyweight_lbs,
            height_inches: dto.height_inches,
            is_male: dto.is_male,
        };
        Athlete::restore(dto.id, dto.name, profile, dto.metric_records)
    }
}

/// Parses a roster file. A literal `null` document is an empty roster.
pub fn decode_roster(content: &[u8]) -> serde_json::Result<Vec<Athlete>> {
    let dtos: Option<Vec<AthleteDto>> = serde_json::from_slice(content)?;
    Ok(dtos
        .unwrap_or_default()
        .into_iter()
        .map(Athlete::from)
        .collect())
}

/// Serializes the roster.
///
/// Fails on NaN or infinite numbers, which JSON would otherwise write as
/// `null` and make the file unreadable.
pub fn encode_roster(athletes: &[Athlete]) -> serde_json::Result<Vec<u8>> {
    for athlete in athletes {
        check_finite(athlete)?;
    }
    let dtos: Vec<AthleteDto> = athletes.iter().map(AthleteDto::from).collect();
    serde_json::to_vec_pretty(&dtos)
}

fn check_finite(athlete: &Athlete) -> serde_json::Result<()> {
    let profile = athlete.profile();
    let profile_numbers = [
        ("bodyweight", profile.bodyweight_lbs),
        ("height", profile.height_inches),
    ];
    for (field, value) in profile_numbers {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(serde_json::Error::custom(format!(
                "athlete {} has non-finite {}: {}",
                athlete.id(),
                field,
                v
            )));
        }
    }

    match athlete.records().iter().find(|r| !r.value().is_finite()) {
        Some(record) => Err(serde_json::Error::custom(format!(
            "record {} of athlete {} has non-finite value: {}",
            record.id(),
            athlete.id(),
            record.value()
        ))),
        None => Ok(()),
    }
}
