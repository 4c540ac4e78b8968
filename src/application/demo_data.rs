//! Sample athlete for demonstrations.
//!
//! Four quarters of all twelve metrics drawn from a fixed-seed generator,
//! so the same `today` always produces the same history.

use super::athlete_service::AthleteService;
use crate::domain::errors::AthleteError;
use crate::domain::fitness::{AthleteProfile, FitnessGroup, FitnessMetricType as M};
use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

const DEMO_SEED: u64 = 42;
const DEMO_NAME: &str = "Test Athlete";

/// Uniform integer offset in `low..high`
fn jitter(rng: &mut StdRng, low: i32, high: i32) -> f64 {
    f64::from(rng.random_range(low..high))
}

/// Adds "Test Athlete" with a year of quarterly results ending at `today`.
///
/// Results trend better toward the most recent quarter.
pub fn create_test_athlete(
    service: &mut AthleteService,
    today: NaiveDate,
) -> Result<Uuid, AthleteError> {
    let profile = AthleteProfile {
        date_of_birth: today.checked_sub_months(Months::new(28 * 12)),
        bodyweight_lbs: Some(185.0),
        height_inches: Some(70.0),
        is_male: Some(true),
    };
    let athlete_id = service.add_athlete(DEMO_NAME, profile)?.id();

    let mut rng = StdRng::seed_from_u64(DEMO_SEED);

    for offset in 0..4u32 {
        let recorded = today
            .checked_sub_months(Months::new(3 * offset))
            .unwrap_or(today);
        let q = f64::from(offset);

        let metabolic = [
            (M::RestingHeartRate, 60.0 + jitter(&mut rng, -5, 10) - q),
            (
                M::WaistToHeightRatio,
                0.45 + rng.random::<f64>() * 0.05 + q * 0.01,
            ),
            (M::TwelveMinuteRun, 1.6 + rng.random::<f64>() * 0.2 - q * 0.05),
            (
                M::HeartRateRecovery,
                45.0 + jitter(&mut rng, -5, 10) - q * 2.0,
            ),
        ];
        service.record_group_metrics(
            athlete_id,
            FitnessGroup::MetabolicMorphological,
            metabolic,
            recorded,
            None,
        )?;

        let neuromuscular = [
            (
                M::DeadliftFiveRepMax,
                315.0 + jitter(&mut rng, -20, 30) - q * 10.0,
            ),
            (
                M::NeutralPressRepMax,
                120.0 + jitter(&mut rng, -10, 15) - q * 5.0,
            ),
            (M::MaxPushUps, 35.0 + jitter(&mut rng, -5, 8) - q * 2.0),
            (
                M::DeadHangTime,
                75.0 + jitter(&mut rng, -10, 15) - q * 5.0,
            ),
        ];
        service.record_group_metrics(
            athlete_id,
            FitnessGroup::NeuromuscularStructural,
            neuromuscular,
            recorded,
            None,
        )?;

        let functional = [
            (
                M::ShoeAndSockBalance,
                if rng.random::<f64>() > 0.3 { 1.0 } else { 0.0 },
            ),
            (
                M::DeepSquatHold,
                if rng.random::<f64>() > 0.5 { 2.0 } else { 1.0 },
            ),
            (
                M::FarmerCarryDistance,
                80.0 + jitter(&mut rng, -10, 20) - q * 5.0,
            ),
            (M::SittingRisingTest, 8.0 + jitter(&mut rng, -1, 2)),
        ];
        service.record_group_metrics(
            athlete_id,
            FitnessGroup::FunctionalDynamic,
            functional,
            recorded,
            None,
        )?;
    }

    info!("Created demo athlete {} ({})", DEMO_NAME, athlete_id);
    Ok(athlete_id)
}
