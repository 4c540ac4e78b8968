use chrono::NaiveDate;
use fitness_tracker::application::{AthleteService, ProgressReport};
use fitness_tracker::domain::fitness::{
    AthleteProfile, FitnessGroup, FitnessMetricType, PerformanceTier, calculate_improvement,
    evaluate_tier,
};
use fitness_tracker::infrastructure::{InMemoryRosterRepository, JsonRosterRepository};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_roster_file() -> PathBuf {
    let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let temp_dir = std::env::temp_dir().join(format!(
        "fitness_tracker_e2e_{}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
        unique_id
    ));
    std::fs::create_dir_all(&temp_dir).expect("Failed to create test temp dir");
    temp_dir.join("athletes.json")
}

fn cleanup(path: &Path) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

fn service_for(path: &Path) -> AthleteService {
    AthleteService::new(Arc::new(JsonRosterRepository::new(path)))
}

fn scratch_service() -> AthleteService {
    AthleteService::new(Arc::new(InMemoryRosterRepository::new()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile(bodyweight: f64, height: f64, is_male: bool) -> AthleteProfile {
    AthleteProfile {
        date_of_birth: None,
        bodyweight_lbs: Some(bodyweight),
        height_inches: Some(height),
        is_male: Some(is_male),
    }
}

#[tokio::test]
async fn test_full_assessment_year_survives_reload() {
    use FitnessMetricType::*;

    let path = temp_roster_file();
    let mut service = service_for(&path);
    let id = service
        .add_athlete("John Smith", profile(180.0, 70.0, true))
        .unwrap()
        .id();

    service
        .record_group_metrics(
            id,
            FitnessGroup::MetabolicMorphological,
            [
                (RestingHeartRate, 68.0),
                (WaistToHeightRatio, 0.52),
                (TwelveMinuteRun, 1.4),
                (HeartRateRecovery, 25.0),
            ],
            date(2024, 1, 15),
            None,
        )
        .unwrap();
    service
        .record_group_metrics(
            id,
            FitnessGroup::NeuromuscularStructural,
            [
                (DeadliftFiveRepMax, 225.0),
                (NeutralPressRepMax, 80.0),
                (MaxPushUps, 25.0),
                (DeadHangTime, 45.0),
            ],
            date(2024, 1, 16),
            None,
        )
        .unwrap();
    service
        .record_group_metrics(
            id,
            FitnessGroup::FunctionalDynamic,
            [
                (ShoeAndSockBalance, 0.0),
                (DeepSquatHold, 0.0),
                (FarmerCarryDistance, 15.0),
                (SittingRisingTest, 6.0),
            ],
            date(2024, 1, 17),
            None,
        )
        .unwrap();
    assert_eq!(service.athlete(id).unwrap().records().len(), 12);

    service
        .record_group_metrics(
            id,
            FitnessGroup::MetabolicMorphological,
            [
                (RestingHeartRate, 58.0),
                (WaistToHeightRatio, 0.48),
                (TwelveMinuteRun, 1.65),
                (HeartRateRecovery, 38.0),
            ],
            date(2024, 4, 15),
            None,
        )
        .unwrap();
    assert_eq!(service.athlete(id).unwrap().records().len(), 16);

    assert_eq!(
        evaluate_tier(RestingHeartRate, 68.0, None, None),
        PerformanceTier::Average
    );
    assert_eq!(
        evaluate_tier(RestingHeartRate, 58.0, None, None),
        PerformanceTier::Good
    );

    service.save().await.unwrap();

    let mut reloaded = service_for(&path);
    reloaded.load().await.unwrap();
    let athlete = reloaded.athlete(id).expect("athlete should survive reload");
    assert_eq!(athlete.records().len(), 16);
    assert_eq!(athlete.name(), "John Smith");

    let report = ProgressReport::build(athlete);
    assert_eq!(report.entries.len(), 12);
    let rhr = report
        .entries
        .iter()
        .find(|e| e.metric == RestingHeartRate)
        .unwrap();
    assert_eq!(rhr.latest.quarter_label(), "Q2 2024");
    assert_eq!(rhr.previous_value, Some(68.0));
    assert!(rhr.improvement_pct.unwrap() > 0.0);
    cleanup(&path);
}

#[tokio::test]
async fn test_athletes_of_both_sexes_use_their_own_tables() {
    let path = temp_roster_file();
    let mut service = service_for(&path);
    let day = date(2024, 1, 15);

    let one = service
        .add_athlete("Athlete One", profile(180.0, 70.0, true))
        .unwrap()
        .id();
    let two = service
        .add_athlete("Athlete Two", profile(160.0, 65.0, false))
        .unwrap()
        .id();

    let first = service
        .record_metric(
            one,
            FitnessGroup::NeuromuscularStructural,
            FitnessMetricType::MaxPushUps,
            45.0,
            day,
            None,
        )
        .unwrap();
    let second = service
        .record_metric(
            two,
            FitnessGroup::NeuromuscularStructural,
            FitnessMetricType::MaxPushUps,
            30.0,
            day,
            None,
        )
        .unwrap();

    assert_eq!(
        service.athlete(one).unwrap().evaluate(&first),
        PerformanceTier::Good
    );
    assert_eq!(
        service.athlete(two).unwrap().evaluate(&second),
        PerformanceTier::Good
    );

    service.save().await.unwrap();
    let mut reloaded = service_for(&path);
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.athletes().len(), 2);
    cleanup(&path);
}

#[test]
fn test_quarterly_history_shows_improvement() {
    let mut service = scratch_service();
    let id = service
        .add_athlete("Progress Tracker", profile(175.0, 69.0, true))
        .unwrap()
        .id();

    // Entered out of order on purpose
    for (day, value) in [
        (date(2024, 8, 15), 58.0),
        (date(2024, 2, 15), 72.0),
        (date(2024, 11, 15), 52.0),
        (date(2024, 5, 15), 65.0),
    ] {
        service
            .record_metric(
                id,
                FitnessGroup::MetabolicMorphological,
                FitnessMetricType::RestingHeartRate,
                value,
                day,
                None,
            )
            .unwrap();
    }

    let history = service.metric_history(id, FitnessMetricType::RestingHeartRate);
    let values: Vec<f64> = history.iter().map(|r| r.value()).collect();
    assert_eq!(values, vec![72.0, 65.0, 58.0, 52.0]);

    let improvement = calculate_improvement(
        FitnessMetricType::RestingHeartRate,
        history[0].value(),
        history[3].value(),
    );
    assert!(improvement > 0.0);
}

#[test]
fn test_bodyweight_change_moves_deadlift_tier() {
    let mut service = scratch_service();
    let id = service
        .add_athlete("Weight Changer", profile(200.0, 70.0, true))
        .unwrap()
        .id();
    let record = service
        .record_metric(
            id,
            FitnessGroup::NeuromuscularStructural,
            FitnessMetricType::DeadliftFiveRepMax,
            275.0,
            date(2024, 1, 15),
            None,
        )
        .unwrap();

    assert_eq!(
        service.athlete(id).unwrap().evaluate(&record),
        PerformanceTier::Average
    );

    assert!(
        service
            .update_athlete(id, "Weight Changer", profile(150.0, 70.0, true))
            .unwrap()
    );
    assert_eq!(
        service.athlete(id).unwrap().evaluate(&record),
        PerformanceTier::Good
    );
}

#[test]
fn test_qualitative_scores_map_to_tiers() {
    for metric in [
        FitnessMetricType::ShoeAndSockBalance,
        FitnessMetricType::DeepSquatHold,
    ] {
        assert_eq!(
            evaluate_tier(metric, 0.0, None, None),
            PerformanceTier::Average
        );
        assert_eq!(evaluate_tier(metric, 1.0, None, None), PerformanceTier::Good);
        assert_eq!(evaluate_tier(metric, 2.0, None, None), PerformanceTier::Peak);
    }
}

#[test]
fn test_sex_changes_dead_hang_tier() {
    assert_eq!(
        evaluate_tier(FitnessMetricType::DeadHangTime, 50.0, Some(160.0), Some(true)),
        PerformanceTier::Average
    );
    assert_eq!(
        evaluate_tier(FitnessMetricType::DeadHangTime, 50.0, Some(160.0), Some(false)),
        PerformanceTier::Good
    );
}

#[test]
fn test_relative_strength_uses_bodyweight() {
    let deadlift = FitnessMetricType::DeadliftFiveRepMax;
    assert_eq!(
        evaluate_tier(deadlift, 315.0, Some(180.0), Some(true)),
        PerformanceTier::Good
    );
    assert_eq!(
        evaluate_tier(deadlift, 315.0, Some(150.0), Some(true)),
        PerformanceTier::Good
    );
    assert_eq!(
        evaluate_tier(deadlift, 350.0, Some(150.0), Some(true)),
        PerformanceTier::Peak
    );
}
