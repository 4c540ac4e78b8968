//! Classifies a single measurement into a performance tier.
//!
//! Pure functions only. Missing athlete attributes are substituted here
//! (male table, 180 lbs) so stored records keep exactly what was known.

use super::thresholds::{self, StrengthMultiples, TierBreakpoints};
use super::types::{FitnessMetricType, PerformanceTier};

/// How a metric's raw value is turned into a tier
#[derive(Debug, Clone, Copy, PartialEq)]
enum Strategy {
    /// Fixed breakpoints compared against the raw value
    Absolute(Comparison, TierBreakpoints),
    /// Estimated 1RM divided by bodyweight
    RelativeStrength(StrengthMultiples),
    /// Fixed breakpoints chosen by sex, higher is better
    SexSpecific {
        male: TierBreakpoints,
        female: TierBreakpoints,
    },
    /// Value is itself a 0/1/2 score
    Ordinal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Comparison {
    /// value >= edge
    AtLeast,
    /// value > edge for Average, value >= edge above it
    AboveZeroFloor,
    /// value < peak, value <= good/average
    BelowStrictPeak,
    /// value <= edge
    AtMost,
}

fn strategy(metric: FitnessMetricType) -> Strategy {
    use FitnessMetricType as M;

    match metric {
        M::RestingHeartRate => {
            Strategy::Absolute(Comparison::BelowStrictPeak, thresholds::RESTING_HEART_RATE)
        }
        M::WaistToHeightRatio => {
            Strategy::Absolute(Comparison::AtMost, thresholds::WAIST_TO_HEIGHT_RATIO)
        }
        M::TwelveMinuteRun => {
            Strategy::Absolute(Comparison::AtLeast, thresholds::TWELVE_MINUTE_RUN_MILES)
        }
        M::HeartRateRecovery => {
            Strategy::Absolute(Comparison::AtLeast, thresholds::HEART_RATE_RECOVERY)
        }
        M::SittingRisingTest => {
            Strategy::Absolute(Comparison::AtLeast, thresholds::SITTING_RISING_POINTS)
        }
        M::FarmerCarryDistance => {
            Strategy::Absolute(Comparison::AboveZeroFloor, thresholds::FARMER_CARRY_METERS)
        }
        M::DeadliftFiveRepMax => Strategy::RelativeStrength(thresholds::DEADLIFT_MULTIPLES),
        M::NeutralPressRepMax => Strategy::RelativeStrength(thresholds::NEUTRAL_PRESS_MULTIPLES),
        M::MaxPushUps => Strategy::SexSpecific {
            male: thresholds::PUSH_UPS_MALE,
            female: thresholds::PUSH_UPS_FEMALE,
        },
        M::DeadHangTime => Strategy::SexSpecific {
            male: thresholds::DEAD_HANG_MALE,
            female: thresholds::DEAD_HANG_FEMALE,
        },
        M::ShoeAndSockBalance | M::DeepSquatHold => Strategy::Ordinal,
    }
}

/// Evaluates the performance tier for a recorded value.
///
/// # Arguments
/// * `bodyweight_lbs` - used by the relative-strength metrics, 180 when absent
/// * `is_male` - selects sex-specific tables, male when absent
pub fn evaluate_tier(
    metric: FitnessMetricType,
    value: f64,
    bodyweight_lbs: Option<f64>,
    is_male: Option<bool>,
) -> PerformanceTier {
    let male = is_male.unwrap_or(true);
    let bodyweight = bodyweight_lbs.unwrap_or(thresholds::DEFAULT_BODYWEIGHT_LBS);

    match strategy(metric) {
        Strategy::Absolute(comparison, breakpoints) => {
            classify_absolute(value, comparison, breakpoints)
        }
        Strategy::RelativeStrength(multiples) => {
            classify_relative_strength(value, bodyweight, multiples)
        }
        Strategy::SexSpecific { male: m, female: f } => {
            let table = if male { m } else { f };
            classify_absolute(value, Comparison::AtLeast, table)
        }
        Strategy::Ordinal => classify_ordinal(value),
    }
}

fn classify_absolute(value: f64, comparison: Comparison, b: TierBreakpoints) -> PerformanceTier {
    let (peak, good, average) = match comparison {
        Comparison::AtLeast => (value >= b.peak, value >= b.good, value >= b.average),
        Comparison::AboveZeroFloor => (value >= b.peak, value >= b.good, value > b.average),
        Comparison::BelowStrictPeak => (value < b.peak, value <= b.good, value <= b.average),
        Comparison::AtMost => (value <= b.peak, value <= b.good, value <= b.average),
    };

    if peak {
        PerformanceTier::Peak
    } else if good {
        PerformanceTier::Good
    } else if average {
        PerformanceTier::Average
    } else {
        PerformanceTier::BelowAverage
    }
}

/// Ratio of estimated one-rep max to bodyweight.
///
/// The estimate is the 5RM times a fixed 1.15, not a rep-count formula.
pub fn relative_strength_ratio(five_rep_max: f64, bodyweight_lbs: f64) -> f64 {
    five_rep_max * thresholds::FIVE_REP_MAX_TO_ONE_REP_MAX / bodyweight_lbs
}

fn classify_relative_strength(
    five_rep_max: f64,
    bodyweight_lbs: f64,
    multiples: StrengthMultiples,
) -> PerformanceTier {
    let ratio = relative_strength_ratio(five_rep_max, bodyweight_lbs);

    if ratio >= multiples.peak {
        PerformanceTier::Peak
    } else if ratio >= multiples.good {
        PerformanceTier::Good
    } else if ratio >= multiples.average {
        PerformanceTier::Average
    } else {
        PerformanceTier::BelowAverage
    }
}

// Zero is the floor of the scale and maps to Average; BelowAverage is unreachable.
fn classify_ordinal(score: f64) -> PerformanceTier {
    if score >= 2.0 {
        PerformanceTier::Peak
    } else if score >= 1.0 {
        PerformanceTier::Good
    } else {
        PerformanceTier::Average
    }
}

/// Human-readable tier descriptions for display surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    pub average: &'static str,
    pub good: &'static str,
    pub peak: &'static str,
}

const fn labels(average: &'static str, good: &'static str, peak: &'static str) -> TierThresholds {
    TierThresholds {
        average,
        good,
        peak,
    }
}

/// Describes the breakpoints used by [`evaluate_tier`]. Not used in any decision.
pub fn tier_thresholds(metric: FitnessMetricType, is_male: bool) -> TierThresholds {
    use FitnessMetricType as M;

    match metric {
        M::RestingHeartRate => labels("70-75 bpm", "50-60 bpm", "< 50 bpm"),
        M::WaistToHeightRatio => labels("> 0.55", "0.45-0.50", "0.40-0.45"),
        M::TwelveMinuteRun => labels("< 1.3 miles", "1.5-1.75 miles", "> 1.85 miles"),
        M::HeartRateRecovery => labels("< 20 bpm", "30-40 bpm", "> 50 bpm"),
        M::DeadliftFiveRepMax => labels("1.5x BW", "2.0x BW", "> 2.5x BW"),
        M::NeutralPressRepMax => labels("0.5x BW", "0.75x BW", "> 1.0x BW"),
        M::MaxPushUps if is_male => labels("20 reps", "40 reps", "75+ reps"),
        M::MaxPushUps => labels("10 reps", "25 reps", "50+ reps"),
        M::DeadHangTime if is_male => labels("30-60 sec", "90-120 sec", "> 180 sec"),
        M::DeadHangTime => labels("15-30 sec", "45-90 sec", "> 120 sec"),
        M::ShoeAndSockBalance => labels(
            "Cannot complete (0)",
            "Complete w/ struggle (1)",
            "Smooth/Fluid (2)",
        ),
        M::DeepSquatHold => labels("Heels up", "Heels down 2 min", "Resting position"),
        M::FarmerCarryDistance => labels("Cannot lift", "20-40 meters", "> 60 meters"),
        M::SittingRisingTest => labels("< 6 points", "8 points", "10 points"),
    }
}
