use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physiological domain a metric belongs to.
///
/// Persisted as its protocol number (1-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FitnessGroup {
    /// Group 1: the engine and the vessel
    MetabolicMorphological,
    /// Group 2: mechanical output and force production
    NeuromuscularStructural,
    /// Group 3: mobility and balance
    FunctionalDynamic,
}

impl FitnessGroup {
    pub const ALL: [FitnessGroup; 3] = [
        FitnessGroup::MetabolicMorphological,
        FitnessGroup::NeuromuscularStructural,
        FitnessGroup::FunctionalDynamic,
    ];

    /// Protocol number used on disk and in display names
    pub fn number(&self) -> u8 {
        match self {
            FitnessGroup::MetabolicMorphological => 1,
            FitnessGroup::NeuromuscularStructural => 2,
            FitnessGroup::FunctionalDynamic => 3,
        }
    }
}

impl From<FitnessGroup> for u8 {
    fn from(group: FitnessGroup) -> Self {
        group.number()
    }
}

impl TryFrom<u8> for FitnessGroup {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FitnessGroup::MetabolicMorphological),
            2 => Ok(FitnessGroup::NeuromuscularStructural),
            3 => Ok(FitnessGroup::FunctionalDynamic),
            other => Err(format!("unknown fitness group: {}", other)),
        }
    }
}

impl fmt::Display for FitnessGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Ordered performance classification for a single measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PerformanceTier {
    /// Below average or pathological range
    BelowAverage,
    Average,
    /// The longevity/health target
    Good,
    Peak,
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceTier::BelowAverage => write!(f, "Below Average"),
            PerformanceTier::Average => write!(f, "Average"),
            PerformanceTier::Good => write!(f, "Good"),
            PerformanceTier::Peak => write!(f, "Peak"),
        }
    }
}

/// The twelve benchmark metrics of the assessment protocol.
///
/// Declaration order is significant: it is the catalog order and the
/// integer written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FitnessMetricType {
    // Group 1
    /// Resting heart rate (bpm) after 5 minutes of quiet sitting
    RestingHeartRate,
    /// Waist circumference divided by height
    WaistToHeightRatio,
    /// Cooper test distance (miles)
    TwelveMinuteRun,
    /// Heart-rate drop one minute after max effort (bpm)
    HeartRateRecovery,

    // Group 2
    DeadliftFiveRepMax,
    /// Combined dumbbell weight (lbs)
    NeutralPressRepMax,
    MaxPushUps,
    DeadHangTime,

    // Group 3
    /// 0 = cannot complete, 1 = completes with struggle, 2 = smooth
    ShoeAndSockBalance,
    /// 0 = heels up, 1 = heels down for 2 min, 2 = resting position
    DeepSquatHold,
    /// Distance carried at bodyweight (meters)
    FarmerCarryDistance,
    /// Sitting-rising test score (0-10 points)
    SittingRisingTest,
}

impl FitnessMetricType {
    pub const ALL: [FitnessMetricType; 12] = [
        FitnessMetricType::RestingHeartRate,
        FitnessMetricType::WaistToHeightRatio,
        FitnessMetricType::TwelveMinuteRun,
        FitnessMetricType::HeartRateRecovery,
        FitnessMetricType::DeadliftFiveRepMax,
        FitnessMetricType::NeutralPressRepMax,
        FitnessMetricType::MaxPushUps,
        FitnessMetricType::DeadHangTime,
        FitnessMetricType::ShoeAndSockBalance,
        FitnessMetricType::DeepSquatHold,
        FitnessMetricType::FarmerCarryDistance,
        FitnessMetricType::SittingRisingTest,
    ];

    /// Identifier accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            FitnessMetricType::RestingHeartRate => "resting-heart-rate",
            FitnessMetricType::WaistToHeightRatio => "waist-to-height",
            FitnessMetricType::TwelveMinuteRun => "twelve-minute-run",
            FitnessMetricType::HeartRateRecovery => "heart-rate-recovery",
            FitnessMetricType::DeadliftFiveRepMax => "deadlift-5rm",
            FitnessMetricType::NeutralPressRepMax => "neutral-press-5rm",
            FitnessMetricType::MaxPushUps => "push-ups",
            FitnessMetricType::DeadHangTime => "dead-hang",
            FitnessMetricType::ShoeAndSockBalance => "shoe-and-sock",
            FitnessMetricType::DeepSquatHold => "deep-squat",
            FitnessMetricType::FarmerCarryDistance => "farmer-carry",
            FitnessMetricType::SittingRisingTest => "sitting-rising",
        }
    }
}

impl From<FitnessMetricType> for u8 {
    fn from(metric: FitnessMetricType) -> Self {
        metric as u8
    }
}

impl TryFrom<u8> for FitnessMetricType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FitnessMetricType::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("unknown metric type: {}", value))
    }
}

impl fmt::Display for FitnessMetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for FitnessMetricType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FitnessMetricType::ALL
            .iter()
            .copied()
            .find(|m| m.slug() == wanted || format!("{:?}", m).to_lowercase() == wanted)
            .ok_or_else(|| {
                anyhow!(
                    "Invalid metric: {}. Must be one of: {}",
                    s,
                    FitnessMetricType::ALL
                        .iter()
                        .map(|m| m.slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
