//! Benchmark breakpoints of the assessment protocol.

/// Lower edge of each tier above BelowAverage, in raw metric units.
///
/// For lower-is-better metrics the fields are upper edges instead; see
/// `tier_evaluator` for the comparison each metric uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBreakpoints {
    pub average: f64,
    pub good: f64,
    pub peak: f64,
}

/// Estimated one-rep max as a multiple of bodyweight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthMultiples {
    pub average: f64,
    pub good: f64,
    pub peak: f64,
}

/// Converts a five-rep max into an estimated one-rep max
pub const FIVE_REP_MAX_TO_ONE_REP_MAX: f64 = 1.15;

/// Bodyweight assumed when the athlete's is unknown
pub const DEFAULT_BODYWEIGHT_LBS: f64 = 180.0;

// Group 1, lower is better: peak is strict (<), good/average inclusive (<=)
pub const RESTING_HEART_RATE: TierBreakpoints = TierBreakpoints {
    average: 75.0,
    good: 60.0,
    peak: 50.0,
};

// Lower is better, all edges inclusive (<=)
pub const WAIST_TO_HEIGHT_RATIO: TierBreakpoints = TierBreakpoints {
    average: 0.55,
    good: 0.50,
    peak: 0.45,
};

pub const TWELVE_MINUTE_RUN_MILES: TierBreakpoints = TierBreakpoints {
    average: 1.3,
    good: 1.5,
    peak: 1.85,
};

pub const HEART_RATE_RECOVERY: TierBreakpoints = TierBreakpoints {
    average: 20.0,
    good: 30.0,
    peak: 50.0,
};

// Group 2
pub const DEADLIFT_MULTIPLES: StrengthMultiples = StrengthMultiples {
    average: 1.5,
    good: 2.0,
    peak: 2.5,
};

pub const NEUTRAL_PRESS_MULTIPLES: StrengthMultiples = StrengthMultiples {
    average: 0.5,
    good: 0.75,
    peak: 1.0,
};

pub const PUSH_UPS_MALE: TierBreakpoints = TierBreakpoints {
    average: 20.0,
    good: 40.0,
    peak: 75.0,
};

pub const PUSH_UPS_FEMALE: TierBreakpoints = TierBreakpoints {
    average: 10.0,
    good: 25.0,
    peak: 50.0,
};

pub const DEAD_HANG_MALE: TierBreakpoints = TierBreakpoints {
    average: 30.0,
    good: 90.0,
    peak: 180.0,
};

pub const DEAD_HANG_FEMALE: TierBreakpoints = TierBreakpoints {
    average: 15.0,
    good: 45.0,
    peak: 120.0,
};

// Group 3. Average for the carry is "anything above zero".
pub const FARMER_CARRY_METERS: TierBreakpoints = TierBreakpoints {
    average: 0.0,
    good: 20.0,
    peak: 60.0,
};

pub const SITTING_RISING_POINTS: TierBreakpoints = TierBreakpoints {
    average: 6.0,
    good: 8.0,
    peak: 10.0,
};
