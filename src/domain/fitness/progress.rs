use super::types::FitnessMetricType;
use chrono::{Datelike, NaiveDate};

/// Calendar quarter (1-4) a date falls in
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Display label such as "Q2 2024"
pub fn quarter_label(quarter: u32, year: i32) -> String {
    format!("Q{} {}", quarter, year)
}

/// Percentage improvement from `old_value` to `new_value`.
///
/// Positive means better: the sign is flipped for lower-is-better metrics.
/// Returns 0 when `old_value` is 0, including for a genuine improvement from zero.
pub fn calculate_improvement(metric: FitnessMetricType, old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        return 0.0;
    }

    let percent_change = (new_value - old_value) / old_value * 100.0;
    if metric.is_lower_better() {
        -percent_change
    } else {
        percent_change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_depends_only_on_month() {
        for year in [1999, 2024, 2031] {
            for month in 1..=12 {
                let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let expected = match month {
                    1..=3 => 1,
                    4..=6 => 2,
                    7..=9 => 3,
                    _ => 4,
                };
                assert_eq!(quarter_of(date), expected, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_quarter_label() {
        assert_eq!(quarter_label(3, 2024), "Q3 2024");
    }

    #[test]
    fn test_improvement_from_zero_is_zero() {
        assert_eq!(calculate_improvement(FitnessMetricType::MaxPushUps, 0.0, 30.0), 0.0);
        assert_eq!(calculate_improvement(FitnessMetricType::RestingHeartRate, 0.0, 60.0), 0.0);
    }

    #[test]
    fn test_improvement_higher_is_better() {
        let improvement = calculate_improvement(FitnessMetricType::MaxPushUps, 20.0, 30.0);
        assert!((improvement - 50.0).abs() < 1e-9);

        let regression = calculate_improvement(FitnessMetricType::MaxPushUps, 40.0, 30.0);
        assert!((regression + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_improvement_lower_is_better_is_inverted() {
        let improvement = calculate_improvement(FitnessMetricType::RestingHeartRate, 70.0, 60.0);
        assert!(improvement > 0.0);
        assert!((improvement - 14.285714).abs() < 1e-4);

        let regression = calculate_improvement(FitnessMetricType::WaistToHeightRatio, 0.5, 0.55);
        assert!(regression < 0.0);
    }
}
