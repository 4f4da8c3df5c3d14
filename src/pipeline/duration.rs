//! Duration computation and severity classification.

use chrono::NaiveDate;

use crate::models::{DATE_FORMAT, EmployeeGroup, PERIOD_DELIMITER, SeverityTier};

/// An [`EmployeeGroup`] with its duration and severity worked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedGroup {
    /// The aggregated group.
    pub group: EmployeeGroup,
    /// Whole weeks spanned by the group's range.
    pub duration_weeks: i64,
    /// Severity bucket for `duration_weeks`.
    pub tier: SeverityTier,
    /// The group's range rendered as `<start> - <end>`.
    pub time_period: String,
}

/// Returns the number of weeks a date range touches.
///
/// Computed as `floor(days / 7) + 1`, so a same-day range and a Monday to
/// Sunday range are both one week, and an eight-day range is two.
///
/// # Example
///
/// ```
/// use timesheet_report::pipeline::duration_weeks;
/// use chrono::NaiveDate;
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// assert_eq!(duration_weeks(jan(1), jan(1)), 1);
/// assert_eq!(duration_weeks(jan(1), jan(7)), 1);
/// assert_eq!(duration_weeks(jan(1), jan(8)), 2);
/// assert_eq!(duration_weeks(jan(1), jan(21)), 3);
/// ```
pub fn duration_weeks(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().div_euclid(7) + 1
}

/// Maps a duration in weeks to its severity tier.
///
/// More than three weeks is critical, exactly three high, exactly two
/// medium, anything else low.
pub fn classify_severity(duration_weeks: i64) -> SeverityTier {
    match duration_weeks {
        w if w > 3 => SeverityTier::Critical,
        3 => SeverityTier::High,
        2 => SeverityTier::Medium,
        _ => SeverityTier::Low,
    }
}

/// Renders a date range in the report's `Jan 01, 2024 - Jan 21, 2024` form.
pub fn format_time_period(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}{}{}",
        start.format(DATE_FORMAT),
        PERIOD_DELIMITER,
        end.format(DATE_FORMAT)
    )
}

/// Computes duration, tier and display period for a group.
pub fn classify(group: EmployeeGroup) -> ClassifiedGroup {
    let duration_weeks = duration_weeks(group.min_start_date, group.max_end_date);
    ClassifiedGroup {
        tier: classify_severity(duration_weeks),
        time_period: format_time_period(group.min_start_date, group.max_end_date),
        duration_weeks,
        group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeKey, EmployeeNumber};
    use crate::pipeline::split_period;
    use chrono::Duration;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn group(start: NaiveDate, end: NaiveDate) -> EmployeeGroup {
        EmployeeGroup::new(
            EmployeeKey {
                employee_number: EmployeeNumber::new("1"),
                employee_name: "Ada".to_string(),
                reporting_to: "Grace".to_string(),
            },
            start,
            end,
        )
    }

    #[test]
    fn test_single_week_is_low() {
        let classified = classify(group(date(2024, 1, 1), date(2024, 1, 7)));
        assert_eq!(classified.duration_weeks, 1);
        assert_eq!(classified.tier, SeverityTier::Low);
    }

    #[test]
    fn test_weeks_one_and_three_is_high() {
        let classified = classify(group(date(2024, 1, 1), date(2024, 1, 21)));
        assert_eq!(classified.duration_weeks, 3);
        assert_eq!(classified.tier, SeverityTier::High);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(classify_severity(1), SeverityTier::Low);
        assert_eq!(classify_severity(2), SeverityTier::Medium);
        assert_eq!(classify_severity(3), SeverityTier::High);
        assert_eq!(classify_severity(4), SeverityTier::Critical);
        assert_eq!(classify_severity(52), SeverityTier::Critical);
    }

    #[test]
    fn test_tier_below_one_is_low() {
        assert_eq!(classify_severity(0), SeverityTier::Low);
        assert_eq!(classify_severity(-3), SeverityTier::Low);
    }

    #[test]
    fn test_format_time_period_zero_pads_day() {
        assert_eq!(
            format_time_period(date(2024, 1, 5), date(2024, 2, 11)),
            "Jan 05, 2024 - Feb 11, 2024"
        );
    }

    #[test]
    fn test_duration_crosses_year_boundary() {
        assert_eq!(duration_weeks(date(2023, 12, 25), date(2024, 1, 7)), 2);
    }

    proptest! {
        #[test]
        fn prop_duration_is_at_least_one(offset in 0i64..20_000, span in 0i64..2_000) {
            let start = date(1990, 1, 1) + Duration::days(offset);
            let end = start + Duration::days(span);
            let weeks = duration_weeks(start, end);
            prop_assert!(weeks >= 1);
            prop_assert_eq!(weeks, span / 7 + 1);
        }

        #[test]
        fn prop_tier_matches_thresholds(weeks in -10i64..200) {
            let expected = if weeks > 3 {
                SeverityTier::Critical
            } else if weeks == 3 {
                SeverityTier::High
            } else if weeks == 2 {
                SeverityTier::Medium
            } else {
                SeverityTier::Low
            };
            prop_assert_eq!(classify_severity(weeks), expected);
        }

        #[test]
        fn prop_time_period_round_trips(offset in 0i64..40_000, span in 0i64..2_000) {
            let start = date(1970, 1, 1) + Duration::days(offset);
            let end = start + Duration::days(span);
            let rendered = format_time_period(start, end);
            let (parsed_start, parsed_end) = split_period(&rendered).unwrap();
            prop_assert_eq!(parsed_start, start);
            prop_assert_eq!(parsed_end, end);
        }
    }
}
