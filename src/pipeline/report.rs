//! Final report assembly.

use crate::models::SummaryRow;

use super::duration::ClassifiedGroup;
use super::status_filter::NOT_SUBMITTED;

/// Builds the ordered report rows from classified groups.
///
/// Rows are sorted by duration, longest first. The sort is stable, so
/// groups with equal durations keep the order they were given in.
pub fn assemble_report(classified: Vec<ClassifiedGroup>) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = classified
        .into_iter()
        .map(|c| SummaryRow {
            employee_number: c.group.key.employee_number,
            employee_name: c.group.key.employee_name,
            reporting_to: c.group.key.reporting_to,
            time_period: c.time_period,
            status: NOT_SUBMITTED.to_string(),
            duration_weeks: c.duration_weeks,
            tier: c.tier,
        })
        .collect();

    rows.sort_by(|a, b| b.duration_weeks.cmp(&a.duration_weeks));
    rows
}
