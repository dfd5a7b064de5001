//! Report period selection helpers.
//!
//! The backend reports which year/month pairs hold data; the console
//! derives the pickable years, the months within a year, and the concrete
//! date bounds to query for a chosen month.

use chrono::NaiveDate;

use crate::models::ReportPeriod;

/// Distinct years with data, newest first.
pub fn available_years(periods: &[ReportPeriod]) -> Vec<i32> {
    let mut years: Vec<i32> = periods.iter().map(|p| p.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Months with data within `year`, newest first.
pub fn months_for_year(periods: &[ReportPeriod], year: i32) -> Vec<&ReportPeriod> {
    let mut months: Vec<&ReportPeriod> = periods.iter().filter(|p| p.year == year).collect();
    months.sort_by(|a, b| b.month.cmp(&a.month));
    months
}

/// Initial selection when the report page opens: the newest period.
pub fn default_period(periods: &[ReportPeriod]) -> Option<&ReportPeriod> {
    periods.first()
}

/// First and last day of the month as `YYYY-MM-DD` query bounds.
/// `None` for an invalid year/month pair.
pub fn period_range(year: i32, month: u32) -> Option<(String, String)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first
        .checked_add_months(chrono::Months::new(1))?
        .pred_opt()?;
    Some((
        first.format("%Y-%m-%d").to_string(),
        last.format("%Y-%m-%d").to_string(),
    ))
}
