//! Calendar - the fixed 52-week planning axis.
//!
//! Weeks are mapped onto months with a constant divisor of 4.33 weeks per month.
//! Thirteen four-week periods do not fit twelve months exactly, so some months get
//! five weeks. The arithmetic is kept as-is so week/month labels line up with plans
//! that were created against the same mapping.

use crate::entities::Week;

/// Number of weeks on the planning axis.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Average weeks per month used for the month mapping.
const WEEKS_PER_MONTH: f64 = 4.33;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats the week id for a 1-based week number, e.g. `3` -> `"W03"`.
#[must_use]
pub fn week_id(week_number: u32) -> String {
    format!("W{week_number:02}")
}

/// Returns the English month name a 1-based week number is reported under.
#[must_use]
pub fn month_for_week(week_number: u32) -> &'static str {
    // Cast safety: week numbers are small positive integers, the quotient is < 13.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month_index = (f64::from(week_number.saturating_sub(1)) / WEEKS_PER_MONTH).floor() as usize;
    MONTHS[month_index % MONTHS.len()]
}

/// Generates the ordered sequence of 52 planning weeks.
#[must_use]
pub fn generate_weeks() -> Vec<Week> {
    (1..=WEEKS_PER_YEAR)
        .map(|n| Week {
            id: week_id(n),
            month: month_for_week(n).to_string(),
        })
        .collect()
}

/// Groups week ids under their month, in calendar order.
///
/// This is the column grouping the planning grid renders: one header per month
/// with the weeks that fall under it.
#[must_use]
pub fn month_groups(weeks: &[Week]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for week in weeks {
        match groups.iter_mut().find(|(month, _)| *month == week.month) {
            Some((_, ids)) => ids.push(week.id.clone()),
            None => groups.push((week.month.clone(), vec![week.id.clone()])),
        }
    }
    groups
}
