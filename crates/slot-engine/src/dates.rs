//! Availability Resolver: expand weekly windows into bookable dates of a month.
//!
//! A date is bookable when the provider has at least one active window on its
//! weekday and the date is not before today. There is no fallback here: a
//! provider without active windows has no bookable dates.

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::error::{Result, SlotError};
use crate::table::AvailabilityTable;
use crate::window::weekday_index;

/// Bookable dates for `provider_id` in `year`/`month` (1-based), ascending.
///
/// Dates strictly before `today` are dropped; `today` itself is kept. An
/// unknown provider, a provider with only inactive windows, or a month that
/// lies entirely in the past all yield an empty list.
///
/// # Errors
/// - [`SlotError::InvalidMonth`] if `month` is not in 1..=12
/// - [`SlotError::InvalidYear`] if `year` is not a 4-digit year
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slot_engine::{resolve_available_dates, AvailabilityTable, AvailabilityWindow};
///
/// let table = AvailabilityTable::new(vec![
///     AvailabilityWindow::new("dr-1", 1, "10:00", "12:00").unwrap(),
/// ]);
/// let today = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
/// let dates = resolve_available_dates(&table, "dr-1", 2026, 11, today).unwrap();
/// assert_eq!(dates.len(), 5); // Mondays: 2, 9, 16, 23, 30
/// ```
pub fn resolve_available_dates(
    table: &AvailabilityTable,
    provider_id: &str,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    let len = month_length(first)?;

    let weekdays = table.active_weekdays(provider_id);
    if weekdays.is_empty() {
        debug!(provider_id, "no active windows; no bookable dates");
        return Ok(Vec::new());
    }

    let dates: Vec<NaiveDate> = first
        .iter_days()
        .take(len as usize)
        .filter(|d| weekdays.contains(&weekday_index(*d)))
        .filter(|d| *d >= today)
        .collect();

    debug!(
        provider_id,
        year,
        month,
        count = dates.len(),
        "resolved bookable dates"
    );
    Ok(dates)
}

/// Number of days in `year`/`month`, following the Gregorian leap-year rule.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    month_length(first_of_month(year, month)?)
}

fn month_length(first: NaiveDate) -> Result<u32> {
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(SlotError::InvalidYear(first.year()))?;
    Ok((next - first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(SlotError::InvalidMonth(month));
    }
    if !(1000..=9999).contains(&year) {
        return Err(SlotError::InvalidYear(year));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(SlotError::InvalidMonth(month))
}
