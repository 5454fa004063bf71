//! Slot Generator: subdivide a day's availability windows into 30-minute slots.
//!
//! Steps: resolve the weekday, select the provider's active windows for it
//! (or the default window), optionally merge overlaps, cut each window into
//! whole 30-minute slots, then drop slots that have already started if the
//! date is today.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, SlotError};
use crate::policy::{FallbackPolicy, OverlapPolicy, PastDatePolicy, SlotOptions};
use crate::table::AvailabilityTable;
use crate::window::{format_date, format_time, parse_date, serialize_hhmm, weekday_index};

/// Length of every generated slot.
pub const SLOT_MINUTES: u32 = 30;

const SLOT_SECONDS: u32 = SLOT_MINUTES * 60;

/// Start and end of the synthesized window used by [`FallbackPolicy::DefaultWindow`].
pub fn default_window() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::MIN + Duration::hours(9),
        NaiveTime::MIN + Duration::hours(17),
    )
}

/// A single bookable unit.
///
/// `is_available` is always `true` from the generator; callers flip it after
/// cross-referencing confirmed bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// `"{YYYY-MM-DD}-{HH:MM}"`, stable across calls.
    pub id: String,
    #[serde(rename = "specialist_id")]
    pub provider_id: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    pub end_time: NaiveTime,
    pub is_available: bool,
}

impl TimeSlot {
    fn new(provider_id: &str, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: slot_id(date, start_time),
            provider_id: provider_id.to_string(),
            date,
            start_time,
            end_time,
            is_available: true,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Start of the slot as a local datetime.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }
}

/// Deterministic slot identifier derived from date and start time.
pub fn slot_id(date: NaiveDate, start_time: NaiveTime) -> String {
    format!("{}-{}", format_date(date), format_time(start_time))
}

/// Generate the bookable slots for `provider_id` on `date`.
///
/// Windows are emitted in table order, each window's slots in ascending start
/// order. When `date == now.date()`, only slots starting strictly after `now`
/// are kept.
///
/// # Errors
/// Returns [`SlotError::PastDate`] only when `options.past_dates` is
/// [`PastDatePolicy::Reject`] and `date` is before today.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slot_engine::{generate_slots_for_date, AvailabilityTable, AvailabilityWindow, SlotOptions};
///
/// let table = AvailabilityTable::new(vec![
///     AvailabilityWindow::new("dr-1", 1, "10:00", "12:00").unwrap(),
/// ]);
/// let monday = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
/// let now = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let slots = generate_slots_for_date(&table, "dr-1", monday, now, &SlotOptions::default()).unwrap();
/// assert_eq!(slots.len(), 4);
/// assert_eq!(slots[0].id, "2026-11-02-10:00");
/// ```
pub fn generate_slots_for_date(
    table: &AvailabilityTable,
    provider_id: &str,
    date: NaiveDate,
    now: NaiveDateTime,
    options: &SlotOptions,
) -> Result<Vec<TimeSlot>> {
    let today = now.date();
    if date < today {
        match options.past_dates {
            PastDatePolicy::Retain => {}
            PastDatePolicy::Empty => {
                debug!(provider_id, %date, "past date; returning no slots");
                return Ok(Vec::new());
            }
            PastDatePolicy::Reject => return Err(SlotError::PastDate(date)),
        }
    }

    let day_of_week = weekday_index(date);
    let mut spans: Vec<(NaiveTime, NaiveTime)> = table
        .active_windows_on(provider_id, day_of_week)
        .into_iter()
        .map(|w| (w.start_time, w.end_time))
        .collect();

    if spans.is_empty() {
        match options.fallback {
            FallbackPolicy::DefaultWindow => {
                debug!(provider_id, %date, day_of_week, "no active window; using default 09:00-17:00");
                spans.push(default_window());
            }
            FallbackPolicy::None => {
                debug!(provider_id, %date, day_of_week, "no active window");
                return Ok(Vec::new());
            }
        }
    }

    if options.overlap == OverlapPolicy::Merge {
        let before = spans.len();
        spans = merge_spans(spans);
        trace!(before, after = spans.len(), "merged overlapping windows");
    }

    // Only today's slots can have elapsed.
    let cutoff = (date == today).then(|| now.time());

    let mut slots = Vec::new();
    for (start, end) in spans {
        for (slot_start, slot_end) in subdivide(start, end) {
            if cutoff.is_some_and(|c| slot_start <= c) {
                continue;
            }
            slots.push(TimeSlot::new(provider_id, date, slot_start, slot_end));
        }
    }

    debug!(provider_id, %date, count = slots.len(), "generated slots");
    Ok(slots)
}

/// [`generate_slots_for_date`] with the date given as `YYYY-MM-DD`.
///
/// # Errors
/// Returns [`SlotError::InvalidDate`] if `date` does not parse.
pub fn generate_slots_for_date_str(
    table: &AvailabilityTable,
    provider_id: &str,
    date: &str,
    now: NaiveDateTime,
    options: &SlotOptions,
) -> Result<Vec<TimeSlot>> {
    let date = parse_date(date)?;
    generate_slots_for_date(table, provider_id, date, now, options)
}

/// Whole 30-minute increments of `[start, end)`. A trailing partial increment
/// is dropped.
fn subdivide(start: NaiveTime, end: NaiveTime) -> impl Iterator<Item = (NaiveTime, NaiveTime)> {
    let end_secs = end.num_seconds_from_midnight();
    let mut cursor = start.num_seconds_from_midnight();
    std::iter::from_fn(move || {
        if cursor + SLOT_SECONDS > end_secs {
            return None;
        }
        let slot = (
            NaiveTime::from_num_seconds_from_midnight_opt(cursor, 0)?,
            NaiveTime::from_num_seconds_from_midnight_opt(cursor + SLOT_SECONDS, 0)?,
        );
        cursor += SLOT_SECONDS;
        Some(slot)
    })
}

/// Merge overlapping or adjacent spans. Returns them sorted and disjoint.
fn merge_spans(mut spans: Vec<(NaiveTime, NaiveTime)>) -> Vec<(NaiveTime, NaiveTime)> {
    spans.sort();

    let mut merged: Vec<(NaiveTime, NaiveTime)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}
