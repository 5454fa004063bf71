//! Recurring weekly availability windows and wall-clock parsing helpers.
//!
//! A window says "provider P accepts bookings every <weekday> between
//! <start> and <end>". Windows are plain configuration data: they are
//! validated once on construction (or deserialization) and never mutated by
//! the engine.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// A recurring weekly rule for one provider.
///
/// `day_of_week` uses 0 = Sunday .. 6 = Saturday. Serialized field names
/// follow the booking API's record shape (`specialist_id`, `start_time`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowRecord")]
pub struct AvailabilityWindow {
    /// Opaque record identifier, carried through for callers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "specialist_id")]
    pub provider_id: String,
    pub day_of_week: u8,
    #[serde(serialize_with = "serialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    pub end_time: NaiveTime,
    pub is_active: bool,
}

impl AvailabilityWindow {
    /// Build an active window from `HH:MM` strings.
    ///
    /// # Errors
    /// - [`SlotError::InvalidDayOfWeek`] if `day_of_week > 6`
    /// - [`SlotError::InvalidTime`] if either time does not parse
    /// - [`SlotError::InvalidWindow`] if `start >= end`
    pub fn new(
        provider_id: impl Into<String>,
        day_of_week: u8,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self> {
        Self::from_times(
            provider_id,
            day_of_week,
            parse_time(start_time)?,
            parse_time(end_time)?,
        )
    }

    /// Build an active window from already-parsed times.
    ///
    /// Times must fall on a whole minute, since every rendering of a window
    /// or slot is `HH:MM`.
    pub fn from_times(
        provider_id: impl Into<String>,
        day_of_week: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self> {
        if day_of_week > 6 {
            return Err(SlotError::InvalidDayOfWeek(day_of_week));
        }
        for t in [start_time, end_time] {
            if !is_whole_minute(t) {
                return Err(SlotError::InvalidTime(t.to_string()));
            }
        }
        if start_time >= end_time {
            return Err(SlotError::InvalidWindow {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id: None,
            provider_id: provider_id.into(),
            day_of_week,
            start_time,
            end_time,
            is_active: true,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark the window as disabled. Inactive windows are ignored everywhere.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Wire shape of a window record, validated into [`AvailabilityWindow`].
///
/// Unknown fields (`created_at`, `updated_at`, ...) are ignored.
#[derive(Deserialize)]
struct WindowRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "provider_id")]
    specialist_id: String,
    day_of_week: u8,
    start_time: String,
    end_time: String,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TryFrom<WindowRecord> for AvailabilityWindow {
    type Error = SlotError;

    fn try_from(record: WindowRecord) -> Result<Self> {
        let mut window = AvailabilityWindow::new(
            record.specialist_id,
            record.day_of_week,
            &record.start_time,
            &record.end_time,
        )?;
        window.id = record.id;
        window.is_active = record.is_active;
        Ok(window)
    }
}

// ── Wall-clock helpers ──────────────────────────────────────────────────────

/// Parse a 24h wall-clock time. Accepts `HH:MM`, and `HH:MM:SS` with zero
/// seconds (what SQL `time` columns round-trip as).
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
        .filter(|t| is_whole_minute(*t))
        .ok_or_else(|| SlotError::InvalidTime(s.to_string()))
}

fn is_whole_minute(t: NaiveTime) -> bool {
    t.second() == 0 && t.nanosecond() == 0
}

/// Format a time as `HH:MM`.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SlotError::InvalidDate(s.to_string()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a local ISO-8601 datetime without offset.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM` and the space-separated
/// variants.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| SlotError::InvalidDatetime(s.to_string()))
}

/// Day-of-week index with Sunday = 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub(crate) fn serialize_hhmm<S: Serializer>(
    t: &NaiveTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_time(*t))
}
