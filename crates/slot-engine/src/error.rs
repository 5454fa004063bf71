//! Error types for slot-engine operations.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid year: {0} (expected a 4-digit year)")]
    InvalidYear(i32),

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid datetime: '{0}' (expected YYYY-MM-DDTHH:MM[:SS])")]
    InvalidDatetime(String),

    #[error("Invalid time: '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid day of week: {0} (expected 0-6, Sunday = 0)")]
    InvalidDayOfWeek(u8),

    #[error("Invalid window: start {start} is not before end {end}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },

    #[error("Date {0} is in the past")]
    PastDate(NaiveDate),

    #[error("Invalid availability table: {0}")]
    Table(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
