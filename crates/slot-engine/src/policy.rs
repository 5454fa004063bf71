//! Scheduling policies for the slot generator.
//!
//! The defaults reproduce the booking flow's established behavior: a default
//! 09:00–17:00 window when nothing is configured, overlapping windows kept as
//! is, and past dates answered like future ones. Each knob can be tightened
//! independently.

use serde::{Deserialize, Serialize};

/// What to do when a provider has no active window on the requested weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Synthesize one 09:00–17:00 window for the day.
    #[default]
    DefaultWindow,
    /// Return no slots, matching the date resolver.
    None,
}

/// How overlapping windows on the same day are subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Subdivide every window independently; overlaps yield duplicate slots.
    #[default]
    Keep,
    /// Merge overlapping or adjacent windows first. Slots come out unique and
    /// sorted by start time.
    Merge,
}

/// How a date strictly before today is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastDatePolicy {
    /// Generate slots as for a future date.
    #[default]
    Retain,
    /// Return no slots.
    Empty,
    /// Fail with [`crate::SlotError::PastDate`].
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotOptions {
    #[serde(default)]
    pub fallback: FallbackPolicy,
    #[serde(default)]
    pub overlap: OverlapPolicy,
    #[serde(default)]
    pub past_dates: PastDatePolicy,
}

impl SlotOptions {
    /// Fallback off, overlaps merged, past dates rejected.
    pub fn strict() -> Self {
        Self {
            fallback: FallbackPolicy::None,
            overlap: OverlapPolicy::Merge,
            past_dates: PastDatePolicy::Reject,
        }
    }
}
