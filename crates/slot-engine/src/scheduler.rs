//! Facade bundling a table, a clock and slot options.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::dates::resolve_available_dates;
use crate::error::Result;
use crate::policy::SlotOptions;
use crate::slots::{generate_slots_for_date_str, TimeSlot};
use crate::table::AvailabilityTable;

/// Answers date and slot queries against one availability table.
///
/// The clock is read once per call, so a single call never observes two
/// different "now"s.
#[derive(Debug, Clone)]
pub struct Scheduler<C = SystemClock> {
    table: AvailabilityTable,
    clock: C,
    options: SlotOptions,
}

impl Scheduler<SystemClock> {
    pub fn new(table: AvailabilityTable) -> Self {
        Self::with_clock(table, SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    pub fn with_clock(table: AvailabilityTable, clock: C) -> Self {
        Self {
            table,
            clock,
            options: SlotOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SlotOptions) -> Self {
        self.options = options;
        self
    }

    pub fn table(&self) -> &AvailabilityTable {
        &self.table
    }

    pub fn options(&self) -> &SlotOptions {
        &self.options
    }

    /// See [`resolve_available_dates`].
    pub fn available_dates(&self, provider_id: &str, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        resolve_available_dates(&self.table, provider_id, year, month, self.clock.today())
    }

    /// See [`crate::generate_slots_for_date`]. `date` is `YYYY-MM-DD`.
    pub fn time_slots(&self, provider_id: &str, date: &str) -> Result<Vec<TimeSlot>> {
        generate_slots_for_date_str(&self.table, provider_id, date, self.clock.now(), &self.options)
    }
}
