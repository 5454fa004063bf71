//! The read-only provider-availability table.
//!
//! Windows are stored in insertion order. That order is observable: the slot
//! generator emits windows in the order they appear here.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::window::AvailabilityWindow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityTable {
    windows: Vec<AvailabilityWindow>,
}

impl AvailabilityTable {
    pub fn new(windows: Vec<AvailabilityWindow>) -> Self {
        Self { windows }
    }

    /// Load a table from a JSON array of window records.
    ///
    /// # Errors
    /// Returns [`crate::SlotError::Table`] if the JSON is malformed or any
    /// record fails window validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let windows: Vec<AvailabilityWindow> = serde_json::from_str(json)?;
        Ok(Self { windows })
    }

    pub fn windows(&self) -> &[AvailabilityWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All windows of a provider, active or not, in table order.
    pub fn windows_for<'a>(
        &'a self,
        provider_id: &'a str,
    ) -> impl Iterator<Item = &'a AvailabilityWindow> + 'a {
        self.windows
            .iter()
            .filter(move |w| w.provider_id == provider_id)
    }

    /// Active windows of a provider on the given weekday (0 = Sunday), in
    /// table order.
    pub fn active_windows_on(&self, provider_id: &str, day_of_week: u8) -> Vec<&AvailabilityWindow> {
        self.windows
            .iter()
            .filter(|w| w.provider_id == provider_id && w.is_active && w.day_of_week == day_of_week)
            .collect()
    }

    /// Weekdays on which the provider has at least one active window.
    pub fn active_weekdays(&self, provider_id: &str) -> BTreeSet<u8> {
        self.windows_for(provider_id)
            .filter(|w| w.is_active)
            .map(|w| w.day_of_week)
            .collect()
    }

    /// Distinct provider ids in first-seen order.
    pub fn providers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.windows
            .iter()
            .map(|w| w.provider_id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

impl FromIterator<AvailabilityWindow> for AvailabilityTable {
    fn from_iter<I: IntoIterator<Item = AvailabilityWindow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
