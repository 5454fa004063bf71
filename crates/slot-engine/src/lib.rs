//! # slot-engine
//!
//! Specialist availability and booking-slot computation.
//!
//! Providers publish recurring weekly availability windows ("Mondays
//! 10:00–12:00"). This crate turns those windows into the two things a booking
//! screen needs: the bookable dates of a month, and the 30-minute slots of a
//! chosen date. Both computations are pure; the current time is always passed
//! in (directly or through a [`Clock`]).
//!
//! ## Modules
//!
//! - [`window`] — `AvailabilityWindow` plus `HH:MM` / `YYYY-MM-DD` parsing
//! - [`table`] — read-only provider-availability table
//! - [`dates`] — Availability Resolver (month → bookable dates)
//! - [`slots`] — Slot Generator (date → 30-minute slots)
//! - [`policy`] — fallback / overlap / past-date policies
//! - [`clock`] — injectable "now"
//! - [`scheduler`] — facade over table + clock + options
//! - [`error`] — Error types

pub mod clock;
pub mod dates;
pub mod error;
pub mod policy;
pub mod scheduler;
pub mod slots;
pub mod table;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dates::{days_in_month, resolve_available_dates};
pub use error::SlotError;
pub use policy::{FallbackPolicy, OverlapPolicy, PastDatePolicy, SlotOptions};
pub use scheduler::Scheduler;
pub use slots::{generate_slots_for_date, generate_slots_for_date_str, TimeSlot, SLOT_MINUTES};
pub use table::AvailabilityTable;
pub use window::AvailabilityWindow;
