//! Property-based tests for date resolution and slot generation using proptest.
//!
//! These verify invariants that should hold for *any* well-formed window
//! table, not just the fixed scenarios in `dates_tests.rs` / `slots_tests.rs`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use slot_engine::window::weekday_index;
use slot_engine::{
    generate_slots_for_date, resolve_available_dates, AvailabilityTable, AvailabilityWindow,
    OverlapPolicy, SlotOptions,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const LAST_MINUTE: u32 = 23 * 60 + 59;

fn time_of(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

/// A window on a quarter-hour start, 15 minutes to 8 hours long, ending
/// before midnight.
fn arb_window() -> impl Strategy<Value = AvailabilityWindow> {
    (0u8..=6, 0u32..88, 1u32..=32, any::<bool>()).prop_map(|(day, start_q, len_q, active)| {
        let start = start_q * 15;
        let end = (start + len_q * 15).min(LAST_MINUTE);
        let w = AvailabilityWindow::from_times("p", day, time_of(start), time_of(end)).unwrap();
        if active {
            w
        } else {
            w.inactive()
        }
    })
}

fn arb_table() -> impl Strategy<Value = AvailabilityTable> {
    prop::collection::vec(arb_window(), 0..6).prop_map(AvailabilityTable::new)
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..=2028, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..24, 0u32..60)
        .prop_map(|(d, h, m)| d.and_hms_opt(h, m, 0).unwrap())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Resolved dates are exactly the matching weekdays on/after today
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn resolved_dates_match_active_weekdays(
        table in arb_table(),
        year in 2024i32..=2028,
        month in 1u32..=12,
        today in arb_date(),
    ) {
        let dates = resolve_available_dates(&table, "p", year, month, today).unwrap();
        let weekdays = table.active_weekdays("p");

        let expected: Vec<NaiveDate> = NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap()
            .iter_days()
            .take_while(|d| d.month() == month)
            .filter(|d| weekdays.contains(&weekday_index(*d)) && *d >= today)
            .collect();

        prop_assert_eq!(dates, expected);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every slot is 30 minutes and lies inside a window or the default
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_are_thirty_minutes(
        table in arb_table(),
        date in arb_date(),
        now in arb_now(),
    ) {
        let slots = generate_slots_for_date(&table, "p", date, now, &SlotOptions::default()).unwrap();
        for slot in &slots {
            prop_assert_eq!(slot.duration_minutes(), 30);
            prop_assert!(slot.is_available);
            prop_assert_eq!(slot.date, date);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: A single window yields contiguous, whole slots
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn single_window_slots_are_contiguous(window in arb_window()) {
        let window = AvailabilityWindow { is_active: true, ..window };
        // First occurrence of the window's weekday in November 2026.
        let date = NaiveDate::from_ymd_opt(2026, 11, 1 + window.day_of_week as u32).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let expected_count = (window.duration_minutes() / 30) as usize;

        let table = AvailabilityTable::new(vec![window.clone()]);
        let slots = generate_slots_for_date(&table, "p", date, now, &SlotOptions::default()).unwrap();

        prop_assert_eq!(slots.len(), expected_count);
        if let Some(first) = slots.first() {
            prop_assert_eq!(first.start_time, window.start_time);
        }
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[0].end_time, pair[1].start_time);
        }
        if let Some(last) = slots.last() {
            prop_assert!(last.end_time <= window.end_time);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Nothing returned for today has already started
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn today_has_no_elapsed_slots(table in arb_table(), now in arb_now()) {
        let slots = generate_slots_for_date(&table, "p", now.date(), now, &SlotOptions::default()).unwrap();
        for slot in &slots {
            prop_assert!(slot.starts_at() > now, "{} starts at or before {}", slot.id, now);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Future dates always have slots under the default policy
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn future_dates_are_never_empty_without_windows(date in arb_date(), now in arb_now()) {
        prop_assume!(date > now.date());
        let slots = generate_slots_for_date(&AvailabilityTable::default(), "p", date, now, &SlotOptions::default()).unwrap();
        prop_assert_eq!(slots.len(), 16);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Merge policy yields unique, strictly increasing starts
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merged_slots_are_unique_and_sorted(
        table in arb_table(),
        date in arb_date(),
        now in arb_now(),
    ) {
        let options = SlotOptions { overlap: OverlapPolicy::Merge, ..SlotOptions::default() };
        let slots = generate_slots_for_date(&table, "p", date, now, &options).unwrap();
        for pair in slots.windows(2) {
            prop_assert!(pair[0].start_time < pair[1].start_time);
            prop_assert!(pair[0].end_time <= pair[1].start_time);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: Idempotence, identifiers included
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn generation_is_idempotent(table in arb_table(), date in arb_date(), now in arb_now()) {
        let a = generate_slots_for_date(&table, "p", date, now, &SlotOptions::default()).unwrap();
        let b = generate_slots_for_date(&table, "p", date, now, &SlotOptions::default()).unwrap();
        prop_assert_eq!(a, b);
    }
}
