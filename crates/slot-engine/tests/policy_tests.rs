//! Tests for the `SlotOptions` JSON shape shared with the web client.

use slot_engine::{FallbackPolicy, OverlapPolicy, PastDatePolicy, SlotOptions};

fn options(json: &str) -> SlotOptions {
    serde_json::from_str(json).unwrap()
}

#[test]
fn empty_object_gives_defaults() {
    let opts = options("{}");

    assert_eq!(opts, SlotOptions::default());
    assert_eq!(opts.fallback, FallbackPolicy::DefaultWindow);
    assert_eq!(opts.overlap, OverlapPolicy::Keep);
    assert_eq!(opts.past_dates, PastDatePolicy::Retain);
}

#[test]
fn missing_keys_keep_their_defaults() {
    let opts = options(r#"{"overlap": "merge"}"#);

    assert_eq!(
        opts,
        SlotOptions {
            overlap: OverlapPolicy::Merge,
            ..SlotOptions::default()
        }
    );
}

#[test]
fn snake_case_values_cover_every_policy() {
    let opts = options(r#"{"fallback": "none", "overlap": "merge", "past_dates": "reject"}"#);
    assert_eq!(opts, SlotOptions::strict());

    let opts = options(r#"{"fallback": "default_window", "overlap": "keep", "past_dates": "empty"}"#);
    assert_eq!(opts.fallback, FallbackPolicy::DefaultWindow);
    assert_eq!(opts.overlap, OverlapPolicy::Keep);
    assert_eq!(opts.past_dates, PastDatePolicy::Empty);
}

#[test]
fn options_serialize_in_the_same_shape() {
    let json = serde_json::to_value(SlotOptions::strict()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"fallback": "none", "overlap": "merge", "past_dates": "reject"})
    );
}

#[test]
fn unknown_values_are_rejected() {
    for json in [r#"{"overlap": "Merge"}"#, r#"{"fallback": "defaultWindow"}"#, r#"{"past_dates": "skip"}"#] {
        assert!(serde_json::from_str::<SlotOptions>(json).is_err(), "{json}");
    }
}
