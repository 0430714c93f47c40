//! End-to-end flows through the From/To selectors and the converter.

use chronoshift_core::{
    DigitField, EmissionPolicy, LocationTimeSelector, Meridiem, SelectorEvent, SelectorOptions,
    Side, TimeConverter,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("chronoshift_core=trace")
        .try_init();
}

fn type_digits(selector: &mut LocationTimeSelector, digits: &str) -> Vec<SelectorEvent> {
    let mut events = Vec::new();
    for ch in digits.chars() {
        let field = selector.entry().focus();
        events.extend(selector.set_digit(field, &ch.to_string()));
    }
    events
}

#[test]
fn typing_follows_the_focus_cursor() {
    init_tracing();
    let mut from = LocationTimeSelector::new(SelectorOptions::new("From"));

    let events = type_digits(&mut from, "1245");
    assert_eq!(events, vec![SelectorEvent::TimeChanged("00:45".to_string())]);

    let events = from.set_period(Meridiem::Pm);
    assert_eq!(events, vec![SelectorEvent::TimeChanged("12:45".to_string())]);
}

#[test]
fn rejected_digit_keeps_focus_in_place() {
    init_tracing();
    let mut from = LocationTimeSelector::new(SelectorOptions::new("From"));

    // "7" cannot start an hour; the cursor stays on the first box.
    assert!(type_digits(&mut from, "7").is_empty());
    assert_eq!(from.entry().focus(), DigitField::HourTens);

    type_digits(&mut from, "0730");
    assert_eq!(from.entry().formatted_24h().as_deref(), Some("07:30"));
}

#[test]
fn backspace_walks_back_across_boxes() {
    init_tracing();
    let mut from = LocationTimeSelector::new(SelectorOptions::new("From"));
    type_digits(&mut from, "1130");

    // Four clears and three steps back empty the entry.
    for _ in 0..7 {
        let field = from.entry().focus();
        from.backspace(field);
    }
    assert!(from.entry().is_empty());
    assert_eq!(from.entry().focus(), DigitField::HourTens);
}

#[test]
fn converter_records_both_sides_without_converting() {
    init_tracing();
    let mut converter = TimeConverter::new();
    let mut from = LocationTimeSelector::new(SelectorOptions::new(Side::Source.title()));
    let mut to = LocationTimeSelector::new(
        SelectorOptions::new(Side::Target.title()).read_only(Side::Target.is_read_only()),
    );

    let mut source_events = from.set_query("syd");
    source_events.extend(from.select_suggestion("Sydney, Australia"));
    source_events.extend(type_digits(&mut from, "0615"));
    for event in source_events {
        converter.record(Side::Source, event);
    }

    // The read-only target ignores edits entirely.
    assert!(to.set_query("Tokyo").is_empty());
    assert!(type_digits(&mut to, "1200").is_empty());

    assert_eq!(converter.source().location, "Sydney, Australia");
    assert_eq!(converter.source().time, "06:15");
    assert!(converter.pending_conversion());
    assert!(converter.target().time.is_empty());
}

#[test]
fn partial_policy_reports_intermediate_times() {
    init_tracing();
    let options = SelectorOptions::new("From").emission(EmissionPolicy::Partial);
    let mut from = LocationTimeSelector::new(options);

    let events = type_digits(&mut from, "1");
    assert_eq!(events, vec![SelectorEvent::TimeChanged("01:00".to_string())]);
}
