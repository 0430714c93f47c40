//! "From" and "To" selectors stacked with an arrow between them.
//!
//! The converter only records what each side reports; no time-zone lookup
//! is wired up, so the read-only "To" time stays as initialised.

use chronoshift_core::{SelectorEvent, Side, TimeConverter};
use dioxus::prelude::*;

use crate::components::LocationTimeSelectorView;

/// Record an event for one side and note when a conversion could run.
fn record(mut converter: Signal<TimeConverter>, side: Side, event: SelectorEvent) {
    converter.write().record(side, event);
    let current = converter.read();
    if current.pending_conversion() {
        tracing::info!(
            from = %current.source().location,
            time = %current.source().time,
            to = %current.target().location,
            "conversion requested; no time-zone lookup available"
        );
    }
}

/// Both selectors of the converter page.
#[component]
pub fn TimeConverterView() -> Element {
    let converter = use_signal(TimeConverter::new);
    let target = converter.peek().target().clone();

    rsx! {
        div { class: "converter",
            ConverterSide {
                side: Side::Source,
                on_location_change: move |location: String| {
                    record(converter, Side::Source, SelectorEvent::LocationChanged(location))
                },
                on_time_change: move |time: String| {
                    record(converter, Side::Source, SelectorEvent::TimeChanged(time))
                },
            }

            div { class: "converter-arrow",
                div { class: "arrow-badge",
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M19 14l-7 7m0 0l-7-7m7 7V3" }
                    }
                }
            }

            ConverterSide {
                side: Side::Target,
                default_location: target.location,
                default_time: target.time,
                on_location_change: move |location: String| {
                    record(converter, Side::Target, SelectorEvent::LocationChanged(location))
                },
                // The target time is display-only.
                on_time_change: move |_: String| {},
            }
        }
    }
}

/// One labelled side of the converter.
#[component]
fn ConverterSide(
    side: Side,
    on_location_change: EventHandler<String>,
    on_time_change: EventHandler<String>,
    #[props(default)] default_location: String,
    #[props(default)] default_time: String,
) -> Element {
    rsx! {
        div { class: "converter-side",
            div { class: "side-badge",
                span { "{side.title()}" }
            }
            LocationTimeSelectorView {
                title: side.title().to_string(),
                on_location_change: on_location_change,
                on_time_change: on_time_change,
                is_read_only: side.is_read_only(),
                default_location: default_location,
                default_time: default_time,
            }
        }
    }
}
