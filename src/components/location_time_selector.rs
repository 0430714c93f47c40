//! Location + time selector card.
//!
//! Renders one [`LocationTimeSelector`]: a location field with a suggestion
//! dropdown and four digit boxes with an AM/PM toggle. All state lives in
//! the core record; this component maps DOM events onto it, mirrors its
//! focus cursor onto the digit boxes, and forwards reported changes to the
//! parent's callbacks.

use std::rc::Rc;

use chronoshift_core::{
    DigitField, LocationTimeSelector, Meridiem, SelectorEvent, SelectorOptions, BLUR_CLOSE_DELAY,
};
use chronoshift_ui::{Button, ButtonVariant, DigitBox, Input, SegmentToggle};
use dioxus::prelude::*;

use crate::context::use_settings;

type DigitHandles = [Option<Rc<MountedData>>; 4];

/// Parent callbacks, copied into every event handler.
#[derive(Clone, Copy)]
struct Callbacks {
    location: Option<EventHandler<String>>,
    time: Option<EventHandler<String>>,
}

impl Callbacks {
    fn forward(&self, events: Vec<SelectorEvent>) {
        for event in events {
            match event {
                SelectorEvent::LocationChanged(location) => {
                    if let Some(handler) = &self.location {
                        handler.call(location);
                    }
                }
                SelectorEvent::TimeChanged(time) => {
                    if let Some(handler) = &self.time {
                        handler.call(time);
                    }
                }
            }
        }
    }
}

/// Apply one operation to the selector, then notify the parent.
fn update(
    mut state: Signal<LocationTimeSelector>,
    callbacks: Callbacks,
    op: impl FnOnce(&mut LocationTimeSelector) -> Vec<SelectorEvent>,
) {
    let events = op(&mut state.write());
    callbacks.forward(events);
}

/// Move DOM focus to the box for `field`, if it has mounted.
fn focus_box(handles: Signal<DigitHandles>, field: DigitField) {
    let Some(element) = handles.read()[field.index()].clone() else {
        return;
    };
    spawn(async move {
        if let Err(e) = element.set_focus(true).await {
            tracing::debug!(?field, "could not move focus: {:?}", e);
        }
    });
}

/// One "From"/"To" card.
///
/// # Example
///
/// ```ignore
/// LocationTimeSelectorView {
///     title: "From".to_string(),
///     on_location_change: move |loc| source_location.set(loc),
///     on_time_change: move |time| source_time.set(time),
/// }
/// ```
#[component]
pub fn LocationTimeSelectorView(
    /// Label of the card; also names the location input's id
    title: String,
    /// Raw location text on every change or selection
    #[props(default)]
    on_location_change: Option<EventHandler<String>>,
    /// `HH:MM` (24-hour) whenever the time changes
    #[props(default)]
    on_time_change: Option<EventHandler<String>>,
    /// Disables every input
    #[props(default = false)]
    is_read_only: bool,
    /// Initial location text
    #[props(default)]
    default_location: String,
    /// Initial time, 24-hour `HH:MM`
    #[props(default)]
    default_time: String,
) -> Element {
    let settings = use_settings();
    let mut state = use_signal(|| {
        LocationTimeSelector::new(
            SelectorOptions::new(title.clone())
                .read_only(is_read_only)
                .default_location(default_location.clone())
                .default_time(default_time.clone())
                .emission(settings.emission),
        )
    });
    let mut handles: Signal<DigitHandles> = use_signal(Default::default);
    // Remount counters; a rejected keystroke remounts its box so the DOM
    // drops the character the state refused.
    let mut remounts: Signal<[u32; 4]> = use_signal(Default::default);
    let mut refocus: Signal<Option<DigitField>> = use_signal(|| None);

    let callbacks = Callbacks {
        location: on_location_change,
        time: on_time_change,
    };

    let mut on_digit_input = move |field: DigitField, text: String| {
        update(state, callbacks, |s| s.set_digit(field, &text));

        let (shown, focus) = {
            let current = state.read();
            (current.entry().digit_text(field), current.entry().focus())
        };
        if shown != text {
            refocus.set(Some(field));
            remounts.write()[field.index()] += 1;
        } else if focus != field {
            focus_box(handles, focus);
        }
    };

    let on_digit_keydown = move |field: DigitField, e: KeyboardEvent| {
        if e.key() != Key::Backspace || state.read().entry().digit(field).is_some() {
            return;
        }
        e.prevent_default();
        update(state, callbacks, |s| s.backspace(field));
        let focus = state.read().entry().focus();
        if focus != field {
            focus_box(handles, focus);
        }
    };

    let on_location_blur = move |_: ()| {
        let ticket = state.write().blur_location();
        spawn(async move {
            tokio::time::sleep(BLUR_CLOSE_DELAY).await;
            state.write().close_after_blur(ticket);
        });
    };

    let snapshot = state.read().clone();
    let read_only = snapshot.is_read_only();
    let location = snapshot.location();
    let entry = snapshot.entry();
    let period_index = Meridiem::ALL
        .iter()
        .position(|p| *p == entry.period())
        .unwrap_or(0);

    rsx! {
        div { class: if read_only { "selector-card read-only" } else { "selector-card" },
            // Location search
            div { class: "selector-section",
                Input {
                    id: snapshot.location_input_id(),
                    label: "Location".to_string(),
                    value: location.query().to_string(),
                    placeholder: "Search for a location...".to_string(),
                    disabled: read_only,
                    oninput: move |text: String| update(state, callbacks, |s| s.set_query(text)),
                    onfocus: move |_| state.write().focus_location(),
                    onblur: on_location_blur,
                    if location.is_open() {
                        div { class: "suggestion-list",
                            for candidate in location.suggestions() {
                                Button {
                                    key: "{candidate}",
                                    variant: ButtonVariant::Suggestion,
                                    onclick: move |_| {
                                        update(state, callbacks, |s| s.select_suggestion(candidate))
                                    },
                                    "{candidate}"
                                }
                            }
                        }
                    }
                }
            }

            // Time entry
            div { class: "selector-section",
                label { class: "input-label", "Time" }
                div { class: "time-row",
                    for field in DigitField::ALL {
                        {
                            let key = format!("{}-{}", field.data_key(), remounts.read()[field.index()]);
                            rsx! {
                                div { key: "{key}", class: "digit-slot",
                                    if field == DigitField::MinuteTens {
                                        span { class: "time-colon", ":" }
                                    }
                                    DigitBox {
                                        value: entry.digit_text(field),
                                        placeholder: field.placeholder().to_string(),
                                        data_key: field.data_key().to_string(),
                                        disabled: read_only,
                                        oninput: move |text: String| on_digit_input(field, text),
                                        onkeydown: move |e: KeyboardEvent| on_digit_keydown(field, e),
                                        onfocus: move |_| state.write().focus_digit(field),
                                        onmounted: move |e: MountedEvent| {
                                            handles.write()[field.index()] = Some(e.data());
                                            if refocus() == Some(field) {
                                                refocus.set(None);
                                                focus_box(handles, field);
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                    SegmentToggle {
                        options: Meridiem::ALL.iter().map(|p| p.label().to_string()).collect::<Vec<_>>(),
                        selected: period_index,
                        disabled: read_only,
                        on_select: move |index: usize| {
                            let period = Meridiem::ALL[index];
                            update(state, callbacks, |s| s.set_period(period));
                        },
                    }
                }
            }
        }
    }
}
