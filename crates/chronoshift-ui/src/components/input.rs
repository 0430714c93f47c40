//! Input Field Components
//!
//! Labelled text input with focus/blur hooks. Disabled inputs render on a
//! muted background.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Called when the input gains focus
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    /// Called when the input loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Content rendered after the input inside the same wrapper
    /// (e.g. a suggestion dropdown)
    pub children: Element,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut location = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: location(),
///         oninput: move |s| location.set(s),
///         label: "Location".to_string(),
///         placeholder: "Search for a location...".to_string(),
///         SuggestionList { .. }
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let input_class = input_class(props.disabled, props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            div { class: "input-anchor",
                input {
                    id: "{id}",
                    class: "{input_class}",
                    r#type: "text",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    autocomplete: "off",
                    oninput: move |e| props.oninput.call(e.value()),
                    onfocus: move |_| {
                        if let Some(handler) = &props.onfocus {
                            handler.call(());
                        }
                    },
                    onblur: move |_| {
                        if let Some(handler) = &props.onblur {
                            handler.call(());
                        }
                    },
                }
                {props.children}
            }
        }
    }
}

fn input_class(disabled: bool, extra: Option<&str>) -> String {
    let mut class = String::from("input-field");
    if disabled {
        class.push_str(" locked");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}
