//! Single-character box for segmented numeric entry.
//!
//! The box is fully controlled: it shows `value` and reports raw text and
//! key presses. Validation and focus movement belong to the caller, which
//! receives the mounted element through `onmounted` so it can move focus.

use dioxus::prelude::*;

/// Properties for the DigitBox component
#[derive(Clone, PartialEq, Props)]
pub struct DigitBoxProps {
    /// Current digit, or empty
    pub value: String,
    /// Raw text after each edit
    pub oninput: EventHandler<String>,
    /// Key presses (backspace handling)
    pub onkeydown: EventHandler<KeyboardEvent>,
    /// The box was focused by the user
    #[props(default)]
    pub onfocus: Option<EventHandler<()>>,
    /// Handle to the rendered element
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    /// Shown while empty
    #[props(default)]
    pub placeholder: String,
    /// `data-digit` attribute identifying the box
    #[props(default)]
    pub data_key: String,
    #[props(default = false)]
    pub disabled: bool,
}

/// One digit of a segmented input
#[component]
pub fn DigitBox(props: DigitBoxProps) -> Element {
    let class = if props.disabled {
        "digit-box locked"
    } else {
        "digit-box"
    };

    rsx! {
        input {
            class: "{class}",
            r#type: "text",
            "inputmode": "numeric",
            maxlength: 1,
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            "data-digit": "{props.data_key}",
            oninput: move |e| props.oninput.call(e.value()),
            onkeydown: move |e| props.onkeydown.call(e),
            onfocus: move |_| {
                if let Some(handler) = &props.onfocus {
                    handler.call(());
                }
            },
            onmounted: move |e| {
                if let Some(handler) = &props.onmounted {
                    handler.call(e);
                }
            },
        }
    }
}
