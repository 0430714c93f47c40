//! Button Components
//!
//! - Primary: main call to action
//! - Segment: one half of a two-way toggle (AM/PM)
//! - Suggestion: a row in an autocomplete dropdown

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled blue button
    #[default]
    Primary,
    /// Toggle segment; pair with `active`
    Segment,
    /// Full-width, left-aligned dropdown row
    Suggestion,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Segment => "btn-segment",
            ButtonVariant::Suggestion => "btn-suggestion",
        }
    }
}

/// Full class attribute for a button.
pub fn button_class(
    variant: ButtonVariant,
    active: bool,
    disabled: bool,
    extra: Option<&str>,
) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if disabled {
        class.push_str(" locked");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Highlighted state for segment toggles
    #[props(default = false)]
    pub active: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Segment,
///         active: period() == Meridiem::Am,
///         onclick: move |_| period.set(Meridiem::Am),
///         "AM"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(
        props.variant,
        props.active,
        props.disabled,
        props.class.as_deref(),
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            "aria-pressed": "{props.active}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for a two-way segmented toggle
#[derive(Clone, PartialEq, Props)]
pub struct SegmentToggleProps {
    /// Labels, left to right
    pub options: Vec<String>,
    /// Index of the active option
    pub selected: usize,
    /// Called with the clicked index
    pub on_select: EventHandler<usize>,
    #[props(default = false)]
    pub disabled: bool,
}

/// A row of [`ButtonVariant::Segment`] buttons, one active.
#[component]
pub fn SegmentToggle(props: SegmentToggleProps) -> Element {
    rsx! {
        div { class: "segment-toggle", role: "radiogroup",
            for (index, label) in props.options.iter().enumerate() {
                {
                    let on_select = props.on_select;
                    rsx! {
                        Button {
                            key: "{label}",
                            variant: ButtonVariant::Segment,
                            active: index == props.selected,
                            disabled: props.disabled,
                            onclick: move |_| on_select.call(index),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
