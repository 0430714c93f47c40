//! Page wrappers.
//!
//! `Layout` makes a page a flex column; `PageContainer` centers content at a
//! bounded width.

use dioxus::prelude::*;

/// Join a base class with optional extra classes.
fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// Flex column wrapper for a page or section.
#[component]
pub fn Layout(children: Element, #[props(default)] class: String) -> Element {
    let class = with_extra("layout", &class);
    rsx! {
        div { class: "{class}", {children} }
    }
}

/// Max width presets for [`PageContainer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    #[default]
    Xl4,
    Full,
}

impl MaxWidth {
    pub fn class(&self) -> &'static str {
        match self {
            MaxWidth::Sm => "max-w-sm",
            MaxWidth::Md => "max-w-md",
            MaxWidth::Lg => "max-w-lg",
            MaxWidth::Xl => "max-w-xl",
            MaxWidth::Xl2 => "max-w-2xl",
            MaxWidth::Xl4 => "max-w-4xl",
            MaxWidth::Full => "max-w-full",
        }
    }
}

/// Horizontally centered, width-bounded container.
#[component]
pub fn PageContainer(
    children: Element,
    #[props(default)] max_width: MaxWidth,
    #[props(default)] class: String,
) -> Element {
    let class = with_extra(&format!("page-container {}", max_width.class()), &class);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_extra() {
        assert_eq!(with_extra("layout", ""), "layout");
        assert_eq!(with_extra("layout", "  "), "layout");
        assert_eq!(with_extra("layout", "centered"), "layout centered");
    }

    #[test]
    fn test_max_width_default() {
        assert_eq!(MaxWidth::default(), MaxWidth::Xl4);
        assert_eq!(MaxWidth::default().class(), "max-w-4xl");
    }
}
