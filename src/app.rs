use dioxus::prelude::*;

use crate::context::get_settings;
use crate::pages::{Landing, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the time converter
/// - anything else - "page not found" with a link home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, settings context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_settings);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
