use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{Layout, MaxWidth, PageContainer};

/// Fallback for unknown routes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        Layout { class: "centered",
            PageContainer { max_width: MaxWidth::Md, class: "text-center",
                h2 { class: "section-header", "Page not found" }
                p { class: "body-text", "Nothing lives at {path}." }
                Link { class: "btn-primary", to: Route::Landing {}, "Back to the converter" }
            }
        }
    }
}
