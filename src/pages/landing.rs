//! Landing page - the time converter.

use dioxus::prelude::*;

use crate::components::{Layout, MaxWidth, PageContainer, TimeConverterView};
use crate::theme::APP_TITLE;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        Layout {
            section { class: "hero",
                PageContainer { max_width: MaxWidth::Xl4, class: "text-center",
                    h1 { class: "page-title", "{APP_TITLE}" }
                    p { class: "tagline",
                        "Convert times between different time zones instantly. "
                        "Simply select your locations and time to see what time it is anywhere in the world."
                    }

                    TimeConverterView {}
                }
            }
        }
    }
}
