//! Visual theme: global stylesheet and title.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Window and page title.
pub const APP_TITLE: &str = "ChronoShift";
