//! Settings context for ChronoShift.
//!
//! Command-line settings are provided once at the root and read by any
//! component through [`use_settings`]. Widget state is never stored here;
//! each selector owns its own record.

use chronoshift_core::EmissionPolicy;
use dioxus::prelude::*;

/// Application-wide settings derived from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppSettings {
    /// When time selectors report changes to their parent
    pub emission: EmissionPolicy,
}

/// Get the settings for the application.
/// Uses the global settings set from command line args.
pub fn get_settings() -> AppSettings {
    crate::get_settings()
}

/// Hook to access the settings from context.
pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>()
}
