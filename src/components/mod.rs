//! UI Components for ChronoShift.

mod layout;
mod location_time_selector;
mod time_converter;

pub use layout::{Layout, MaxWidth, PageContainer};
pub use location_time_selector::LocationTimeSelectorView;
pub use time_converter::TimeConverterView;
