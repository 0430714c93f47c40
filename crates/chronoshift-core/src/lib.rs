//! ChronoShift Core Library
//!
//! UI-free state for the ChronoShift time converter page.
//!
//! ## Overview
//!
//! Each "From"/"To" widget on the page is a [`LocationTimeSelector`]: a
//! free-text location field with suggestions drawn from a fixed candidate
//! list, and a 12-hour time typed one digit at a time into four boxes.
//! Operations return [`SelectorEvent`]s that the view forwards upward;
//! nothing in this crate touches the DOM.
//!
//! ## Quick Start
//!
//! ```
//! use chronoshift_core::{DigitField, LocationTimeSelector, Meridiem, SelectorEvent, SelectorOptions};
//!
//! let mut from = LocationTimeSelector::new(SelectorOptions::new("From"));
//! from.set_query("lon");
//! assert_eq!(from.location().suggestions(), vec!["London, UK"]);
//!
//! for (field, digit) in DigitField::ALL.into_iter().zip(["0", "9", "3", "0"]) {
//!     from.set_digit(field, digit);
//! }
//! let events = from.set_period(Meridiem::Pm);
//! assert_eq!(events, vec![SelectorEvent::TimeChanged("21:30".to_string())]);
//! ```

pub mod converter;
pub mod error;
pub mod location;
pub mod selector;
pub mod time;

// Re-exports
pub use converter::{Endpoint, Side, TimeConverter};
pub use error::{ChronoError, ChronoResult, TimeParseError};
pub use location::{
    suggestions, BlurTicket, LocationFilter, BLUR_CLOSE_DELAY, CANDIDATE_LOCATIONS,
    MAX_SUGGESTIONS,
};
pub use selector::{LocationTimeSelector, SelectorEvent, SelectorOptions};
pub use time::{DigitEdit, DigitField, EmissionPolicy, Meridiem, TimeEntry};
