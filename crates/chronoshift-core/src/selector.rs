//! One "location + time" widget as a single owned record.
//!
//! The view keeps a [`LocationTimeSelector`] in a signal, calls one of the
//! operations below for each DOM event, and forwards the returned
//! [`SelectorEvent`]s to its parent's callbacks.

use crate::error::ChronoResult;
use crate::location::{BlurTicket, LocationFilter};
use crate::time::{DigitEdit, DigitField, EmissionPolicy, Meridiem, TimeEntry};

/// Construction options for a selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Label of the widget ("From", "To", ...)
    pub title: String,
    /// Locks every mutation
    pub is_read_only: bool,
    /// Initial text of the location field
    pub default_location: String,
    /// Initial time as 24-hour `HH:MM`; empty for none
    pub default_time: String,
    /// When time changes are reported
    pub emission: EmissionPolicy,
}

impl SelectorOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    pub fn default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    pub fn default_time(mut self, time: impl Into<String>) -> Self {
        self.default_time = time.into();
        self
    }

    pub fn emission(mut self, emission: EmissionPolicy) -> Self {
        self.emission = emission;
        self
    }
}

/// Notification for the widget's parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Raw location text, validated or not
    LocationChanged(String),
    /// `HH:MM` on a 24-hour clock (or a padded partial, see [`EmissionPolicy`])
    TimeChanged(String),
}

/// State of one location/time widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationTimeSelector {
    title: String,
    read_only: bool,
    emission: EmissionPolicy,
    location: LocationFilter,
    entry: TimeEntry,
}

impl LocationTimeSelector {
    /// Build a selector, failing if `default_time` is not `HH:MM`.
    pub fn try_new(options: SelectorOptions) -> ChronoResult<Self> {
        let entry = TimeEntry::parse_24h(&options.default_time)?;
        Ok(Self::with_entry(options, entry))
    }

    /// Build a selector; an unreadable `default_time` is logged and dropped.
    pub fn new(options: SelectorOptions) -> Self {
        let entry = TimeEntry::parse_24h(&options.default_time).unwrap_or_else(|e| {
            tracing::warn!(title = %options.title, "ignoring default time: {}", e);
            TimeEntry::new()
        });
        Self::with_entry(options, entry)
    }

    fn with_entry(options: SelectorOptions, entry: TimeEntry) -> Self {
        Self {
            title: options.title,
            read_only: options.is_read_only,
            emission: options.emission,
            location: LocationFilter::new(options.default_location),
            entry,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// DOM id of the location input, derived from the title.
    pub fn location_input_id(&self) -> String {
        format!("location-{}", self.title.to_lowercase())
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn location(&self) -> &LocationFilter {
        &self.location
    }

    pub fn entry(&self) -> &TimeEntry {
        &self.entry
    }

    /// Location text changed.
    pub fn set_query(&mut self, text: impl Into<String>) -> Vec<SelectorEvent> {
        if self.read_only {
            return Vec::new();
        }
        self.location.set_query(text);
        vec![SelectorEvent::LocationChanged(
            self.location.query().to_string(),
        )]
    }

    /// A suggestion was clicked.
    pub fn select_suggestion(&mut self, candidate: impl Into<String>) -> Vec<SelectorEvent> {
        if self.read_only {
            return Vec::new();
        }
        self.location.select(candidate);
        tracing::debug!(title = %self.title, location = self.location.query(), "location selected");
        vec![SelectorEvent::LocationChanged(
            self.location.query().to_string(),
        )]
    }

    pub fn focus_location(&mut self) {
        self.location.focus();
    }

    pub fn blur_location(&mut self) -> BlurTicket {
        self.location.blur()
    }

    pub fn close_after_blur(&mut self, ticket: BlurTicket) -> bool {
        self.location.close_after_blur(ticket)
    }

    /// Typing into one of the digit boxes.
    pub fn set_digit(&mut self, field: DigitField, input: &str) -> Vec<SelectorEvent> {
        if self.read_only {
            return Vec::new();
        }
        let edit = self.entry.set_digit(field, input);
        self.time_events(edit)
    }

    /// Backspace pressed in one of the digit boxes.
    pub fn backspace(&mut self, field: DigitField) -> Vec<SelectorEvent> {
        if self.read_only {
            return Vec::new();
        }
        let edit = self.entry.backspace(field);
        self.time_events(edit)
    }

    pub fn set_period(&mut self, period: Meridiem) -> Vec<SelectorEvent> {
        if self.read_only {
            return Vec::new();
        }
        self.entry.set_period(period);
        // Re-emits even when the same period is clicked again.
        self.time_events(DigitEdit::Updated)
    }

    /// A digit box received focus from the user.
    pub fn focus_digit(&mut self, field: DigitField) {
        if !self.read_only {
            self.entry.focus_field(field);
        }
    }

    fn time_events(&self, edit: DigitEdit) -> Vec<SelectorEvent> {
        if !edit.is_update() {
            return Vec::new();
        }
        self.entry
            .emission(self.emission)
            .map(SelectorEvent::TimeChanged)
            .into_iter()
            .collect()
    }
}
