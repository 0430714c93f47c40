//! Segmented 12-hour time entry.
//!
//! A [`TimeEntry`] models four single-digit boxes (`H H : M M`) plus an
//! AM/PM toggle as one state machine. Focus is an explicit cursor over the
//! four slots so the view only has to mirror it onto the DOM.
//!
//! Digits are validated as they are typed: a digit is only accepted if the
//! two-digit value it belongs to can still end up in range (hour `1..=12`,
//! minute `0..=59`).

use std::fmt;
use std::ops::RangeInclusive;

use chrono::format::ParseErrorKind;
use chrono::{NaiveTime, Timelike};

use crate::error::TimeParseError;

const HOUR_RANGE: RangeInclusive<u8> = 1..=12;
const MINUTE_RANGE: RangeInclusive<u8> = 0..=59;

/// AM/PM designator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    pub const ALL: [Meridiem; 2] = [Meridiem::Am, Meridiem::Pm];

    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the four digit slots, in focus order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigitField {
    #[default]
    HourTens,
    HourUnits,
    MinuteTens,
    MinuteUnits,
}

impl DigitField {
    pub const ALL: [DigitField; 4] = [
        DigitField::HourTens,
        DigitField::HourUnits,
        DigitField::MinuteTens,
        DigitField::MinuteUnits,
    ];

    /// Position in focus order, `0..4`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot that receives focus after this one is filled.
    pub fn next(self) -> Option<DigitField> {
        match self {
            DigitField::HourTens => Some(DigitField::HourUnits),
            DigitField::HourUnits => Some(DigitField::MinuteTens),
            DigitField::MinuteTens => Some(DigitField::MinuteUnits),
            DigitField::MinuteUnits => None,
        }
    }

    /// Slot that receives focus on backspace in an empty box.
    pub fn prev(self) -> Option<DigitField> {
        match self {
            DigitField::HourTens => None,
            DigitField::HourUnits => Some(DigitField::HourTens),
            DigitField::MinuteTens => Some(DigitField::HourUnits),
            DigitField::MinuteUnits => Some(DigitField::MinuteTens),
        }
    }

    pub fn is_hour(self) -> bool {
        matches!(self, DigitField::HourTens | DigitField::HourUnits)
    }

    fn is_tens(self) -> bool {
        matches!(self, DigitField::HourTens | DigitField::MinuteTens)
    }

    /// The other slot of the same two-digit pair.
    fn sibling(self) -> DigitField {
        match self {
            DigitField::HourTens => DigitField::HourUnits,
            DigitField::HourUnits => DigitField::HourTens,
            DigitField::MinuteTens => DigitField::MinuteUnits,
            DigitField::MinuteUnits => DigitField::MinuteTens,
        }
    }

    /// Value of the `data-digit` attribute on the rendered box.
    pub fn data_key(self) -> &'static str {
        match self {
            DigitField::HourTens => "hours-1",
            DigitField::HourUnits => "hours-2",
            DigitField::MinuteTens => "minutes-1",
            DigitField::MinuteUnits => "minutes-2",
        }
    }

    /// Placeholder shown in an empty box.
    pub fn placeholder(self) -> &'static str {
        match self {
            DigitField::HourTens => "1",
            DigitField::HourUnits => "2",
            DigitField::MinuteTens | DigitField::MinuteUnits => "0",
        }
    }
}

/// Result of a single edit against a [`TimeEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitEdit {
    /// Input was not a single numeral, or the digit would leave the range
    Rejected,
    /// Accepted but nothing about the digits changed (focus may have moved)
    Unchanged,
    /// Digits or meridiem changed
    Updated,
}

impl DigitEdit {
    pub fn is_update(&self) -> bool {
        matches!(self, DigitEdit::Updated)
    }
}

/// When a time-change notification is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmissionPolicy {
    /// Emit only once all four digits are present
    #[default]
    Complete,
    /// Also emit a zero-padded best-effort string for partial input
    Partial,
}

/// Four digit slots, a meridiem and a focus cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeEntry {
    digits: [Option<u8>; 4],
    period: Meridiem,
    focus: DigitField,
}

impl TimeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a populated entry from a 24-hour `HH:MM` string.
    ///
    /// An empty (or all-whitespace) string yields an empty entry.
    pub fn parse_24h(input: &str) -> Result<Self, TimeParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|e| {
            if e.kind() == ParseErrorKind::OutOfRange {
                TimeParseError::OutOfRange(trimmed.to_string())
            } else {
                TimeParseError::Malformed(trimmed.to_string())
            }
        })?;

        let (is_pm, hour) = time.hour12();
        let hour = hour as u8;
        let minute = time.minute() as u8;

        Ok(Self {
            digits: [
                Some(hour / 10),
                Some(hour % 10),
                Some(minute / 10),
                Some(minute % 10),
            ],
            period: if is_pm { Meridiem::Pm } else { Meridiem::Am },
            focus: DigitField::MinuteUnits,
        })
    }

    pub fn digit(&self, field: DigitField) -> Option<u8> {
        self.digits[field.index()]
    }

    /// Text for the box bound to `field` (empty when the slot is empty).
    pub fn digit_text(&self, field: DigitField) -> String {
        self.digit(field).map(|d| d.to_string()).unwrap_or_default()
    }

    pub fn period(&self) -> Meridiem {
        self.period
    }

    pub fn focus(&self) -> DigitField {
        self.focus
    }

    /// Move the cursor, e.g. when the user clicks into a box.
    pub fn focus_field(&mut self, field: DigitField) {
        self.focus = field;
    }

    pub fn is_empty(&self) -> bool {
        self.digits.iter().all(Option::is_none)
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    fn pair(&self, tens: DigitField) -> Option<u8> {
        Some(self.digit(tens)? * 10 + self.digit(tens.sibling())?)
    }

    /// The 12-hour hour, once both hour digits are present.
    pub fn hour12(&self) -> Option<u8> {
        self.pair(DigitField::HourTens)
    }

    /// The minute, once both minute digits are present.
    pub fn minute(&self) -> Option<u8> {
        self.pair(DigitField::MinuteTens)
    }

    /// `(hour, minute)` on a 24-hour clock.
    pub fn to_24h(&self) -> Option<(u8, u8)> {
        let hour = self.hour12()?;
        let minute = self.minute()?;
        let hour = match (hour, self.period) {
            (12, Meridiem::Pm) => 12,
            (12, Meridiem::Am) => 0,
            (h, Meridiem::Pm) => h + 12,
            (h, Meridiem::Am) => h,
        };
        Some((hour, minute))
    }

    /// `HH:MM` on a 24-hour clock, once the entry is complete.
    pub fn formatted_24h(&self) -> Option<String> {
        self.to_24h()
            .map(|(hour, minute)| format!("{:02}:{:02}", hour, minute))
    }

    /// The string to report to a time-change listener, if any.
    pub fn emission(&self, policy: EmissionPolicy) -> Option<String> {
        if let Some(time) = self.formatted_24h() {
            return Some(time);
        }
        match policy {
            EmissionPolicy::Complete => None,
            EmissionPolicy::Partial if self.is_empty() => None,
            EmissionPolicy::Partial => {
                let hours = self.present_digits(DigitField::HourTens);
                let minutes = self.present_digits(DigitField::MinuteTens);
                Some(format!("{:0>2}:{:0>2}", hours, minutes))
            }
        }
    }

    fn present_digits(&self, tens: DigitField) -> String {
        [self.digit(tens), self.digit(tens.sibling())]
            .into_iter()
            .flatten()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// Type into a box. `input` must be empty (clear) or a single numeral.
    pub fn set_digit(&mut self, field: DigitField, input: &str) -> DigitEdit {
        let value = match parse_digit_input(input) {
            Some(value) => value,
            None => {
                tracing::trace!(?field, input, "rejected non-digit input");
                return DigitEdit::Rejected;
            }
        };

        let previous = self.digit(field);
        if previous == value {
            return DigitEdit::Unchanged;
        }

        if let Some(digit) = value {
            if !self.accepts(field, digit) {
                tracing::trace!(?field, digit, "rejected out-of-range digit");
                return DigitEdit::Rejected;
            }
        }

        self.digits[field.index()] = value;
        self.focus = field;
        if previous.is_none() && value.is_some() {
            if let Some(next) = field.next() {
                self.focus = next;
            }
        }
        DigitEdit::Updated
    }

    /// Backspace pressed in `field`: clear it, or step back if already empty.
    pub fn backspace(&mut self, field: DigitField) -> DigitEdit {
        if self.digit(field).is_some() {
            self.digits[field.index()] = None;
            self.focus = field;
            return DigitEdit::Updated;
        }
        self.focus = field.prev().unwrap_or(field);
        DigitEdit::Unchanged
    }

    pub fn set_period(&mut self, period: Meridiem) -> DigitEdit {
        if self.period == period {
            return DigitEdit::Unchanged;
        }
        self.period = period;
        DigitEdit::Updated
    }

    /// Whether `digit` may be placed in `field` given its sibling slot.
    fn accepts(&self, field: DigitField, digit: u8) -> bool {
        let sibling = self.digit(field.sibling());
        let (tens, units) = if field.is_tens() {
            (Some(digit), sibling)
        } else {
            (sibling, Some(digit))
        };
        let range = if field.is_hour() {
            HOUR_RANGE
        } else {
            MINUTE_RANGE
        };
        pair_feasible(&range, tens, units)
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |field| {
            self.digit(field)
                .map(|d| char::from(b'0' + d))
                .unwrap_or('-')
        };
        write!(
            f,
            "{}{}:{}{} {}",
            slot(DigitField::HourTens),
            slot(DigitField::HourUnits),
            slot(DigitField::MinuteTens),
            slot(DigitField::MinuteUnits),
            self.period
        )
    }
}

/// `Some(None)` for a clear, `Some(Some(d))` for a numeral, `None` otherwise.
fn parse_digit_input(input: &str) -> Option<Option<u8>> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(c), None) => c.to_digit(10).map(|d| Some(d as u8)),
        _ => None,
    }
}

/// Can a two-digit value with these known digits land in `range`?
fn pair_feasible(range: &RangeInclusive<u8>, tens: Option<u8>, units: Option<u8>) -> bool {
    match (tens, units) {
        (Some(t), Some(u)) => range.contains(&(t * 10 + u)),
        (Some(t), None) => (0..=9).any(|u| range.contains(&(t * 10 + u))),
        (None, Some(u)) => (0..=9).any(|t| range.contains(&(t * 10 + u))),
        (None, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with(digits: [&str; 4], period: Meridiem) -> TimeEntry {
        let mut entry = TimeEntry::new();
        for (field, digit) in DigitField::ALL.into_iter().zip(digits) {
            assert_eq!(entry.set_digit(field, digit), DigitEdit::Updated);
        }
        entry.set_period(period);
        entry
    }

    #[test]
    fn test_focus_order() {
        assert_eq!(DigitField::HourTens.next(), Some(DigitField::HourUnits));
        assert_eq!(DigitField::MinuteUnits.next(), None);
        assert_eq!(DigitField::HourTens.prev(), None);
        assert_eq!(DigitField::MinuteTens.prev(), Some(DigitField::HourUnits));
    }

    #[test]
    fn test_hour_tens_only_accepts_zero_or_one() {
        for d in 0..=9u8 {
            let mut entry = TimeEntry::new();
            let edit = entry.set_digit(DigitField::HourTens, &d.to_string());
            if d <= 1 {
                assert_eq!(edit, DigitEdit::Updated, "digit {}", d);
            } else {
                assert_eq!(edit, DigitEdit::Rejected, "digit {}", d);
                assert!(entry.is_empty());
            }
        }
    }

    #[test]
    fn test_hour_units_checked_against_tens() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "1");
        assert_eq!(entry.set_digit(DigitField::HourUnits, "3"), DigitEdit::Rejected);
        assert_eq!(entry.set_digit(DigitField::HourUnits, "2"), DigitEdit::Updated);
        assert_eq!(entry.hour12(), Some(12));

        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "0");
        assert_eq!(entry.set_digit(DigitField::HourUnits, "0"), DigitEdit::Rejected);
    }

    #[test]
    fn test_tens_checked_against_existing_units() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourUnits, "5");
        assert_eq!(entry.set_digit(DigitField::HourTens, "1"), DigitEdit::Rejected);
        assert_eq!(entry.set_digit(DigitField::HourTens, "0"), DigitEdit::Updated);
    }

    #[test]
    fn test_minute_tens_range() {
        for d in 0..=9u8 {
            let mut entry = TimeEntry::new();
            let edit = entry.set_digit(DigitField::MinuteTens, &d.to_string());
            assert_eq!(edit.is_update(), d <= 5, "digit {}", d);
        }
    }

    #[test]
    fn test_rejects_non_digit_and_multi_char() {
        let mut entry = TimeEntry::new();
        assert_eq!(entry.set_digit(DigitField::HourTens, "a"), DigitEdit::Rejected);
        assert_eq!(entry.set_digit(DigitField::HourTens, "10"), DigitEdit::Rejected);
        assert_eq!(entry.set_digit(DigitField::HourTens, "-"), DigitEdit::Rejected);
        assert!(entry.is_empty());
    }

    #[test]
    fn test_focus_advances_on_first_digit() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "0");
        assert_eq!(entry.focus(), DigitField::HourUnits);
        entry.set_digit(DigitField::HourUnits, "9");
        assert_eq!(entry.focus(), DigitField::MinuteTens);
        entry.set_digit(DigitField::MinuteTens, "3");
        assert_eq!(entry.focus(), DigitField::MinuteUnits);
        entry.set_digit(DigitField::MinuteUnits, "0");
        assert_eq!(entry.focus(), DigitField::MinuteUnits);
    }

    #[test]
    fn test_overwrite_does_not_advance() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "0");
        entry.focus_field(DigitField::HourTens);
        assert_eq!(entry.set_digit(DigitField::HourTens, "1"), DigitEdit::Updated);
        assert_eq!(entry.focus(), DigitField::HourTens);
    }

    #[test]
    fn test_backspace_clears_then_retreats() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "1");
        entry.set_digit(DigitField::HourUnits, "1");
        entry.set_digit(DigitField::MinuteTens, "4");

        assert_eq!(entry.backspace(DigitField::MinuteUnits), DigitEdit::Unchanged);
        assert_eq!(entry.focus(), DigitField::MinuteTens);

        assert_eq!(entry.backspace(DigitField::MinuteTens), DigitEdit::Updated);
        assert_eq!(entry.digit(DigitField::MinuteTens), None);
        assert_eq!(entry.focus(), DigitField::MinuteTens);

        assert_eq!(entry.backspace(DigitField::MinuteTens), DigitEdit::Unchanged);
        assert_eq!(entry.focus(), DigitField::HourUnits);
    }

    #[test]
    fn test_backspace_on_first_box_stays() {
        let mut entry = TimeEntry::new();
        assert_eq!(entry.backspace(DigitField::HourTens), DigitEdit::Unchanged);
        assert_eq!(entry.focus(), DigitField::HourTens);
    }

    #[test]
    fn test_noon_and_midnight() {
        let noon = entry_with(["1", "2", "1", "5"], Meridiem::Pm);
        assert_eq!(noon.formatted_24h().as_deref(), Some("12:15"));

        let midnight = entry_with(["1", "2", "1", "5"], Meridiem::Am);
        assert_eq!(midnight.formatted_24h().as_deref(), Some("00:15"));
    }

    #[test]
    fn test_morning_and_evening() {
        let morning = entry_with(["0", "9", "3", "0"], Meridiem::Am);
        assert_eq!(morning.formatted_24h().as_deref(), Some("09:30"));

        let evening = entry_with(["0", "9", "3", "0"], Meridiem::Pm);
        assert_eq!(evening.formatted_24h().as_deref(), Some("21:30"));
    }

    #[test]
    fn test_complete_policy_waits_for_all_digits() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "1");
        entry.set_digit(DigitField::HourUnits, "1");
        entry.set_digit(DigitField::MinuteTens, "2");
        assert_eq!(entry.emission(EmissionPolicy::Complete), None);
        entry.set_digit(DigitField::MinuteUnits, "5");
        assert_eq!(
            entry.emission(EmissionPolicy::Complete).as_deref(),
            Some("11:25")
        );
    }

    #[test]
    fn test_partial_policy_pads_present_digits() {
        let mut entry = TimeEntry::new();
        assert_eq!(entry.emission(EmissionPolicy::Partial), None);

        entry.set_digit(DigitField::HourTens, "1");
        assert_eq!(entry.emission(EmissionPolicy::Partial).as_deref(), Some("01:00"));

        entry.set_digit(DigitField::HourUnits, "1");
        entry.set_digit(DigitField::MinuteTens, "4");
        entry.set_period(Meridiem::Pm);
        assert_eq!(entry.emission(EmissionPolicy::Partial).as_deref(), Some("11:04"));
    }

    #[test]
    fn test_parse_24h() {
        let entry = TimeEntry::parse_24h("21:30").unwrap();
        assert_eq!(entry.hour12(), Some(9));
        assert_eq!(entry.minute(), Some(30));
        assert_eq!(entry.period(), Meridiem::Pm);
        assert_eq!(entry.formatted_24h().as_deref(), Some("21:30"));

        let midnight = TimeEntry::parse_24h("00:05").unwrap();
        assert_eq!(midnight.hour12(), Some(12));
        assert_eq!(midnight.period(), Meridiem::Am);
        assert_eq!(midnight.formatted_24h().as_deref(), Some("00:05"));

        assert!(TimeEntry::parse_24h("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_24h_errors() {
        assert!(matches!(
            TimeEntry::parse_24h("noon"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(TimeEntry::parse_24h("25:00").is_err());
    }

    #[test]
    fn test_display() {
        let mut entry = TimeEntry::new();
        entry.set_digit(DigitField::HourTens, "0");
        entry.set_digit(DigitField::HourUnits, "7");
        assert_eq!(entry.to_string(), "07:-- AM");
    }
}
