//! Location search with client-side suggestions.
//!
//! Free text is always accepted and reported as-is; the candidate list only
//! drives the suggestion dropdown.

use std::time::Duration;

/// Maximum number of suggestions shown under the location field.
pub const MAX_SUGGESTIONS: usize = 8;

/// Delay between the field losing focus and the dropdown closing, so a click
/// on a suggestion lands before the list disappears.
pub const BLUR_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Fixed candidate set, in display order.
pub const CANDIDATE_LOCATIONS: [&str; 20] = [
    "New York, NY, USA",
    "London, UK",
    "Tokyo, Japan",
    "Sydney, Australia",
    "Paris, France",
    "Berlin, Germany",
    "Mumbai, India",
    "São Paulo, Brazil",
    "Cairo, Egypt",
    "Moscow, Russia",
    "Los Angeles, CA, USA",
    "Chicago, IL, USA",
    "Toronto, Canada",
    "Vancouver, Canada",
    "Mexico City, Mexico",
    "Buenos Aires, Argentina",
    "Madrid, Spain",
    "Rome, Italy",
    "Amsterdam, Netherlands",
    "Stockholm, Sweden",
];

/// Case-insensitive substring matches of `query`, in candidate order.
pub fn suggestions(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    CANDIDATE_LOCATIONS
        .iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Token handed out on blur. Only the most recent one may close the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlurTicket(u64);

/// Query text plus dropdown state for one location field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationFilter {
    query: String,
    open: bool,
    generation: u64,
}

impl LocationFilter {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            query: initial.into(),
            open: false,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current suggestions for the stored query.
    pub fn suggestions(&self) -> Vec<&'static str> {
        suggestions(&self.query)
    }

    /// Whether the dropdown should be rendered right now.
    pub fn is_open(&self) -> bool {
        self.open && !self.suggestions().is_empty()
    }

    /// Store new text. The dropdown opens whenever the text is non-empty.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.open = !self.query.is_empty();
        self.touch();
    }

    /// Replace the query with a chosen candidate and close the dropdown.
    pub fn select(&mut self, candidate: impl Into<String>) {
        self.query = candidate.into();
        self.open = false;
        self.touch();
    }

    /// The field regained focus; any pending close is superseded.
    pub fn focus(&mut self) {
        self.touch();
    }

    /// The field lost focus. Pass the ticket to [`close_after_blur`] once
    /// [`BLUR_CLOSE_DELAY`] has elapsed.
    ///
    /// [`close_after_blur`]: LocationFilter::close_after_blur
    pub fn blur(&mut self) -> BlurTicket {
        self.touch();
        BlurTicket(self.generation)
    }

    /// Close the dropdown unless something happened since `ticket` was issued.
    ///
    /// Returns whether the dropdown was closed.
    pub fn close_after_blur(&mut self, ticket: BlurTicket) -> bool {
        if ticket.0 != self.generation {
            tracing::trace!("blur close superseded");
            return false;
        }
        self.open = false;
        true
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lon_matches_only_london() {
        assert_eq!(suggestions("lon"), vec!["London, UK"]);
        assert_eq!(suggestions("LON"), vec!["London, UK"]);
    }

    #[test]
    fn test_suggestions_capped_and_ordered() {
        let matches = suggestions("a");
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
        assert_eq!(matches[0], "New York, NY, USA");

        let positions: Vec<usize> = matches
            .iter()
            .map(|m| CANDIDATE_LOCATIONS.iter().position(|c| c == m).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_query_matches_first_eight() {
        assert_eq!(suggestions(""), CANDIDATE_LOCATIONS[..MAX_SUGGESTIONS].to_vec());
    }

    #[test]
    fn test_non_ascii_match() {
        assert_eq!(suggestions("são"), vec!["São Paulo, Brazil"]);
    }

    #[test]
    fn test_no_match() {
        assert!(suggestions("atlantis").is_empty());
    }

    #[test]
    fn test_dropdown_follows_query() {
        let mut filter = LocationFilter::default();
        assert!(!filter.is_open());

        filter.set_query("par");
        assert!(filter.is_open());
        assert_eq!(filter.suggestions(), vec!["Paris, France"]);

        filter.set_query("");
        assert!(!filter.is_open());
    }

    #[test]
    fn test_dropdown_hidden_without_matches() {
        let mut filter = LocationFilter::default();
        filter.set_query("zzz");
        assert!(!filter.is_open());
        assert_eq!(filter.query(), "zzz");
    }

    #[test]
    fn test_select_closes() {
        let mut filter = LocationFilter::default();
        filter.set_query("tok");
        filter.select("Tokyo, Japan");
        assert_eq!(filter.query(), "Tokyo, Japan");
        assert!(!filter.is_open());
    }

    #[test]
    fn test_blur_closes_after_delay() {
        let mut filter = LocationFilter::default();
        filter.set_query("ber");
        let ticket = filter.blur();
        assert!(filter.is_open());
        assert!(filter.close_after_blur(ticket));
        assert!(!filter.is_open());
    }

    #[test]
    fn test_later_interaction_supersedes_blur() {
        let mut filter = LocationFilter::default();
        filter.set_query("ber");
        let stale = filter.blur();
        filter.focus();
        filter.set_query("berl");
        assert!(!filter.close_after_blur(stale));
        assert!(filter.is_open());

        let fresh = filter.blur();
        assert!(filter.close_after_blur(fresh));
        assert!(!filter.is_open());
    }
}
