//! Source/target bookkeeping for the converter page.
//!
//! Nothing here performs a time-zone conversion; it only records what the
//! "From" and "To" selectors report.

use crate::selector::SelectorEvent;

/// Which side of the converter a selector belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub fn title(&self) -> &'static str {
        match self {
            Side::Source => "From",
            Side::Target => "To",
        }
    }

    /// Target times are display-only.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Side::Target)
    }
}

/// Latest location and time for one side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub location: String,
    pub time: String,
}

impl Endpoint {
    pub fn is_filled(&self) -> bool {
        !self.location.trim().is_empty() && !self.time.is_empty()
    }
}

/// What the page currently knows about both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeConverter {
    source: Endpoint,
    target: Endpoint,
}

impl TimeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &Endpoint {
        &self.source
    }

    pub fn target(&self) -> &Endpoint {
        &self.target
    }

    pub fn endpoint(&self, side: Side) -> &Endpoint {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    fn endpoint_mut(&mut self, side: Side) -> &mut Endpoint {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }

    /// Record an event reported by the selector on `side`.
    pub fn record(&mut self, side: Side, event: SelectorEvent) {
        let endpoint = self.endpoint_mut(side);
        match event {
            SelectorEvent::LocationChanged(location) => endpoint.location = location,
            SelectorEvent::TimeChanged(time) => endpoint.time = time,
        }
        let endpoint = self.endpoint(side);
        tracing::debug!(
            ?side,
            location = %endpoint.location,
            time = %endpoint.time,
            "converter input recorded"
        );
    }

    /// Source location and time are both set.
    ///
    /// This is the point at which a real converter would compute the
    /// target time; no lookup is wired up.
    pub fn pending_conversion(&self) -> bool {
        self.source.is_filled()
    }
}
