//! Route and airport record types.

use super::Iata;

/// A directed route from one airport to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Destination airport code.
    pub destination: Iata,

    /// Scheduled flight duration in minutes, when the source provides one.
    /// The flat dataset carries no durations at all.
    pub duration_minutes: Option<u32>,
}

impl Route {
    /// Create a route with a known duration.
    pub fn with_duration(destination: Iata, minutes: u32) -> Self {
        Self {
            destination,
            duration_minutes: Some(minutes),
        }
    }

    /// Create a route without a duration.
    pub fn without_duration(destination: Iata) -> Self {
        Self {
            destination,
            duration_minutes: None,
        }
    }
}

/// Everything the dataset knows about one airport.
///
/// Routes keep their source order; a destination may legitimately appear
/// more than once with different durations, and all entries are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirportRecord {
    /// Outbound routes in source order.
    pub routes: Vec<Route>,

    /// Human-readable airport name.
    pub display_name: Option<String>,

    /// Human-readable location, e.g. "Seattle, United States".
    pub location: Option<String>,
}
