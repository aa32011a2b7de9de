//! Duration join across two origins.

use std::collections::HashSet;

use crate::domain::{Iata, RouteIndex};

/// One row of the comparison result: a destination served from both
/// origins, with the scheduled duration from each where known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonDestinationRow {
    /// The common destination airport.
    pub destination: Iata,

    /// Scheduled duration from the first origin, in minutes.
    pub duration_from_first: Option<u32>,

    /// Scheduled duration from the second origin, in minutes.
    pub duration_from_second: Option<u32>,

    /// Absolute difference, present only when both durations are known.
    pub duration_difference: Option<u32>,

    /// Destination airport display name, when metadata is available.
    pub display_name: Option<String>,

    /// Destination airport location, when metadata is available.
    pub location: Option<String>,
}

/// First-match duration from `origin` to `destination`.
///
/// The source data legitimately lists some destinations more than once
/// with different durations; the first stored entry wins, even when its
/// duration is absent and a later entry has one. This replicates the
/// reference resolution policy exactly.
fn first_duration(index: &RouteIndex, origin: &Iata, destination: &Iata) -> Option<u32> {
    index
        .get(origin)?
        .routes
        .iter()
        .find(|route| route.destination == *destination)?
        .duration_minutes
}

/// Build one comparison row per common destination.
///
/// Row order follows the set's iteration order; callers that need
/// deterministic output sort afterwards. An origin with no stored route
/// to a destination leaves that duration absent rather than failing,
/// even though the intersection should normally prevent the case.
pub fn join(
    index: &RouteIndex,
    first: &Iata,
    second: &Iata,
    common: &HashSet<Iata>,
) -> Vec<CommonDestinationRow> {
    common
        .iter()
        .map(|destination| {
            let from_first = first_duration(index, first, destination);
            let from_second = first_duration(index, second, destination);
            let difference = match (from_first, from_second) {
                (Some(a), Some(b)) => Some(a.abs_diff(b)),
                _ => None,
            };

            CommonDestinationRow {
                destination: *destination,
                duration_from_first: from_first,
                duration_from_second: from_second,
                duration_difference: difference,
                display_name: None,
                location: None,
            }
        })
        .collect()
}

/// Keep rows whose duration difference is known and at most `max_minutes`.
///
/// Rows with an unknown difference are dropped: the filter answers "which
/// destinations differ by at most this much", which an unknown difference
/// cannot satisfy.
pub fn filter_by_max_difference(
    rows: Vec<CommonDestinationRow>,
    max_minutes: u32,
) -> Vec<CommonDestinationRow> {
    rows.into_iter()
        .filter(|row| row.duration_difference.is_some_and(|d| d <= max_minutes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn set(codes: &[&str]) -> HashSet<Iata> {
        codes.iter().map(|s| iata(s)).collect()
    }

    fn sample_index() -> RouteIndex {
        let mut index = RouteIndex::new();
        index.add_route(iata("SEA"), Route::with_duration(iata("BOS"), 45));
        index.add_route(iata("SEA"), Route::with_duration(iata("LAX"), 120));
        index.add_route(iata("BOS"), Route::with_duration(iata("SEA"), 45));
        index.add_route(iata("BOS"), Route::with_duration(iata("LAX"), 300));
        index
    }

    #[test]
    fn joins_durations_and_difference() {
        let index = sample_index();
        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["LAX"]));

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.destination, iata("LAX"));
        assert_eq!(row.duration_from_first, Some(120));
        assert_eq!(row.duration_from_second, Some(300));
        assert_eq!(row.duration_difference, Some(180));
    }

    #[test]
    fn first_match_wins_on_duplicate_routes() {
        let mut index = sample_index();
        index.add_route(iata("SEA"), Route::with_duration(iata("ORD"), 50));
        index.add_route(iata("SEA"), Route::with_duration(iata("ORD"), 60));
        index.add_route(iata("BOS"), Route::with_duration(iata("ORD"), 110));

        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["ORD"]));
        assert_eq!(rows[0].duration_from_first, Some(50));
    }

    #[test]
    fn first_match_without_duration_stays_absent() {
        // The first matching route wins even when it has no duration and
        // a later entry does
        let mut index = RouteIndex::new();
        index.add_route(iata("SEA"), Route::without_duration(iata("ORD")));
        index.add_route(iata("SEA"), Route::with_duration(iata("ORD"), 60));
        index.add_route(iata("BOS"), Route::with_duration(iata("ORD"), 110));

        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["ORD"]));
        assert_eq!(rows[0].duration_from_first, None);
        assert_eq!(rows[0].duration_difference, None);
    }

    #[test]
    fn missing_duration_leaves_difference_absent() {
        let mut index = RouteIndex::new();
        index.add_route(iata("SEA"), Route::without_duration(iata("LAX")));
        index.add_route(iata("BOS"), Route::with_duration(iata("LAX"), 300));

        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["LAX"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].duration_from_first, None);
        assert_eq!(rows[0].duration_from_second, Some(300));
        assert_eq!(rows[0].duration_difference, None);
    }

    #[test]
    fn destination_missing_from_one_origin_does_not_panic() {
        // Shouldn't happen when the set came from an intersection, but
        // the joiner must stay total
        let index = sample_index();
        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["BOS"]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].duration_from_first, Some(45));
        assert_eq!(rows[0].duration_from_second, None);
        assert_eq!(rows[0].duration_difference, None);
    }

    #[test]
    fn unknown_origin_yields_absent_durations() {
        let index = sample_index();
        let rows = join(&index, &iata("JFK"), &iata("BOS"), &set(&["LAX"]));

        assert_eq!(rows[0].duration_from_first, None);
        assert_eq!(rows[0].duration_from_second, Some(300));
    }

    #[test]
    fn one_row_per_common_destination() {
        let index = sample_index();
        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["LAX", "SEA"]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn filter_keeps_rows_within_threshold() {
        let index = sample_index();
        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["LAX"]));

        assert_eq!(filter_by_max_difference(rows.clone(), 180).len(), 1);
        assert!(filter_by_max_difference(rows, 179).is_empty());
    }

    #[test]
    fn filter_drops_rows_with_unknown_difference() {
        let mut index = RouteIndex::new();
        index.add_route(iata("SEA"), Route::without_duration(iata("LAX")));
        index.add_route(iata("BOS"), Route::with_duration(iata("LAX"), 300));

        let rows = join(&index, &iata("SEA"), &iata("BOS"), &set(&["LAX"]));
        assert!(filter_by_max_difference(rows, u32::MAX).is_empty());
    }
}
