//! Destination set construction and intersection.

use std::collections::HashSet;

use tracing::info;

use crate::domain::{Iata, RouteIndex};

/// Collect the distinct destinations reachable directly from `origin`.
///
/// An origin absent from the index produces an empty set rather than an
/// error; so does an origin that is present but has no outbound routes.
/// The two cases are distinguished only by the informational event
/// emitted here, since neither should abort a query.
pub fn destinations(index: &RouteIndex, origin: &Iata) -> HashSet<Iata> {
    match index.get(origin) {
        None => {
            info!(%origin, "airport not present in dataset");
            HashSet::new()
        }
        Some(record) => {
            if record.routes.is_empty() {
                info!(%origin, "airport has no outbound routes");
            }
            record.routes.iter().map(|route| route.destination).collect()
        }
    }
}

/// Destinations served directly from both origins.
pub fn common(first: &HashSet<Iata>, second: &HashSet<Iata>) -> HashSet<Iata> {
    first.intersection(second).copied().collect()
}
