//! Structured per-airport dataset parsing.
//!
//! The payload is a JSON object keyed by airport code. Each entry carries
//! the airport's display fields and a `routes` array of outbound routes
//! with scheduled durations in minutes. DTOs use `Option` liberally
//! because the dataset omits fields rather than sending nulls.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AirportRecord, Iata, Route, RouteIndex};

use super::error::FetchError;

/// One airport entry in the structured dataset.
#[derive(Debug, Deserialize)]
struct AirportEntry {
    /// Airport name, e.g. "Seattle-Tacoma International Airport".
    name: Option<String>,

    /// City the airport serves.
    city_name: Option<String>,

    /// Country the airport is in.
    country: Option<String>,

    /// Outbound routes; missing in entries with no known departures.
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

/// One outbound route in an airport entry.
#[derive(Debug, Deserialize)]
struct RouteEntry {
    /// Destination airport code.
    iata: Option<String>,

    /// Scheduled flight duration in minutes.
    min: Option<u32>,
}

/// Parse the structured JSON payload into a route index.
///
/// Airport keys failing IATA validation and routes without a destination
/// code are skipped; either would otherwise poison the whole dataset over
/// a handful of bad entries.
pub(super) fn parse(payload: &str) -> Result<RouteIndex, FetchError> {
    let entries: HashMap<String, AirportEntry> =
        serde_json::from_str(payload).map_err(|e| FetchError::Parse {
            message: format!("invalid airport dataset: {e}"),
        })?;

    let mut index = RouteIndex::new();
    let mut skipped_airports = 0usize;
    let mut skipped_routes = 0usize;

    for (code, entry) in entries {
        // Some mirrors serve lowercase keys; normalize before validating
        let code = match Iata::parse(&code.to_uppercase()) {
            Ok(code) => code,
            Err(_) => {
                skipped_airports += 1;
                continue;
            }
        };

        let mut routes = Vec::with_capacity(entry.routes.len());
        for route in entry.routes {
            let destination = match route.iata.as_deref().map(Iata::parse) {
                Some(Ok(code)) => code,
                _ => {
                    skipped_routes += 1;
                    continue;
                }
            };
            routes.push(Route {
                destination,
                duration_minutes: route.min,
            });
        }

        let location = match (entry.city_name, entry.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city),
            (None, Some(country)) => Some(country),
            (None, None) => None,
        };

        index.insert(
            code,
            AirportRecord {
                routes,
                display_name: entry.name,
                location,
            },
        );
    }

    if skipped_airports > 0 || skipped_routes > 0 {
        debug!(
            skipped_airports,
            skipped_routes, "skipped entries without usable airport codes"
        );
    }

    Ok(index)
}
