//! Flat tabular routes parsing.
//!
//! Headerless rows with nine columns: airline, airline id, source
//! airport, source airport id, destination airport, destination airport
//! id, codeshare, stops, equipment. Only the source and destination
//! columns are consumed. Missing values appear as `\N`.
//!
//! This encoding carries no durations and no airport display data, so
//! every route decodes without a duration and no metadata is available.

use csv::ReaderBuilder;
use tracing::debug;

use crate::domain::{Iata, Route, RouteIndex};

use super::error::FetchError;

/// Column positions in the flat encoding.
const SOURCE_COL: usize = 2;
const DESTINATION_COL: usize = 4;

/// Parse the flat tabular payload into a route index.
///
/// Rows whose source or destination column is missing or not a valid
/// IATA code (including `\N` null markers and ICAO-length codes) are
/// skipped. A payload that yields no routes at all is reported as a
/// parse failure: the tabular reader accepts almost any text, so an
/// empty result is the only signal that the payload was not the routes
/// table.
pub(super) fn parse(payload: &str) -> Result<RouteIndex, FetchError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(payload.as_bytes());

    let mut index = RouteIndex::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| FetchError::Parse {
            message: format!("invalid tabular row: {e}"),
        })?;

        let source = match record.get(SOURCE_COL).map(Iata::parse) {
            Some(Ok(code)) => code,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let destination = match record.get(DESTINATION_COL).map(Iata::parse) {
            Some(Ok(code)) => code,
            _ => {
                skipped += 1;
                continue;
            }
        };

        index.add_route(source, Route::without_duration(destination));
    }

    if skipped > 0 {
        debug!(skipped, "skipped tabular rows without usable airport codes");
    }

    if index.is_empty() {
        return Err(FetchError::Parse {
            message: "no routes found in tabular payload".to_string(),
        });
    }

    Ok(index)
}
