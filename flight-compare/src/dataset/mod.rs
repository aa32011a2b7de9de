//! Routes dataset fetching and decoding.
//!
//! Two public datasets serve the same logical content in different
//! encodings:
//! - a flat tabular file, one route per row, no durations or airport
//!   display data
//! - a structured JSON object keyed by airport code, with nested route
//!   lists carrying scheduled durations in minutes
//!
//! Both decode into the same [`RouteIndex`](crate::domain::RouteIndex).
//! The encoding is selected explicitly via configuration or sniffed from
//! the payload itself.

mod client;
mod error;
mod flat;
mod nested;

pub use client::{DatasetClient, DatasetConfig};
pub use error::FetchError;

use crate::domain::RouteIndex;

/// Wire encoding of the routes dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Headerless tabular rows (airline, airline id, source airport,
    /// source airport id, destination airport, destination airport id,
    /// codeshare, stops, equipment).
    Flat,

    /// JSON object keyed by airport code, each entry carrying display
    /// fields and a nested route list.
    Nested,
}

impl SourceFormat {
    /// Guess the encoding from the payload.
    ///
    /// A payload whose first non-whitespace byte is `{` is the structured
    /// JSON object; anything else is treated as tabular.
    pub fn sniff(payload: &str) -> SourceFormat {
        match payload.trim_start().as_bytes().first() {
            Some(b'{') => SourceFormat::Nested,
            _ => SourceFormat::Flat,
        }
    }
}

/// Decode a raw payload into a route index.
///
/// When `format` is `None` the encoding is sniffed from the payload.
/// Exposed separately from [`DatasetClient::fetch`] so decoding can be
/// exercised without a network round-trip.
pub fn decode(payload: &str, format: Option<SourceFormat>) -> Result<RouteIndex, FetchError> {
    match format.unwrap_or_else(|| SourceFormat::sniff(payload)) {
        SourceFormat::Flat => flat::parse(payload),
        SourceFormat::Nested => nested::parse(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_json_object() {
        assert_eq!(SourceFormat::sniff(r#"{"SEA": {}}"#), SourceFormat::Nested);
    }

    #[test]
    fn sniff_json_with_leading_whitespace() {
        assert_eq!(SourceFormat::sniff("\n  {}"), SourceFormat::Nested);
    }

    #[test]
    fn sniff_tabular_row() {
        assert_eq!(
            SourceFormat::sniff("2B,410,AER,2965,KZN,2990,,0,CR2"),
            SourceFormat::Flat
        );
    }

    #[test]
    fn sniff_empty_payload() {
        assert_eq!(SourceFormat::sniff(""), SourceFormat::Flat);
    }

    #[test]
    fn decode_sniffs_when_format_not_given() {
        let payload = r#"{"SEA": {"routes": [{"iata": "BOS", "min": 45}]}}"#;
        let index = decode(payload, None).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn decode_respects_explicit_format() {
        // A JSON payload forced through the flat parser yields no usable
        // rows, which is a parse failure rather than a silent empty index.
        let payload = r#"{"SEA": {"routes": []}}"#;
        let result = decode(payload, Some(SourceFormat::Flat));
        assert!(matches!(result, Err(FetchError::Parse { .. })));
    }

    #[test]
    fn decode_truncated_json_is_parse_error() {
        let payload = r#"{"SEA": {"routes": [{"iata""#;
        let result = decode(payload, Some(SourceFormat::Nested));
        assert!(matches!(result, Err(FetchError::Parse { .. })));
    }
}
