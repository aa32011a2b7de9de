//! Airport display metadata lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Iata, RouteIndex};

/// Display fields for one airport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportMetadata {
    /// Human-readable airport name.
    pub display_name: String,

    /// Human-readable location, when the dataset carries one.
    pub location: Option<String>,
}

/// Build the airport code → display metadata map.
///
/// Entries without a display name are skipped, not failed: absence from
/// this map simply leaves the corresponding row's display fields empty.
pub fn extract(index: &RouteIndex) -> HashMap<Iata, AirportMetadata> {
    let mut map = HashMap::new();

    for (code, record) in index.iter() {
        match &record.display_name {
            Some(name) => {
                map.insert(
                    *code,
                    AirportMetadata {
                        display_name: name.clone(),
                        location: record.location.clone(),
                    },
                );
            }
            None => debug!(%code, "airport entry has no display name, skipping metadata"),
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AirportRecord;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    #[test]
    fn extracts_named_airports() {
        let mut index = RouteIndex::new();
        index.insert(
            iata("SEA"),
            AirportRecord {
                display_name: Some("Seattle-Tacoma International Airport".to_string()),
                location: Some("Seattle, United States".to_string()),
                ..Default::default()
            },
        );

        let map = extract(&index);
        let meta = map.get(&iata("SEA")).unwrap();
        assert_eq!(meta.display_name, "Seattle-Tacoma International Airport");
        assert_eq!(meta.location.as_deref(), Some("Seattle, United States"));
    }

    #[test]
    fn skips_airports_without_display_name() {
        let mut index = RouteIndex::new();
        index.insert(
            iata("SEA"),
            AirportRecord {
                display_name: Some("Seattle-Tacoma International Airport".to_string()),
                ..Default::default()
            },
        );
        index.insert(iata("BOS"), AirportRecord::default());

        let map = extract(&index);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&iata("SEA")));
        assert!(!map.contains_key(&iata("BOS")));
    }

    #[test]
    fn name_without_location_kept() {
        let mut index = RouteIndex::new();
        index.insert(
            iata("SEA"),
            AirportRecord {
                display_name: Some("Seattle-Tacoma".to_string()),
                ..Default::default()
            },
        );

        let map = extract(&index);
        assert!(map.get(&iata("SEA")).unwrap().location.is_none());
    }

    #[test]
    fn empty_index_yields_empty_map() {
        assert!(extract(&RouteIndex::new()).is_empty());
    }
}
