//! Common-destination query pipeline.
//!
//! Composes the steps that answer the core question: fetch a route index,
//! build each origin's destination set, intersect them, join in per-origin
//! durations, and enrich the rows with display metadata.
//!
//! Only a dataset fetch failure aborts a query. Everything else — unknown
//! airports, missing durations, missing metadata — degrades to empty or
//! absent values.

mod destinations;
mod join;
mod metadata;

pub use destinations::{common, destinations};
pub use join::{CommonDestinationRow, filter_by_max_difference, join};
pub use metadata::{AirportMetadata, extract};

use crate::dataset::{DatasetClient, FetchError};
use crate::domain::{Iata, RouteIndex};

/// Top-level result of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Joined comparison rows, one per common destination.
    Rows(Vec<CommonDestinationRow>),

    /// No route data for this origin, either because the airport is not
    /// in the dataset or because it has no outbound routes.
    NoRoutesFrom(Iata),

    /// Both origins have routes but share no destination.
    NoCommonDestinations,
}

/// Run the pure query pipeline against an already-built index.
///
/// The first origin is checked before the second, so when both lack
/// route data the outcome names the first.
pub fn evaluate(index: &RouteIndex, first: &Iata, second: &Iata) -> QueryOutcome {
    let from_first = destinations(index, first);
    if from_first.is_empty() {
        return QueryOutcome::NoRoutesFrom(*first);
    }

    let from_second = destinations(index, second);
    if from_second.is_empty() {
        return QueryOutcome::NoRoutesFrom(*second);
    }

    let shared = common(&from_first, &from_second);
    if shared.is_empty() {
        return QueryOutcome::NoCommonDestinations;
    }

    let mut rows = join(index, first, second, &shared);

    let metadata = extract(index);
    for row in &mut rows {
        if let Some(meta) = metadata.get(&row.destination) {
            row.display_name = Some(meta.display_name.clone());
            row.location = meta.location.clone();
        }
    }

    QueryOutcome::Rows(rows)
}

/// Fetch the dataset and evaluate the query against it.
///
/// One fetch per query; a fetch failure aborts the whole query and
/// nothing partial is returned.
pub async fn run_query(
    client: &DatasetClient,
    first: &Iata,
    second: &Iata,
) -> Result<QueryOutcome, FetchError> {
    let index = client.fetch().await?;
    Ok(evaluate(&index, first, second))
}
