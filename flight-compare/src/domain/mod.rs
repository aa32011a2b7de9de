//! Domain types for the flight comparison.
//!
//! This module contains the core domain model types that represent
//! validated route data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod index;
mod route;

pub use airport::{Iata, InvalidIata};
pub use index::RouteIndex;
pub use route::{AirportRecord, Route};
