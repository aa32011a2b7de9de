//! Common-destination flight comparison.
//!
//! Answers: "which airports can I fly to directly from both of these
//! two airports, and how do the scheduled flight times compare?"

pub mod dataset;
pub mod domain;
pub mod query;
