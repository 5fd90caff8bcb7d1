//! Router module
//!
//! Multi-criteria routing over a dispatch network: one reverse
//! Dijkstra from the destination ranks every candidate origin at once.

#[macro_use]
pub mod macros;
pub mod dispatch;
pub mod router_types;
pub mod router_utils;

pub use dispatch::{dispatch, CandidateDetail, Dispatch};
pub use router_types::{
    network::{Adjacency, Network},
    router::engine::{Router, ShortestPaths},
    segment::{Risk, RiskAttributes, Segment, SegmentAttributes},
    weights::{RiskComponents, Weights},
};
pub use router_utils::metrics::RouteMetrics;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Error types for the router.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterError {
    /// A segment payload is missing a required field, or the field
    /// holds a negative or non-finite value.
    MalformedEdge {
        /// Origin of the segment.
        from: String,

        /// Target of the segment.
        to: String,

        /// Name of the offending field.
        field: &'static str,
    },

    /// None of the candidates can reach the destination.
    NoReachableCandidate,
}

impl Display for RouterError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            RouterError::MalformedEdge { from, to, field } => write!(
                f,
                "Malformed edge {} -> {}: missing or invalid '{}'.",
                from, to, field
            ),
            RouterError::NoReachableCandidate => write!(f, "No reachable candidate."),
        }
    }
}

impl std::error::Error for RouterError {}
