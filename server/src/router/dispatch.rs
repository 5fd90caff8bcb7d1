//! Pick the best origin among a set of candidates for one destination.
//!
//! The engine runs once from the destination; only afterwards are the
//! candidates inspected. The winner is the reachable candidate with the
//! lowest composite cost, and ties go to whichever the search settled
//! first.
use std::collections::{BTreeMap, HashSet};

use ordered_float::OrderedFloat;
use serde::Serialize;

use super::router_types::{
    network::{Adjacency, Network},
    router::engine::Router,
    weights::{RiskComponents, Weights},
};
use super::RouterError;

/// Everything known about one reachable candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateDetail {
    /// Composite cost from the candidate to the destination.
    pub cost: f64,

    /// Route from the candidate to the destination.
    pub route: Vec<String>,

    /// Summed travel time along the route.
    pub total_time: f64,

    /// Summed monetary cost along the route.
    pub total_cost: f64,

    /// Summed weighted risk contributions along the route.
    pub risk_components: RiskComponents,

    /// Position of the candidate in the search's visitation order.
    pub visit_rank: usize,
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispatch {
    /// The destination the query was made for.
    pub destination: String,

    /// The selected candidate.
    pub selected: String,

    /// Composite cost of the selected candidate.
    pub cost: f64,

    /// Route of the selected candidate.
    pub route: Vec<String>,

    /// Details of every reachable candidate.
    pub details: BTreeMap<String, CandidateDetail>,

    /// Distance of every vertex, infinite when unreachable.
    pub distances: BTreeMap<String, f64>,

    /// Predecessor of every vertex towards the destination.
    pub predecessors: BTreeMap<String, Option<String>>,
}

impl Dispatch {
    /// Details of the selected candidate.
    pub fn selected_detail(&self) -> Option<&CandidateDetail> {
        self.details.get(&self.selected)
    }

    /// Reachable candidates in increasing cost order, ties in visit
    /// order.
    pub fn ranked(&self) -> Vec<(&String, &CandidateDetail)> {
        let mut ranked: Vec<_> = self.details.iter().collect();
        ranked.sort_by_key(|(_, detail)| (OrderedFloat(detail.cost), detail.visit_rank));
        ranked
    }
}

impl Router {
    /// Select the candidate with the lowest composite cost to
    /// `destination`.
    ///
    /// Duplicate candidates are considered once. Unknown or unreachable
    /// candidates are left out of the details.
    ///
    /// # Errors
    /// [`RouterError::NoReachableCandidate`] when no candidate can reach
    /// the destination, including when `candidates` is empty.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        destination: &str,
        candidates: &[S],
    ) -> Result<Dispatch, RouterError> {
        router_info!(
            "(dispatch) destination {}, {} candidate(s).",
            destination,
            candidates.len()
        );

        let paths = self.search(destination);
        let wanted: HashSet<&str> = candidates.iter().map(AsRef::<str>::as_ref).collect();
        for (rank, node) in paths.visit_order().enumerate() {
            if wanted.contains(node) {
                router_info!(
                    "(dispatch) reached candidate {} at visit {} with cost {:.4}.",
                    node,
                    rank,
                    paths.distance(node)
                );
            }
        }

        let mut details = BTreeMap::new();

        for candidate in candidates {
            let candidate: &str = candidate.as_ref();
            if details.contains_key(candidate) {
                continue;
            }

            let (Some(route), Some(visit_rank)) = (paths.route(candidate), paths.visit_rank(candidate))
            else {
                router_debug!("(dispatch) candidate {} cannot reach {}.", candidate, destination);
                continue;
            };

            let metrics = self.metrics(&route);
            if !metrics.missing_segments.is_empty() {
                router_error!(
                    "(dispatch) route of {} is inconsistent with the network: {:?}",
                    candidate,
                    metrics.missing_segments
                );
            }

            let cost = paths.distance(candidate);
            router_debug!("(dispatch) candidate {} reachable with cost {:.4}.", candidate, cost);
            details.insert(
                candidate.to_string(),
                CandidateDetail {
                    cost,
                    route,
                    total_time: metrics.total_time,
                    total_cost: metrics.total_cost,
                    risk_components: metrics.risk_components,
                    visit_rank,
                },
            );
        }

        let Some((selected, detail)) = details
            .iter()
            .min_by_key(|(_, detail)| (OrderedFloat(detail.cost), detail.visit_rank))
        else {
            router_warn!("(dispatch) no candidate can reach {}.", destination);
            return Err(RouterError::NoReachableCandidate);
        };

        router_info!(
            "(dispatch) selected {} with cost {:.4}.",
            selected,
            detail.cost
        );

        Ok(Dispatch {
            destination: destination.to_string(),
            selected: selected.clone(),
            cost: detail.cost,
            route: detail.route.clone(),
            details: details.clone(),
            distances: paths.distances(),
            predecessors: paths.predecessors(),
        })
    }
}

/// Build a network from `graph` and dispatch with the default weights.
///
/// # Errors
/// [`RouterError::MalformedEdge`] if the graph is invalid,
/// [`RouterError::NoReachableCandidate`] if no candidate reaches
/// `destination`.
pub fn dispatch<S: AsRef<str>>(
    graph: &Adjacency,
    destination: &str,
    candidates: &[S],
) -> Result<Dispatch, RouterError> {
    let router = Router::new(Network::new(graph)?, Weights::default());
    router.dispatch(destination, candidates)
}
