//! Route metrics.
//!
//! Replays a route against the forward graph and splits its composite
//! cost back into travel time, monetary cost and weighted risk. The
//! result is used for reporting and to cross-check the distances found
//! by the search.
use serde::Serialize;

use crate::router::router_types::{
    network::Network,
    weights::{RiskComponents, Weights},
};

/// Totals of a route, criterion by criterion.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    /// Summed travel time.
    pub total_time: f64,

    /// Summed monetary cost.
    pub total_cost: f64,

    /// Summed weighted risk contributions.
    pub risk_components: RiskComponents,

    /// Consecutive route pairs with no forward segment. These pairs
    /// contribute nothing to the totals.
    pub missing_segments: Vec<(String, String)>,
}

impl RouteMetrics {
    /// Recombine the totals into the composite cost of the route.
    pub fn composite(&self, weights: &Weights) -> f64 {
        weights.combine(self.total_time, self.total_cost, &self.risk_components)
    }
}

/// Accumulate the metrics of `route` over the forward graph.
///
/// A consecutive pair without a forward segment is logged, recorded in
/// [`RouteMetrics::missing_segments`] and otherwise skipped. Routes
/// produced by the search never contain such a pair.
pub fn route_metrics(network: &Network, weights: &Weights, route: &[String]) -> RouteMetrics {
    let mut metrics = RouteMetrics::default();

    for pair in route.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let Some(segment) = network.segment(from, to) else {
            router_warn!(
                "(route_metrics) no segment {} -> {} in the network, route and graph disagree.",
                from,
                to
            );
            metrics.missing_segments.push((from.clone(), to.clone()));
            continue;
        };

        metrics.total_time += segment.time;
        metrics.total_cost += segment.cost;
        metrics
            .risk_components
            .add(&weights.risk_components(&segment.risk));
    }

    router_debug!("(route_metrics) {:?}: {:?}", route, metrics);
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::tunis_network;

    fn route(nodes: &[&str]) -> Vec<String> {
        nodes.iter().map(|node| node.to_string()).collect()
    }

    #[test]
    fn test_metrics_of_reference_route() {
        let network = tunis_network();
        let weights = Weights::default();

        let metrics = route_metrics(
            &network,
            &weights,
            &route(&["Mongi_Slim", "Ain_Zaghouan", "Tunisia_Mall"]),
        );

        assert_eq!(metrics.total_time, 9.0);
        assert!((metrics.total_cost - 2.59).abs() < 1e-9);
        assert!((metrics.risk_components.network - 0.284 * 0.623 * (0.4 + 0.6)).abs() < 1e-12);
        assert!((metrics.risk_components.gps - 0.284 * 0.239 * (0.5 + 0.7)).abs() < 1e-12);
        assert!((metrics.risk_components.data - 0.284 * 0.137 * (0.3 + 0.5)).abs() < 1e-12);
        assert!((metrics.composite(&weights) - 6.1091496).abs() < 1e-9);
        assert!(metrics.missing_segments.is_empty());
    }

    #[test]
    fn test_single_node_route() {
        let network = tunis_network();
        let metrics = route_metrics(&network, &Weights::default(), &route(&["Tunisia_Mall"]));

        assert_eq!(metrics, RouteMetrics::default());
        assert_eq!(metrics.composite(&Weights::default()), 0.0);
    }

    #[test]
    fn test_missing_segment_is_reported() {
        let network = tunis_network();
        let weights = Weights::default();

        // reversed direction: Tunisia_Mall -> Ain_Zaghouan does not exist
        let metrics = route_metrics(
            &network,
            &weights,
            &route(&["Mongi_Slim", "Ain_Zaghouan", "Tunisia_Mall", "Ain_Zaghouan"]),
        );

        assert_eq!(metrics.total_time, 9.0);
        assert_eq!(
            metrics.missing_segments,
            vec![("Tunisia_Mall".to_string(), "Ain_Zaghouan".to_string())]
        );
    }
}
