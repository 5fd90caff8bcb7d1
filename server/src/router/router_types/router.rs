//! The core of the router library.
//!
//! The engine answers "which of many origins is cheapest to reach one
//! destination" with a single Dijkstra run: the search starts at the
//! destination and walks the reversed graph, so the distance it assigns
//! to a node is the composite cost of travelling from that node to the
//! destination in the forward graph.

/// The router engine module.
pub mod engine {
    use std::cmp::Reverse;
    use std::collections::{BTreeMap, BinaryHeap};

    use ordered_float::OrderedFloat;
    use petgraph::graph::NodeIndex;
    use petgraph::visit::{EdgeRef, VisitMap, Visitable};

    use crate::router::router_types::{network::Network, weights::Weights};
    use crate::router::router_utils::metrics::{route_metrics, RouteMetrics};

    /// A Router owns a network and the coefficients used to weigh its
    /// segments. Both are immutable once the router is built.
    #[derive(Debug, Clone)]
    pub struct Router {
        pub(crate) network: Network,
        pub(crate) weights: Weights,
    }

    /// Outcome of one search from a destination.
    ///
    /// Vectors are indexed by [`NodeIndex::index`].
    #[derive(Debug, Clone)]
    pub struct ShortestPaths<'a> {
        network: &'a Network,
        destination: Option<NodeIndex>,
        distances: Vec<f64>,
        predecessors: Vec<Option<NodeIndex>>,
        visit_order: Vec<NodeIndex>,
        visit_ranks: Vec<Option<usize>>,
    }

    impl Router {
        /// Creates a new router over `network`.
        pub fn new(network: Network, weights: Weights) -> Router {
            router_info!(
                "(new) router ready: {} vertices, {} segments, weights {:?}.",
                network.get_node_count(),
                network.get_edge_count(),
                weights
            );
            Router { network, weights }
        }

        /// The underlying network.
        pub fn network(&self) -> &Network {
            &self.network
        }

        /// The coefficients of the composite weight.
        pub fn weights(&self) -> &Weights {
            &self.weights
        }

        /// Run Dijkstra from `destination` over the reversed graph.
        ///
        /// The search runs until the queue is empty. Entries that share
        /// a tentative distance are popped in identifier order, so the
        /// visitation sequence is fully deterministic. Stale queue
        /// entries are skipped when popped instead of being removed.
        ///
        /// A destination that is not part of the network produces a
        /// result in which no node is reachable.
        pub fn search(&self, destination: &str) -> ShortestPaths<'_> {
            let reversed = self.network.reversed();
            let node_count = reversed.node_count();

            let mut distances = vec![f64::INFINITY; node_count];
            let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
            let mut visit_order = Vec::with_capacity(node_count);
            let mut visit_ranks: Vec<Option<usize>> = vec![None; node_count];
            let mut visited = reversed.visit_map();
            let mut queue = BinaryHeap::new();

            let Some(source) = self.network.get_node_index(destination) else {
                router_warn!(
                    "(search) destination {} is not part of the network.",
                    destination
                );

                return ShortestPaths {
                    network: &self.network,
                    destination: None,
                    distances,
                    predecessors,
                    visit_order,
                    visit_ranks,
                };
            };

            router_debug!("(search) running Dijkstra from {} on the reversed graph.", destination);
            distances[source.index()] = 0.0;
            queue.push(Reverse((OrderedFloat(0.0), source)));

            while let Some(Reverse((OrderedFloat(tentative), node))) = queue.pop() {
                if tentative > distances[node.index()] || !visited.visit(node) {
                    continue;
                }

                visit_ranks[node.index()] = Some(visit_order.len());
                visit_order.push(node);

                for segment in self.network.reversed_segments(node) {
                    let neighbour = segment.target();
                    if visited.is_visited(&neighbour) {
                        continue;
                    }

                    let candidate = distances[node.index()] + self.weights.composite(segment.weight());
                    if candidate < distances[neighbour.index()] {
                        distances[neighbour.index()] = candidate;
                        predecessors[neighbour.index()] = Some(node);
                        queue.push(Reverse((OrderedFloat(candidate), neighbour)));
                    }
                }
            }

            router_debug!(
                "(search) visited {} of {} vertices.",
                visit_order.len(),
                node_count
            );

            ShortestPaths {
                network: &self.network,
                destination: Some(source),
                distances,
                predecessors,
                visit_order,
                visit_ranks,
            }
        }

        /// Decompose the cost of `route` against the forward graph.
        pub fn metrics(&self, route: &[String]) -> RouteMetrics {
            route_metrics(&self.network, &self.weights, route)
        }
    }

    impl<'a> ShortestPaths<'a> {
        /// The destination the search started from, if it is part of
        /// the network.
        pub fn destination(&self) -> Option<&'a str> {
            self.destination
                .and_then(|index| self.network.get_node_by_id(index))
        }

        /// Composite cost from `node` to the destination, or infinity
        /// when the node is unknown or cannot reach the destination.
        pub fn distance(&self, node: &str) -> f64 {
            self.network
                .get_node_index(node)
                .map_or(f64::INFINITY, |index| self.distances[index.index()])
        }

        /// Whether `node` has a finite distance.
        pub fn is_reachable(&self, node: &str) -> bool {
            self.distance(node).is_finite()
        }

        /// The next hop from `node` towards the destination.
        pub fn predecessor(&self, node: &str) -> Option<&'a str> {
            let index = self.network.get_node_index(node)?;
            self.predecessors[index.index()]
                .and_then(|predecessor| self.network.get_node_by_id(predecessor))
        }

        /// Position of `node` in the visitation sequence.
        pub fn visit_rank(&self, node: &str) -> Option<usize> {
            let index = self.network.get_node_index(node)?;
            self.visit_ranks[index.index()]
        }

        /// Nodes in the order the search settled them.
        pub fn visit_order(&self) -> impl Iterator<Item = &'a str> + '_ {
            self.visit_order
                .iter()
                .filter_map(|index| self.network.get_node_by_id(*index))
        }

        /// Route from `node` to the destination, in forward reading
        /// order: the first element is `node`, the last one is the
        /// destination.
        ///
        /// Returns [`None`] when `node` cannot reach the destination.
        pub fn route(&self, node: &str) -> Option<Vec<String>> {
            if !self.is_reachable(node) {
                return None;
            }

            let mut route = Vec::new();
            let mut current = self.network.get_node_index(node);
            while let Some(index) = current {
                route.push(self.network.get_node_by_id(index)?.to_string());
                current = self.predecessors[index.index()];
            }

            Some(route)
        }

        /// Every vertex with its distance (infinity when unreachable).
        pub fn distances(&self) -> BTreeMap<String, f64> {
            self.network
                .nodes()
                .zip(self.distances.iter())
                .map(|(node, distance)| (node.to_string(), *distance))
                .collect()
        }

        /// Every vertex with its predecessor towards the destination.
        pub fn predecessors(&self) -> BTreeMap<String, Option<String>> {
            self.network
                .nodes()
                .map(|node| (node.to_string(), self.predecessor(node).map(str::to_string)))
                .collect()
        }
    }
}
