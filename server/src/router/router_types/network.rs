//! The dispatch network: a directed graph of road segments together
//! with its transpose.
//!
//! The forward graph answers "how do I get from `u` to `v`", the
//! reversed graph lets a single search started at the destination
//! reach every possible origin. Both are petgraph arenas that share
//! node indices, and both are built once in [`Network::new`].
use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};

use super::segment::{Segment, SegmentAttributes};
use crate::router::RouterError;

/// Caller supplied graph: node -> neighbour -> segment attributes.
///
/// The nested map shape guarantees at most one segment per ordered
/// pair of nodes.
pub type Adjacency = BTreeMap<String, BTreeMap<String, SegmentAttributes>>;

/// A directed, segment-attributed graph and its cached reverse.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) graph: DiGraph<String, Segment>,
    pub(crate) reversed: DiGraph<String, Segment>,
    pub(crate) node_indices: HashMap<String, NodeIndex>,
}

impl Network {
    /// Build a network from an adjacency map.
    ///
    /// The vertex set is derived from both endpoints of every segment,
    /// so sinks without outgoing segments are included. Node indices are
    /// handed out in lexicographic order of the identifiers, which means
    /// comparing two [`NodeIndex`] values compares their identifiers.
    ///
    /// # Errors
    /// [`RouterError::MalformedEdge`] if a segment payload is missing a
    /// required field or holds a negative or non-finite value.
    pub fn new(adjacency: &Adjacency) -> Result<Network, RouterError> {
        router_info!("(new) [1/3] Collecting vertices...");
        let vertices: BTreeSet<&String> = adjacency
            .iter()
            .flat_map(|(from, neighbours)| std::iter::once(from).chain(neighbours.keys()))
            .collect();

        let mut graph = DiGraph::with_capacity(vertices.len(), 0);
        let mut node_indices = HashMap::with_capacity(vertices.len());
        for vertex in vertices {
            let index = graph.add_node(vertex.clone());
            node_indices.insert(vertex.clone(), index);
        }

        router_info!("(new) [2/3] Building segments...");
        for (from, neighbours) in adjacency {
            let from_index = node_indices[from];
            for (to, attributes) in neighbours {
                let segment = Segment::try_from_attributes(from, to, attributes)?;
                graph.add_edge(from_index, node_indices[to], segment);
            }
        }

        router_info!("(new) [3/3] Reversing the graph...");
        let mut reversed = graph.clone();
        reversed.reverse();

        router_debug!(
            "(new) network ready with {} vertices and {} segments.",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Network {
            graph,
            reversed,
            node_indices,
        })
    }

    /// Get the NodeIndex of a node identifier.
    pub fn get_node_index(&self, node: &str) -> Option<NodeIndex> {
        self.node_indices.get(node).copied()
    }

    /// Get a node identifier by NodeIndex.
    pub fn get_node_by_id(&self, index: NodeIndex) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    /// All vertices in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .map(move |index| self.graph[index].as_str())
    }

    /// Return the number of vertices.
    pub fn get_node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of segments.
    pub fn get_edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The segment `from -> to` of the forward graph, if any.
    pub fn segment(&self, from: &str, to: &str) -> Option<&Segment> {
        let from = self.get_node_index(from)?;
        let to = self.get_node_index(to)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge)
    }

    /// Outgoing segments of `node` in the forward graph.
    pub fn forward_segments(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, Segment>> {
        self.graph.edges(node)
    }

    /// Outgoing segments of `node` in the reversed graph, that is the
    /// forward segments entering `node` with their endpoints swapped.
    pub fn reversed_segments(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, Segment>> {
        self.reversed.edges(node)
    }

    /// The reversed graph itself.
    pub fn reversed(&self) -> &DiGraph<String, Segment> {
        &self.reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::router_utils::mock;
    use crate::test_util::tunis_network;
    use petgraph::visit::EdgeRef;

    #[test]
    fn test_vertex_set_includes_sinks() {
        let network = tunis_network();

        assert_eq!(network.get_node_count(), 10);
        assert_eq!(network.get_edge_count(), 11);
        assert!(network.get_node_index(mock::EMERGENCY_SITE).is_some());

        let Some(sink) = network.get_node_index(mock::EMERGENCY_SITE) else {
            panic!("sink should be part of the vertex set");
        };
        assert_eq!(network.forward_segments(sink).count(), 0);
        assert_eq!(network.reversed_segments(sink).count(), 5);
    }

    #[test]
    fn test_sink_only_declared_as_neighbour() {
        let mut adjacency = Adjacency::new();
        adjacency
            .entry("a".to_string())
            .or_default()
            .insert("b".to_string(), SegmentAttributes::new(1.0, 1.0, (0.0, 0.0, 0.0)));

        let Ok(network) = Network::new(&adjacency) else {
            panic!("valid adjacency");
        };
        assert_eq!(network.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_node_indices_follow_identifier_order() {
        let network = tunis_network();

        let names: Vec<&str> = network.nodes().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        for pair in names.windows(2) {
            let (Some(a), Some(b)) = (
                network.get_node_index(pair[0]),
                network.get_node_index(pair[1]),
            ) else {
                panic!("nodes should be indexed");
            };
            assert!(a < b);
        }
    }

    #[test]
    fn test_reversal_correctness() {
        let network = tunis_network();

        assert_eq!(
            network.graph.edge_count(),
            network.reversed.edge_count()
        );

        for edge in network.graph.edge_references() {
            let found: Vec<_> = network
                .reversed_segments(edge.target())
                .filter(|reversed| reversed.target() == edge.source())
                .collect();

            assert_eq!(found.len(), 1);
            assert_eq!(found[0].weight(), edge.weight());
        }

        for edge in network.reversed.edge_references() {
            let Some(forward) = network.graph.find_edge(edge.target(), edge.source()) else {
                panic!("reversed edge without a forward counterpart");
            };
            assert_eq!(network.graph.edge_weight(forward), Some(edge.weight()));
        }
    }

    #[test]
    fn test_segment_lookup() {
        let network = tunis_network();

        let Some(segment) = network.segment("Mongi_Slim", "Ain_Zaghouan") else {
            panic!("segment should exist");
        };
        assert_eq!(segment.time, 3.0);
        assert_eq!(segment.cost, 0.76);

        assert!(network.segment("Ain_Zaghouan", "Mongi_Slim").is_none());
        assert!(network.segment("Mongi_Slim", "Unknown").is_none());
    }

    #[test]
    fn test_malformed_edge() {
        let mut adjacency = Adjacency::new();
        adjacency.entry("a".to_string()).or_default().insert(
            "b".to_string(),
            SegmentAttributes {
                time: Some(1.0),
                cost: None,
                risk: None,
            },
        );

        let Err(RouterError::MalformedEdge { from, to, field }) = Network::new(&adjacency) else {
            panic!("expected a malformed edge error");
        };
        assert_eq!(from, "a");
        assert_eq!(to, "b");
        assert_eq!(field, "cost");
    }

    #[test]
    fn test_empty_network() {
        let Ok(network) = Network::new(&Adjacency::new()) else {
            panic!("empty adjacency is valid");
        };
        assert_eq!(network.get_node_count(), 0);
        assert_eq!(network.get_edge_count(), 0);
    }
}
