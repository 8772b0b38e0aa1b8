pub mod adjacency;
pub mod edge;
pub mod traversal;

pub use adjacency::{Graph, GraphStats};
pub use edge::{validate_edges, Edge, EdgeError};
pub use traversal::SearchSummary;

use tracing::debug;

pub type Node = i64;
pub type NumNodes = usize;
pub type NumEdges = u64;

/// Builds a graph with `max_num_nodes` slots and inserts `edges` in iteration order.
///
/// The edges are not validated here; run [`validate_edges`] first.
pub fn make_graph(edges: impl IntoIterator<Item = Edge>, max_num_nodes: NumNodes) -> Graph {
    let mut graph = Graph::new(max_num_nodes);
    for edge in edges {
        graph.add_edge(edge);
    }

    debug!(
        "Built graph with {} edges over {} node slots",
        graph.edges().len(),
        max_num_nodes
    );
    graph
}
