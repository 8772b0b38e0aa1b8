use std::collections::BTreeSet;

use serde::Serialize;

use super::{edge::node_in_range, traversal::SearchSummary, Edge, Node, NumNodes};

/// Adjacency-list graph with a fixed number of node slots.
///
/// Every undirected edge is stored as two half-edges. Insertion is append-only
/// and unchecked: duplicates are kept as parallel half-edges.
#[derive(Debug, Clone)]
pub struct Graph {
    max_num_nodes: NumNodes,
    neighbors: Vec<Vec<usize>>,
    degrees: Vec<NumNodes>,
    edges: Vec<(Node, Node)>,
    pub(super) last_search: SearchSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStats {
    pub average_degree: f64,
}

impl Graph {
    pub fn new(max_num_nodes: NumNodes) -> Self {
        Self {
            max_num_nodes,
            neighbors: vec![Vec::new(); max_num_nodes],
            degrees: vec![0; max_num_nodes],
            edges: Vec::new(),
            last_search: SearchSummary::default(),
        }
    }

    pub fn max_num_nodes(&self) -> NumNodes {
        self.max_num_nodes
    }

    /// Raw `(u, v)` pairs in insertion order, duplicates included.
    pub fn edges(&self) -> &[(Node, Node)] {
        &self.edges
    }

    pub fn degree(&self, node: Node) -> NumNodes {
        self.degrees[self.slot(node)]
    }

    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors[self.slot(node)].iter().map(|&u| u as Node)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        let (u, v) = edge.ends();
        self.add_edge_uv(u, v);
        self.edges.push((u, v));
    }

    /// Inserts both half-edges of `{u, v}` without recording it in [`Graph::edges`].
    ///
    /// # Panics
    /// If either endpoint lies outside `[0, max_num_nodes)`.
    pub fn add_edge_uv(&mut self, u: Node, v: Node) {
        let (u, v) = (self.slot(u), self.slot(v));
        self.add_directed_edge(u, v);
        self.add_directed_edge(v, u);
    }

    fn add_directed_edge(&mut self, u: usize, v: usize) {
        self.degrees[u] += 1;
        self.neighbors[u].push(v);
    }

    /// Maps a node id onto its storage slot; out-of-range ids violate the caller's contract.
    pub(super) fn slot(&self, node: Node) -> usize {
        assert!(
            node_in_range(node, self.max_num_nodes),
            "node {node} outside of [0, {}); edges must be checked before insertion",
            self.max_num_nodes
        );
        node as usize
    }

    pub(super) fn adjacent(&self, slot: usize) -> &[usize] {
        &self.neighbors[slot]
    }

    pub(super) fn slot_degree(&self, slot: usize) -> NumNodes {
        self.degrees[slot]
    }

    /// Rebuilds the set of distinct undirected edges from the adjacency lists.
    pub fn get_edge_set(&self) -> BTreeSet<Edge> {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(v, nbs)| nbs.iter().map(move |&u| Edge::new(v as Node, u as Node)))
            .collect()
    }

    /// Node ids with at least one incident edge, in ascending order.
    pub fn get_vertices(&self) -> Vec<Node> {
        self.degrees
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d > 0)
            .map(|(v, _)| v as Node)
            .collect()
    }

    /// Mean degree over all node slots, isolated ones included.
    pub fn stats(&self) -> GraphStats {
        let average_degree = if self.max_num_nodes == 0 {
            0.0
        } else {
            self.degrees.iter().sum::<NumNodes>() as f64 / self.max_num_nodes as f64
        };

        GraphStats { average_degree }
    }
}
