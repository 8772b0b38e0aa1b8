use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::{Node, NumNodes};

/// Undirected edge stored as its canonical `(lo, hi)` pair.
///
/// Construction never fails; call [`Edge::check`] before handing the edge to a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge(Node, Node);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeError {
    #[error("node {node} out of range [0, {max_num_nodes}) in edge {edge}")]
    InvalidNodeRange {
        node: Node,
        max_num_nodes: NumNodes,
        edge: Edge,
    },

    #[error("self-loop not allowed in edge {edge}")]
    SelfLoop { edge: Edge },
}

impl Edge {
    pub fn new(u: Node, v: Node) -> Self {
        Self(u.min(v), u.max(v))
    }

    pub fn lo(&self) -> Node {
        self.0
    }

    pub fn hi(&self) -> Node {
        self.1
    }

    pub fn ends(&self) -> (Node, Node) {
        (self.0, self.1)
    }

    /// Returns the endpoint opposite to `node`, if `node` is incident to this edge.
    pub fn other(&self, node: Node) -> Option<Node> {
        if node == self.0 {
            Some(self.1)
        } else if node == self.1 {
            Some(self.0)
        } else {
            None
        }
    }

    /// Validates the edge against the node bound; range errors take precedence over self-loops.
    pub fn check(&self, max_num_nodes: NumNodes) -> Result<(), EdgeError> {
        for node in [self.0, self.1] {
            if !node_in_range(node, max_num_nodes) {
                return Err(EdgeError::InvalidNodeRange {
                    node,
                    max_num_nodes,
                    edge: *self,
                });
            }
        }

        if self.0 == self.1 {
            return Err(EdgeError::SelfLoop { edge: *self });
        }

        Ok(())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl From<(Node, Node)> for Edge {
    fn from((u, v): (Node, Node)) -> Self {
        Self::new(u, v)
    }
}

pub(crate) fn node_in_range(node: Node, max_num_nodes: NumNodes) -> bool {
    usize::try_from(node).map_or(false, |n| n < max_num_nodes)
}

/// Checks a batch of edges and reports the first invalid one.
pub fn validate_edges<'a>(
    edges: impl IntoIterator<Item = &'a Edge>,
    max_num_nodes: NumNodes,
) -> Result<(), EdgeError> {
    edges
        .into_iter()
        .try_for_each(|edge| edge.check(max_num_nodes))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    const MAX_NUM_NODES: NumNodes = 10;

    #[test]
    fn canonical_form_ignores_argument_order() {
        for u in 0..MAX_NUM_NODES as Node {
            for v in 0..MAX_NUM_NODES as Node {
                if u == v {
                    continue;
                }

                let (a, b) = (Edge::new(u, v), Edge::new(v, u));
                assert_eq!(a, b);
                assert_eq!(a.to_string(), b.to_string());
                assert!(a.lo() < a.hi());
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Edge::new(7, 2).to_string(), "(2,7)");
        assert_eq!(format!("{}", Edge::from((0, 1))), "(0,1)");
    }

    #[test]
    fn hash_agrees_with_equality() {
        let set: HashSet<Edge> = [Edge::new(1, 2), Edge::new(2, 1), Edge::new(1, 3)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Edge::new(3, 1)));
    }

    #[test]
    fn other_endpoint() {
        let edge = Edge::new(4, 1);
        assert_eq!(edge.other(1), Some(4));
        assert_eq!(edge.other(4), Some(1));
        assert_eq!(edge.other(2), None);
    }

    #[test]
    fn check_self_loop() {
        let edge = Edge::new(3, 3);
        assert_eq!(edge.check(MAX_NUM_NODES), Err(EdgeError::SelfLoop { edge }));
    }

    #[test]
    fn check_out_of_range() {
        let edge = Edge::new(-1, 0);
        assert_eq!(
            edge.check(MAX_NUM_NODES),
            Err(EdgeError::InvalidNodeRange {
                node: -1,
                max_num_nodes: MAX_NUM_NODES,
                edge
            })
        );

        let edge = Edge::new(0, MAX_NUM_NODES as Node);
        assert!(matches!(
            edge.check(MAX_NUM_NODES),
            Err(EdgeError::InvalidNodeRange { node, .. }) if node == MAX_NUM_NODES as Node
        ));
    }

    #[test]
    fn range_error_wins_over_self_loop() {
        assert!(matches!(
            Edge::new(-2, -2).check(MAX_NUM_NODES),
            Err(EdgeError::InvalidNodeRange { node: -2, .. })
        ));
    }

    #[test]
    fn check_accepts_all_valid_pairs() {
        for u in 0..MAX_NUM_NODES as Node {
            for v in (u + 1)..MAX_NUM_NODES as Node {
                assert!(Edge::new(u, v).check(MAX_NUM_NODES).is_ok());
            }
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Edge::new(0, 12).check(MAX_NUM_NODES).unwrap_err().to_string(),
            "node 12 out of range [0, 10) in edge (0,12)"
        );
        assert_eq!(
            Edge::new(5, 5).check(MAX_NUM_NODES).unwrap_err().to_string(),
            "self-loop not allowed in edge (5,5)"
        );
    }

    #[test]
    fn validate_batch_reports_first_error() {
        let edges = [Edge::new(0, 1), Edge::new(2, 2), Edge::new(0, 99)];
        assert_eq!(
            validate_edges(&edges, MAX_NUM_NODES),
            Err(EdgeError::SelfLoop {
                edge: Edge::new(2, 2)
            })
        );
        assert!(validate_edges(&edges[..1], MAX_NUM_NODES).is_ok());
    }
}
