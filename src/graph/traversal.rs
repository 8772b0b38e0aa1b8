use serde::Serialize;
use tracing::{debug, trace};

use super::{Edge, Graph, Node, NumNodes};

/// Aggregate result of [`Graph::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub num_of_components: NumNodes,
    /// Nodes with nonzero degree.
    pub num_nodes: NumNodes,
    /// Nodes with degree exactly one.
    pub num_leaves: NumNodes,
    pub has_cycle: bool,
}

impl SearchSummary {
    pub fn edges_in_one_component(&self) -> bool {
        self.num_of_components == 1
    }
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    cursor: usize,
}

impl Graph {
    /// Counts components, non-isolated nodes and leaves, and detects cycles.
    /// The summary is also kept for the `num_*`/`has_cycle` accessors.
    pub fn search(&mut self) -> SearchSummary {
        let mut summary = SearchSummary::default();
        let mut visited = vec![false; self.max_num_nodes()];
        let mut stack = Vec::new();

        for root in 0..self.max_num_nodes() {
            let degree = self.slot_degree(root);
            if degree == 0 {
                continue;
            }

            summary.num_nodes += 1;
            if degree == 1 {
                summary.num_leaves += 1;
            }

            if !visited[root] {
                summary.num_of_components += 1;
                summary.has_cycle |= self.explore_component(root, &mut visited, &mut stack);
            }
        }

        debug!("Graph search finished: {summary:?}");
        self.last_search = summary;
        summary
    }

    // Neighbors are taken in the same order as a recursive walk; the parent is
    // skipped so the reverse half-edge of a tree edge is not a back edge.
    fn explore_component(
        &self,
        root: usize,
        visited: &mut [bool],
        stack: &mut Vec<Frame>,
    ) -> bool {
        let mut has_cycle = false;

        visited[root] = true;
        stack.push(Frame {
            node: root,
            parent: None,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = self.adjacent(frame.node).get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if Some(next) == frame.parent {
                continue;
            }

            if visited[next] {
                if !has_cycle {
                    trace!("Back edge ({},{}) closes a cycle", frame.node, next);
                }
                has_cycle = true;
            } else {
                let parent = frame.node;
                visited[next] = true;
                stack.push(Frame {
                    node: next,
                    parent: Some(parent),
                    cursor: 0,
                });
            }
        }

        has_cycle
    }

    /// Walks from `edge.hi()` (coming from `edge.lo()`), always taking the first
    /// neighbor other than the previous node, until it reaches a visited node.
    /// Returns `None` on a dead end; other branches are not tried.
    pub fn search_for_cycle_path(&self, edge: Edge) -> Option<Vec<Edge>> {
        let (start, first) = (self.slot(edge.lo()), self.slot(edge.hi()));

        let mut visited = vec![false; self.max_num_nodes()];
        visited[start] = true;
        visited[first] = true;

        let mut path = vec![edge];
        let (mut parent, mut node) = (start, first);

        loop {
            let next = *self.adjacent(node).iter().find(|&&u| u != parent)?;
            path.push(Edge::new(node as Node, next as Node));

            if visited[next] {
                trace!("Cycle path through {edge} closes at node {next}");
                return Some(path);
            }

            visited[next] = true;
            parent = node;
            node = next;
        }
    }

    pub fn last_search(&self) -> SearchSummary {
        self.last_search
    }

    pub fn num_of_components(&self) -> NumNodes {
        self.last_search.num_of_components
    }

    pub fn num_nodes(&self) -> NumNodes {
        self.last_search.num_nodes
    }

    pub fn num_leaves(&self) -> NumNodes {
        self.last_search.num_leaves
    }

    pub fn has_cycle(&self) -> bool {
        self.last_search.has_cycle
    }

    pub fn edges_in_one_component(&self) -> bool {
        self.last_search.edges_in_one_component()
    }
}
