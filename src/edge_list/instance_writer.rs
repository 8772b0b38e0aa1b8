use std::io::{ErrorKind, Write};

use itertools::Itertools;

use super::{raise_error_unless, Result};
use crate::graph::{Edge, Node, NumEdges, NumNodes};

/// Writes `edges` sorted, deduplicated and 1-indexed; node ids are not compacted.
pub fn edge_list_writer<W: Write>(
    mut writer: W,
    problem_id: &str,
    edges: impl Iterator<Item = Edge>,
) -> Result<(NumNodes, NumEdges)> {
    let edges: Vec<Edge> = edges.sorted_unstable().dedup().collect();

    raise_error_unless!(!edges.is_empty(), ErrorKind::InvalidInput, "No edges to write");
    raise_error_unless!(
        edges.iter().all(|e| e.lo() >= 0),
        ErrorKind::InvalidInput,
        "Edge with negative node id cannot be written"
    );
    raise_error_unless!(
        edges.iter().all(|e| e.hi() < Node::MAX),
        ErrorKind::InvalidInput,
        "Edge with node id too large for a 1-indexed edge list"
    );

    let num_nodes = edges.iter().map(Edge::hi).max().unwrap_or(0) as NumNodes + 1;
    let num_edges = edges.len();

    writeln!(writer, "p {problem_id} {num_nodes} {num_edges}")?;

    for edge in edges {
        writeln!(writer, "{} {}", edge.lo() + 1, edge.hi() + 1)?;
    }

    Ok((num_nodes, num_edges as NumEdges))
}
