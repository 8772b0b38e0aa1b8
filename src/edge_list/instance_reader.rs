use std::io::{BufRead, ErrorKind, Lines};

use super::{raise_error_unless, Result};
use crate::graph::{Edge, Node, NumEdges, NumNodes};

pub struct EdgeListReader<R> {
    lines: Lines<R>,
    problem_id: String,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut edge_reader = Self {
            lines: reader.lines(),
            problem_id: String::new(),
            number_of_nodes: 0,
            number_of_edges: 0,
        };

        (edge_reader.number_of_nodes, edge_reader.number_of_edges) = edge_reader.parse_header()?;
        Ok(edge_reader)
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    pub fn problem_id(&self) -> &str {
        &self.problem_id
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name),
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {}.", $name),
                ))
            }
        }
    }};
}

impl<R: BufRead> EdgeListReader<R> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with('c') || line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<(NumNodes, NumEdges)> {
        let Some(line) = self.next_non_comment_line()? else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                "No header found",
            ));
        };

        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next().map_or(false, |t| t.starts_with('p')),
            ErrorKind::InvalidData,
            "Invalid header found; line should start with p"
        );

        match parts.next() {
            Some(x) => {
                self.problem_id = x.to_string();
            }
            _ => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    "Invalid header; no problem id found",
                ));
            }
        }

        let number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        let number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line"
        );

        Ok((number_of_nodes, number_of_edges))
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid edge line; expected end of line"
        );

        let in_header_range =
            |x: Node| x >= 1 && usize::try_from(x).map_or(false, |x| x <= self.number_of_nodes);
        raise_error_unless!(
            in_header_range(from) && in_header_range(dest),
            ErrorKind::InvalidData,
            format!("Edge {from} {dest} refers to a node outside 1..={}", self.number_of_nodes)
        );

        Ok(Some(Edge::new(from - 1, dest - 1)))
    }
}
