use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use dotenv::dotenv;
use itertools::Itertools;
use serde::Serialize;
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edge_graph::{
    config::GraphConfig,
    edge_list::{edge_list_writer, EdgeListReader},
    graph::{make_graph, validate_edges, Edge, GraphStats, Node, NumNodes, SearchSummary},
};

#[derive(StructOpt)]
struct Opts {
    #[structopt(flatten)]
    graph: GraphConfig,

    /// Edge list to analyse
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Recover a cycle through the edge between these two (1-indexed) nodes
    #[structopt(long, number_of_values = 2, value_names = &["U", "V"])]
    cycle_through: Option<Vec<Node>>,

    /// Write the deduplicated edge set to this file
    #[structopt(long, parse(from_os_str))]
    normalized_out: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report {
    problem_id: String,
    search: SearchSummary,
    edges_in_one_component: bool,
    num_vertices: usize,
    num_distinct_edges: usize,
    stats: GraphStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycle_path: Option<Vec<Edge>>,
}

fn read_edges(opts: &Opts) -> anyhow::Result<(String, Vec<Edge>)> {
    let file = File::open(&opts.input)
        .with_context(|| format!("Cannot open {}", opts.input.display()))?;
    let reader = EdgeListReader::try_new(BufReader::new(file))?;
    let problem_id = reader.problem_id().to_string();

    if reader.number_of_nodes() > opts.graph.max_num_nodes {
        warn!(
            "Header announces {} nodes but max_num_nodes is {}",
            reader.number_of_nodes(),
            opts.graph.max_num_nodes
        );
    }

    let edges = reader
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Cannot parse {}", opts.input.display()))?;
    Ok((problem_id, edges))
}

fn one_indexed_edge(u: Node, v: Node, max_num_nodes: NumNodes) -> anyhow::Result<Edge> {
    let (Some(u), Some(v)) = (u.checked_sub(1), v.checked_sub(1)) else {
        bail!("--cycle-through node ids must be 1-indexed");
    };
    let edge = Edge::new(u, v);
    edge.check(max_num_nodes)?;
    Ok(edge)
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let opts = Opts::from_args();
    opts.graph.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edge_graph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let max_num_nodes = opts.graph.max_num_nodes;
    let (problem_id, edges) = read_edges(&opts)?;
    validate_edges(&edges, max_num_nodes).context("Invalid edge in input")?;
    info!("Read {} edges from {}", edges.len(), opts.input.display());

    let mut graph = make_graph(edges, max_num_nodes);
    let search = graph.search();

    let cycle_path = match opts.cycle_through.as_deref() {
        Some(&[u, v]) => {
            let edge = one_indexed_edge(u, v, max_num_nodes)?;
            let path = graph.search_for_cycle_path(edge);
            match &path {
                Some(path) => info!("Cycle through {edge}: {}", path.iter().join(" ")),
                None => info!("No cycle through {edge} found along the first branch"),
            }
            path
        }
        Some(_) => bail!("--cycle-through expects exactly two nodes"),
        None => None,
    };

    let edge_set = graph.get_edge_set();
    if let Some(path) = &opts.normalized_out {
        let file = File::create(path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        let (n, m) = edge_list_writer(&mut writer, &problem_id, edge_set.iter().copied())?;
        writer.flush()?;
        info!("Wrote {m} edges over {n} nodes to {}", path.display());
    }

    let report = Report {
        problem_id,
        search,
        edges_in_one_component: graph.edges_in_one_component(),
        num_vertices: graph.get_vertices().len(),
        num_distinct_edges: edge_set.len(),
        stats: graph.stats(),
        cycle_path,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
