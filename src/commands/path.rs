//! Path command: searches over a graph described by `--edge` arguments

use wgraph_core::config::Config;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::WeightedGraph;

use super::helpers::run_searches;
use super::output::print_reports;
use crate::cli::parse::EdgeSpec;
use crate::cli::{Cli, PathArgs};

/// Build a graph from command-line vertices and edges
pub fn build_graph(directed: bool, vertices: &[String], edges: &[EdgeSpec]) -> WeightedGraph<String> {
    let mut graph = WeightedGraph::new(directed);
    for vertex in vertices {
        graph.add_vertex(vertex.clone());
    }
    for edge in edges {
        graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
    }
    graph
}

/// Execute the path command
pub fn execute(cli: &Cli, config: &Config, format: OutputFormat, args: &PathArgs) -> Result<()> {
    let graph = build_graph(args.directed, &args.vertices, &args.edges);
    let algorithm = args.algorithm.unwrap_or(config.search.default_algorithm);

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = args.directed,
        %algorithm,
        "path_graph"
    );

    let reports = run_searches(&graph, &args.from, &args.to, &[algorithm])?;
    print_reports(format, cli.quiet, &reports)
}
