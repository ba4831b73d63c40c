//! Shared helpers for path-finding commands

use std::time::Instant;

use wgraph_core::error::{GraphError, Result};
use wgraph_core::graph::{Algorithm, BreadthFirstSearch, DijkstraSearch, PathReport, WeightedGraph};
use wgraph_core::trace_time;

/// Run each algorithm from `from` and report the path to `to`
pub fn run_searches(
    graph: &WeightedGraph<String>,
    from: &str,
    to: &str,
    algorithms: &[Algorithm],
) -> Result<Vec<PathReport<String>>> {
    let from = from.to_string();
    let to = to.to_string();

    // The source is checked by the searches themselves
    if !graph.has_vertex(&to) {
        return Err(GraphError::vertex_not_found(&to));
    }

    let mut reports = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let start = Instant::now();
        let report = match algorithm {
            Algorithm::Bfs => {
                let search = BreadthFirstSearch::new(graph, from.clone())?;
                PathReport::from_bfs(&search, &to)
            }
            Algorithm::Dijkstra => {
                let search = DijkstraSearch::new(graph, from.clone())?;
                PathReport::from_dijkstra(&search, &to)
            }
        };
        trace_time!(start, "search", algorithm = algorithm.label(), found = report.found);
        reports.push(report);
    }

    Ok(reports)
}
