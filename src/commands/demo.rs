//! Demo command: searches over a fixed graph of Kazakhstan cities

use wgraph_core::config::Config;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{Algorithm, WeightedGraph};

use super::helpers::run_searches;
use super::output::print_reports;
use crate::cli::Cli;

pub const CITIES: [&str; 6] = [
    "Almaty",
    "Astana",
    "Shymkent",
    "Atyrau",
    "Kostanay",
    "Kyzylorda",
];

pub const ROADS: [(&str, &str, f64); 7] = [
    ("Almaty", "Astana", 2.1),
    ("Shymkent", "Atyrau", 7.8),
    ("Atyrau", "Astana", 7.1),
    ("Almaty", "Shymkent", 7.2),
    ("Shymkent", "Astana", 3.9),
    ("Astana", "Kostanay", 3.5),
    ("Shymkent", "Kyzylorda", 5.4),
];

/// Build the undirected sample graph
pub fn sample_graph() -> WeightedGraph<String> {
    let mut graph = WeightedGraph::new(false);
    for city in CITIES {
        graph.add_vertex(city.to_string());
    }
    for (from, to, weight) in ROADS {
        graph.add_edge(from.to_string(), to.to_string(), weight);
    }
    graph
}

/// Execute the demo command
pub fn execute(
    cli: &Cli,
    config: &Config,
    format: OutputFormat,
    from: Option<&str>,
    to: Option<&str>,
    algorithm: Option<Algorithm>,
) -> Result<()> {
    let from = from.unwrap_or(config.demo.from.as_str());
    let to = to.unwrap_or(config.demo.to.as_str());
    let algorithms = match algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };

    let graph = sample_graph();
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "demo_graph"
    );

    let reports = run_searches(&graph, from, to, &algorithms)?;
    print_reports(format, cli.quiet, &reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgraph_core::graph::{BreadthFirstSearch, DijkstraSearch, Search};

    #[test]
    fn test_sample_graph_shape() {
        let graph = sample_graph();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 7);
        graph.validate().unwrap();
    }

    #[test]
    fn test_sample_graph_paths() {
        let graph = sample_graph();
        let almaty = "Almaty".to_string();
        let kyzylorda = "Kyzylorda".to_string();

        let bfs = BreadthFirstSearch::new(&graph, almaty.clone()).unwrap();
        assert_eq!(
            bfs.path_to(&kyzylorda).unwrap(),
            vec!["Almaty", "Shymkent", "Kyzylorda"]
        );

        let dijkstra = DijkstraSearch::new(&graph, almaty).unwrap();
        assert_eq!(
            dijkstra.path_to(&kyzylorda).unwrap(),
            vec!["Almaty", "Astana", "Shymkent", "Kyzylorda"]
        );
        assert!((dijkstra.distance_to(&kyzylorda).unwrap() - 11.4).abs() < 1e-9);
    }
}
