//! Weighted graph and single-source path search
//!
//! Provides:
//! - `WeightedGraph`: directed or undirected adjacency map keyed by vertex value
//! - BFS search for fewest-edge paths
//! - Dijkstra search for lowest-weight paths
//! - `Search` trait shared by both for path queries

pub mod algos;
pub mod search;
pub mod types;
pub mod weighted;

#[cfg(test)]
mod fixtures;

pub use algos::{BreadthFirstSearch, DijkstraSearch};
pub use search::{Search, SearchResult};
pub use types::{Algorithm, PathReport};
pub use weighted::WeightedGraph;
