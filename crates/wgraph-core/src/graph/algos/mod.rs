//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first search, fewest edges
//! - `dijkstra`: Weighted shortest path finding

pub mod bfs;
pub mod dijkstra;

pub use bfs::BreadthFirstSearch;
pub use dijkstra::DijkstraSearch;
