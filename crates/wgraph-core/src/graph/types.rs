use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::{BreadthFirstSearch, DijkstraSearch, Search};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Path-finding algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest edges, weights ignored
    Bfs,
    /// Lowest total weight
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dijkstra => "Dijkstra Search",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => bail_invalid!("algorithm", format!("{} (expected: bfs or dijkstra)", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Outcome of a single source-to-target query, ready for output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport<V> {
    pub algorithm: Algorithm,
    pub source: V,
    pub target: V,
    pub found: bool,
    pub path: Vec<V>,
    /// Edge count of `path`
    pub hops: usize,
    /// Total weight of `path`, only reported by weighted searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl<V> PathReport<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Summarise the path to `target` held by any search
    pub fn from_search(algorithm: Algorithm, search: &dyn Search<V>, target: &V) -> Self {
        let path = search.path_to(target).unwrap_or_default();
        Self {
            algorithm,
            source: search.source().clone(),
            target: target.clone(),
            found: !path.is_empty(),
            hops: path.len().saturating_sub(1),
            path,
            distance: None,
        }
    }

    pub fn from_bfs(search: &BreadthFirstSearch<V>, target: &V) -> Self {
        Self::from_search(Algorithm::Bfs, search, target)
    }

    pub fn from_dijkstra(search: &DijkstraSearch<V>, target: &V) -> Self {
        Self {
            distance: search.distance_to(target),
            ..Self::from_search(Algorithm::Dijkstra, search, target)
        }
    }
}
