use crate::error::Result;
use crate::graph::search::{Search, SearchResult};
use crate::graph::WeightedGraph;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// Unweighted breadth-first search from a single source.
///
/// Every reported path uses the fewest possible edges. When several paths tie,
/// which one is reported depends on neighbour iteration order.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch<V> {
    result: SearchResult<V>,
}

impl<V> BreadthFirstSearch<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Run the search. Fails if `source` is not a vertex of `graph`.
    #[tracing::instrument(skip(graph, source), fields(source = ?source, vertices = graph.vertex_count()))]
    pub fn new(graph: &WeightedGraph<V>, source: V) -> Result<Self> {
        graph.neighbors(&source)?;

        let mut result = SearchResult::new(source.clone());
        let mut queue = VecDeque::from([source]);

        while let Some(current) = queue.pop_front() {
            for neighbor in graph.neighbors(&current)?.keys() {
                if result.visit(neighbor.clone(), current.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
        }

        tracing::debug!(visited = result.visited_count(), "bfs_complete");
        Ok(Self { result })
    }

    /// Number of edges on the path to `vertex`, if reachable
    pub fn hops_to(&self, vertex: &V) -> Option<usize> {
        self.result.path_to(vertex).map(|path| path.len() - 1)
    }

    pub fn result(&self) -> &SearchResult<V> {
        &self.result
    }
}

impl<V> Search<V> for BreadthFirstSearch<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn source(&self) -> &V {
        self.result.source()
    }

    fn has_path_to(&self, vertex: &V) -> bool {
        self.result.is_visited(vertex)
    }

    fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        self.result.path_to(vertex)
    }
}
