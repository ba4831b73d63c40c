//! Shared search contract and path reconstruction

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Common queries answered by every single-source search
pub trait Search<V> {
    /// The vertex the search started from
    fn source(&self) -> &V;

    /// Whether `vertex` was reached from the source
    fn has_path_to(&self, vertex: &V) -> bool;

    /// Vertices from the source to `vertex`, both inclusive.
    ///
    /// Returns `None` when `vertex` is unreachable.
    fn path_to(&self, vertex: &V) -> Option<Vec<V>>;
}

/// Visitation state recorded by a search run
#[derive(Debug, Clone)]
pub struct SearchResult<V> {
    source: V,
    visited: HashSet<V>,
    predecessor: HashMap<V, V>,
}

impl<V> SearchResult<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Start a result with only the source visited
    pub(crate) fn new(source: V) -> Self {
        let mut visited = HashSet::new();
        visited.insert(source.clone());
        Self {
            source,
            visited,
            predecessor: HashMap::new(),
        }
    }

    /// Record that `vertex` was reached through `via`.
    ///
    /// Returns false if `vertex` was already visited.
    pub(crate) fn visit(&mut self, vertex: V, via: V) -> bool {
        if self.visited.contains(&vertex) {
            return false;
        }
        self.visited.insert(vertex.clone());
        self.predecessor.insert(vertex, via);
        true
    }

    /// Point `vertex` at a new predecessor, marking it visited if needed
    pub(crate) fn set_predecessor(&mut self, vertex: V, via: V) {
        debug_assert!(vertex != self.source, "source must not have a predecessor");
        self.visited.insert(vertex.clone());
        self.predecessor.insert(vertex, via);
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessor.get(vertex)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Walk predecessors back from `vertex` to the source.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor chain is cyclic or dangling. Searches only ever
    /// point a vertex at one that was finalized earlier, so this cannot happen
    /// through the public API.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        if !self.is_visited(vertex) {
            return None;
        }

        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while *current != self.source {
            let Some(prev) = self.predecessor.get(current) else {
                panic!("predecessor chain broken at {:?}", current);
            };
            assert!(
                path.len() <= self.predecessor.len(),
                "predecessor chain from {:?} does not reach the source",
                vertex
            );
            path.push(prev.clone());
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}
