use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Weighted graph keyed directly by vertex value.
///
/// Each vertex maps to its out-neighbours and the weight of the connecting edge.
/// In undirected mode every edge is stored in both directions and the two entries
/// are updated together.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    adjacency: HashMap<V, HashMap<V, f64>>,
    directed: bool,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            directed: false,
        }
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: HashMap::new(),
            directed,
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Ensure `vertex` has an adjacency entry. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Add or overwrite the edge `from -> to`, creating missing endpoints.
    ///
    /// Undirected graphs also store `to -> from` with the same weight.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(&to) {
                edges.insert(from.clone(), weight);
            }
        }
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.insert(to, weight);
        }
    }

    /// Remove the edge `from -> to` (and its mirror when undirected). Missing edges are ignored.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.remove(to);
        }
        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(to) {
                edges.remove(from);
            }
        }
    }

    /// Remove `vertex` together with every edge that points at it.
    pub fn remove_vertex(&mut self, vertex: &V) {
        if self.adjacency.remove(vertex).is_none() {
            return;
        }
        for edges in self.adjacency.values_mut() {
            edges.remove(vertex);
        }
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|edges| edges.contains_key(to))
    }

    /// Weight of the edge `from -> to`
    pub fn weight(&self, from: &V, to: &V) -> Result<f64> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// Out-neighbours of `vertex` with their edge weights
    pub fn neighbors(&self, vertex: &V) -> Result<&HashMap<V, f64>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. An undirected edge counts once even though it is stored twice.
    pub fn edge_count(&self) -> usize {
        let raw: usize = self.adjacency.values().map(HashMap::len).sum();
        if self.directed {
            return raw;
        }

        // Self-loops are stored once, everything else twice
        let loops = self
            .adjacency
            .iter()
            .filter(|(vertex, edges)| edges.contains_key(*vertex))
            .count();
        debug_assert!(
            (raw - loops) % 2 == 0,
            "undirected adjacency is not mirrored"
        );
        (raw - loops) / 2 + loops
    }

    /// Check that every neighbour is a known vertex and, when undirected,
    /// that every edge has a mirror with the same weight.
    pub fn validate(&self) -> Result<()> {
        for (from, edges) in &self.adjacency {
            for (to, weight) in edges {
                let Some(back) = self.adjacency.get(to) else {
                    return Err(GraphError::Corrupted {
                        reason: format!("{:?} -> {:?} points at an unknown vertex", from, to),
                    });
                };
                if self.directed {
                    continue;
                }
                match back.get(from) {
                    Some(w) if w.to_bits() == weight.to_bits() => {}
                    Some(w) => {
                        return Err(GraphError::Corrupted {
                            reason: format!(
                                "{:?} -> {:?} has weight {} but its mirror has {}",
                                from, to, weight, w
                            ),
                        })
                    }
                    None => {
                        return Err(GraphError::Corrupted {
                            reason: format!("{:?} -> {:?} has no mirrored edge", from, to),
                        })
                    }
                }
            }
        }
        Ok(())
    }
}
