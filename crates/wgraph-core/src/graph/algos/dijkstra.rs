use crate::error::{GraphError, Result};
use crate::graph::search::{Search, SearchResult};
use crate::graph::WeightedGraph;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then insertion order)
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub vertex: V,
    pub distance: f64,
    pub seq: u64,
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Dijkstra shortest-path search from a single source.
///
/// Requires every reachable edge weight to be non-negative; a negative or NaN
/// weight aborts construction with [`GraphError::NegativeWeight`]. Only finite
/// distances are recorded, so a vertex whose every route sums past `f64::MAX`
/// counts as unreachable.
///
/// Improved distances push a fresh heap entry instead of decreasing a key, and
/// superseded entries are skipped when popped. Vertices with equal tentative
/// distance are expanded in the order they were pushed.
#[derive(Debug, Clone)]
pub struct DijkstraSearch<V> {
    result: SearchResult<V>,
    distance: HashMap<V, f64>,
}

/// State tracked during Dijkstra traversal
struct DijkstraState<V> {
    result: SearchResult<V>,
    distance: HashMap<V, f64>,
    heap: BinaryHeap<Reverse<HeapEntry<V>>>,
    next_seq: u64,
}

impl<V> DijkstraState<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn new(source: V) -> Self {
        let mut state = Self {
            result: SearchResult::new(source.clone()),
            distance: HashMap::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        };
        state.distance.insert(source.clone(), 0.0);
        state.push(source, 0.0);
        state
    }

    fn push(&mut self, vertex: V, distance: f64) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Lower the distance of `vertex` if going through `via` is shorter.
    /// A candidate that overflows to infinity is never recorded.
    fn relax(&mut self, via: &V, vertex: &V, candidate: f64) {
        if !candidate.is_finite() {
            return;
        }
        let improved = self
            .distance
            .get(vertex)
            .is_none_or(|&current| candidate < current);
        if improved {
            self.distance.insert(vertex.clone(), candidate);
            self.result.set_predecessor(vertex.clone(), via.clone());
            self.push(vertex.clone(), candidate);
        }
    }
}

impl<V> DijkstraSearch<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Run the search.
    ///
    /// Fails if `source` is not a vertex of `graph`, or if an edge reachable from
    /// `source` has a negative or NaN weight.
    #[tracing::instrument(skip(graph, source), fields(source = ?source, vertices = graph.vertex_count()))]
    pub fn new(graph: &WeightedGraph<V>, source: V) -> Result<Self> {
        graph.neighbors(&source)?;

        let mut state = DijkstraState::new(source);
        let mut stale_pops = 0usize;

        while let Some(Reverse(HeapEntry {
            vertex: current,
            distance,
            ..
        })) = state.heap.pop()
        {
            if state
                .distance
                .get(&current)
                .is_some_and(|&best| distance > best)
            {
                stale_pops += 1;
                continue;
            }

            for (neighbor, &weight) in graph.neighbors(&current)? {
                if weight < 0.0 || weight.is_nan() {
                    return Err(GraphError::NegativeWeight {
                        from: format!("{:?}", current),
                        to: format!("{:?}", neighbor),
                        weight,
                    });
                }
                state.relax(&current, neighbor, distance + weight);
            }
        }

        tracing::debug!(
            visited = state.result.visited_count(),
            stale_pops,
            "dijkstra_complete"
        );
        Ok(Self {
            result: state.result,
            distance: state.distance,
        })
    }

    /// Minimum total weight from the source to `vertex`, if reachable
    pub fn distance_to(&self, vertex: &V) -> Option<f64> {
        self.distance.get(vertex).copied()
    }

    pub fn result(&self) -> &SearchResult<V> {
        &self.result
    }
}

impl<V> Search<V> for DijkstraSearch<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn source(&self) -> &V {
        self.result.source()
    }

    fn has_path_to(&self, vertex: &V) -> bool {
        self.distance.contains_key(vertex)
    }

    fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        self.result.path_to(vertex)
    }
}

#[cfg(test)]
mod tests;
