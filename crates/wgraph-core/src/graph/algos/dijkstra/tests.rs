use super::*;
use crate::graph::fixtures::{all_simple_paths, letters, path_weight};

const EPSILON: f64 = 1e-9;

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: "A",
        distance: 1.0,
        seq: 0,
    };
    let entry2 = HeapEntry {
        vertex: "B",
        distance: 2.0,
        seq: 1,
    };
    let entry3 = HeapEntry {
        vertex: "C",
        distance: 1.0,
        seq: 2,
    };

    // Lower distance should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to insertion order
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

/// Test that the min-heap pops equal distances first-in first-out
#[test]
fn test_heap_pops_ties_in_insertion_order() {
    let mut heap = BinaryHeap::new();
    for (seq, (vertex, distance)) in [("x", 3.0), ("y", 1.0), ("z", 1.0), ("w", 0.5)]
        .into_iter()
        .enumerate()
    {
        heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            seq: seq as u64,
        }));
    }

    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.vertex)).collect();
    assert_eq!(order, vec!["w", "y", "z", "x"]);
}

/// Test the lighter three-edge route beats the direct two-edge route
#[test]
fn test_dijkstra_letters_path_to_f() {
    let graph = letters();
    let dijkstra = DijkstraSearch::new(&graph, "A").unwrap();

    assert_eq!(dijkstra.source(), &"A");
    assert_eq!(dijkstra.path_to(&"F"), Some(vec!["A", "B", "C", "F"]));
    assert!((dijkstra.distance_to(&"F").unwrap() - 11.4).abs() < EPSILON);
    assert!((dijkstra.distance_to(&"C").unwrap() - 6.0).abs() < EPSILON);
    assert!((dijkstra.distance_to(&"D").unwrap() - 9.2).abs() < EPSILON);
}

/// Test that the source has distance zero and a trivial path
#[test]
fn test_dijkstra_source() {
    let graph = letters();
    let dijkstra = DijkstraSearch::new(&graph, "C").unwrap();

    assert!(dijkstra.has_path_to(&"C"));
    assert_eq!(dijkstra.distance_to(&"C"), Some(0.0));
    assert_eq!(dijkstra.path_to(&"C"), Some(vec!["C"]));
    assert!(dijkstra.result().predecessor(&"C").is_none());
}

/// Test that distances agree with path weights and with exhaustive search
#[test]
fn test_dijkstra_distances_are_minimal() {
    let graph = letters();
    for source in ["A", "B", "C", "D", "E", "F"] {
        let dijkstra = DijkstraSearch::new(&graph, source).unwrap();
        for target in ["A", "B", "C", "D", "E", "F"] {
            let path = dijkstra.path_to(&target).unwrap();
            let distance = dijkstra.distance_to(&target).unwrap();
            let best = all_simple_paths(&graph, source, target)
                .iter()
                .map(|p| path_weight(&graph, p))
                .fold(f64::INFINITY, f64::min);

            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&target));
            assert!((path_weight(&graph, &path) - distance).abs() < EPSILON);
            assert!((distance - best).abs() < EPSILON, "{} -> {}", source, target);
        }
    }
}

/// Test that an improved distance supersedes the earlier heap entry
#[test]
fn test_dijkstra_relaxes_through_cheaper_detour() {
    let mut graph = WeightedGraph::new(true);
    graph.add_edge("s", "a", 10.0);
    graph.add_edge("s", "b", 1.0);
    graph.add_edge("b", "a", 1.0);
    graph.add_edge("a", "t", 1.0);

    let dijkstra = DijkstraSearch::new(&graph, "s").unwrap();
    assert_eq!(dijkstra.distance_to(&"a"), Some(2.0));
    assert_eq!(dijkstra.path_to(&"t"), Some(vec!["s", "b", "a", "t"]));
    assert_eq!(dijkstra.distance_to(&"t"), Some(3.0));
}

/// Test that unreachable vertices have neither path nor distance
#[test]
fn test_dijkstra_unreachable_vertex() {
    let mut graph = WeightedGraph::new(true);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(3, 1, 1.0);

    let dijkstra = DijkstraSearch::new(&graph, 1).unwrap();
    assert!(!dijkstra.has_path_to(&3));
    assert_eq!(dijkstra.path_to(&3), None);
    assert_eq!(dijkstra.distance_to(&3), None);
    assert_eq!(dijkstra.distance_to(&99), None);
}

/// Test that zero-weight cycles terminate with a well-formed path
#[test]
fn test_dijkstra_zero_weight_cycle() {
    let mut graph = WeightedGraph::new(false);
    graph.add_edge('a', 'b', 0.0);
    graph.add_edge('b', 'c', 0.0);
    graph.add_edge('c', 'a', 0.0);
    graph.add_edge('c', 'd', 2.5);

    let dijkstra = DijkstraSearch::new(&graph, 'a').unwrap();
    assert_eq!(dijkstra.distance_to(&'d'), Some(2.5));
    assert_eq!(dijkstra.path_to(&'d'), Some(vec!['a', 'c', 'd']));
    assert_eq!(dijkstra.distance_to(&'b'), Some(0.0));
}

/// Test that a negative weight reachable from the source is rejected
#[test]
fn test_dijkstra_rejects_negative_weight() {
    let mut graph = WeightedGraph::new(true);
    graph.add_edge("s", "a", 1.0);
    graph.add_edge("a", "b", -2.0);

    let err = DijkstraSearch::new(&graph, "s").unwrap_err();
    match err {
        GraphError::NegativeWeight { from, to, weight } => {
            assert_eq!(from, "\"a\"");
            assert_eq!(to, "\"b\"");
            assert_eq!(weight, -2.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Test that NaN weights are rejected like negative ones
#[test]
fn test_dijkstra_rejects_nan_weight() {
    let mut graph = WeightedGraph::new(false);
    graph.add_edge(1, 2, f64::NAN);

    assert!(matches!(
        DijkstraSearch::new(&graph, 1),
        Err(GraphError::NegativeWeight { .. })
    ));
}

/// Test that negative weights outside the reachable part are not inspected
#[test]
fn test_dijkstra_ignores_unreachable_negative_weight() {
    let mut graph = WeightedGraph::new(true);
    graph.add_edge("s", "a", 1.0);
    graph.add_edge("x", "y", -5.0);

    let dijkstra = DijkstraSearch::new(&graph, "s").unwrap();
    assert_eq!(dijkstra.distance_to(&"a"), Some(1.0));
}

/// Test that a route whose total overflows is not recorded as reachable
#[test]
fn test_dijkstra_overflowing_distance_is_unreachable() {
    let mut graph = WeightedGraph::new(true);
    graph.add_edge("a", "b", 1.7e308);
    graph.add_edge("b", "c", 1.7e308);

    let dijkstra = DijkstraSearch::new(&graph, "a").unwrap();
    assert_eq!(dijkstra.distance_to(&"b"), Some(1.7e308));
    assert!(!dijkstra.has_path_to(&"c"));
    assert_eq!(dijkstra.distance_to(&"c"), None);
    assert_eq!(dijkstra.path_to(&"c"), None);
    assert!(dijkstra.result().predecessor(&"c").is_none());
}

/// Test that a finite detour wins over an overflowing direct route
#[test]
fn test_dijkstra_prefers_finite_route_over_overflow() {
    let mut graph = WeightedGraph::new(true);
    graph.add_edge("a", "b", 1.7e308);
    graph.add_edge("b", "c", 1.7e308);
    graph.add_edge("a", "x", 1.0);
    graph.add_edge("x", "c", 2.0);

    let dijkstra = DijkstraSearch::new(&graph, "a").unwrap();
    assert_eq!(dijkstra.distance_to(&"c"), Some(3.0));
    assert_eq!(dijkstra.path_to(&"c"), Some(vec!["a", "x", "c"]));
}

/// Test that a missing source is reported
#[test]
fn test_dijkstra_missing_source() {
    let graph = letters();
    assert!(matches!(
        DijkstraSearch::new(&graph, "nowhere"),
        Err(GraphError::VertexNotFound { .. })
    ));
}

/// Test that removing a vertex reroutes the shortest path
#[test]
fn test_dijkstra_after_remove_vertex() {
    let mut graph = letters();
    graph.remove_vertex(&"B");

    let dijkstra = DijkstraSearch::new(&graph, "A").unwrap();
    assert_eq!(dijkstra.path_to(&"F"), Some(vec!["A", "C", "F"]));
    assert!((dijkstra.distance_to(&"F").unwrap() - 12.6).abs() < EPSILON);
    assert!(!dijkstra.has_path_to(&"E"));
}
