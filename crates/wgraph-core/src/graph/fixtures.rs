//! Graphs shared by the search tests

use crate::graph::WeightedGraph;

/// Undirected six-vertex graph with seven weighted edges
pub fn letters() -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new(false);
    for vertex in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge("A", "B", 2.1);
    graph.add_edge("C", "D", 7.8);
    graph.add_edge("D", "B", 7.1);
    graph.add_edge("A", "C", 7.2);
    graph.add_edge("C", "B", 3.9);
    graph.add_edge("B", "E", 3.5);
    graph.add_edge("C", "F", 5.4);
    graph
}

/// Every simple path from `from` to `to`, found by exhaustive depth-first enumeration
pub fn all_simple_paths<'a>(
    graph: &WeightedGraph<&'a str>,
    from: &'a str,
    to: &'a str,
) -> Vec<Vec<&'a str>> {
    fn walk<'a>(
        graph: &WeightedGraph<&'a str>,
        path: &mut Vec<&'a str>,
        to: &'a str,
        out: &mut Vec<Vec<&'a str>>,
    ) {
        let Some(&last) = path.last() else {
            return;
        };
        if last == to {
            out.push(path.clone());
            return;
        }
        let mut next: Vec<&'a str> = graph.neighbors(&last).unwrap().keys().copied().collect();
        next.sort();
        for vertex in next {
            if !path.contains(&vertex) {
                path.push(vertex);
                walk(graph, path, to, out);
                path.pop();
            }
        }
    }

    let mut out = Vec::new();
    walk(graph, &mut vec![from], to, &mut out);
    out
}

/// Sum of edge weights along `path`, panicking if a step is not an edge
pub fn path_weight<'a>(graph: &WeightedGraph<&'a str>, path: &[&'a str]) -> f64 {
    path.windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap())
        .sum()
}
