//! Deterministic graph fixtures shared by the workspace test suites.
//!
//! These are small hand-shaped topologies with known structure, not random
//! graph generators; production callers supply their own networks.

use outbreak_graph::AdjacencyGraph;

/// Path graph `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(n);
    for i in 1..n {
        graph.add_edge(i - 1, i).expect("path edges in range");
    }
    graph
}

/// Ring graph: a path with the ends joined.
pub fn ring_graph(n: usize) -> AdjacencyGraph {
    let mut graph = path_graph(n);
    if n > 2 {
        graph.add_edge(n - 1, 0).expect("ring closure in range");
    }
    graph
}

/// Star graph: node 0 is the hub, nodes `1..=leaves` hang off it.
pub fn star_graph(leaves: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(leaves + 1);
    for leaf in 1..=leaves {
        graph.add_edge(0, leaf).expect("star edges in range");
    }
    graph
}

/// Complete graph on `n` nodes.
pub fn complete_graph(n: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(n);
    for a in 0..n {
        for b in (a + 1)..n {
            graph.add_edge(a, b).expect("complete edges in range");
        }
    }
    graph
}
