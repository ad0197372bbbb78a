//! End-to-end queries on small hand-made graphs.
//!
//! Every scenario loads a matrix and checks the printable outcome of each query:
//! connectivity, a shortest path, cycle detection, bipartiteness and negative cycles.

mod common;

use common::{graph, init_logging};
use wgraphs::{algo::*, prelude::*};

/// Expected outcome of every query on one graph
struct Scenario {
    rows: Vec<Vec<Weight>>,
    connected: bool,
    path: (Node, Node, &'static str),
    cycle: &'static str,
    bipartite: &'static str,
    negative_cycle: &'static str,
}

fn check(scenario: Scenario) {
    init_logging();
    let g = graph(&scenario.rows);
    let (start, end, path) = scenario.path;

    assert_eq!(g.is_connected(), scenario.connected, "{g:?}");
    let shortest = match g.shortest_path(start, end) {
        Ok(p) => p.to_string(),
        Err(e) => e.to_string(),
    };
    assert_eq!(shortest, path, "{g:?}");
    assert_eq!(g.find_cycle().to_string(), scenario.cycle, "{g:?}");
    assert_eq!(g.bipartiteness().to_string(), scenario.bipartite, "{g:?}");
    assert_eq!(g.negative_cycle().to_string(), scenario.negative_cycle, "{g:?}");
}

#[test]
fn path_on_three_nodes() {
    check(Scenario {
        rows: vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]],
        connected: true,
        path: (0, 2, "0->1->2"),
        cycle: "No cycle found",
        bipartite: "The graph is bipartite: A={0, 2}, B={1}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn all_zeros() {
    check(Scenario {
        rows: vec![vec![0; 3]; 3],
        connected: false,
        path: (0, 2, "There is no path between 0 and 2"),
        cycle: "No cycle found",
        bipartite: "The graph isn't bipartite.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn directed_triangle() {
    check(Scenario {
        rows: vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]],
        connected: true,
        path: (0, 2, "0->1->2"),
        cycle: "The graph contains a cycle: 0->1->2->0",
        bipartite: "The graph isn't bipartite.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn negative_directed_triangle() {
    check(Scenario {
        rows: vec![vec![0, -1, 0], vec![0, 0, -1], vec![-1, 0, 0]],
        connected: true,
        path: (0, 2, "Negative cycle detected"),
        cycle: "The graph contains a cycle: 0->1->2->0",
        bipartite: "The graph isn't bipartite.",
        negative_cycle: "Negative cycle found",
    });
}

#[test]
fn negative_symmetric_path() {
    check(Scenario {
        rows: vec![vec![0, -1, 0], vec![-1, 0, -1], vec![0, -1, 0]],
        connected: true,
        path: (0, 2, "Negative cycle detected"),
        cycle: "Negative cycle found",
        bipartite: "The graph is bipartite: A={0, 2}, B={1}.",
        negative_cycle: "Negative cycle found",
    });
}

#[test]
fn isolated_node() {
    check(Scenario {
        rows: vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]],
        connected: false,
        path: (0, 2, "There is no path between 0 and 2"),
        cycle: "No cycle found",
        bipartite: "The graph is bipartite: A={0, 2}, B={1}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn directed_square() {
    check(Scenario {
        rows: vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![1, 0, 0, 0],
        ],
        connected: true,
        path: (0, 3, "0->1->2->3"),
        cycle: "The graph contains a cycle: 0->1->2->3->0",
        bipartite: "The graph is bipartite: A={0, 2}, B={1, 3}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn undirected_square() {
    check(Scenario {
        rows: vec![
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
        ],
        connected: true,
        path: (0, 3, "0->3"),
        cycle: "The graph contains a cycle: 0->1->2->3->0",
        bipartite: "The graph is bipartite: A={0, 2}, B={1, 3}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn complete_graphs() {
    for n in [3, 5] {
        let rows = (0..n)
            .map(|u| (0..n).map(|v| Weight::from(u != v)).collect())
            .collect();
        check(Scenario {
            rows,
            connected: true,
            path: (0, 1, "0->1"),
            cycle: "The graph contains a cycle: 0->1->2->0",
            bipartite: "The graph isn't bipartite.",
            negative_cycle: "No negative cycle found",
        });
    }
}

#[test]
fn cycle_not_through_first_node() {
    check(Scenario {
        rows: vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 1],
            vec![1, 1, 0, 0, 0],
        ],
        connected: true,
        path: (0, 4, "There is no path between 0 and 4"),
        cycle: "The graph contains a cycle: 1->2->3->4->1",
        bipartite: "The graph is bipartite: A={0, 1, 3}, B={2, 4}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn directed_path() {
    check(Scenario {
        rows: vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ],
        connected: true,
        path: (0, 3, "0->1->2->3"),
        cycle: "No cycle found",
        bipartite: "The graph is bipartite: A={0, 2}, B={1, 3}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn mixed_weights_with_negative_cycle() {
    check(Scenario {
        rows: vec![
            vec![0, 1, 0, 0],
            vec![-1, 0, 1, 0],
            vec![0, 0, 0, -1],
            vec![0, -1, 0, 0],
        ],
        connected: true,
        path: (0, 3, "Negative cycle detected"),
        cycle: "The graph contains a cycle: 1->2->3->1",
        bipartite: "The graph isn't bipartite.",
        negative_cycle: "Negative cycle found",
    });
}

#[test]
fn single_node() {
    check(Scenario {
        rows: vec![vec![0]],
        connected: true,
        path: (0, 0, "Invalid request - path to itself"),
        cycle: "No cycle found",
        bipartite: "The graph isn't bipartite.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn two_nodes() {
    check(Scenario {
        rows: vec![vec![0, 1], vec![1, 0]],
        connected: true,
        path: (0, 1, "0->1"),
        cycle: "No cycle found",
        bipartite: "The graph is bipartite: A={0}, B={1}.",
        negative_cycle: "No negative cycle found",
    });
}

#[test]
fn invalid_shortest_path_requests() {
    let g = graph(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]);

    assert_eq!(g.shortest_path(1, 1), Err(QueryError::PathToItself));
    assert_eq!(
        g.shortest_path(1, 3).unwrap_err().to_string(),
        "Invalid start or end vertex"
    );
    assert_eq!(
        g.shortest_path(3, 0),
        Err(QueryError::InvalidVertex { start: 3, end: 0 })
    );
}

#[test]
fn load_validation() {
    let mut g = WeightMatrix::default();

    let empty: Vec<Vec<Weight>> = Vec::new();
    assert_eq!(g.load(&empty), Err(ValidationError::Empty));
    assert_eq!(
        g.load(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap_err().to_string(),
        "Invalid graph: The graph contains non-zero diagonal elements (node 0 has weight 1)."
    );
    assert!(matches!(
        g.load(&[vec![1, 0, 0], vec![0, 1, 0]]),
        Err(ValidationError::NotSquare { .. })
    ));
    assert!(g.is_empty());

    for n in 1..6 {
        g.load(&vec![vec![0; n]; n]).unwrap();
        assert_eq!(g.number_of_nodes() as usize, n);
    }
}
