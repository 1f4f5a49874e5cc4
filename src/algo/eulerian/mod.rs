use crate::algo::components::has_single_nontrivial_component;
use crate::interface::{NavigableGraph, StaticGraph};

/// Per-node cursors over the arcs that were not yet placed into a tour.
pub mod cursor;
/// Euler tours of directed and undirected graphs.
pub mod tour;

/// Selects whether the edges of a graph are interpreted as directed or as undirected.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Directedness {
    /// Each edge can only be traversed from its tail to its head.
    Directed,
    /// Each edge can be traversed in both directions.
    Undirected,
}

/// Returns true if the node has the degree required for a closed Euler tour.
/// For directed graphs, this means indegree == outdegree, and for undirected graphs an even degree.
pub fn is_balanced_node<Graph: StaticGraph>(
    graph: &Graph,
    node_index: Graph::NodeIndex,
    directedness: Directedness,
) -> bool {
    match directedness {
        Directedness::Directed => graph.in_degree(node_index) == graph.out_degree(node_index),
        Directedness::Undirected => graph.undirected_degree(node_index) % 2 == 0,
    }
}

/// Returns true if the graph decomposes into edge-disjoint cycles, i.e. if all nodes are balanced.
/// The graph does not need to be connected.
pub fn decomposes_into_eulerian_cycles<Graph: StaticGraph>(
    graph: &Graph,
    directedness: Directedness,
) -> bool {
    graph
        .node_indices()
        .all(|node_index| is_balanced_node(graph, node_index, directedness))
}

/// Returns true if the graph contains a closed Euler tour.
///
/// This is the case if all nodes are balanced (see [is_balanced_node](is_balanced_node)),
/// and all nodes with at least one incident edge are connected when ignoring edge directions.
/// Isolated nodes are allowed.
///
/// Note that there are directed graphs that are not Eulerian, but still have an open Euler trail.
pub fn is_eulerian<Graph: StaticGraph>(graph: &Graph, directedness: Directedness) -> bool {
    if let Some(node_index) = graph
        .node_indices()
        .find(|&node_index| !is_balanced_node(graph, node_index, directedness))
    {
        debug!(
            "Graph is not {:?} Eulerian, node {:?} is not balanced",
            directedness, node_index
        );
        return false;
    }

    if !has_single_nontrivial_component(graph) {
        debug!(
            "Graph is not {:?} Eulerian, its edges are not connected",
            directedness
        );
        return false;
    }

    true
}

/// Compute a vector of nodes that are not balanced.
pub fn find_non_eulerian_nodes<Graph: StaticGraph>(
    graph: &Graph,
    directedness: Directedness,
) -> Vec<Graph::NodeIndex> {
    graph
        .node_indices()
        .filter(|&node_index| !is_balanced_node(graph, node_index, directedness))
        .collect()
}

/// Compute a vector of tuples of nodes and outdegree - indegree that has indegree != outdegree.
pub fn find_non_eulerian_nodes_with_differences<Graph: StaticGraph>(
    graph: &Graph,
) -> Vec<(Graph::NodeIndex, isize)> {
    let mut node_indices_and_differences = Vec::new();
    for node_index in graph.node_indices() {
        let difference =
            graph.out_degree(node_index) as isize - graph.in_degree(node_index) as isize;
        if difference != 0 {
            node_indices_and_differences.push((node_index, difference));
        }
    }
    node_indices_and_differences
}
