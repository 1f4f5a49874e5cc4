use crate::algo::traversal::UndirectedBfs;
use crate::interface::{NavigableGraph, StaticGraph};

/// Returns true if all nodes of the graph are reachable from each other when ignoring edge directions.
/// The empty graph is considered connected.
pub fn is_weakly_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    match graph.node_indices().next() {
        Some(start) => UndirectedBfs::new(graph, start).count() == graph.node_count(),
        None => true,
    }
}

/// Returns true if all nodes with at least one incident edge are reachable from each other when ignoring edge directions.
/// Isolated nodes are ignored, so a graph without edges has a single nontrivial component as well.
pub fn has_single_nontrivial_component<Graph: StaticGraph>(graph: &Graph) -> bool {
    let start = match graph
        .node_indices()
        .find(|&node| graph.undirected_degree(node) > 0)
    {
        Some(start) => start,
        None => return true,
    };

    let mut bfs = UndirectedBfs::new(graph, start);
    bfs.by_ref().for_each(drop);
    graph
        .node_indices()
        .all(|node| bfs.is_visited(node) || graph.undirected_degree(node) == 0)
}
