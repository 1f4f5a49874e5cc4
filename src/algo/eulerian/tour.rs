use crate::algo::eulerian::cursor::NextArcCursors;
use crate::algo::traversal::{
    ForwardNeighborStrategy, TraversalNeighborStrategy, UndirectedNeighborStrategy,
};
use crate::error::{ErrorKind, Result};
use crate::index::GraphIndex;
use crate::interface::{GraphBase, ImmutableGraphContainer, StaticGraph};
use bitvector::BitVector;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// An Euler tour of a directed graph, where each edge is traversed from its tail to its head.
pub type DirectedEulerTour<'a, Graph> = EulerTour<'a, Graph, ForwardNeighborStrategy, NoUsedEdges>;
/// An Euler tour of a graph whose edges are interpreted as undirected.
/// Each edge is traversed exactly once, in the direction in which it is first reached.
pub type UndirectedEulerTour<'a, Graph> =
    EulerTour<'a, Graph, UndirectedNeighborStrategy, BitVector>;

/// An edge of the graph together with the direction in which it was traversed.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct TraversedEdge<NodeIndex, EdgeIndex> {
    /// The traversed edge.
    pub edge_id: EdgeIndex,
    /// The node the traversal started from.
    pub from_node: NodeIndex,
    /// The node the traversal ended in.
    pub to_node: NodeIndex,
}

/// A set of edges already placed into a tour.
/// Edges in the set are skipped when looking for the next arc of a node.
pub trait UsedEdges<Graph: GraphBase> {
    /// Creates an empty set for the given graph.
    fn new_unused(graph: &Graph) -> Self;

    /// Returns true if the given edge was marked as used.
    fn is_used(&self, edge_id: Graph::EdgeIndex) -> bool;

    /// Marks the given edge as used.
    fn mark_used(&mut self, edge_id: Graph::EdgeIndex);
}

/// A [UsedEdges](UsedEdges) implementation that never reports an edge as used.
///
/// This is sufficient if each edge is offered by exactly one node cursor, as it is the case for directed graphs.
pub struct NoUsedEdges;

impl<Graph: GraphBase> UsedEdges<Graph> for NoUsedEdges {
    fn new_unused(_: &Graph) -> Self {
        NoUsedEdges
    }

    fn is_used(&self, _: Graph::EdgeIndex) -> bool {
        false
    }

    fn mark_used(&mut self, _: Graph::EdgeIndex) {}
}

impl<Graph: ImmutableGraphContainer> UsedEdges<Graph> for BitVector {
    fn new_unused(graph: &Graph) -> Self {
        BitVector::new(graph.edge_count())
    }

    fn is_used(&self, edge_id: Graph::EdgeIndex) -> bool {
        self.contains(edge_id.as_usize())
    }

    fn mark_used(&mut self, edge_id: Graph::EdgeIndex) {
        let inserted = self.insert(edge_id.as_usize());
        debug_assert!(inserted, "Edge {:?} was used twice", edge_id);
    }
}

/// An Euler tour computed with Hierholzer's splicing technique.
///
/// The constructor walks greedily from the start node until it gets stuck, and stores that walk as the initial tour.
/// Each call to [advance](EulerTour::advance) removes the first arc of the tour, and then splices in the maximal walk
/// starting from the head of the removed arc, directly behind the new front of the tour.
/// This way, each arc is consumed exactly once and the total work is linear in the size of the graph.
///
/// If the graph is Eulerian, the tour contains all edges and is closed.
/// Otherwise, the tour is a trail that may miss some edges.
/// In particular, if a walk that would be spliced into the middle of the tour does not end in its start node,
/// only its prefix up to the last return to the start node is spliced, and the remaining arcs are dropped.
///
/// The direction in which edges are traversed is given by `NeighborStrategy`,
/// and `Used` tracks edges that are reachable from two nodes and must not be taken twice.
/// Use the aliases [DirectedEulerTour](DirectedEulerTour) and [UndirectedEulerTour](UndirectedEulerTour) for the usual cases.
pub struct EulerTour<
    'a,
    Graph: GraphBase,
    NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
    Used,
> {
    graph: &'a Graph,
    start: Option<Graph::NodeIndex>,
    cursors: NextArcCursors<NeighborStrategy::Iterator>,
    used_edges: Used,
    tour: VecDeque<TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>>,
    walk_buffer: Vec<TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>>,
}

impl<
        'a,
        Graph: StaticGraph,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
        Used: UsedEdges<Graph>,
    > EulerTour<'a, Graph, NeighborStrategy, Used>
{
    /// Computes an Euler tour starting from the first node that has an arc.
    /// If no node has an arc, the tour is empty.
    pub fn new(graph: &'a Graph) -> Self {
        let mut result = Self::new_unstarted(graph);
        let start = graph
            .node_indices()
            .find(|&node| !result.cursors.get(node).is_exhausted());
        if let Some(start) = start {
            result.start_from(start);
        }
        result
    }

    /// Computes an Euler tour starting from the given node.
    /// If the node has no arc, the tour is empty.
    ///
    /// The node must be part of the graph, use [try_new_from](EulerTour::try_new_from) if this is not guaranteed.
    pub fn new_from(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        debug_assert!(
            graph.contains_node_index(start),
            "Start node {:?} is not part of the graph",
            start
        );
        let mut result = Self::new_unstarted(graph);
        result.start_from(start);
        result
    }

    /// Computes an Euler tour starting from the given node,
    /// or returns an error if the node is not part of the graph.
    pub fn try_new_from(graph: &'a Graph, start: Graph::NodeIndex) -> Result<Self> {
        if !graph.contains_node_index(start) {
            bail!(ErrorKind::StartNodeNotInGraph(format!("{:?}", start)));
        }
        Ok(Self::new_from(graph, start))
    }

    fn new_unstarted(graph: &'a Graph) -> Self {
        Self {
            graph,
            start: None,
            cursors: NextArcCursors::new::<Graph, NeighborStrategy>(graph),
            used_edges: Used::new_unused(graph),
            tour: VecDeque::new(),
            walk_buffer: Vec::new(),
        }
    }

    fn start_from(&mut self, start: Graph::NodeIndex) {
        self.start = Some(start);
        let mut walk = std::mem::take(&mut self.walk_buffer);
        let end = self.walk_from(start, &mut walk);
        debug!(
            "Started Euler tour at node {:?} with an initial walk of {} arcs ending in node {:?}",
            start,
            walk.len(),
            end
        );
        self.tour.extend(walk.drain(..));
        self.walk_buffer = walk;
    }

    /// Takes the next unused arc of `node`, marks it as used and returns it.
    fn take_next_arc(
        &mut self,
        node: Graph::NodeIndex,
    ) -> Option<TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>> {
        let used_edges = &self.used_edges;
        let cursor = self.cursors.get_mut(node);
        cursor.advance_while(|neighbor| used_edges.is_used(neighbor.edge_id));
        let neighbor = cursor.advance()?;
        self.used_edges.mark_used(neighbor.edge_id);
        Some(TraversedEdge {
            edge_id: neighbor.edge_id,
            from_node: node,
            to_node: neighbor.node_id,
        })
    }

    /// Walks greedily from `start` until reaching a node without unused arcs.
    /// The arcs are appended to `walk`, and the last node of the walk is returned.
    fn walk_from(
        &mut self,
        start: Graph::NodeIndex,
        walk: &mut Vec<TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>>,
    ) -> Graph::NodeIndex {
        let mut node = start;
        while let Some(arc) = self.take_next_arc(node) {
            walk.push(arc);
            node = arc.to_node;
        }
        node
    }

    /// Returns the next arc of the tour without consuming it, or `None` if the tour is exhausted.
    pub fn current(&self) -> Option<TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>> {
        self.tour.front().copied()
    }

    /// Consumes and returns the next arc of the tour, or `None` if the tour is exhausted.
    ///
    /// Before returning, the maximal walk of unused arcs from the head of the returned arc is spliced into the tour,
    /// such that it is returned by the following calls.
    pub fn advance(&mut self) -> Option<TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>> {
        let arc = self.tour.pop_front()?;
        debug_assert!(self.graph.contains_edge_index(arc.edge_id));

        let splice_node = arc.to_node;
        let mut walk = std::mem::take(&mut self.walk_buffer);
        let end = self.walk_from(splice_node, &mut walk);

        if end != splice_node && !self.tour.is_empty() {
            // Only the part of the walk up to its last return to the splice node fits into the tour.
            let closed_len = walk
                .iter()
                .rposition(|walk_arc| walk_arc.to_node == splice_node)
                .map_or(0, |index| index + 1);
            debug!(
                "Dropping the open suffix of {} arcs from node {:?} to node {:?}, it does not fit into the tour",
                walk.len() - closed_len,
                splice_node,
                end
            );
            walk.truncate(closed_len);
        }

        if !walk.is_empty() {
            trace!(
                "Splicing a walk of {} arcs into the tour at node {:?}",
                walk.len(),
                splice_node
            );
            for spliced_arc in walk.drain(..).rev() {
                self.tour.push_front(spliced_arc);
            }
        }

        self.walk_buffer = walk;
        Some(arc)
    }

    /// Returns true if all arcs of the tour have been consumed.
    /// Once this is true, it stays true.
    pub fn is_exhausted(&self) -> bool {
        self.tour.is_empty()
    }

    /// Returns the node the tour started from, or `None` if the tour never started because there was no node with an arc.
    pub fn start_node(&self) -> Option<Graph::NodeIndex> {
        self.start
    }
}

impl<
        'a,
        Graph: StaticGraph,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
        Used: UsedEdges<Graph>,
    > Iterator for EulerTour<'a, Graph, NeighborStrategy, Used>
{
    type Item = TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl<
        'a,
        Graph: StaticGraph,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph>,
        Used: UsedEdges<Graph>,
    > FusedIterator for EulerTour<'a, Graph, NeighborStrategy, Used>
{
}

#[cfg(test)]
mod tests {
    use super::{DirectedEulerTour, TraversedEdge, UndirectedEulerTour};
    use crate::algo::eulerian::{is_eulerian, Directedness};
    use crate::algo::predefined_graphs::{
        create_bowtie, create_cycle, create_random_eulerian_graph,
    };
    use crate::error::ErrorKind;
    use crate::implementation::petgraph_impl;
    use crate::index::GraphIndex;
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer, StaticGraph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_trail<NodeIndex: GraphIndex, EdgeIndex: GraphIndex>(
        tour: &[TraversedEdge<NodeIndex, EdgeIndex>],
    ) {
        for window in tour.windows(2) {
            assert_eq!(
                window[0].to_node, window[1].from_node,
                "Tour is not a trail: {:?}",
                tour
            );
        }
    }

    fn assert_each_edge_once<Graph: StaticGraph>(
        graph: &Graph,
        tour: &[TraversedEdge<Graph::NodeIndex, Graph::EdgeIndex>],
    ) {
        let mut edges: Vec<_> = tour.iter().map(|arc| arc.edge_id).collect();
        edges.sort();
        assert_eq!(edges, graph.edge_indices().collect::<Vec<_>>());
    }

    fn assert_closed<NodeIndex: GraphIndex, EdgeIndex: GraphIndex>(
        tour: &[TraversedEdge<NodeIndex, EdgeIndex>],
        start: NodeIndex,
    ) {
        assert_eq!(tour.first().map(|arc| arc.from_node), Some(start));
        assert_eq!(tour.last().map(|arc| arc.to_node), Some(start));
    }

    #[test]
    fn test_directed_cycle() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = create_cycle(&mut graph, 4).unwrap();
        let edges: Vec<_> = graph.edge_indices().collect();

        let mut tour = DirectedEulerTour::new_from(&graph, n0);
        assert_eq!(tour.start_node(), Some(n0));
        assert_eq!(tour.current().map(|arc| arc.edge_id), Some(edges[0]));
        let tour: Vec<_> = tour.by_ref().collect();
        assert_eq!(
            tour.iter().map(|arc| arc.edge_id).collect::<Vec<_>>(),
            edges
        );
        for (i, arc) in tour.iter().enumerate() {
            assert_eq!(arc.from_node, i.into());
            assert_eq!(arc.to_node, ((i + 1) % 4).into());
        }
        assert_closed(&tour, n0);
        assert!(is_eulerian(&graph, Directedness::Directed));
    }

    #[test]
    fn test_directed_splicing() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, ());
        let e1 = graph.add_edge(n1, n2, ());
        let e2 = graph.add_edge(n2, n1, ());
        // Petgraph returns the most recently added edge first, so the initial walk is 0 -> 1 -> 0.
        let e3 = graph.add_edge(n1, n0, ());

        let mut tour = DirectedEulerTour::new(&graph);
        assert_eq!(tour.start_node(), Some(n0));
        assert_eq!(tour.advance().map(|arc| arc.edge_id), Some(e0));
        assert_eq!(tour.current().map(|arc| arc.edge_id), Some(e1));
        let rest: Vec<_> = tour.map(|arc| arc.edge_id).collect();
        assert_eq!(rest, vec![e1, e2, e3]);
    }

    #[test]
    fn test_directed_start_is_first_node_with_arc() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let _n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        graph.add_edge(n1, n2, ());
        graph.add_edge(n2, n1, ());

        let tour = DirectedEulerTour::new(&graph);
        assert_eq!(tour.start_node(), Some(n1));
        let tour: Vec<_> = tour.collect();
        assert_each_edge_once(&graph, &tour);
        assert_closed(&tour, n1);
    }

    #[test]
    fn test_directed_open_trail() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, ());
        let e1 = graph.add_edge(n1, n2, ());

        let tour: Vec<_> = DirectedEulerTour::new_from(&graph, n0)
            .map(|arc| arc.edge_id)
            .collect();
        assert_eq!(tour, vec![e0, e1]);
        assert!(!is_eulerian(&graph, Directedness::Directed));
    }

    #[test]
    fn test_directed_imbalanced_graph_gives_partial_trail() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let n3 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n2, ());
        graph.add_edge(n1, n3, ());

        let tour: Vec<_> = DirectedEulerTour::new_from(&graph, n0).collect();
        assert_eq!(tour.len(), 2);
        assert_eq!(tour[0].from_node, n0);
        assert_trail(&tour);
    }

    #[test]
    fn test_directed_imbalanced_graph_keeps_closed_part_of_splice() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let n3 = graph.add_node(());
        let n4 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, ());
        let _e1 = graph.add_edge(n1, n4, ());
        let e2 = graph.add_edge(n3, n1, ());
        let e3 = graph.add_edge(n1, n3, ());
        let e4 = graph.add_edge(n1, n2, ());

        // The initial walk is 0 -> 1 -> 2. Splicing at node 1 walks 1 -> 3 -> 1 -> 4,
        // and only the dead end 1 -> 4 does not fit into the tour.
        let tour: Vec<_> = DirectedEulerTour::new_from(&graph, n0).collect();
        assert_eq!(
            tour.iter().map(|arc| arc.edge_id).collect::<Vec<_>>(),
            vec![e0, e3, e2, e4]
        );
        assert_eq!(tour.len(), 4);
        assert_eq!(tour[0].from_node, n0);
        assert_eq!(tour[3].to_node, n2);
        assert_trail(&tour);
    }

    #[test]
    fn test_directed_start_node_without_arcs() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n0, n1, ());

        let mut tour = DirectedEulerTour::new_from(&graph, n1);
        assert!(tour.is_exhausted());
        assert_eq!(tour.current(), None);
        assert_eq!(tour.advance(), None);
    }

    #[test]
    fn test_directed_parallel_arcs_and_loop() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n0, ());
        graph.add_edge(n1, n0, ());
        graph.add_edge(n1, n1, ());

        assert!(is_eulerian(&graph, Directedness::Directed));
        let tour: Vec<_> = DirectedEulerTour::new(&graph).collect();
        assert_each_edge_once(&graph, &tour);
        assert_trail(&tour);
        assert_closed(&tour, n0);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut graph = petgraph_impl::new::<(), ()>();
        create_cycle(&mut graph, 3);

        let mut tour = DirectedEulerTour::new(&graph);
        assert_eq!(tour.by_ref().count(), 3);
        assert!(tour.is_exhausted());
        for _ in 0..3 {
            assert_eq!(tour.advance(), None);
            assert_eq!(tour.next(), None);
            assert_eq!(tour.current(), None);
        }
    }

    #[test]
    fn test_empty_graph_and_isolated_node() {
        let mut graph = petgraph_impl::new::<(), ()>();
        assert_eq!(DirectedEulerTour::new(&graph).start_node(), None);
        assert_eq!(DirectedEulerTour::new(&graph).next(), None);
        assert_eq!(UndirectedEulerTour::new(&graph).next(), None);

        let n0 = graph.add_node(());
        assert!(is_eulerian(&graph, Directedness::Directed));
        assert!(is_eulerian(&graph, Directedness::Undirected));
        assert_eq!(DirectedEulerTour::new_from(&graph, n0).count(), 0);
        assert_eq!(UndirectedEulerTour::new_from(&graph, n0).count(), 0);
        assert_eq!(UndirectedEulerTour::new(&graph).start_node(), None);
    }

    #[test]
    fn test_start_node_not_in_graph() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        graph.add_edge(n0, n0, ());

        let error = DirectedEulerTour::try_new_from(&graph, 5.into())
            .err()
            .unwrap();
        match error.kind() {
            ErrorKind::StartNodeNotInGraph(node) => assert_eq!(node, "5"),
            _ => panic!("Unexpected error: {}", error),
        }
        assert!(UndirectedEulerTour::try_new_from(&graph, 1.into()).is_err());

        let tour = DirectedEulerTour::try_new_from(&graph, n0).unwrap();
        assert_eq!(tour.count(), 1);
    }

    #[test]
    fn test_undirected_bowtie() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let center = create_bowtie(&mut graph);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert!(is_eulerian(&graph, Directedness::Undirected));

        let tour: Vec<_> = UndirectedEulerTour::new_from(&graph, center).collect();
        assert_eq!(tour.len(), 6);
        assert_each_edge_once(&graph, &tour);
        assert_trail(&tour);
        assert_closed(&tour, center);
    }

    #[test]
    fn test_undirected_edges_against_their_direction() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n0, n2, ());
        graph.add_edge(n1, n2, ());

        assert!(!is_eulerian(&graph, Directedness::Directed));
        assert!(is_eulerian(&graph, Directedness::Undirected));

        let tour: Vec<_> = UndirectedEulerTour::new_from(&graph, n1).collect();
        assert_each_edge_once(&graph, &tour);
        assert_trail(&tour);
        assert_closed(&tour, n1);
        for arc in &tour {
            let endpoints = graph.edge_endpoints(arc.edge_id);
            assert!(
                (endpoints.from_node, endpoints.to_node) == (arc.from_node, arc.to_node)
                    || (endpoints.from_node, endpoints.to_node) == (arc.to_node, arc.from_node)
            );
        }
    }

    #[test]
    fn test_undirected_loop_and_parallel_edges() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, ());
        let e1 = graph.add_edge(n0, n1, ());
        let e2 = graph.add_edge(n1, n1, ());

        assert!(is_eulerian(&graph, Directedness::Undirected));
        let tour: Vec<_> = UndirectedEulerTour::new_from(&graph, n0).collect();
        assert_eq!(tour.len(), 3);
        assert_each_edge_once(&graph, &tour);
        assert_trail(&tour);
        assert_closed(&tour, n0);

        let self_loop = tour.iter().find(|arc| arc.edge_id == e2).unwrap();
        assert_eq!((self_loop.from_node, self_loop.to_node), (n1, n1));
        let backwards = tour
            .iter()
            .filter(|arc| arc.edge_id == e0 || arc.edge_id == e1)
            .filter(|arc| arc.from_node == n1)
            .count();
        assert_eq!(backwards, 1);
    }

    #[test]
    fn test_undirected_disconnected_triangles() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        for triangle in nodes.chunks(3) {
            graph.add_edge(triangle[0], triangle[1], ());
            graph.add_edge(triangle[1], triangle[2], ());
            graph.add_edge(triangle[2], triangle[0], ());
        }

        assert!(!is_eulerian(&graph, Directedness::Undirected));
        let tour: Vec<_> = UndirectedEulerTour::new_from(&graph, nodes[3]).collect();
        assert_eq!(tour.len(), 3);
        assert_trail(&tour);
        assert_closed(&tour, nodes[3]);
        assert!(tour.iter().all(|arc| arc.from_node >= nodes[3]));
    }

    #[test]
    fn test_random_eulerian_graphs() {
        let mut random = StdRng::seed_from_u64(42);
        for node_amount in 1..30 {
            let mut graph = petgraph_impl::new::<(), ()>();
            create_random_eulerian_graph(&mut graph, node_amount, 5, &mut random);
            assert!(is_eulerian(&graph, Directedness::Directed));
            assert!(is_eulerian(&graph, Directedness::Undirected));

            let start = (node_amount / 2).into();
            let tour: Vec<_> = DirectedEulerTour::new_from(&graph, start).collect();
            assert_each_edge_once(&graph, &tour);
            assert_trail(&tour);
            assert_closed(&tour, start);
            for arc in &tour {
                let endpoints = graph.edge_endpoints(arc.edge_id);
                assert_eq!(endpoints.from_node, arc.from_node);
                assert_eq!(endpoints.to_node, arc.to_node);
            }

            let tour: Vec<_> = UndirectedEulerTour::new_from(&graph, start).collect();
            assert_each_edge_once(&graph, &tour);
            assert_trail(&tour);
            assert_closed(&tour, start);
        }
    }
}
