use crate::index::GraphIndex;
use crate::interface::{GraphBase, NavigableGraph, Neighbor, StaticGraph};
use bitvector::BitVector;
use std::collections::VecDeque;
use std::marker::PhantomData;

/// A BFS that treats each directed edge as an undirected edge, i.e. that traverses edges both in forward and backward direction.
pub type UndirectedBfs<'a, Graph> = Bfs<'a, Graph, UndirectedNeighborStrategy>;

/// A type that defines the strategy for computing the neighborhood of a node, i.e. forward or undirected.
pub trait TraversalNeighborStrategy<'a, Graph: GraphBase> {
    /// The iterator type used to iterate over the neighbors of a node.
    type Iterator: Iterator<Item = Neighbor<Graph::NodeIndex, Graph::EdgeIndex>>;

    /// Returns an iterator over the neighbors of a given node.
    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator;
}

/// A neighbor strategy that traverses all outgoing edges of a node.
pub struct ForwardNeighborStrategy;

impl<'a, Graph: NavigableGraph<'a>> TraversalNeighborStrategy<'a, Graph>
    for ForwardNeighborStrategy
{
    type Iterator = Graph::OutNeighbors;

    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator {
        graph.out_neighbors(node)
    }
}

/// A neighbor strategy that traverses all outgoing and then all incoming edges of a node.
/// The neighbor of an incoming edge is its tail, so each edge can be walked against its direction.
///
/// A self-loop is returned twice, once as outgoing and once as incoming edge.
pub struct UndirectedNeighborStrategy;
type OutInNeighborsChain<OutNeighbors, InNeighbors> = std::iter::Chain<
    <OutNeighbors as IntoIterator>::IntoIter,
    <InNeighbors as IntoIterator>::IntoIter,
>;

impl<'a, Graph: NavigableGraph<'a>> TraversalNeighborStrategy<'a, Graph>
    for UndirectedNeighborStrategy
{
    type Iterator = OutInNeighborsChain<Graph::OutNeighbors, Graph::InNeighbors>;

    fn neighbor_iterator(graph: &'a Graph, node: Graph::NodeIndex) -> Self::Iterator {
        graph.out_neighbors(node).chain(graph.in_neighbors(node))
    }
}

/// A breadth first search that returns the visited nodes in preorder.
/// The direction of the search is defined by the `NeighborStrategy`.
pub struct Bfs<'a, Graph: GraphBase, NeighborStrategy> {
    graph: &'a Graph,
    queue: VecDeque<Graph::NodeIndex>,
    visited: BitVector,
    neighbor_strategy: PhantomData<NeighborStrategy>,
}

impl<'a, Graph: StaticGraph, NeighborStrategy: TraversalNeighborStrategy<'a, Graph>>
    Bfs<'a, Graph, NeighborStrategy>
{
    /// Creates a new traversal that operates on the given graph starting from the given node.
    pub fn new(graph: &'a Graph, start: Graph::NodeIndex) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut visited = BitVector::new(graph.node_count());
        visited.insert(start.as_usize());
        Self {
            graph,
            queue,
            visited,
            neighbor_strategy: Default::default(),
        }
    }

    /// Returns true if the given node was already reached by the search.
    /// Reached nodes may still be waiting in the queue.
    pub fn is_visited(&self, node: Graph::NodeIndex) -> bool {
        self.visited.contains(node.as_usize())
    }
}

impl<'a, Graph: StaticGraph, NeighborStrategy: TraversalNeighborStrategy<'a, Graph>> Iterator
    for Bfs<'a, Graph, NeighborStrategy>
{
    type Item = Graph::NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.queue.pop_front()?;
        for neighbor in NeighborStrategy::neighbor_iterator(self.graph, first) {
            if self.visited.insert(neighbor.node_id.as_usize()) {
                self.queue.push_back(neighbor.node_id);
            }
        }
        Some(first)
    }
}
