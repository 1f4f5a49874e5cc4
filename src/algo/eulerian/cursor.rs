use crate::algo::traversal::TraversalNeighborStrategy;
use crate::index::GraphIndex;
use crate::interface::StaticGraph;

/// A cursor over the arcs of a single node that have not yet been consumed.
///
/// The cursor only moves forward. Once it is exhausted, it stays exhausted.
pub struct NextArcCursor<Arcs: Iterator> {
    current: Option<Arcs::Item>,
    arcs: Arcs,
}

impl<Arcs: Iterator> NextArcCursor<Arcs> {
    /// Creates a cursor pointing to the first arc of the given iterator.
    pub fn new(mut arcs: Arcs) -> Self {
        Self {
            current: arcs.next(),
            arcs,
        }
    }

    /// Returns the arc the cursor points to, or `None` if the cursor is exhausted.
    pub fn current(&self) -> Option<&Arcs::Item> {
        self.current.as_ref()
    }

    /// Moves the cursor to the next arc and returns the arc it pointed to before.
    pub fn advance(&mut self) -> Option<Arcs::Item> {
        let result = self.current.take();
        if result.is_some() {
            self.current = self.arcs.next();
        }
        result
    }

    /// Moves the cursor forward as long as `predicate` holds for the current arc,
    /// and returns the first arc where it does not hold.
    pub fn advance_while<Predicate: FnMut(&Arcs::Item) -> bool>(
        &mut self,
        mut predicate: Predicate,
    ) -> Option<&Arcs::Item> {
        while self.current.as_ref().map_or(false, &mut predicate) {
            self.current = self.arcs.next();
        }
        self.current.as_ref()
    }

    /// Returns true if the cursor has no arcs left.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

/// A table holding one [NextArcCursor](NextArcCursor) per node of a graph, indexed by node index.
pub struct NextArcCursors<Arcs: Iterator> {
    cursors: Vec<NextArcCursor<Arcs>>,
}

impl<Arcs: Iterator> NextArcCursors<Arcs> {
    /// Creates a cursor for each node of the graph, pointing to the first neighbor of the node as returned by `NeighborStrategy`.
    pub fn new<'a, Graph, NeighborStrategy>(graph: &'a Graph) -> Self
    where
        Graph: StaticGraph,
        NeighborStrategy: TraversalNeighborStrategy<'a, Graph, Iterator = Arcs>,
    {
        Self {
            cursors: graph
                .node_indices()
                .map(|node| NextArcCursor::new(NeighborStrategy::neighbor_iterator(graph, node)))
                .collect(),
        }
    }

    /// Returns the cursor of the given node.
    pub fn get<NodeIndex: GraphIndex>(&self, node: NodeIndex) -> &NextArcCursor<Arcs> {
        &self.cursors[node.as_usize()]
    }

    /// Returns the cursor of the given node.
    pub fn get_mut<NodeIndex: GraphIndex>(&mut self, node: NodeIndex) -> &mut NextArcCursor<Arcs> {
        &mut self.cursors[node.as_usize()]
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::eulerian::cursor::{NextArcCursor, NextArcCursors};
    use crate::algo::traversal::{ForwardNeighborStrategy, UndirectedNeighborStrategy};
    use crate::implementation::petgraph_impl;
    use crate::interface::MutableGraphContainer;

    #[test]
    fn test_cursor_advance() {
        let mut cursor = NextArcCursor::new(vec![1, 2, 3, 4].into_iter());
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.advance_while(|&arc| arc < 4), Some(&4));
        assert_eq!(cursor.advance(), Some(4));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.advance_while(|_| true), None);
    }

    #[test]
    fn test_cursor_table() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, ());
        let e1 = graph.add_edge(n1, n2, ());

        let mut forward = NextArcCursors::new::<_, ForwardNeighborStrategy>(&graph);
        assert_eq!(forward.get(n0).current().map(|n| n.edge_id), Some(e0));
        assert!(forward.get(n2).is_exhausted());
        assert_eq!(forward.get_mut(n1).advance().map(|n| n.node_id), Some(n2));
        assert!(forward.get(n1).is_exhausted());

        let mut undirected = NextArcCursors::new::<_, UndirectedNeighborStrategy>(&graph);
        let cursor = undirected.get_mut(n1);
        assert_eq!(cursor.advance().map(|n| (n.edge_id, n.node_id)), Some((e1, n2)));
        assert_eq!(cursor.advance().map(|n| (n.edge_id, n.node_id)), Some((e0, n0)));
        assert!(cursor.is_exhausted());
        assert!(undirected.get(n2).current().is_some());
    }
}
