use crate::interface::DynamicGraph;
use rand::Rng;

/// Adds a directed cycle with the given amount of nodes to the graph.
/// The i-th added edge goes from the i-th added node to the (i+1)-th added node, and the last edge closes the cycle.
/// Returns the first added node, or `None` if the length is zero.
pub fn create_cycle<Graph: DynamicGraph>(
    graph: &mut Graph,
    length: usize,
) -> Option<Graph::NodeIndex>
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    let nodes: Vec<_> = (0..length)
        .map(|_| graph.add_node(Default::default()))
        .collect();
    add_closed_walk(graph, &nodes);
    nodes.first().copied()
}

/// Adds two directed triangles sharing one node to the graph and returns the shared node.
/// The shared node has degree four, all other nodes have degree two.
pub fn create_bowtie<Graph: DynamicGraph>(graph: &mut Graph) -> Graph::NodeIndex
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    let center = graph.add_node(Default::default());
    let left: Vec<_> = (0..2).map(|_| graph.add_node(Default::default())).collect();
    let right: Vec<_> = (0..2).map(|_| graph.add_node(Default::default())).collect();
    add_closed_walk(graph, &[center, left[0], left[1]]);
    add_closed_walk(graph, &[center, right[0], right[1]]);
    center
}

/// Creates a random graph that is Eulerian both as directed and as undirected graph.
/// Assumes that the graph is empty.
///
/// The graph consists of a hamiltonian cycle and `walk_amount` closed walks through random nodes.
/// Each walk visits between one and `node_amount` nodes, so it may contain self-loops and parallel edges.
pub fn create_random_eulerian_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    walk_amount: usize,
    random: &mut Random,
) where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    if node_amount == 0 {
        return;
    }

    create_cycle(graph, node_amount);
    let nodes: Vec<_> = graph.node_indices().collect();

    for _ in 0..walk_amount {
        let walk_length = random.gen_range(1, node_amount + 1);
        let walk: Vec<_> = (0..walk_length)
            .map(|_| nodes[random.gen_range(0, node_amount)])
            .collect();
        add_closed_walk(graph, &walk);
    }
}

fn add_closed_walk<Graph: DynamicGraph>(graph: &mut Graph, walk: &[Graph::NodeIndex])
where
    Graph::EdgeData: Default,
{
    for (i, &from_node) in walk.iter().enumerate() {
        let to_node = walk[(i + 1) % walk.len()];
        graph.add_edge(from_node, to_node, Default::default());
    }
}
