/// Algorithms related to graph components, i.e. checking if all edges of a graph are connected when ignoring their direction.
pub mod components;
/// Algorithms related to Eulerian graphs, i.e. computing Euler tours and deciding if a graph is Eulerian.
pub mod eulerian;
/// Algorithms to create certain parameterisable graph classes, like cycles or random Eulerian graphs.
pub mod predefined_graphs;
/// Neighbor strategies and breadth first search.
pub mod traversal;
