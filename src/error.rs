error_chain! {
    errors {
        /// The start node given to a tour constructor does not exist in the graph.
        StartNodeNotInGraph(node: String) {
            description("the start node of a tour is not contained in the graph")
            display("start node {} is not contained in the graph", node)
        }
    }
}
