use crate::graph::base_graph::BaseGraph;

pub trait MutableGraph: BaseGraph {
    fn add_vertex(&mut self, u: usize);
    fn add_vertex_with_capacity(&mut self, u: usize, capacity: usize);
    fn remove_vertex(&mut self, u: usize);
    fn add_edge(&mut self, u: usize, v: usize);
    fn remove_edge(&mut self, u: usize, v: usize);
    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;
    fn add_edges(&mut self, edges: &[(usize, usize)]) {
        for (u, v) in edges.iter().copied() {
            self.add_edge(u, v);
        }
    }
}
