use std::cmp::Ordering;
use std::fmt::Debug;
use thiserror::Error;

pub trait BaseGraph: Clone + Debug {
    fn degree(&self, u: usize) -> usize;
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn has_vertex(&self, u: usize) -> bool;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
    fn min_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize>;
    fn max_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize>;
    fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = self
            .vertices()
            .flat_map(|u| {
                self.neighborhood(u)
                    .filter(move |v| u < *v)
                    .map(move |v| (u, v))
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(usize),
}
