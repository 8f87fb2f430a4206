use crate::graph::{BaseGraph, GraphError};
use num::Integer;

pub trait LowerboundHeuristic {
    fn compute<G: BaseGraph>(graph: &G) -> usize;
}

/// Every vertex covers at most `max_degree` edges, so at least `ceil(|E| / max_degree)` vertices
/// are needed to cover the remaining graph.
pub struct EdgeDegreeBound {}

impl LowerboundHeuristic for EdgeDegreeBound {
    fn compute<G: BaseGraph>(graph: &G) -> usize {
        let edges = graph.size();
        if edges == 0 {
            return 0;
        }
        match max_degree_vertex(graph) {
            Ok((_, degree)) => Integer::div_ceil(&edges, &degree),
            Err(_) => 0,
        }
    }
}

/// Returns the vertex of maximum degree together with its degree. Ties are broken in favour of
/// the smallest vertex id.
pub fn max_degree_vertex<G: BaseGraph>(graph: &G) -> Result<(usize, usize), GraphError> {
    graph
        .max_vertex_by(|u, v| {
            graph
                .degree(*u)
                .cmp(&graph.degree(*v))
                .then_with(|| v.cmp(u))
        })
        .map(|v| (v, graph.degree(v)))
        .ok_or(GraphError::EmptyGraph)
}

#[cfg(test)]
mod tests {
    use crate::graph::{GraphError, HashMapGraph, MutableGraph, UndoGraph};
    use crate::lowerbound::{max_degree_vertex, EdgeDegreeBound, LowerboundHeuristic};

    #[test]
    fn empty_graph() {
        let graph = HashMapGraph::new();
        assert_eq!(max_degree_vertex(&graph), Err(GraphError::EmptyGraph));
        assert_eq!(EdgeDegreeBound::compute(&graph), 0);
    }

    #[test]
    fn ties_go_to_smallest_id() {
        let mut graph = HashMapGraph::new();
        graph.add_edges(&[(7, 8), (3, 4), (5, 6)]);
        assert_eq!(max_degree_vertex(&graph), Ok((3, 1)));

        let mut graph = HashMapGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(2);
        assert_eq!(max_degree_vertex(&graph), Ok((0, 0)));
    }

    #[test]
    fn star_center() {
        let mut graph = HashMapGraph::new();
        graph.add_edges(&[(1, 9), (2, 9), (3, 9), (4, 9), (1, 2)]);
        assert_eq!(max_degree_vertex(&graph), Ok((9, 4)));
        assert_eq!(EdgeDegreeBound::compute(&graph), 2);
    }

    #[test]
    fn bound_on_path() {
        let mut graph = HashMapGraph::new();
        graph.add_edges(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        assert_eq!(EdgeDegreeBound::compute(&graph), 2);

        let mut working = UndoGraph::from_graph(&graph);
        working.remove_vertex(2).unwrap();
        assert_eq!(max_degree_vertex(&working), Ok((4, 2)));
        assert_eq!(EdgeDegreeBound::compute(&working), 1);
        working.remove_vertex(4).unwrap();
        assert_eq!(EdgeDegreeBound::compute(&working), 0);
    }
}
