use crate::exact::{BranchAndBound, SearchError, SearchResult, TreeDp, TreeError};
use crate::graph::{BaseGraph, HashMapGraph};
use crate::vertex_cover::{CoverError, VertexCover};
#[cfg(feature = "log")]
use log::{info, warn};
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverType {
    /// Tree dp for components that are trees, branch and bound for everything else.
    Auto,
    TreeDp,
    BranchAndBound,
}

impl Default for SolverType {
    fn default() -> Self {
        Self::Auto
    }
}

impl FromStr for SolverType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "dp" => Ok(Self::TreeDp),
            "bnb" => Ok(Self::BranchAndBound),
            _ => Err(format!("unknown solver '{}', expected auto, dp or bnb", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Cover(#[from] CoverError),
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub cover: VertexCover,
    /// False if any branch and bound run was cut off.
    pub optimal: bool,
    /// Number of components that had at least one edge.
    pub components: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    solver_type: SolverType,
    time_budget: Option<Duration>,
}

impl Solver {
    pub fn default_exact() -> Self {
        Self::default()
    }

    pub fn default_tree() -> Self {
        Self::default().solver_type(SolverType::TreeDp)
    }

    impl_setter!(self, solver_type, SolverType);
    impl_setter!(self, time_budget, Option<Duration>);

    /// Solves every connected component on its own and merges the covers. The time budget is
    /// shared, each branch and bound run gets whatever is left of it.
    pub fn solve(&self, graph: &HashMapGraph) -> Result<Solution, SolverError> {
        let start = Instant::now();
        #[cfg(feature = "log")]
        info!(
            "attempting to solve graph with {} vertices and {} edges",
            graph.order(),
            graph.size()
        );
        let mut cover = VertexCover::default();
        let mut optimal = true;
        let mut components = 0;

        for sub_graph in graph
            .connected_components()
            .iter()
            .map(|c| graph.vertex_induced(c))
        {
            if sub_graph.size() == 0 {
                continue;
            }
            components += 1;
            let use_dp = match self.solver_type {
                SolverType::Auto => sub_graph.is_tree(),
                SolverType::TreeDp => true,
                SolverType::BranchAndBound => false,
            };
            if use_dp {
                #[cfg(feature = "log")]
                info!("solving tree with {} vertices by dp", sub_graph.order());
                let (adjacency, labels) = sub_graph.to_adjacency();
                let result = TreeDp::new(&adjacency, 1).compute()?;
                cover.extend(result.cover.sorted().into_iter().map(|v| labels[v]).collect());
            } else {
                #[cfg(feature = "log")]
                info!(
                    "solving component with {} vertices by branch and bound",
                    sub_graph.order()
                );
                let result = self.branch_and_bound(&sub_graph, start)?;
                optimal &= result.is_optimal();
                if result.cover.is_empty() {
                    #[cfg(feature = "log")]
                    warn!("cut off before the first cover, taking all vertices");
                    cover.extend(sub_graph.vertices().collect());
                } else {
                    cover.extend(result.cover);
                }
            }
        }

        cover.verify(graph)?;
        #[cfg(feature = "log")]
        info!(
            "cover of size {} over {} components, optimal: {}",
            cover.len(),
            components,
            optimal
        );
        Ok(Solution {
            cover,
            optimal,
            components,
            elapsed: start.elapsed(),
        })
    }

    fn branch_and_bound(
        &self,
        graph: &HashMapGraph,
        start: Instant,
    ) -> Result<SearchResult, SearchError> {
        let search = BranchAndBound::with_graph(graph);
        match self.time_budget {
            Some(budget) => search
                .time_budget(budget.saturating_sub(start.elapsed()))
                .compute(),
            None => search.compute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::exact::TreeError;
    use crate::generator::random_tree;
    use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
    use crate::solver::{Solver, SolverError, SolverType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn forest_with_triangle() -> HashMapGraph {
        let mut graph = HashMapGraph::new();
        // path 10 - 20 - 30 - 40 - 50
        graph.add_edges(&[(10, 20), (20, 30), (30, 40), (40, 50)]);
        graph.add_edges(&[(7, 8), (8, 9), (9, 7)]);
        graph.add_vertex(100);
        graph
    }

    #[test]
    fn solver_type_from_str() {
        assert_eq!("auto".parse::<SolverType>(), Ok(SolverType::Auto));
        assert_eq!("dp".parse::<SolverType>(), Ok(SolverType::TreeDp));
        assert_eq!("bnb".parse::<SolverType>(), Ok(SolverType::BranchAndBound));
        assert!("quickbb".parse::<SolverType>().is_err());
    }

    #[test]
    fn auto_splits_components() {
        let graph = forest_with_triangle();
        let solution = Solver::default_exact().solve(&graph).unwrap();
        assert_eq!(solution.cover.len(), 4);
        assert_eq!(solution.components, 2);
        assert!(solution.optimal);
        assert!(!solution.cover.contains(100));
        assert!(solution.cover.contains(20) && solution.cover.contains(40));
    }

    #[test]
    fn tree_solver_rejects_cycles() {
        let graph = forest_with_triangle();
        assert!(matches!(
            Solver::default_tree().solve(&graph),
            Err(SolverError::Tree(TreeError::Cycle { .. }))
        ));
    }

    #[test]
    fn empty_graph() {
        let solution = Solver::default_exact().solve(&HashMapGraph::new()).unwrap();
        assert!(solution.cover.is_empty());
        assert_eq!(solution.components, 0);
        assert!(solution.optimal);
    }

    #[test]
    fn solvers_agree_on_trees() {
        let mut rng = StdRng::seed_from_u64(31);
        for n in [2, 8, 16, 25].iter().copied() {
            let graph = HashMapGraph::from_adjacency(&random_tree(n, &mut rng));
            let dp = Solver::default_tree().solve(&graph).unwrap();
            let bnb = Solver::default()
                .solver_type(SolverType::BranchAndBound)
                .solve(&graph)
                .unwrap();
            assert_eq!(dp.cover.len(), bnb.cover.len());
            assert!(bnb.optimal);
        }
    }

    #[test]
    fn exhausted_budget_still_covers() {
        let graph = forest_with_triangle();
        let solution = Solver::default()
            .solver_type(SolverType::BranchAndBound)
            .time_budget(Some(Duration::from_secs(0)))
            .solve(&graph)
            .unwrap();
        assert!(!solution.optimal);
        assert_eq!(solution.cover.verify(&graph), Ok(()));

        // trees never depend on the budget
        let solution = Solver::default()
            .time_budget(Some(Duration::from_secs(0)))
            .solve(&HashMapGraph::from_adjacency(&random_tree(
                50,
                &mut StdRng::seed_from_u64(5),
            )))
            .unwrap();
        assert!(solution.optimal);
    }
}
