use crate::datastructures::BitSet;
use crate::vertex_cover::{Assignment, VertexCover, VertexState};
#[cfg(feature = "log")]
use log::debug;
use std::cmp::min;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("root {root} is not a vertex of a tree with {order} vertices")]
    InvalidRoot { root: usize, order: usize },
    #[error("vertex {vertex} lists neighbor {neighbor} which is out of range")]
    NeighborOutOfRange { vertex: usize, neighbor: usize },
    #[error("cycle closed by edge ({u}, {v})")]
    Cycle { u: usize, v: usize },
    #[error("vertex {vertex} is not reachable from the root")]
    Disconnected { vertex: usize },
}

/// `dp[v][state]` for every vertex, indexed like the adjacency lists it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable {
    root: usize,
    values: Vec<[usize; 2]>,
}

impl DpTable {
    pub fn get(&self, vertex: usize, state: VertexState) -> usize {
        self.values[vertex][state.index()]
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn cover_size(&self) -> usize {
        min(
            self.get(self.root, VertexState::Excluded),
            self.get(self.root, VertexState::Included),
        )
    }
}

#[derive(Clone, Debug)]
pub struct TreeCover {
    pub size: usize,
    pub assignment: Assignment,
    pub cover: VertexCover,
}

struct Traversal {
    order: Vec<usize>,
    parent: Vec<usize>,
}

pub struct TreeDp<'a> {
    adjacency: &'a [Vec<usize>],
    root: usize,
}

impl<'a> TreeDp<'a> {
    /// `adjacency[v]` lists the neighbors of `v` for `v` in `1..adjacency.len()`; `adjacency[0]`
    /// is ignored.
    pub fn new(adjacency: &'a [Vec<usize>], root: usize) -> Self {
        Self { adjacency, root }
    }

    fn order(&self) -> usize {
        self.adjacency.len().saturating_sub(1)
    }

    /// Iterative DFS from the root. `parent[root] == 0`, which is never a vertex.
    fn traverse(&self) -> Result<Traversal, TreeError> {
        let n = self.order();
        if self.root == 0 || self.root > n {
            return Err(TreeError::InvalidRoot {
                root: self.root,
                order: n,
            });
        }
        let mut parent = vec![0; n + 1];
        let mut visited = BitSet::new(n + 1);
        let mut order = Vec::with_capacity(n);
        let mut stack = Vec::with_capacity(n);

        visited.set_bit(self.root);
        stack.push(self.root);
        while let Some(v) = stack.pop() {
            order.push(v);
            for c in self.adjacency[v].iter().copied() {
                if c == 0 || c > n {
                    return Err(TreeError::NeighborOutOfRange {
                        vertex: v,
                        neighbor: c,
                    });
                }
                // repeated entries describe the same edge
                if c == parent[v] || (visited[c] && parent[c] == v) {
                    continue;
                }
                if visited.set_bit(c) {
                    return Err(TreeError::Cycle { u: v, v: c });
                }
                parent[c] = v;
                stack.push(c);
            }
        }

        if order.len() < n {
            let vertex = (1..=n).find(|v| !visited[*v]).unwrap_or(n);
            return Err(TreeError::Disconnected { vertex });
        }
        Ok(Traversal { order, parent })
    }

    fn fill(&self, traversal: &Traversal) -> DpTable {
        let mut values = vec![[0, 1]; self.adjacency.len()];
        values[0] = [0, 0];
        for v in traversal.order.iter().copied().rev() {
            let p = traversal.parent[v];
            if p == 0 {
                continue;
            }
            let [excluded, included] = values[v];
            values[p][VertexState::Excluded.index()] += included;
            values[p][VertexState::Included.index()] += min(excluded, included);
        }
        DpTable {
            root: self.root,
            values,
        }
    }

    pub fn table(&self) -> Result<DpTable, TreeError> {
        let traversal = self.traverse()?;
        Ok(self.fill(&traversal))
    }

    pub fn cover_size(&self) -> Result<usize, TreeError> {
        Ok(self.table()?.cover_size())
    }

    /// Computes the table and reconstructs an optimal assignment top-down.
    pub fn compute(&self) -> Result<TreeCover, TreeError> {
        let traversal = self.traverse()?;
        let table = self.fill(&traversal);

        let mut states = vec![VertexState::Excluded; self.adjacency.len()];
        let mut assignment = Vec::with_capacity(traversal.order.len());
        for v in traversal.order.iter().copied() {
            let p = traversal.parent[v];
            let state = if p != 0 && states[p] == VertexState::Excluded {
                VertexState::Included
            } else if table.get(v, VertexState::Included) < table.get(v, VertexState::Excluded) {
                VertexState::Included
            } else {
                VertexState::Excluded
            };
            states[v] = state;
            assignment.push((v, state));
        }

        let cover = VertexCover::from_assignment(&assignment);
        let size = table.cover_size();
        #[cfg(feature = "log")]
        debug!(
            "tree dp on {} vertices from root {}: cover of size {}",
            self.order(),
            self.root,
            size
        );
        debug_assert_eq!(cover.len(), size);
        Ok(TreeCover {
            size,
            assignment,
            cover,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::exact::tree_dp::{TreeDp, TreeError};
    use crate::generator::random_tree;
    use crate::graph::HashMapGraph;
    use crate::vertex_cover::VertexState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path(n: usize) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); n + 1];
        for v in 1..n {
            adjacency[v].push(v + 1);
            adjacency[v + 1].push(v);
        }
        adjacency
    }

    fn star(leaves: usize) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); leaves + 2];
        for leaf in 2..=leaves + 1 {
            adjacency[1].push(leaf);
            adjacency[leaf].push(1);
        }
        adjacency
    }

    #[test]
    fn single_vertex() {
        let adjacency = vec![vec![], vec![]];
        assert_eq!(TreeDp::new(&adjacency, 1).cover_size(), Ok(0));
        let result = TreeDp::new(&adjacency, 1).compute().unwrap();
        assert!(result.cover.is_empty());
        assert_eq!(result.assignment, vec![(1, VertexState::Excluded)]);
    }

    #[test]
    fn stars() {
        for leaves in 1..20 {
            let adjacency = star(leaves);
            assert_eq!(TreeDp::new(&adjacency, 1).cover_size(), Ok(1));
            // rooting at a leaf must not change the answer
            assert_eq!(TreeDp::new(&adjacency, 2).cover_size(), Ok(1));
        }
        let adjacency = star(5);
        let result = TreeDp::new(&adjacency, 3).compute().unwrap();
        assert_eq!(result.cover.sorted(), vec![1]);
    }

    #[test]
    fn paths() {
        for n in 1..40 {
            let adjacency = path(n);
            assert_eq!(TreeDp::new(&adjacency, 1).cover_size(), Ok(n / 2));
            assert_eq!(TreeDp::new(&adjacency, (n + 1) / 2).cover_size(), Ok(n / 2));
        }
    }

    #[test]
    fn path_of_five() {
        let adjacency = vec![vec![], vec![2], vec![1, 3], vec![2, 4], vec![3, 5], vec![4]];
        let dp = TreeDp::new(&adjacency, 1);
        let table = dp.table().unwrap();
        assert_eq!(table.get(5, VertexState::Excluded), 0);
        assert_eq!(table.get(5, VertexState::Included), 1);
        assert_eq!(table.get(1, VertexState::Excluded), 2);
        assert_eq!(table.get(1, VertexState::Included), 3);
        let result = dp.compute().unwrap();
        assert_eq!(result.size, 2);
        assert_eq!(result.cover.sorted(), vec![2, 4]);
    }

    #[test]
    fn repeated_neighbors_are_one_edge() {
        let adjacency = vec![vec![], vec![2, 2], vec![1, 1]];
        assert_eq!(TreeDp::new(&adjacency, 1).cover_size(), Ok(1));
        assert_eq!(TreeDp::new(&adjacency, 2).cover_size(), Ok(1));

        let adjacency = vec![vec![], vec![2, 3, 2], vec![1, 1, 4, 4], vec![1], vec![2, 2]];
        let result = TreeDp::new(&adjacency, 1).compute().unwrap();
        assert_eq!(result.size, 2);
        assert_eq!(result.assignment.len(), 4);
        assert_eq!(result.cover.sorted(), vec![2, 3]);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 1_000_000;
        let adjacency = path(n);
        assert_eq!(TreeDp::new(&adjacency, 1).cover_size(), Ok(n / 2));
    }

    #[test]
    fn assignments_are_valid_covers() {
        let mut rng = StdRng::seed_from_u64(4242);
        for n in [2, 3, 10, 100, 1000, 5000].iter().copied() {
            let adjacency = random_tree(n, &mut rng);
            let graph = HashMapGraph::from_adjacency(&adjacency);
            for root in [1, n, n / 2 + 1].iter().copied() {
                let result = TreeDp::new(&adjacency, root).compute().unwrap();
                assert_eq!(result.cover.len(), result.size);
                assert_eq!(result.assignment.len(), n);
                assert_eq!(result.cover.verify(&graph), Ok(()));
                for (v, state) in result.assignment.iter() {
                    if *state == VertexState::Excluded {
                        for w in adjacency[*v].iter() {
                            assert!(result.cover.contains(*w));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn invalid_inputs() {
        let adjacency = path(3);
        assert_eq!(
            TreeDp::new(&adjacency, 0).cover_size(),
            Err(TreeError::InvalidRoot { root: 0, order: 3 })
        );
        assert_eq!(
            TreeDp::new(&adjacency, 4).cover_size(),
            Err(TreeError::InvalidRoot { root: 4, order: 3 })
        );

        let triangle = vec![vec![], vec![2, 3], vec![1, 3], vec![1, 2]];
        assert!(matches!(
            TreeDp::new(&triangle, 1).cover_size(),
            Err(TreeError::Cycle { .. })
        ));

        let forest = vec![vec![], vec![2], vec![1], vec![4], vec![3]];
        assert_eq!(
            TreeDp::new(&forest, 1).cover_size(),
            Err(TreeError::Disconnected { vertex: 3 })
        );

        let dangling = vec![vec![], vec![2], vec![1, 7]];
        assert_eq!(
            TreeDp::new(&dangling, 1).cover_size(),
            Err(TreeError::NeighborOutOfRange {
                vertex: 2,
                neighbor: 7
            })
        );
    }
}
