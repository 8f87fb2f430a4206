use crate::vertex_cover::VertexState;

pub mod branch_and_bound;
pub mod tree_dp;

pub use branch_and_bound::{BranchAndBound, Milestone, SearchError, SearchResult};
pub use tree_dp::{DpTable, TreeCover, TreeDp, TreeError};

/// The decision a branch was created under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    /// First decision of the search; backtracking to it starts over on the full graph.
    Root,
    Child { vertex: usize, state: VertexState },
}
