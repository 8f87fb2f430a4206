use crate::graph::BaseGraph;
use fxhash::FxHashSet;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexState {
    Excluded,
    Included,
}

impl VertexState {
    pub fn index(self) -> usize {
        match self {
            VertexState::Excluded => 0,
            VertexState::Included => 1,
        }
    }

    pub fn is_included(self) -> bool {
        self == VertexState::Included
    }
}

impl fmt::Display for VertexState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VertexState::Excluded => f.write_str("excluded"),
            VertexState::Included => f.write_str("included"),
        }
    }
}

pub type Assignment = Vec<(usize, VertexState)>;

/// Number of `Included` entries of an assignment.
pub fn assignment_size(assignment: &[(usize, VertexState)]) -> usize {
    assignment
        .iter()
        .filter(|(_, state)| state.is_included())
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoverError {
    #[error("edge ({u}, {v}) has no endpoint in the cover")]
    UncoveredEdge { u: usize, v: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexCover {
    vertices: FxHashSet<usize>,
}

impl VertexCover {
    pub fn from_assignment(assignment: &[(usize, VertexState)]) -> Self {
        assignment
            .iter()
            .filter(|(_, state)| state.is_included())
            .map(|(v, _)| *v)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    pub fn extend(&mut self, other: VertexCover) {
        self.vertices.extend(other.vertices)
    }

    /// Vertices of the cover in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut vertices: Vec<_> = self.vertices.iter().copied().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Checks that every edge of `graph` has at least one endpoint in the cover.
    pub fn verify<G: BaseGraph>(&self, graph: &G) -> Result<(), CoverError> {
        match graph
            .edges()
            .into_iter()
            .find(|(u, v)| !self.contains(*u) && !self.contains(*v))
        {
            Some((u, v)) => Err(CoverError::UncoveredEdge { u, v }),
            None => Ok(()),
        }
    }
}

impl std::iter::FromIterator<usize> for VertexCover {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}
