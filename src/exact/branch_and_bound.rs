use crate::exact::Parent;
use crate::graph::{BaseGraph, GraphError, HashMapGraph, UndoGraph};
use crate::lowerbound::{max_degree_vertex, EdgeDegreeBound, LowerboundHeuristic};
#[cfg(feature = "handle-ctrlc")]
use crate::signals::received_ctrl_c;
use crate::timeout::{Stopper, Timer, Unlimited};
use crate::vertex_cover::{Assignment, VertexCover, VertexState};
use fxhash::FxHashMap;
#[cfg(feature = "log")]
use log::{debug, info};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier refers to a decision that is no longer on the assignment log. The working
    /// graph can not be trusted anymore.
    #[error("backtracking expected ({vertex}, {state}) on the assignment log")]
    InconsistentBacktrack { vertex: usize, state: VertexState },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub size: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Best assignment found. Empty if the search was cut off before the first cover.
    pub assignment: Assignment,
    pub cover: VertexCover,
    pub upperbound: usize,
    pub cut_off: bool,
    pub milestones: Vec<Milestone>,
    pub elapsed: Duration,
    pub iterations: usize,
}

impl SearchResult {
    pub fn size(&self) -> usize {
        self.cover.len()
    }

    /// Only a search that was not cut off proves optimality.
    pub fn is_optimal(&self) -> bool {
        !self.cut_off
    }
}

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    vertex: usize,
    state: VertexState,
    parent: Parent,
}

#[derive(Clone, Copy, Debug)]
struct LogEntry {
    vertex: usize,
    state: VertexState,
    /// Undo mark of the working graph taken right before this decision touched it.
    mark: usize,
}

struct SearchState {
    working: UndoGraph,
    frontier: Vec<FrontierEntry>,
    log: Vec<LogEntry>,
    positions: FxHashMap<usize, usize>,
    included: usize,
    upperbound: usize,
    best: Assignment,
    milestones: Vec<Milestone>,
}

impl SearchState {
    fn new(graph: &HashMapGraph) -> Self {
        Self {
            working: UndoGraph::from_graph(graph),
            frontier: Vec::new(),
            log: Vec::with_capacity(graph.order()),
            positions: FxHashMap::default(),
            included: 0,
            upperbound: graph.order(),
            best: Vec::new(),
            milestones: Vec::new(),
        }
    }

    fn push_branches(&mut self, vertex: usize, parent: Parent) {
        self.frontier.push(FrontierEntry {
            vertex,
            state: VertexState::Excluded,
            parent,
        });
        self.frontier.push(FrontierEntry {
            vertex,
            state: VertexState::Included,
            parent,
        });
    }

    fn record(&mut self, vertex: usize, state: VertexState) {
        self.positions.insert(vertex, self.log.len());
        self.log.push(LogEntry {
            vertex,
            state,
            mark: self.working.checkpoint(),
        });
        if state.is_included() {
            self.included += 1;
        }
    }

    fn branch(&mut self, entry: FrontierEntry) -> Result<(), GraphError> {
        match entry.state {
            VertexState::Excluded => {
                let neighbors: Vec<usize> = self.working.neighborhood(entry.vertex).collect();
                for w in neighbors {
                    self.record(w, VertexState::Included);
                    self.working.remove_vertex(w)?;
                }
                self.record(entry.vertex, VertexState::Excluded);
            }
            VertexState::Included => {
                self.record(entry.vertex, VertexState::Included);
                self.working.remove_vertex(entry.vertex)?;
            }
        }
        Ok(())
    }

    /// Cuts the assignment log back so that `parent` is its last decision and rolls the working
    /// graph back accordingly.
    fn backtrack(&mut self, parent: Parent) -> Result<(), SearchError> {
        match parent {
            Parent::Root => {
                self.log.clear();
                self.positions.clear();
                self.included = 0;
                self.working.restore();
                Ok(())
            }
            Parent::Child { vertex, state } => {
                let position = self
                    .positions
                    .get(&vertex)
                    .copied()
                    .filter(|p| {
                        self.log
                            .get(*p)
                            .map_or(false, |e| e.vertex == vertex && e.state == state)
                    })
                    .ok_or(SearchError::InconsistentBacktrack { vertex, state })?;
                if let Some(first_undone) = self.log.get(position + 1) {
                    self.working.rollback(first_undone.mark);
                }
                while self.log.len() > position + 1 {
                    if let Some(undone) = self.log.pop() {
                        self.positions.remove(&undone.vertex);
                        if undone.state.is_included() {
                            self.included -= 1;
                        }
                    }
                }
                Ok(())
            }
        }
    }

    fn assignment(&self) -> Assignment {
        self.log.iter().map(|e| (e.vertex, e.state)).collect()
    }
}

pub struct BranchAndBound<S: Stopper = Timer> {
    og_graph: HashMapGraph,
    stopper: S,
}

impl BranchAndBound<Unlimited> {
    pub fn with_graph(graph: &HashMapGraph) -> Self {
        Self {
            og_graph: graph.clone(),
            stopper: Unlimited::default(),
        }
    }
}

impl<S: Stopper> BranchAndBound<S> {
    pub fn time_budget(self, budget: Duration) -> BranchAndBound<Timer> {
        self.stopper(Timer::new(budget))
    }

    pub fn stopper<T: Stopper>(self, stopper: T) -> BranchAndBound<T> {
        BranchAndBound {
            og_graph: self.og_graph,
            stopper,
        }
    }

    pub fn compute(mut self) -> Result<SearchResult, SearchError> {
        self.stopper.init();
        let mut state = SearchState::new(&self.og_graph);
        let mut cut_off = false;
        let mut iterations = 0;

        if self.og_graph.order() > 0 {
            let (root, _) = max_degree_vertex(&state.working)?;
            state.push_branches(root, Parent::Root);
        }

        while !state.frontier.is_empty() {
            if self.stopper.stop() {
                cut_off = true;
                break;
            }
            #[cfg(feature = "handle-ctrlc")]
            if received_ctrl_c() {
                cut_off = true;
                break;
            }
            let entry = match state.frontier.pop() {
                Some(entry) => entry,
                None => break,
            };
            iterations += 1;
            state.branch(entry)?;

            let size = state.included;
            let backtrack = if state.working.size() == 0 {
                if size < state.upperbound {
                    state.best = state.assignment();
                    state.upperbound = size;
                    let elapsed = self.stopper.elapsed();
                    state.milestones.push(Milestone { size, elapsed });
                    #[cfg(feature = "log")]
                    info!("found cover of size {} after {:?}", size, elapsed);
                }
                true
            } else {
                let lowerbound = size + EdgeDegreeBound::compute(&state.working);
                if lowerbound < state.upperbound {
                    let (next, _) = max_degree_vertex(&state.working)?;
                    state.push_branches(
                        next,
                        Parent::Child {
                            vertex: entry.vertex,
                            state: entry.state,
                        },
                    );
                    false
                } else {
                    true
                }
            };

            if backtrack {
                if let Some(next) = state.frontier.last().copied() {
                    state.backtrack(next.parent)?;
                }
            }
        }

        #[cfg(feature = "log")]
        debug!(
            "branch and bound finished after {} iterations, cut off: {}",
            iterations, cut_off
        );

        let cover = VertexCover::from_assignment(&state.best);
        Ok(SearchResult {
            assignment: state.best,
            cover,
            upperbound: state.upperbound,
            cut_off,
            milestones: state.milestones,
            elapsed: self.stopper.elapsed(),
            iterations,
        })
    }
}
