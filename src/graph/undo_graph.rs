use crate::datastructures::BitSet;
use crate::graph::base_graph::{BaseGraph, GraphError};
use crate::graph::hash_map_graph::HashMapGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use std::cmp::Ordering;

/// A reversible modification of an [`UndoGraph`]. Indices refer to internal slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    RemoveEdge(usize),
    RemoveVertex(usize),
}

#[derive(Clone, Debug)]
pub struct UndoGraph {
    labels: Vec<usize>,
    index: FxHashMap<usize, usize>,
    endpoints: Vec<(usize, usize)>,
    incidence: Vec<Vec<(usize, usize)>>,
    vertex_alive: BitSet,
    edge_alive: BitSet,
    degrees: Vec<usize>,
    log: Vec<Operation>,
}

impl UndoGraph {
    pub fn from_graph<G: BaseGraph>(graph: &G) -> Self {
        let mut labels: Vec<usize> = graph.vertices().collect();
        labels.sort_unstable();
        let index: FxHashMap<usize, usize> = labels
            .iter()
            .copied()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let mut endpoints = Vec::with_capacity(graph.size());
        let mut incidence = vec![Vec::new(); labels.len()];
        for (u, v) in graph.edges() {
            let (u, v) = (index[&u], index[&v]);
            let slot = endpoints.len();
            endpoints.push((u, v));
            incidence[u].push((v, slot));
            incidence[v].push((u, slot));
        }
        incidence
            .iter_mut()
            .for_each(|edges| edges.sort_unstable());
        let degrees = incidence.iter().map(|edges| edges.len()).collect();

        Self {
            vertex_alive: BitSet::new_all_set(labels.len()),
            edge_alive: BitSet::new_all_set(endpoints.len()),
            labels,
            index,
            endpoints,
            incidence,
            degrees,
            log: Vec::new(),
        }
    }

    fn slot(&self, u: usize) -> Result<usize, GraphError> {
        self.index
            .get(&u)
            .copied()
            .ok_or(GraphError::UnknownVertex(u))
    }

    fn kill_edge(&mut self, slot: usize) {
        if self.edge_alive.unset_bit(slot) {
            let (u, v) = self.endpoints[slot];
            self.degrees[u] -= 1;
            self.degrees[v] -= 1;
            self.log.push(Operation::RemoveEdge(slot));
        }
    }

    /// Removes the edge `{u, v}` if it is currently present. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        let (u, v) = (self.slot(u)?, self.slot(v)?);
        let found = self.incidence[u]
            .iter()
            .find(|(w, slot)| *w == v && self.edge_alive[*slot])
            .map(|(_, slot)| *slot);
        match found {
            Some(slot) => {
                self.kill_edge(slot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes `u` together with all of its current edges. Removing an already removed vertex is
    /// a no-op.
    pub fn remove_vertex(&mut self, u: usize) -> Result<(), GraphError> {
        let u = self.slot(u)?;
        if !self.vertex_alive[u] {
            return Ok(());
        }
        for i in 0..self.incidence[u].len() {
            let slot = self.incidence[u][i].1;
            self.kill_edge(slot);
        }
        self.vertex_alive.unset_bit(u);
        self.log.push(Operation::RemoveVertex(u));
        Ok(())
    }

    /// Position in the undo log that [`UndoGraph::rollback`] can later return to.
    pub fn checkpoint(&self) -> usize {
        self.log.len()
    }

    /// Undoes every operation performed after `mark` was taken, newest first.
    pub fn rollback(&mut self, mark: usize) {
        while self.log.len() > mark {
            match self.log.pop() {
                Some(Operation::RemoveEdge(slot)) => {
                    self.edge_alive.set_bit(slot);
                    let (u, v) = self.endpoints[slot];
                    self.degrees[u] += 1;
                    self.degrees[v] += 1;
                }
                Some(Operation::RemoveVertex(u)) => {
                    self.vertex_alive.set_bit(u);
                }
                None => break,
            }
        }
    }

    /// Restores the graph this instance was built from.
    pub fn restore(&mut self) {
        self.rollback(0);
    }

    pub fn operations(&self) -> &[Operation] {
        &self.log
    }

    pub fn to_hash_map_graph(&self) -> HashMapGraph {
        let mut graph = HashMapGraph::with_capacity(self.order());
        for u in self.vertex_alive.iter() {
            graph.add_vertex_with_capacity(self.labels[u], self.degrees[u]);
        }
        for slot in self.edge_alive.iter() {
            let (u, v) = self.endpoints[slot];
            graph.add_edge(self.labels[u], self.labels[v]);
        }
        graph
    }
}

impl BaseGraph for UndoGraph {
    fn degree(&self, u: usize) -> usize {
        match self.index.get(&u) {
            Some(i) if self.vertex_alive[*i] => self.degrees[*i],
            _ => 0,
        }
    }

    fn order(&self) -> usize {
        self.vertex_alive.cardinality()
    }

    fn size(&self) -> usize {
        self.edge_alive.cardinality()
    }

    fn has_vertex(&self, u: usize) -> bool {
        self.index.get(&u).map_or(false, |i| self.vertex_alive[*i])
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        match (self.index.get(&u), self.index.get(&v)) {
            (Some(u), Some(v)) => self.incidence[*u]
                .iter()
                .any(|(w, slot)| w == v && self.edge_alive[*slot]),
            _ => false,
        }
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.vertex_alive.iter().map(move |i| self.labels[i]))
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.index.get(&u) {
            Some(i) if self.vertex_alive[*i] => Box::new(
                self.incidence[*i]
                    .iter()
                    .filter(move |(_, slot)| self.edge_alive[*slot])
                    .map(move |(w, _)| self.labels[*w]),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn min_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize> {
        self.vertices().min_by(cmp)
    }

    fn max_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize> {
        self.vertices().max_by(cmp)
    }
}
