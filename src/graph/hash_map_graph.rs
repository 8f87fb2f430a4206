use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use fxhash::FxHashSet;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl Default for HashMapGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMapGraph {
    pub fn dfs(&self, u: usize) -> HashMapGraphDfs<'_> {
        assert!(self.data.contains_key(&u));
        let mut visited = FxHashSet::with_capacity_and_hasher(self.data.len(), Default::default());
        visited.insert(u);
        HashMapGraphDfs {
            graph: self,
            stack: vec![u],
            visited,
        }
    }

    /// Builds a graph from 1-based neighbor lists. Index `0` is ignored, every other index
    /// becomes a vertex even if its list is empty. Self loops are dropped.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        let mut graph = Self::with_capacity(adjacency.len());
        for (u, neighbors) in adjacency.iter().enumerate().skip(1) {
            graph.add_vertex_with_capacity(u, neighbors.len());
            for v in neighbors.iter().copied().filter(|v| *v != u) {
                graph.add_edge(u, v);
            }
        }
        graph
    }

    /// Relabels the vertices to `1..=order` in ascending id order and returns the 1-based
    /// neighbor lists together with the mapping from new labels back to the original ids
    /// (`labels[0]` is unused).
    pub fn to_adjacency(&self) -> (Vec<Vec<usize>>, Vec<usize>) {
        let mut labels: Vec<usize> = Vec::with_capacity(self.data.len() + 1);
        labels.push(0);
        let mut sorted: Vec<usize> = self.data.keys().copied().collect();
        sorted.sort_unstable();
        labels.extend(sorted);
        let index: FxHashMap<usize, usize> = labels
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .map(|(i, v)| (v, i))
            .collect();
        let mut adjacency = vec![Vec::new(); labels.len()];
        for (i, v) in labels.iter().copied().enumerate().skip(1) {
            let mut neighbors: Vec<usize> = self.data[&v].iter().map(|w| index[w]).collect();
            neighbors.sort_unstable();
            adjacency[i] = neighbors;
        }
        (adjacency, labels)
    }

    pub fn connected_components(&self) -> Vec<FxHashSet<usize>> {
        let mut components: Vec<FxHashSet<usize>> = Vec::new();
        let mut seen: FxHashSet<usize> =
            FxHashSet::with_capacity_and_hasher(self.data.len(), Default::default());
        let mut roots: Vec<usize> = self.data.keys().copied().collect();
        roots.sort_unstable();
        for u in roots {
            if seen.contains(&u) {
                continue;
            }
            let component: FxHashSet<usize> = self.dfs(u).collect();
            seen.extend(component.iter().copied());
            components.push(component);
        }
        components
    }

    /// A graph is a tree if it is non-empty, connected and has exactly `order - 1` edges.
    pub fn is_tree(&self) -> bool {
        !self.data.is_empty()
            && self.size() + 1 == self.order()
            && self.connected_components().len() == 1
    }

    pub fn vertex_induced(&self, vertices: &FxHashSet<usize>) -> Self {
        let data: FxHashMap<usize, FxHashSet<usize>> = self
            .data
            .iter()
            .filter(|(vertex, _)| vertices.contains(vertex))
            .map(|(vertex, neighborhood)| {
                (
                    *vertex,
                    neighborhood
                        .iter()
                        .copied()
                        .filter(|x| vertices.contains(x))
                        .collect(),
                )
            })
            .collect();
        Self { data }
    }
}

pub struct HashMapGraphDfs<'a> {
    graph: &'a HashMapGraph,
    stack: Vec<usize>,
    visited: FxHashSet<usize>,
}

impl<'a> Iterator for HashMapGraphDfs<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if let Some(neighbors) = self.graph.data.get(&current) {
            for c in neighbors.iter().copied() {
                if self.visited.insert(c) {
                    self.stack.push(c);
                }
            }
        }
        Some(current)
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn add_vertex_with_capacity(&mut self, u: usize, capacity: usize) {
        self.data
            .entry(u)
            .or_insert_with(|| FxHashSet::with_capacity_and_hasher(capacity, Default::default()));
    }

    fn remove_vertex(&mut self, u: usize) {
        if let Some(neighbors) = self.data.remove(&u) {
            for i in neighbors.iter() {
                if let Some(x) = self.data.get_mut(i) {
                    x.remove(&u);
                }
            }
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        let first = self.data.entry(u).or_insert_with(FxHashSet::default);
        first.insert(v);
        let second = self.data.entry(v).or_insert_with(FxHashSet::default);
        second.insert(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        if let Some(x) = self.data.get_mut(&u) {
            x.remove(&v);
        }
        if let Some(x) = self.data.get_mut(&v) {
            x.remove(&u);
        }
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl BaseGraph for HashMapGraph {
    fn degree(&self, u: usize) -> usize {
        self.data.get(&u).map_or(0, |nb| nb.len())
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn size(&self) -> usize {
        self.data.values().map(|nb| nb.len()).sum::<usize>() / 2
    }

    fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).map_or(false, |nb| nb.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let keys = self.data.keys().copied();
        Box::new(keys)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.data.get(&u) {
            Some(nb) => Box::new(nb.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn min_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize> {
        self.data.keys().copied().min_by(cmp)
    }

    fn max_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize> {
        self.data.keys().copied().max_by(cmp)
    }
}
