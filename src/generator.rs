use rand::Rng;

/// Random tree on the vertices `1..=n`: vertex `i >= 2` is attached to a uniformly chosen vertex
/// among `1..i`. Returns 1-based neighbor lists, each vertex's parent (if any) listed first.
pub fn random_tree<R: Rng>(n: usize, rng: &mut R) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); n + 1];
    for child in 2..=n {
        let parent = rng.gen_range(1..child);
        adjacency[child].push(parent);
        adjacency[parent].push(child);
    }
    adjacency
}

/// Indices `1..=k` of a 1-based adjacency list restricted to themselves. Since every vertex of a
/// [`random_tree`] has a smaller parent, the prefix of such a tree is again a tree.
pub fn prefix(adjacency: &[Vec<usize>], k: usize) -> Vec<Vec<usize>> {
    let k = k.min(adjacency.len().saturating_sub(1));
    adjacency
        .iter()
        .take(k + 1)
        .map(|neighbors| neighbors.iter().copied().filter(|v| *v <= k).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::generator::{prefix, random_tree};
    use crate::graph::{BaseGraph, HashMapGraph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_trees() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 1..50 {
            let adjacency = random_tree(n, &mut rng);
            assert_eq!(adjacency.len(), n + 1);
            assert!(adjacency[0].is_empty());
            let graph = HashMapGraph::from_adjacency(&adjacency);
            assert_eq!(graph.order(), n);
            assert!(graph.is_tree());
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = random_tree(100, &mut StdRng::seed_from_u64(77));
        let second = random_tree(100, &mut StdRng::seed_from_u64(77));
        assert_eq!(first, second);
    }

    #[test]
    fn prefixes_are_trees() {
        let mut rng = StdRng::seed_from_u64(2);
        let adjacency = random_tree(300, &mut rng);
        for k in [1, 2, 10, 100, 300, 1000].iter().copied() {
            let sub = prefix(&adjacency, k);
            let graph = HashMapGraph::from_adjacency(&sub);
            assert_eq!(graph.order(), k.min(300));
            assert!(graph.is_tree());
        }
    }
}
