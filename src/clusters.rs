//! Connected-component extraction over the pair graph.
//!
//! Components are computed with a disjoint-set (union-find) structure with
//! path compression. Components of size 1 are dropped: an isolated record
//! is not a candidate pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::PairGraph;

/// A group of mutually reachable catalog records.
///
/// `group_id` is 1-based and assigned in discovery order: clusters are
/// numbered by the first appearance of their smallest-index member while
/// scanning nodes in ascending index order. Members are listed in
/// ascending index order. Both orderings are deterministic, so repeated
/// extraction from the same graph yields identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster {
    /// 1-based group number in discovery order.
    pub group_id: usize,
    /// Catalog indices of the members, ascending. Always ≥ 2 entries.
    pub members: Vec<usize>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Computes the connected components of `graph`, keeping those of size ≥ 2.
///
/// An empty graph yields an empty sequence, not an error. Runs in
/// O(V + E α(V)).
pub fn extract_clusters(graph: &PairGraph) -> Vec<Cluster> {
    let nodes = graph.nodes();
    if nodes.is_empty() {
        return Vec::new();
    }

    // Map catalog indices to dense slots for the union-find arrays
    let slot_of: std::collections::HashMap<usize, usize> = nodes
        .iter()
        .enumerate()
        .map(|(slot, &idx)| (idx, slot))
        .collect();

    let mut parent: Vec<usize> = (0..nodes.len()).collect();
    for &(i, j) in graph.edges() {
        union(&mut parent, slot_of[&i], slot_of[&j]);
    }

    collect_components(nodes, &mut parent)
}

fn collect_components(nodes: &[usize], parent: &mut [usize]) -> Vec<Cluster> {
    // Scanning slots in ascending node order makes root discovery order
    // equal to smallest-member order
    let mut members_of_root: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut root_order: Vec<usize> = Vec::new();

    for (slot, &idx) in nodes.iter().enumerate() {
        let root = find_root(parent, slot);
        if members_of_root[root].is_empty() {
            root_order.push(root);
        }
        members_of_root[root].push(idx);
    }

    let mut clusters = Vec::new();
    for root in root_order {
        let members = std::mem::take(&mut members_of_root[root]);
        if members.len() >= 2 {
            clusters.push(Cluster {
                group_id: clusters.len() + 1,
                members,
            });
        }
    }
    clusters
}

fn find_root(parent: &mut [usize], slot: usize) -> usize {
    let mut current = slot;
    while current != parent[current] {
        // Path compression: point at the grandparent while walking up
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let root_a = find_root(parent, a);
    let root_b = find_root(parent, b);
    if root_a != root_b {
        // Smaller root wins, keeping the representative canonical
        if root_a < root_b {
            parent[root_b] = root_a;
        } else {
            parent[root_a] = root_b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogRecord};
    use crate::graph::build_pair_graph;
    use crate::thresholds::ThresholdConfig;

    fn graph_from(edges: &[(usize, usize)], nodes: &[usize]) -> PairGraph {
        // Build a real graph from a synthetic catalog: records are spaced so
        // that exactly the requested edges qualify.
        let max_idx = nodes.iter().copied().max().unwrap_or(0);
        let mut records = Vec::new();
        for i in 0..=max_idx {
            // Spread non-edges far apart in RA; pull edge endpoints together below
            records.push(CatalogRecord::new(
                None,
                (i as f64) * 10.0,
                0.0,
                Some(10.0),
                1.0,
            ));
        }
        for &(i, j) in edges {
            records[j].ra_deg = records[i].ra_deg + 0.01;
        }
        let cfg = ThresholdConfig {
            min_ra_sep_deg: 0.0,
            max_ra_sep_deg: 0.05,
            min_dec_sep_deg: 0.0,
            max_dec_sep_deg: 0.05,
            max_quality_diff: 1.0,
            max_distance_diff_pc: 1.0,
            min_quality: 0.0,
            max_quality: 10.0,
        };
        build_pair_graph(&Catalog::from_records(records), &cfg).unwrap()
    }

    #[test]
    fn test_empty_graph_yields_no_clusters() {
        assert!(extract_clusters(&PairGraph::default()).is_empty());
    }

    #[test]
    fn test_singletons_are_dropped() {
        let graph = graph_from(&[], &[0, 1, 2]);
        assert!(extract_clusters(&graph).is_empty());
    }

    #[test]
    fn test_chain_forms_one_cluster() {
        let graph = graph_from(&[(0, 1), (1, 2)], &[0, 1, 2]);
        let clusters = extract_clusters(&graph);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].group_id, 1);
        assert_eq!(clusters[0].members, vec![0, 1, 2]);
    }

    #[test]
    fn test_two_components_numbered_by_smallest_member() {
        let graph = graph_from(&[(2, 3), (0, 1)], &[0, 1, 2, 3]);
        let clusters = extract_clusters(&graph);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].group_id, 1);
        assert_eq!(clusters[0].members, vec![0, 1]);
        assert_eq!(clusters[1].group_id, 2);
        assert_eq!(clusters[1].members, vec![2, 3]);
    }

    #[test]
    fn test_clusters_partition_no_index_repeats() {
        let graph = graph_from(&[(0, 1), (1, 2), (4, 5)], &[0, 1, 2, 3, 4, 5]);
        let clusters = extract_clusters(&graph);

        let mut seen = std::collections::HashSet::new();
        for cluster in &clusters {
            assert!(cluster.len() >= 2);
            for &idx in &cluster.members {
                assert!(seen.insert(idx), "index {} in two clusters", idx);
            }
        }
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let graph = graph_from(&[(0, 1), (3, 4), (1, 2)], &[0, 1, 2, 3, 4]);
        let first = extract_clusters(&graph);
        let second = extract_clusters(&graph);
        assert_eq!(first, second);
    }
}
