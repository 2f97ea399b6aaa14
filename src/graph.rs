//! Pairwise-constraint graph over catalog indices.
//!
//! Two records form a candidate pair when their raw RA and Dec differences,
//! their RUWE difference, and their derived-distance difference all fall
//! inside the configured tolerances. Nodes are the indices of records whose
//! RUWE lies inside the eligibility range; edges are the qualifying pairs.
//!
//! # Geometric caveats
//!
//! The pairing predicate compares raw coordinate differences, not true
//! angular separation. This reproduces the behavior of the historical
//! search and has two known limitations:
//!
//! 1. No cos(declination) correction: near the celestial pole, two records
//!    with a small true separation can show a large raw RA difference and
//!    be missed.
//! 2. No 0°/360° wraparound: pairs straddling RA = 0 are missed.
//!
//! The cross-match in [`crate::crossmatch`] uses true great-circle
//! separation instead; do not substitute it here.

use rayon::prelude::*;

use crate::catalog::{Catalog, CatalogRecord};
use crate::errors::PairResult;
use crate::thresholds::ThresholdConfig;

/// Undirected graph over catalog indices.
///
/// Nodes are ascending eligible indices; edges are unordered index pairs
/// stored as `(i, j)` with `i < j`, sorted lexicographically. No
/// self-loops, no duplicates, no weights.
#[derive(Debug, Clone, Default)]
pub struct PairGraph {
    nodes: Vec<usize>,
    edges: Vec<(usize, usize)>,
}

impl PairGraph {
    /// Eligible catalog indices, ascending.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Qualifying pairs as `(i, j)` with `i < j`, lexicographically sorted.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Evaluates whether two records satisfy the pairing criteria.
///
/// True iff all of:
/// - `min_ra_sep_deg ≤ |Δra| ≤ max_ra_sep_deg`
/// - `min_dec_sep_deg ≤ |Δdec| ≤ max_dec_sep_deg`
/// - `|Δruwe| ≤ max_quality_diff`
/// - both distances are defined and `|Δdistance| ≤ max_distance_diff_pc`
///
/// Symmetric in its two record arguments. See the module docs for why the
/// separations are raw coordinate differences.
pub fn is_candidate_pair(a: &CatalogRecord, b: &CatalogRecord, cfg: &ThresholdConfig) -> bool {
    let ra_sep = (a.ra_deg - b.ra_deg).abs();
    if ra_sep < cfg.min_ra_sep_deg || ra_sep > cfg.max_ra_sep_deg {
        return false;
    }

    let dec_sep = (a.dec_deg - b.dec_deg).abs();
    if dec_sep < cfg.min_dec_sep_deg || dec_sep > cfg.max_dec_sep_deg {
        return false;
    }

    if (a.ruwe - b.ruwe).abs() > cfg.max_quality_diff {
        return false;
    }

    if !a.has_distance() || !b.has_distance() {
        return false;
    }
    (a.distance_pc() - b.distance_pc()).abs() <= cfg.max_distance_diff_pc
}

/// Builds the pair graph for a catalog.
///
/// Filters eligible nodes by the RUWE range, then evaluates the pairing
/// predicate over unordered pairs of eligible nodes. Candidates are
/// enumerated through a declination-sorted sliding window: a pair whose
/// |Δdec| already exceeds `max_dec_sep_deg` can never qualify, so sorting
/// by declination lets each node stop scanning at the first record outside
/// the window. The edge set is identical to the full O(n²) sweep.
///
/// Window scans for different start nodes run in parallel; the per-node
/// edge lists are concatenated in scan order and sorted, so the result is
/// deterministic regardless of thread scheduling.
///
/// # Errors
/// Returns [`crate::errors::MatchError::Configuration`] if any threshold
/// range is inverted or negative. Validation happens before any pair is
/// evaluated.
pub fn build_pair_graph(catalog: &Catalog, cfg: &ThresholdConfig) -> PairResult<PairGraph> {
    cfg.validate()?;

    let records = catalog.records();
    let nodes: Vec<usize> = (0..records.len())
        .filter(|&i| records[i].ruwe >= cfg.min_quality && records[i].ruwe <= cfg.max_quality)
        .collect();

    let mut by_dec = nodes.clone();
    by_dec.sort_by(|&i, &j| {
        records[i]
            .dec_deg
            .partial_cmp(&records[j].dec_deg)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let edge_lists: Vec<Vec<(usize, usize)>> = by_dec
        .par_iter()
        .enumerate()
        .map(|(pos, &i)| scan_window(records, &by_dec, pos, i, cfg))
        .collect();

    let mut edges: Vec<(usize, usize)> = edge_lists.into_iter().flatten().collect();
    edges.sort_unstable();

    Ok(PairGraph { nodes, edges })
}

fn scan_window(
    records: &[CatalogRecord],
    by_dec: &[usize],
    pos: usize,
    i: usize,
    cfg: &ThresholdConfig,
) -> Vec<(usize, usize)> {
    let a = &records[i];
    let mut found = Vec::new();
    for &j in &by_dec[pos + 1..] {
        let b = &records[j];
        if b.dec_deg - a.dec_deg > cfg.max_dec_sep_deg {
            break;
        }
        if is_candidate_pair(a, b, cfg) {
            found.push((i.min(j), i.max(j)));
        }
    }
    found
}
