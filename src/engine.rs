//! The two public matching operations.
//!
//! [`find_groups`] composes the pair-graph builder and the cluster
//! extractor; [`cross_match`] delegates to the nearest-neighbor matcher.
//! Both are pure functions of their inputs: idempotent, side-effect free,
//! and never mutating the catalog. Whether and how to annotate the catalog
//! with the results is the caller's decision.

use crate::catalog::Catalog;
use crate::clusters::{extract_clusters, Cluster};
use crate::crossmatch::{self, CrossMatch, ReferenceCoordinate};
use crate::errors::PairResult;
use crate::graph::build_pair_graph;
use crate::thresholds::ThresholdConfig;

/// Finds candidate binary-star groups in `catalog`.
///
/// Validates `thresholds`, builds the pairwise-constraint graph over
/// eligible records, and returns its connected components of size ≥ 2,
/// numbered 1-based in discovery order.
///
/// # Errors
/// Returns [`crate::errors::MatchError::Configuration`] for an invalid
/// threshold range, before any pair is evaluated. An empty catalog is not
/// an error: it yields an empty group sequence.
pub fn find_groups(catalog: &Catalog, thresholds: &ThresholdConfig) -> PairResult<Vec<Cluster>> {
    let graph = build_pair_graph(catalog, thresholds)?;
    Ok(extract_clusters(&graph))
}

/// Cross-matches `catalog` against a reference catalog of known doubles.
///
/// Returns one [`CrossMatch`] per record in catalog order. See
/// [`crossmatch::cross_match`] for the matching rule and error conditions.
pub fn cross_match(
    catalog: &Catalog,
    references: &[ReferenceCoordinate],
    max_separation_arcsec: f64,
) -> PairResult<Vec<CrossMatch>> {
    crossmatch::cross_match(catalog, references, max_separation_arcsec)
}
