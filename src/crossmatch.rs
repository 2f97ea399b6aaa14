//! Nearest-neighbor angular cross-match against a reference catalog.
//!
//! For every primary record, finds the closest reference coordinate by
//! true great-circle separation and flags the record as matched when that
//! separation is strictly below the configured threshold. Unlike the
//! pairing predicate in [`crate::graph`], this comparison is against
//! externally curated astrometric positions, so real angular distance is
//! required here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::errors::{MatchError, PairResult};
use crate::sphere::angular_separation_arcsec;

/// Default maximum match separation, arcseconds.
pub const DEFAULT_MAX_SEPARATION_ARCSEC: f64 = 1.0;

/// A point on the celestial sphere from the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceCoordinate {
    /// Right ascension in degrees.
    pub ra_deg: f64,
    /// Declination in degrees.
    pub dec_deg: f64,
}

/// Per-record cross-match outcome.
///
/// Attached to a catalog record by position; the record itself is never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossMatch {
    /// True iff the nearest reference point is strictly closer than the
    /// configured threshold.
    pub matched: bool,
    /// Angular separation to the nearest reference point, arcseconds.
    pub separation_arcsec: f64,
    /// Index of the nearest reference coordinate.
    pub nearest: usize,
}

/// Cross-matches every primary record against the reference coordinates.
///
/// Returns one [`CrossMatch`] per record, aligned index-for-index with the
/// catalog. Records are searched independently and in parallel; results
/// are collected in catalog order, so output is deterministic.
///
/// A record exactly at the threshold separation is NOT matched (strict
/// less-than).
///
/// # Errors
/// - [`MatchError::EmptyReferenceCatalog`] if `references` is empty.
/// - [`MatchError::EmptyPrimaryCatalog`] if `catalog` has no records.
///
/// Both are raised before any separation is computed; no partial result
/// sequence is produced.
pub fn cross_match(
    catalog: &Catalog,
    references: &[ReferenceCoordinate],
    max_separation_arcsec: f64,
) -> PairResult<Vec<CrossMatch>> {
    if references.is_empty() {
        return Err(MatchError::EmptyReferenceCatalog);
    }
    if catalog.is_empty() {
        return Err(MatchError::EmptyPrimaryCatalog);
    }

    let results = catalog
        .records()
        .par_iter()
        .map(|record| {
            let (nearest, separation_arcsec) =
                nearest_reference(record.ra_deg, record.dec_deg, references);
            CrossMatch {
                matched: separation_arcsec < max_separation_arcsec,
                separation_arcsec,
                nearest,
            }
        })
        .collect();

    Ok(results)
}

fn nearest_reference(ra_deg: f64, dec_deg: f64, references: &[ReferenceCoordinate]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_sep = f64::INFINITY;
    for (index, reference) in references.iter().enumerate() {
        let sep = angular_separation_arcsec(ra_deg, dec_deg, reference.ra_deg, reference.dec_deg);
        if sep < best_sep {
            best_sep = sep;
            best_index = index;
        }
    }
    (best_index, best_sep)
}
