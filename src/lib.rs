//! Candidate binary-star pair detection for astrometric catalogs.
//!
//! Groups stars whose sky position, derived distance, and astrometric
//! quality (RUWE) are mutually consistent within configurable tolerances,
//! and cross-validates candidates against a reference catalog of known
//! double stars by true angular separation.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | [`CatalogRecord`], [`Catalog`]: the ordered input records |
//! | [`thresholds`] | [`ThresholdConfig`]: pairing tolerances and validation |
//! | [`graph`] | Pairing predicate and [`PairGraph`](graph::PairGraph) construction |
//! | [`clusters`] | Connected components → [`Cluster`] sequence |
//! | [`crossmatch`] | [`ReferenceCoordinate`], [`CrossMatch`], nearest-neighbor matching |
//! | [`engine`] | The two public operations: [`find_groups`], [`cross_match`] |
//! | [`sphere`] | Great-circle angular separation |
//! | [`sexagesimal`] | HMS/DMS string → decimal degrees |
//! | [`errors`] | [`MatchError`], [`PairResult`] |
//!
//! # Quick Start
//!
//! ```
//! use starpairs::{find_groups, Catalog, CatalogRecord, ThresholdConfig};
//!
//! let catalog = Catalog::from_records(vec![
//!     CatalogRecord::new(Some("a".into()), 10.00, 20.0, Some(10.0), 1.5),
//!     CatalogRecord::new(Some("b".into()), 10.01, 20.0, Some(10.0), 1.5),
//! ]);
//!
//! let thresholds = ThresholdConfig {
//!     min_quality: 0.0,
//!     ..ThresholdConfig::default()
//! };
//!
//! let groups = find_groups(&catalog, &thresholds).unwrap();
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].members, vec![0, 1]);
//! ```
//!
//! # Features
//!
//! - **`cli`** (default) — Enables the `pairfinder` binary for running
//!   searches against Gaia CSV exports and WDS catalog files from the
//!   command line.
//! - **`serde`** — Serialize/Deserialize derives on the public data types.

pub mod catalog;
pub mod clusters;
pub mod crossmatch;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod sexagesimal;
pub mod sphere;
pub mod thresholds;

pub use catalog::{Catalog, CatalogRecord};
pub use clusters::Cluster;
pub use crossmatch::{CrossMatch, ReferenceCoordinate, DEFAULT_MAX_SEPARATION_ARCSEC};
pub use engine::{cross_match, find_groups};
pub use errors::{MatchError, PairResult};
pub use thresholds::ThresholdConfig;
