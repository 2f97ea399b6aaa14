//! CLI argument definitions for pairfinder

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pairfinder")]
#[command(about = "Binary-star candidate search over astrometric catalogs")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cluster catalog stars into candidate binary groups
    FindGroups(FindGroupsArgs),

    /// Cross-match catalog stars against a WDS reference catalog
    CrossMatch(CrossMatchArgs),
}

#[derive(Parser)]
pub struct FindGroupsArgs {
    /// Input catalog CSV (Gaia export, plain or gzipped)
    #[arg(long)]
    pub input: PathBuf,

    /// Write matched rows with a group_id column to this CSV
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Minimum RA separation between pair members, degrees
    #[arg(long, default_value = "0.0")]
    pub min_ra_sep: f64,

    /// Maximum RA separation between pair members, degrees
    #[arg(long, default_value = "0.1")]
    pub max_ra_sep: f64,

    /// Minimum Dec separation between pair members, degrees
    #[arg(long, default_value = "0.0")]
    pub min_dec_sep: f64,

    /// Maximum Dec separation between pair members, degrees
    #[arg(long, default_value = "0.1")]
    pub max_dec_sep: f64,

    /// Maximum RUWE difference between pair members
    #[arg(long, default_value = "0.5")]
    pub max_ruwe_diff: f64,

    /// Maximum distance difference between pair members, parsecs
    #[arg(long, default_value = "2.0")]
    pub max_dist_diff: f64,

    /// Minimum RUWE for a star to be eligible for pairing
    #[arg(long, default_value = "1.2")]
    pub min_ruwe: f64,

    /// Maximum RUWE for a star to be eligible for pairing
    #[arg(long, default_value = "inf")]
    pub max_ruwe: f64,
}

#[derive(Parser)]
pub struct CrossMatchArgs {
    /// Input catalog CSV (Gaia export, plain or gzipped)
    #[arg(long)]
    pub input: PathBuf,

    /// WDS catalog text file (fixed-format, packed coordinates in the last 18 columns)
    #[arg(long)]
    pub wds: PathBuf,

    /// Maximum separation for a match, arcseconds (strict less-than)
    #[arg(long, default_value_t = starpairs::DEFAULT_MAX_SEPARATION_ARCSEC)]
    pub max_sep: f64,

    /// Write all rows with a wds_match column to this CSV
    #[arg(long)]
    pub output: Option<PathBuf>,
}
