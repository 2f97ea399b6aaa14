//! Pairfinder: binary-star candidate search CLI
//!
//! Clusters an astrometric catalog into candidate binary groups and
//! cross-matches it against the Washington Double Star catalog.

mod cli;
mod cross_match;
mod export;
mod find_groups;
mod load_gaia;
mod load_wds;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("Verbose mode enabled");
    }

    match &cli.command {
        Commands::FindGroups(args) => find_groups::run(args, &cli),
        Commands::CrossMatch(args) => cross_match::run(args, &cli),
    }
}
