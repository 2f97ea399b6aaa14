//! Candidate-group search command.

use crate::cli::{Cli, FindGroupsArgs};
use crate::export::export_groups;
use crate::load_gaia::{load_catalog, LoadedCatalog};
use starpairs::{find_groups, Catalog, Cluster, ThresholdConfig};

pub fn run(args: &FindGroupsArgs, cli: &Cli) -> anyhow::Result<()> {
    let thresholds = thresholds_from_args(args);
    print_plan(args, &thresholds);

    let loaded = load_catalog(&args.input)?;
    print_load_report(&loaded, cli);

    let clusters = find_groups(&loaded.catalog, &thresholds)?;
    print_groups(&loaded.catalog, &clusters);

    if let Some(output) = &args.output {
        let written = export_groups(output, &loaded.header, &loaded.rows, &clusters)?;
        println!("Exported {} rows to {:?}", written, output);
    }
    Ok(())
}

fn thresholds_from_args(args: &FindGroupsArgs) -> ThresholdConfig {
    ThresholdConfig {
        min_ra_sep_deg: args.min_ra_sep,
        max_ra_sep_deg: args.max_ra_sep,
        min_dec_sep_deg: args.min_dec_sep,
        max_dec_sep_deg: args.max_dec_sep,
        max_quality_diff: args.max_ruwe_diff,
        max_distance_diff_pc: args.max_dist_diff,
        min_quality: args.min_ruwe,
        max_quality: args.max_ruwe,
    }
}

fn print_plan(args: &FindGroupsArgs, thresholds: &ThresholdConfig) {
    println!("=== Binary Star Search ===");
    println!("Input: {:?}", args.input);
    println!(
        "RA separation: {} - {} deg",
        thresholds.min_ra_sep_deg, thresholds.max_ra_sep_deg
    );
    println!(
        "Dec separation: {} - {} deg",
        thresholds.min_dec_sep_deg, thresholds.max_dec_sep_deg
    );
    println!("Max RUWE difference: {}", thresholds.max_quality_diff);
    println!("Max distance difference: {} pc", thresholds.max_distance_diff_pc);
    println!(
        "RUWE eligibility: {} - {}",
        thresholds.min_quality, thresholds.max_quality
    );
    println!();
}

fn print_load_report(loaded: &LoadedCatalog, cli: &Cli) {
    println!("Entries loaded: {}", loaded.catalog.len());
    if loaded.skipped > 0 {
        eprintln!("Warning: skipped {} unparseable rows", loaded.skipped);
    }
    if cli.verbose {
        let undefined = loaded
            .catalog
            .records()
            .iter()
            .filter(|r| !r.has_distance())
            .count();
        println!("Entries without a defined distance: {}", undefined);
    }
}

fn print_groups(catalog: &Catalog, clusters: &[Cluster]) {
    println!();
    if clusters.is_empty() {
        println!("No matches found.");
        return;
    }
    for cluster in clusters {
        let entries: Vec<String> = cluster
            .members
            .iter()
            .map(|&index| format_entry(catalog, index))
            .collect();
        println!(
            "Group {} | {} entries | index, (source_id): [{}]",
            cluster.group_id,
            cluster.len(),
            entries.join(", ")
        );
    }
    println!();
    println!("=== Summary ===");
    println!("Groups found: {}", clusters.len());
    let members: usize = clusters.iter().map(Cluster::len).sum();
    println!("Stars in groups: {}", members);
}

fn format_entry(catalog: &Catalog, index: usize) -> String {
    match catalog.get(index).and_then(|r| r.source_id.as_deref()) {
        Some(sid) if !sid.is_empty() => format!("{} (source_id={})", index, sid),
        _ => format!("{}", index),
    }
}
