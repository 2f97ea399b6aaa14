//! WDS cross-match command.

use crate::cli::{Cli, CrossMatchArgs};
use crate::export::export_cross_match;
use crate::load_gaia::load_catalog;
use crate::load_wds::load_reference_catalog;
use starpairs::cross_match;

pub fn run(args: &CrossMatchArgs, cli: &Cli) -> anyhow::Result<()> {
    print_plan(args);

    let loaded = load_catalog(&args.input)?;
    println!("Entries loaded: {}", loaded.catalog.len());
    if loaded.skipped > 0 {
        eprintln!("Warning: skipped {} unparseable rows", loaded.skipped);
    }

    let references = load_reference_catalog(&args.wds)?;
    println!(
        "Loaded WDS catalog with {} entries from: {:?}",
        references.coordinates.len(),
        args.wds
    );
    if cli.verbose && references.skipped > 0 {
        println!(
            "Reference entries without a parseable coordinate: {}",
            references.skipped
        );
    }

    let results = cross_match(&loaded.catalog, &references.coordinates, args.max_sep)?;
    let matched = results.iter().filter(|r| r.matched).count();
    println!();
    println!("WDS comparison complete. Matches found: {}", matched);

    if let Some(output) = &args.output {
        let written = export_cross_match(output, &loaded.header, &loaded.rows, &results)?;
        println!("Exported {} rows to {:?}", written, output);
    }
    Ok(())
}

fn print_plan(args: &CrossMatchArgs) {
    println!("=== WDS Cross-Match ===");
    println!("Input: {:?}", args.input);
    println!("Reference catalog: {:?}", args.wds);
    println!("Max separation: {} arcsec", args.max_sep);
    println!();
}
